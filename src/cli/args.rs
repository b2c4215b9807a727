//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// LectureScribe - turn recorded classes into transcripts and summaries
#[derive(Parser, Debug)]
#[command(name = "lecture-scribe")]
#[command(version)]
#[command(about = "AI-powered lecture transcription and summarization using Google Gemini")]
#[command(long_about = None)]
pub struct Cli {
    /// Gemini model override
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Output language for the summary (e.g. en, es; "auto" matches the recording)
    #[arg(short, long, value_name = "LANG")]
    pub language: Option<String>,

    /// Subcommand; the lecture library is shown when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Upload an audio recording for transcription and summarization
    Upload {
        /// Path to the audio file
        file: PathBuf,

        /// Declared content type (inferred from the extension when omitted)
        #[arg(long, value_name = "TYPE")]
        mime: Option<String>,
    },
    /// List processed lectures, newest first
    List,
    /// Show the transcript and summary for one lecture
    Show {
        /// Lecture identifier (shown by `list`)
        id: String,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &["api_key", "model", "language"];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_parses_defaults() {
        let cli = Cli::parse_from(["lecture-scribe"]);
        assert!(cli.model.is_none());
        assert!(cli.language.is_none());
        assert!(cli.command.is_none());
    }

    #[test]
    fn cli_parses_upload() {
        let cli = Cli::parse_from(["lecture-scribe", "upload", "macro_05.wav"]);
        match cli.command {
            Some(Commands::Upload { file, mime }) => {
                assert_eq!(file, PathBuf::from("macro_05.wav"));
                assert!(mime.is_none());
            }
            _ => panic!("Expected Upload command"),
        }
    }

    #[test]
    fn cli_parses_upload_with_mime() {
        let cli = Cli::parse_from([
            "lecture-scribe",
            "upload",
            "recording",
            "--mime",
            "audio/ogg",
        ]);
        match cli.command {
            Some(Commands::Upload { mime, .. }) => {
                assert_eq!(mime, Some("audio/ogg".to_string()));
            }
            _ => panic!("Expected Upload command"),
        }
    }

    #[test]
    fn cli_parses_show() {
        let cli = Cli::parse_from(["lecture-scribe", "show", "abc-123"]);
        match cli.command {
            Some(Commands::Show { id }) => assert_eq!(id, "abc-123"),
            _ => panic!("Expected Show command"),
        }
    }

    #[test]
    fn cli_parses_model_and_language() {
        let cli = Cli::parse_from([
            "lecture-scribe",
            "-m",
            "custom-model",
            "-l",
            "es",
            "list",
        ]);
        assert_eq!(cli.model, Some("custom-model".to_string()));
        assert_eq!(cli.language, Some("es".to_string()));
        assert!(matches!(cli.command, Some(Commands::List)));
    }

    #[test]
    fn cli_parses_config_init() {
        let cli = Cli::parse_from(["lecture-scribe", "config", "init"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Config {
                action: ConfigAction::Init
            })
        ));
    }

    #[test]
    fn cli_parses_config_set() {
        let cli = Cli::parse_from(["lecture-scribe", "config", "set", "language", "es"]);
        if let Some(Commands::Config {
            action: ConfigAction::Set { key, value },
        }) = cli.command
        {
            assert_eq!(key, "language");
            assert_eq!(value, "es");
        } else {
            panic!("Expected Config Set command");
        }
    }

    #[test]
    fn valid_config_keys() {
        assert!(is_valid_config_key("api_key"));
        assert!(is_valid_config_key("model"));
        assert!(is_valid_config_key("language"));
        assert!(!is_valid_config_key("invalid_key"));
    }

    #[test]
    fn verify_cli() {
        // Verify the CLI definition is valid
        Cli::command().debug_assert();
    }
}
