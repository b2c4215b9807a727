//! Main app runners for the home, show, and upload commands

use std::env;
use std::path::Path;
use std::process::ExitCode;

use crate::application::ports::ConfigStore;
use crate::application::upload::ADVISORY_SIZE_LIMIT;
use crate::application::{
    Session, UploadCallbacks, UploadError, UploadLectureUseCase, UploadSource, UploadStage,
};
use crate::domain::config::AppConfig;
use crate::domain::lecture::LectureId;
use crate::infrastructure::{GeminiProcessor, JsonFileStore, XdgConfigStore};

use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Render the HOME view: the persisted library, newest first
pub async fn run_home() -> ExitCode {
    let presenter = Presenter::new();
    let session = Session::open(JsonFileStore::new()).await;

    presenter.render_home(session.lectures(), session.error());
    ExitCode::from(EXIT_SUCCESS)
}

/// Select one lecture by id and render its DETAIL view
pub async fn run_show(id: &str) -> ExitCode {
    let presenter = Presenter::new();
    let mut session = Session::open(JsonFileStore::new()).await;

    match session.select_lecture(&LectureId::from(id)) {
        Ok(lecture) => {
            presenter.render_detail(lecture);
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Run the upload workflow for one file
pub async fn run_upload(file: &Path, mime: Option<String>, config: AppConfig) -> ExitCode {
    let mut presenter = Presenter::new();

    // Load API key from config or environment
    let api_key = match get_api_key().await {
        Ok(key) => key,
        Err(e) => {
            presenter.error(&e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let Some(file_name) = file.file_name().map(|n| n.to_string_lossy().to_string()) else {
        presenter.error(&format!("Not a file: {}", file.display()));
        return ExitCode::from(EXIT_USAGE_ERROR);
    };

    let bytes = match tokio::fs::read(file).await {
        Ok(bytes) => bytes,
        Err(e) => {
            presenter.error(&format!("Failed to read {}: {}", file.display(), e));
            return ExitCode::from(EXIT_ERROR);
        }
    };

    // The 200MB limit is advisory only; oversized files are still sent
    if bytes.len() as u64 > ADVISORY_SIZE_LIMIT {
        presenter.warn(&format!(
            "{} is larger than the advertised 200MB limit; processing may fail",
            file_name
        ));
    }

    let mut session = Session::open(JsonFileStore::new()).await;

    let processor = GeminiProcessor::new(api_key)
        .with_model(config.model_or_default())
        .with_language(config.language_or_default());
    let use_case = UploadLectureUseCase::new(processor);

    presenter.start_spinner("Processing your lecture...");
    let spinner = presenter.spinner_handle();
    let callbacks = UploadCallbacks {
        on_stage: Some(Box::new(move |stage| {
            if let Some(ref spinner) = spinner {
                spinner.set_message(stage_message(stage));
            }
        })),
    };

    let source = UploadSource {
        file_name,
        declared_mime: mime,
        bytes,
    };

    match use_case.execute(&mut session, source, callbacks).await {
        Ok(output) => {
            presenter.spinner_success("Lecture processed");
            if !output.persisted {
                presenter.warn("Could not write the lecture library; the new record was not saved");
            }
            presenter.render_detail(&output.lecture);
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            presenter.spinner_fail("Processing failed");
            presenter.render_home(session.lectures(), session.error());
            match e {
                UploadError::Validation(_) => ExitCode::from(EXIT_USAGE_ERROR),
                _ => ExitCode::from(EXIT_ERROR),
            }
        }
    }
}

fn stage_message(stage: UploadStage) -> &'static str {
    match stage {
        UploadStage::Validating => "Validating audio file...",
        UploadStage::Encoding => "Encoding audio...",
        UploadStage::Transcribing => "Transcribing and summarizing...",
    }
}

/// Get API key from environment or config file
pub async fn get_api_key() -> Result<String, String> {
    // Check environment first
    if let Ok(key) = env::var("GEMINI_API_KEY") {
        if !key.is_empty() {
            return Ok(key);
        }
    }

    // Check config file
    let store = XdgConfigStore::new();
    let config = store.load().await.unwrap_or_else(|_| AppConfig::empty());

    config.api_key.ok_or_else(|| {
        "Missing API key. Set GEMINI_API_KEY environment variable or run 'lecture-scribe config set api_key <key>'".to_string()
    })
}

/// Load and merge configuration from file, env, and CLI
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = store.load().await.unwrap_or_else(|_| AppConfig::empty());

    // Build env config
    let env_config = AppConfig {
        api_key: env::var("GEMINI_API_KEY").ok().filter(|s| !s.is_empty()),
        ..Default::default()
    };

    // Merge: defaults < file < env < cli
    AppConfig::defaults()
        .merge(file_config)
        .merge(env_config)
        .merge(cli_config)
}
