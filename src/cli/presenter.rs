//! CLI presenter for output formatting
//!
//! Pure rendering of the three views; no business logic.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

use crate::domain::lecture::Lecture;

/// Presenter for CLI output formatting
pub struct Presenter {
    spinner: Option<ProgressBar>,
    is_spinner_active: Arc<AtomicBool>,
}

impl Presenter {
    /// Create a new presenter
    pub fn new() -> Self {
        Self {
            spinner: None,
            is_spinner_active: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Start a spinner with message
    pub fn start_spinner(&mut self, message: &str) {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
                .template("{spinner:.cyan} {msg}")
                .unwrap(),
        );
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(std::time::Duration::from_millis(80));
        self.spinner = Some(spinner);
        self.is_spinner_active.store(true, Ordering::SeqCst);
    }

    /// Get a handle to the running spinner for updates from callbacks
    pub fn spinner_handle(&self) -> Option<ProgressBar> {
        self.spinner.clone()
    }

    /// Mark spinner as success and finish
    pub fn spinner_success(&mut self, message: &str) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_with_message(format!("{} {}", "✓".green(), message));
        }
        self.is_spinner_active.store(false, Ordering::SeqCst);
    }

    /// Mark spinner as failed and finish
    pub fn spinner_fail(&mut self, message: &str) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_with_message(format!("{} {}", "✗".red(), message));
        }
        self.is_spinner_active.store(false, Ordering::SeqCst);
    }

    /// Print info message to stderr
    pub fn info(&self, message: &str) {
        eprintln!("{} {}", "ℹ".cyan(), message);
    }

    /// Print success message to stderr
    pub fn success(&self, message: &str) {
        eprintln!("{} {}", "✓".green(), message);
    }

    /// Print warning message to stderr
    pub fn warn(&self, message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Output text to stdout
    pub fn output(&self, text: &str) {
        println!("{}", text);
    }

    /// Print a key-value pair (for config list)
    pub fn key_value(&self, key: &str, value: &str) {
        println!("{}: {}", key.cyan(), value);
    }

    /// Render the HOME view: the lecture library plus the inline error slot
    pub fn render_home(&self, lectures: &[Lecture], error: Option<&str>) {
        if let Some(message) = error {
            self.error(message);
        }

        println!("{}", "Recent Uploads".bold());
        if lectures.is_empty() {
            println!("  No uploads yet. Run `lecture-scribe upload <file>` to get started.");
            return;
        }

        for lecture in lectures {
            println!("{}", format_card(lecture));
        }
    }

    /// Render the DETAIL view for one lecture
    pub fn render_detail(&self, lecture: &Lecture) {
        println!("{}", lecture.title.bold());
        println!("{}", format_meta(lecture).dimmed());
        println!();

        match lecture.transcript.as_deref() {
            Some(transcript) => {
                println!("{}", "Transcript".cyan().bold());
                println!("{}", transcript);
            }
            None => println!("{}", "(no transcript)".dimmed()),
        }

        println!();

        match lecture.summary.as_deref() {
            Some(summary) => {
                println!("{}", "Summary".cyan().bold());
                println!("{}", summary);
            }
            None => println!("{}", "(no summary)".dimmed()),
        }
    }
}

/// One listing line per lecture
fn format_card(lecture: &Lecture) -> String {
    format!(
        "  {} {}  {}",
        "•".cyan(),
        lecture.title,
        format!(
            "({} · {} · {})  id={}",
            lecture.processed_at,
            lecture.duration,
            lecture.human_readable_size(),
            lecture.id
        )
        .dimmed()
    )
}

fn format_meta(lecture: &Lecture) -> String {
    format!(
        "{} · {} · {} · {}",
        lecture.processed_at,
        lecture.duration,
        lecture.file_name,
        lecture.human_readable_size()
    )
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::lecture::seed_lectures;

    #[test]
    fn card_contains_title_and_id() {
        let lecture = &seed_lectures()[0];
        let card = format_card(lecture);
        assert!(card.contains("Introduction to Psychology - Week 3"));
        assert!(card.contains("id=1"));
    }

    #[test]
    fn meta_contains_file_name_and_size() {
        let lecture = &seed_lectures()[0];
        let meta = format_meta(lecture);
        assert!(meta.contains("psico_clase_03.mp3"));
        assert!(meta.contains("42.9 MB"));
    }
}
