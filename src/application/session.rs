//! Session - the view state controller
//!
//! Owns the lecture list, the current view, the busy flag, and the last
//! error message. All mutations flow through these operations; no other
//! logical flow touches the list.

use thiserror::Error;

use crate::domain::lecture::{seed_lectures, Lecture, LectureId};
use crate::domain::view::ViewState;

use super::ports::{LectureStore, StoreError};

/// Error when selecting a lecture that is not in the library
#[derive(Debug, Clone, Error)]
#[error("No lecture with id \"{id}\" in the library")]
pub struct SelectionError {
    pub id: LectureId,
}

/// View state controller over an injected lecture store
pub struct Session<S: LectureStore> {
    store: S,
    lectures: Vec<Lecture>,
    view: ViewState,
    error: Option<String>,
    busy: bool,
}

impl<S: LectureStore> Session<S> {
    /// Open a session: load the persisted library, seeding the example
    /// records on first run. A malformed or unreadable store must not
    /// crash the application, so it also falls back to the seed set.
    pub async fn open(store: S) -> Self {
        let lectures = match store.load().await {
            Ok(Some(lectures)) => lectures,
            Ok(None) | Err(_) => seed_lectures(),
        };

        Self {
            store,
            lectures,
            view: ViewState::Home,
            error: None,
            busy: false,
        }
    }

    /// The lecture list, newest first
    pub fn lectures(&self) -> &[Lecture] {
        &self.lectures
    }

    /// The current view
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// The last error message, if any
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether an upload is in flight
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Show HOME, clearing the selection and any error
    pub fn go_home(&mut self) {
        self.view = ViewState::Home;
        self.error = None;
    }

    /// Select a lecture by id and show DETAIL.
    /// The id must exist in the library.
    pub fn select_lecture(&mut self, id: &LectureId) -> Result<&Lecture, SelectionError> {
        let index = self
            .lectures
            .iter()
            .position(|lecture| &lecture.id == id)
            .ok_or_else(|| SelectionError { id: id.clone() })?;

        self.view = ViewState::Detail(id.clone());
        Ok(&self.lectures[index])
    }

    /// Mark the session busy for an upload and show LOADING.
    /// Returns false while another upload is in flight.
    pub fn begin_upload(&mut self) -> bool {
        if self.busy {
            return false;
        }
        self.busy = true;
        self.error = None;
        self.view = ViewState::Loading;
        true
    }

    /// Commit a processed lecture: prepend it, select it, and persist
    /// the library. Ends the upload.
    pub async fn commit(&mut self, lecture: Lecture) -> Result<(), StoreError> {
        let id = lecture.id.clone();
        self.lectures.insert(0, lecture);
        self.view = ViewState::Detail(id);
        self.busy = false;
        self.persist().await
    }

    /// Record an upload failure and return to HOME. Ends the upload;
    /// the library is left untouched.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.view = ViewState::Home;
        self.busy = false;
    }

    /// Write the library back. An empty list is never written, so a save
    /// failure or empty-state bug can not erase stored history.
    async fn persist(&self) -> Result<(), StoreError> {
        if self.lectures.is_empty() {
            return Ok(());
        }
        self.store.save(&self.lectures).await
    }
}
