use senti_core::model::ResultSet;

use crate::views::ViewError;

/// Lifecycle of the most recent analysis request.
///
/// Holding the payload inside the variant keeps the invariant structural:
/// a result set exists iff the last request succeeded, an error message
/// iff it failed, and never both.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum UploadState {
    #[default]
    Idle,
    Uploading,
    Succeeded(ResultSet),
    Failed,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct UploadVm {
    state: UploadState,
    generation: u64,
}

impl UploadVm {
    /// Move to `Uploading` unless a request is already running.
    /// Returns whether the caller may start one.
    pub fn begin(&mut self) -> bool {
        if matches!(self.state, UploadState::Uploading) {
            return false;
        }
        self.state = UploadState::Uploading;
        true
    }

    /// Record the settled outcome. Success replaces the result set and
    /// clears any error; failure does the reverse. Either way the
    /// generation advances so observers re-bind to the new content.
    pub fn settle(&mut self, outcome: Result<ResultSet, ViewError>) {
        self.state = match outcome {
            Ok(set) => UploadState::Succeeded(set),
            Err(_) => UploadState::Failed,
        };
        self.generation += 1;
    }

    #[must_use]
    pub fn state(&self) -> &UploadState {
        &self.state
    }

    #[must_use]
    pub fn is_uploading(&self) -> bool {
        matches!(self.state, UploadState::Uploading)
    }

    #[must_use]
    pub fn result(&self) -> Option<&ResultSet> {
        match &self.state {
            UploadState::Succeeded(set) => Some(set),
            _ => None,
        }
    }

    /// The collapsed, user-facing failure message.
    #[must_use]
    pub fn error_message(&self) -> Option<&'static str> {
        match self.state {
            UploadState::Failed => Some(ViewError::Analysis.message()),
            _ => None,
        }
    }

    /// Bumped on every settle; observers use it to notice replacement.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
