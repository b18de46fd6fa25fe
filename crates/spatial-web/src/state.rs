//! Upload flow state for the dashboard
//!
//! Kept free of browser types so the transitions can be tested natively.

use spatial_types::CreateImageResponse;

/// Where the upload panel currently is
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum UploadState {
    #[default]
    Idle,
    Loading,
    Failed(String),
    Done(CreateImageResponse),
}

impl UploadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, UploadState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            UploadState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn result(&self) -> Option<&CreateImageResponse> {
        match self {
            UploadState::Done(response) => Some(response),
            _ => None,
        }
    }
}

/// Selected file plus request state
///
/// Each request gets a ticket. A response whose ticket is stale (a new file
/// was picked while it was in flight) is dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadFlow {
    selected: Option<String>,
    state: UploadState,
    ticket: u64,
}

impl UploadFlow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pick a file (or clear the selection). Any previous result or error is discarded.
    pub fn select(&mut self, file_name: Option<String>) {
        self.selected = file_name;
        self.state = UploadState::Idle;
        self.ticket += 1;
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn state(&self) -> &UploadState {
        &self.state
    }

    /// Whether the Generate button is enabled
    pub fn can_generate(&self) -> bool {
        self.selected.is_some() && !self.state.is_loading()
    }

    /// Start a request, returning its ticket
    pub fn begin(&mut self) -> Option<u64> {
        if !self.can_generate() {
            return None;
        }
        self.ticket += 1;
        self.state = UploadState::Loading;
        Some(self.ticket)
    }

    /// Record a request outcome. Returns false if the ticket was stale.
    pub fn finish(&mut self, ticket: u64, result: Result<CreateImageResponse, String>) -> bool {
        if ticket != self.ticket || !self.state.is_loading() {
            return false;
        }
        self.state = match result {
            Ok(response) => UploadState::Done(response),
            Err(message) => UploadState::Failed(message),
        };
        true
    }
}
