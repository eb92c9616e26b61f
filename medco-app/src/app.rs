//! Top-level application state machine: screens and message routing.
//!
//! Elm architecture: `update()` consumes an `AppMessage` and returns an
//! `AppAction` for the shell to execute. No I/O happens here, so the whole
//! upload flow's sequencing is testable without a runtime.

use medco_auth::Session;
use medco_ui::screens::upload::{self, UploadScreen};
use medco_ui::screens::visualization::{self, VisualizationScreen};

use crate::upload_flow::{PickedFile, UploadError};

/// Navigation state: which screen is currently displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Upload,
    Visualization,
}

/// Outcome of the pre-upload session check.
#[derive(Debug, Clone)]
pub enum SessionCheck {
    SignedIn(Session),
    SignedOut,
    /// The provider could not be queried.
    Unavailable(String),
}

impl From<Result<Session, UploadError>> for SessionCheck {
    fn from(result: Result<Session, UploadError>) -> Self {
        match result {
            Ok(session) => SessionCheck::SignedIn(session),
            Err(UploadError::NotSignedIn) => SessionCheck::SignedOut,
            Err(e) => SessionCheck::Unavailable(e.to_string()),
        }
    }
}

/// Top-level application message.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// Messages from the upload screen.
    Upload(upload::Message),
    /// Messages from the visualization screen.
    Visualization(visualization::Message),
    /// Initial session fetch resolved (boot).
    SessionFetched(Result<Option<Session>, String>),
    /// An auth-change event arrived (from subscription).
    AuthChanged(Option<Session>),
    /// The auth-change subscription ended.
    AuthStreamClosed,
    /// File picker resolved; `None` when cancelled.
    FileSelected(Option<PickedFile>),
    /// The picked file could not be read from disk.
    FileReadFailed(String),
    /// Session check for an upload attempt resolved.
    SessionChecked {
        file: PickedFile,
        check: SessionCheck,
    },
    /// Store write resolved with the destination key or a failure text.
    UploadFinished(Result<String, String>),
}

/// Result of processing an app message.
#[derive(Debug, Clone)]
pub enum AppAction {
    None,
    /// Open the native file picker.
    OpenFilePicker,
    /// Run the pre-upload session check for this file.
    CheckSession(PickedFile),
    /// Write the file to the store on behalf of `session`.
    Upload { session: Session, file: PickedFile },
}

/// Top-level application state.
#[derive(Debug, Default)]
pub struct App {
    /// Current screen.
    pub screen: Screen,
    /// Upload screen state.
    pub upload_screen: UploadScreen,
    /// Visualization screen state.
    pub visualization_screen: VisualizationScreen,
}

impl Default for Screen {
    fn default() -> Self {
        Screen::Upload
    }
}

impl App {
    /// Handle a top-level message and return an action.
    pub fn update(&mut self, message: AppMessage) -> AppAction {
        match message {
            AppMessage::Upload(msg) => {
                let action = self.upload_screen.update(msg);
                match action {
                    upload::Action::None => AppAction::None,
                    upload::Action::OpenFilePicker => AppAction::OpenFilePicker,
                }
            }
            AppMessage::Visualization(msg) => {
                let action = self.visualization_screen.update(msg);
                match action {
                    visualization::Action::None => AppAction::None,
                    visualization::Action::BackToUpload => {
                        self.screen = Screen::Upload;
                        AppAction::None
                    }
                }
            }
            AppMessage::SessionFetched(Ok(Some(session))) => {
                self.upload_screen
                    .identity_changed(Some(session.display_name_or_default().to_string()));
                AppAction::None
            }
            AppMessage::SessionFetched(Ok(None)) => AppAction::None,
            AppMessage::SessionFetched(Err(error)) => {
                // Mount-time fetch failure is non-fatal: log only, no notice.
                tracing::error!(error = %error, "initial session fetch failed");
                AppAction::None
            }
            AppMessage::AuthChanged(session) => {
                self.upload_screen.identity_changed(
                    session.map(|s| s.display_name_or_default().to_string()),
                );
                AppAction::None
            }
            AppMessage::AuthStreamClosed => {
                tracing::debug!("auth-change stream closed");
                AppAction::None
            }
            AppMessage::FileSelected(None) => {
                self.upload_screen.show_notice("Please select a file!");
                AppAction::None
            }
            AppMessage::FileSelected(Some(file)) => AppAction::CheckSession(file),
            AppMessage::FileReadFailed(error) => {
                self.upload_screen
                    .show_notice(format!("Unable to read file: {error}"));
                AppAction::None
            }
            AppMessage::SessionChecked { file, check } => match check {
                SessionCheck::SignedIn(session) => {
                    self.upload_screen.upload_started();
                    AppAction::Upload { session, file }
                }
                SessionCheck::SignedOut => {
                    self.upload_screen
                        .show_notice("You must be logged in to upload files.");
                    AppAction::None
                }
                SessionCheck::Unavailable(error) => {
                    tracing::error!(error = %error, "session fetch failed");
                    self.upload_screen
                        .show_notice("Unable to fetch session. Please try again.");
                    AppAction::None
                }
            },
            AppMessage::UploadFinished(Ok(key)) => {
                self.upload_screen.upload_succeeded();
                self.visualization_screen.document_uploaded(key);
                self.screen = Screen::Visualization;
                AppAction::None
            }
            AppMessage::UploadFinished(Err(error)) => {
                self.upload_screen.upload_failed(error);
                AppAction::None
            }
        }
    }
}
