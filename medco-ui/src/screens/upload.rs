//! Upload screen: greeting, PDF picker entry point, and upload status.

use iced::widget::{button, column, container, text};
use iced::{Alignment, Element, Length, Renderer, Theme};

/// Lifecycle of one upload attempt.
///
/// Exactly one value is current at a time: Idle until the first gesture,
/// then Uploading, then Succeeded or Failed until the next gesture restarts
/// the cycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UploadStatus {
    #[default]
    Idle,
    Uploading,
    Succeeded,
    Failed(String),
}

impl UploadStatus {
    /// Text shown under the picker; empty while idle.
    pub fn label(&self) -> String {
        match self {
            UploadStatus::Idle => String::new(),
            UploadStatus::Uploading => "Uploading...".to_string(),
            UploadStatus::Succeeded => "File uploaded successfully!".to_string(),
            UploadStatus::Failed(message) => format!("Upload failed: {message}"),
        }
    }
}

/// Messages emitted by the upload screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Open the file picker.
    PickFile,
    /// Dismiss the current notice.
    DismissNotice,
}

/// Result of processing an upload screen message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    None,
    /// Open the native file picker.
    OpenFilePicker,
}

/// Upload screen state.
#[derive(Debug, Clone, Default)]
pub struct UploadScreen {
    /// Greeting name; empty when signed out.
    pub display_name: String,
    /// Status of the current upload attempt.
    pub status: UploadStatus,
    /// Blocking notice (no file picked, not signed in, session unavailable).
    pub notice: Option<String>,
}

impl UploadScreen {
    /// Reflect an identity change. `None` clears the greeting (signed out).
    pub fn identity_changed(&mut self, display_name: Option<String>) {
        self.display_name = display_name.unwrap_or_default();
    }

    /// A new upload attempt has begun; clears any leftover notice.
    pub fn upload_started(&mut self) {
        self.notice = None;
        self.status = UploadStatus::Uploading;
    }

    pub fn upload_succeeded(&mut self) {
        self.status = UploadStatus::Succeeded;
    }

    pub fn upload_failed(&mut self, message: String) {
        tracing::error!(error = %message, "upload failed");
        self.status = UploadStatus::Failed(message);
    }

    /// Show a blocking notice without touching the upload status.
    pub fn show_notice(&mut self, message: impl Into<String>) {
        self.notice = Some(message.into());
    }

    /// Handle a message and return any external action.
    pub fn update(&mut self, message: Message) -> Action {
        match message {
            Message::PickFile => Action::OpenFilePicker,
            Message::DismissNotice => {
                self.notice = None;
                Action::None
            }
        }
    }

    /// Render the upload screen.
    pub fn view(&self) -> Element<'_, Message, Theme, Renderer> {
        let mut content = column![].spacing(15).align_x(Alignment::Center);

        if !self.display_name.is_empty() {
            content = content.push(text(format!("Hi! {}", self.display_name)).size(16));
        }

        content = content.push(text("MedCo").size(32));
        content = content.push(button(text("Upload Your PDF")).on_press(Message::PickFile));

        let status_label = self.status.label();
        if !status_label.is_empty() {
            content = content.push(text(status_label).size(14));
        }

        if let Some(ref notice) = self.notice {
            let dismiss = button(text("OK").size(12)).on_press(Message::DismissNotice);
            content = content.push(
                column![
                    text(notice).size(14).color(iced::Color::from_rgb(1.0, 0.3, 0.3)),
                    dismiss
                ]
                .spacing(5)
                .align_x(Alignment::Center),
            );
        }

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    }
}
