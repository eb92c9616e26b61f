//! Visualization screen: downstream target after a successful upload.

use iced::widget::{button, column, container, text};
use iced::{Alignment, Element, Length, Renderer, Theme};

/// Messages emitted by the visualization screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Go back to the upload screen.
    Back,
}

/// Result of processing a visualization screen message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    None,
    BackToUpload,
}

/// Visualization screen state.
#[derive(Debug, Clone, Default)]
pub struct VisualizationScreen {
    /// Storage key of the most recently uploaded document.
    pub document_key: Option<String>,
}

impl VisualizationScreen {
    /// Record the document this screen was reached for.
    pub fn document_uploaded(&mut self, key: String) {
        tracing::info!(key = %key, "showing visualization");
        self.document_key = Some(key);
    }

    /// Handle a message and return any external action.
    pub fn update(&mut self, message: Message) -> Action {
        match message {
            Message::Back => Action::BackToUpload,
        }
    }

    /// Render the visualization screen.
    pub fn view(&self) -> Element<'_, Message, Theme, Renderer> {
        let title = text("Visualization").size(24);

        let document = match self.document_key {
            Some(ref key) => text(format!("Document: {key}")).size(14),
            None => text("No document uploaded yet").size(14),
        };

        let back = button(text("Back")).on_press(Message::Back);

        let content = column![title, document, back]
            .spacing(15)
            .align_x(Alignment::Center);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    }
}
