mod app;
pub mod settings;
mod upload_flow;

use std::sync::Arc;

use app::{App, AppAction, AppMessage, Screen, SessionCheck};
use iced::Element;
use medco_auth::{AuthProvider, AuthSubscription, MemoryAuthProvider, Session};
use medco_store::{FsStore, ObjectStore};
use settings::Settings;
use tracing_subscriber::EnvFilter;

/// Top-level Iced application wrapper.
///
/// Bridges the `App` state machine to the Iced runtime by converting
/// `AppAction` returns into `iced::Task` effects, and feeds auth-change
/// events back in as messages.
struct MedcoApp {
    app: App,
    auth: Arc<dyn AuthProvider>,
    store: Arc<dyn ObjectStore>,
    /// Held so the subscription is cancelled exactly once, on drop.
    auth_sub: Arc<tokio::sync::Mutex<AuthSubscription>>,
    theme: settings::Theme,
}

impl MedcoApp {
    /// Build the shell and the boot task: one initial session fetch plus the
    /// first arm of the auth-change listener.
    fn boot(
        auth: Arc<dyn AuthProvider>,
        store: Arc<dyn ObjectStore>,
        theme: settings::Theme,
    ) -> (Self, iced::Task<AppMessage>) {
        let auth_sub = Arc::new(tokio::sync::Mutex::new(auth.subscribe()));

        let shell = Self {
            app: App::default(),
            auth: auth.clone(),
            store,
            auth_sub: auth_sub.clone(),
            theme,
        };

        let fetch = iced::Task::perform(
            async move { auth.current_session().await.map_err(|e| e.to_string()) },
            AppMessage::SessionFetched,
        );
        let listen = Self::listen_auth(auth_sub);

        (shell, iced::Task::batch([fetch, listen]))
    }

    /// Await the next auth change and feed it back as a message.
    ///
    /// Re-armed after each delivery; stops once the subscription is
    /// cancelled or the provider goes away.
    fn listen_auth(sub: Arc<tokio::sync::Mutex<AuthSubscription>>) -> iced::Task<AppMessage> {
        iced::Task::perform(
            async move { sub.lock().await.recv().await },
            |change| match change {
                Some(change) => AppMessage::AuthChanged(change.session),
                None => AppMessage::AuthStreamClosed,
            },
        )
    }

    fn update(&mut self, message: AppMessage) -> iced::Task<AppMessage> {
        let rearm_listener = matches!(message, AppMessage::AuthChanged(_));

        let action = self.app.update(message);
        let task = match action {
            AppAction::None => iced::Task::none(),
            AppAction::OpenFilePicker => iced::Task::perform(
                async move {
                    match upload_flow::pick_pdf().await {
                        None => Ok(None),
                        Some(path) => upload_flow::read_picked(&path)
                            .await
                            .map(Some)
                            .map_err(|e| e.to_string()),
                    }
                },
                |result| match result {
                    Ok(file) => AppMessage::FileSelected(file),
                    Err(error) => AppMessage::FileReadFailed(error),
                },
            ),
            AppAction::CheckSession(file) => {
                let auth = self.auth.clone();
                iced::Task::perform(
                    async move {
                        let check =
                            SessionCheck::from(upload_flow::resolve_uploader(auth.as_ref()).await);
                        (file, check)
                    },
                    |(file, check)| AppMessage::SessionChecked { file, check },
                )
            }
            AppAction::Upload { session, file } => {
                let store = self.store.clone();
                iced::Task::perform(
                    async move {
                        upload_flow::store_document(store.as_ref(), &session, &file)
                            .await
                            .map_err(|e| e.to_string())
                    },
                    AppMessage::UploadFinished,
                )
            }
        };

        if rearm_listener {
            iced::Task::batch([task, Self::listen_auth(self.auth_sub.clone())])
        } else {
            task
        }
    }

    fn view(&self) -> Element<'_, AppMessage> {
        match self.app.screen {
            Screen::Upload => self.app.upload_screen.view().map(AppMessage::Upload),
            Screen::Visualization => self
                .app
                .visualization_screen
                .view()
                .map(AppMessage::Visualization),
        }
    }

    fn theme(&self) -> iced::Theme {
        match self.theme {
            settings::Theme::Light => iced::Theme::Light,
            settings::Theme::Dark => iced::Theme::Dark,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("medco starting");

    let settings = Settings::load();
    // Persist on boot so a first run leaves an editable settings file behind.
    if let Err(e) = settings.save() {
        tracing::warn!(error = %e, "failed to persist settings");
    }
    let theme = settings.theme;

    // Local mode: an in-process identity and a filesystem store. A deployment
    // against hosted auth/storage swaps these two for backend-connected
    // implementations of the same traits.
    let auth: Arc<dyn AuthProvider> = Arc::new(MemoryAuthProvider::signed_in(
        Session::new("local").with_display_name(settings.display_name.clone()),
    ));
    let store: Arc<dyn ObjectStore> = Arc::new(FsStore::new(settings.storage_dir.clone())?);

    iced::application("MedCo", MedcoApp::update, MedcoApp::view)
        .theme(MedcoApp::theme)
        .run_with(move || MedcoApp::boot(auth, store, theme))?;

    Ok(())
}
