//! The view controller: turns user events into backend calls and backend responses into
//! [`Document`] rewrites.

use crate::{
    api::{ApiClient, ApiOutcome, ApiRequest},
    config::BackendConfig,
    document::{Document, Modal},
    error::{WardenError, WardenResult},
    notify::{CONNECTION_ERROR, Level, Toast},
    refresh::Refresher,
    section::Section,
    session_store::SessionStore,
};
use std::{sync::Arc, time::Duration};
use tokio::sync::{Mutex, MutexGuard};
use uuid::Uuid;

mod chatbot;
mod loaders;
mod mutations;
mod session;

#[derive(Debug)]
pub struct ViewController {
    api: ApiClient,
    document: Arc<Mutex<Document>>,
    session_store: Box<dyn SessionStore>,
    refresher: Refresher,
    toast_ttl: Duration,
}

impl ViewController {
    pub fn new(
        config: Arc<BackendConfig>,
        session_store: Box<dyn SessionStore>,
    ) -> WardenResult<Self> {
        let toast_ttl = config.get_toast_ttl();

        Ok(Self {
            api: ApiClient::new(config)?,
            document: Arc::new(Mutex::new(Document::default())),
            session_store,
            refresher: Refresher::default(),
            toast_ttl,
        })
    }

    ///Everything that happens when the page first opens.
    pub async fn initialize(&self) {
        futures::join!(
            self.load_dashboard(),
            self.load_rooms_for_selection(),
            self.load_students_for_selection(),
        );
        self.check_login_status().await;
    }

    ///Read access to the view state. Don't hold the guard across backend calls.
    pub async fn document(&self) -> MutexGuard<'_, Document> {
        self.document.lock().await
    }

    ///Shows `section`, hides the rest, and reloads whatever that section displays.
    pub async fn show_section(&self, section: Section) {
        self.document.lock().await.set_section(section);
        (section.entry().reload)(self).await;
    }

    ///Sends one request to the backend. Never fails: problems are logged, shown to the user as
    ///a notification, and come back as [`ApiOutcome::Failed`].
    pub async fn api_call(&self, endpoint: &str, request: ApiRequest) -> ApiOutcome {
        match self.api.send(endpoint, request).await {
            Ok(Some(data)) => ApiOutcome::Data(data),
            Ok(None) => ApiOutcome::Empty,
            Err(WardenError::Status {
                endpoint,
                status,
                message,
            }) => {
                error!(?endpoint, status, ?message, "API error");
                self.notify(message, Level::Error).await;
                ApiOutcome::Failed
            }
            Err(e) => {
                error!(?e, ?endpoint, "API call error");
                self.notify(CONNECTION_ERROR, Level::Error).await;
                ApiOutcome::Failed
            }
        }
    }

    ///Shows a toast, and schedules its removal.
    pub async fn notify(&self, message: impl Into<String>, level: Level) {
        let toast = Toast::new(message, level);
        let id = toast.id;
        self.document.lock().await.push_toast(toast);

        let document = Arc::clone(&self.document);
        let ttl = self.toast_ttl;
        tokio::spawn(async move {
            tokio::time::sleep(ttl).await;
            document.lock().await.dismiss_toast(id);
        });
    }

    pub async fn dismiss_toast(&self, id: Uuid) {
        self.document.lock().await.dismiss_toast(id);
    }

    pub async fn open_modal(&self, modal: Modal) {
        self.document.lock().await.open_modal(modal);
    }

    pub async fn close_modal(&self) {
        self.document.lock().await.close_modal();
    }
}
