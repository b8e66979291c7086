use crate::{
    config::RuntimeConfiguration,
    controller::ViewController,
    error::WardenResult,
    session_store::FileSessionStore,
    views::{
        page::{render_app, render_page},
        toasts::toast_stack,
    },
};
use maud::Markup;
use std::{ops::Deref, sync::Arc, time::Duration};

///What every route handler gets: the one controller, shared.
#[derive(Clone, Debug)]
pub struct WardenState {
    controller: Arc<ViewController>,
    toast_ttl: Duration,
}

impl WardenState {
    pub fn new(config: &RuntimeConfiguration) -> WardenResult<Self> {
        let backend_config = config.backend_config();
        let toast_ttl = backend_config.get_toast_ttl();
        let controller = ViewController::new(
            backend_config,
            Box::new(FileSessionStore::new(config.session_path())),
        )?;

        Ok(Self::from_controller(controller, toast_ttl))
    }

    pub fn from_controller(controller: ViewController, toast_ttl: Duration) -> Self {
        Self {
            controller: Arc::new(controller),
            toast_ttl,
        }
    }

    pub async fn render_page(&self) -> Markup {
        render_page(&*self.controller.document().await, self.toast_ttl)
    }

    ///The `#app` fragment that every htmx interaction swaps in.
    pub async fn render_app(&self) -> Markup {
        render_app(&*self.controller.document().await, self.toast_ttl)
    }

    pub async fn render_toasts(&self) -> Markup {
        toast_stack(self.controller.document().await.toasts(), self.toast_ttl)
    }
}

impl Deref for WardenState {
    type Target = ViewController;

    fn deref(&self) -> &Self::Target {
        &self.controller
    }
}
