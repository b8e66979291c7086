//! The "logged in as" display. Nothing here authenticates API calls: the backend only checks the
//! credentials, and the result is remembered locally so the page can greet the user.

use super::ViewController;
use crate::{
    api::{ApiRequest, is_truthy, truthy_text},
    data::user::SessionUser,
    error::WardenResult,
    notify::Level,
    prompt::{CredentialPrompt, LoginCredentials, Registration},
};
use secrecy::ExposeSecret;
use serde::Serialize;
use serde_json::Value;

#[derive(Serialize)]
struct LoginBody<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct RegisterBody<'a> {
    username: &'a str,
    email: &'a str,
    password: &'a str,
}

fn field<'a>(reply: &'a Value, key: &str) -> Option<&'a Value> {
    reply.get(key).filter(|value| is_truthy(value))
}

impl ViewController {
    pub async fn login(&self, prompt: &mut impl CredentialPrompt) -> WardenResult<()> {
        let Some(LoginCredentials { username, password }) = prompt.login_credentials()? else {
            return Ok(());
        };

        let body = LoginBody {
            username: &username,
            password: password.expose_secret(),
        };
        let outcome = self
            .api_call("/login", ApiRequest::post().json(&body))
            .await;
        let Some(reply) = outcome.data().filter(|reply| is_truthy(reply)) else {
            return Ok(());
        };

        if field(reply, "success").is_some() || field(reply, "user").is_some() {
            let user = field(reply, "user")
                .and_then(|user| serde_json::from_value::<SessionUser>(user.clone()).ok())
                .filter(|user| !user.username.is_empty())
                .unwrap_or_else(|| SessionUser::named(username));

            self.session_store.save(&user)?;
            info!(username = %user.username, "Logged in");

            self.notify(
                field(reply, "message")
                    .and_then(truthy_text)
                    .unwrap_or_else(|| "Login successful!".to_string()),
                Level::Success,
            )
            .await;

            let mut document = self.document.lock().await;
            document.set_user(Some(user));
            document.close_modal();
        } else if let Some(error) = field(reply, "error").and_then(truthy_text) {
            self.notify(error, Level::Error).await;
        }

        Ok(())
    }

    pub async fn register(&self, prompt: &mut impl CredentialPrompt) -> WardenResult<()> {
        let Some(Registration {
            username,
            email,
            password,
        }) = prompt.registration()?
        else {
            return Ok(());
        };

        let body = RegisterBody {
            username: &username,
            email: &email,
            password: password.expose_secret(),
        };
        let outcome = self
            .api_call("/register", ApiRequest::post().json(&body))
            .await;
        let Some(reply) = outcome.data().filter(|reply| is_truthy(reply)) else {
            return Ok(());
        };

        let message = field(reply, "message").and_then(truthy_text);
        if field(reply, "success").is_some() || message.is_some() {
            self.notify(
                message.unwrap_or_else(|| "Registration successful! Please login.".to_string()),
                Level::Success,
            )
            .await;
            self.close_modal().await;
        } else if let Some(error) = field(reply, "error").and_then(truthy_text) {
            self.notify(error, Level::Error).await;
        }

        Ok(())
    }

    ///Forgets the stored user and goes back to the logged-out buttons, whatever state we were in.
    pub async fn logout(&self) -> WardenResult<()> {
        self.session_store.clear()?;
        self.notify("Logged out successfully!", Level::Success)
            .await;
        self.document.lock().await.set_user(None);
        Ok(())
    }

    ///Restores the logged-in display from the local store. An unreadable store just means
    ///logged out.
    pub async fn check_login_status(&self) {
        match self.session_store.load() {
            Ok(Some(user)) => self.document.lock().await.set_user(Some(user)),
            Ok(None) => {}
            Err(e) => warn!(?e, "Unable to read stored session"),
        }
    }
}
