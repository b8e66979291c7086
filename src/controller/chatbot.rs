use super::ViewController;
use crate::{
    api::ApiRequest,
    chat::{APOLOGY, Sender},
};
use serde::Serialize;

#[derive(Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
}

impl ViewController {
    pub async fn toggle_chat(&self) {
        self.document.lock().await.chat_mut().toggle();
    }

    pub async fn close_chat(&self) {
        self.document.lock().await.chat_mut().close();
    }

    ///Shows the message straight away. Returns whether there was anything to send.
    pub async fn queue_chat_message(&self, text: &str) -> bool {
        let message = text.trim();
        if message.is_empty() {
            return false;
        }

        self.document.lock().await.chat_mut().ask(message);
        true
    }

    ///Asks the bot about the oldest unanswered message, if there is one.
    pub async fn answer_chat(&self) {
        let Some(message) = self.document.lock().await.chat_mut().next_unanswered() else {
            return;
        };

        let outcome = self
            .api_call(
                "/chatbot",
                ApiRequest::post().json(&ChatRequest { message: &message }),
            )
            .await;

        let reply = if outcome.is_truthy() {
            outcome
                .data()
                .and_then(|data| data.get("reply"))
                .and_then(|reply| match reply {
                    serde_json::Value::Null => None,
                    serde_json::Value::String(s) => Some(s.clone()),
                    other => Some(other.to_string()),
                })
                .unwrap_or_default()
        } else {
            APOLOGY.to_string()
        };

        self.document.lock().await.chat_mut().push(Sender::Bot, reply);
    }

    #[cfg(test)]
    pub async fn send_chat_message(&self, text: &str) {
        if self.queue_chat_message(text).await {
            self.answer_chat().await;
        }
    }
}
