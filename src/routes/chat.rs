use crate::state::WardenState;
use axum::{Form, extract::State};
use maud::Markup;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct ChatForm {
    #[serde(default)]
    message: String,
}

pub async fn post_chat(
    State(state): State<WardenState>,
    Form(ChatForm { message }): Form<ChatForm>,
) -> Markup {
    state.queue_chat_message(&message).await;
    state.render_app().await
}

pub async fn post_chat_reply(State(state): State<WardenState>) -> Markup {
    state.answer_chat().await;
    state.render_app().await
}

pub async fn post_toggle_chat(State(state): State<WardenState>) -> Markup {
    state.toggle_chat().await;
    state.render_app().await
}

pub async fn post_close_chat(State(state): State<WardenState>) -> Markup {
    state.close_chat().await;
    state.render_app().await
}
