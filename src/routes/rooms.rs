use crate::state::WardenState;
use axum::{
    extract::{Path, State},
    http::HeaderMap,
};
use maud::Markup;

///htmx sends the answer to `hx-prompt` in this header.
const PROMPT_HEADER: &str = "hx-prompt";

pub async fn post_allocate_room(
    State(state): State<WardenState>,
    Path(room_no): Path<String>,
    headers: HeaderMap,
) -> Markup {
    let student_id = headers
        .get(PROMPT_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    state.allocate_room(&room_no, student_id).await;
    state.render_app().await
}

pub async fn post_vacate_room(
    State(state): State<WardenState>,
    Path(room_no): Path<String>,
) -> Markup {
    state.vacate_room(&room_no).await;
    state.render_app().await
}
