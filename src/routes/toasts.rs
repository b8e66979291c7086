use crate::state::WardenState;
use axum::extract::{Path, State};
use maud::Markup;
use uuid::Uuid;

///Early dismissal from a click, or the browser's own timer firing. Dismissing a toast that
///already expired is fine.
pub async fn delete_toast(State(state): State<WardenState>, Path(id): Path<Uuid>) -> Markup {
    state.dismiss_toast(id).await;
    state.render_toasts().await
}
