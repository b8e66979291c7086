use crate::{data::complaint::NewComplaint, state::WardenState};
use axum::{
    Form,
    extract::{Path, State},
};
use maud::Markup;

pub async fn post_complaint(
    State(state): State<WardenState>,
    Form(complaint): Form<NewComplaint>,
) -> Markup {
    state.submit_complaint(complaint).await;
    state.render_app().await
}

pub async fn post_resolve_complaint(
    State(state): State<WardenState>,
    Path(complaint_id): Path<String>,
) -> Markup {
    state.resolve_complaint(&complaint_id).await;
    state.render_app().await
}
