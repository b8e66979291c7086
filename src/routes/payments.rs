use crate::{data::payment::NewPaymentForm, state::WardenState};
use axum::{Form, extract::State};
use maud::Markup;

pub async fn post_payment(
    State(state): State<WardenState>,
    Form(form): Form<NewPaymentForm>,
) -> Markup {
    state.record_payment(form).await;
    state.render_app().await
}
