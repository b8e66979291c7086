use crate::{
    document::Modal,
    error::WardenResult,
    prompt::{FormPrompt, LoginCredentials, Registration},
    state::WardenState,
};
use axum::{Form, extract::State};
use maud::Markup;

pub async fn get_login(State(state): State<WardenState>) -> Markup {
    state.open_modal(Modal::Login).await;
    state.render_app().await
}

pub async fn get_register(State(state): State<WardenState>) -> Markup {
    state.open_modal(Modal::Register).await;
    state.render_app().await
}

pub async fn post_login(
    State(state): State<WardenState>,
    Form(credentials): Form<LoginCredentials>,
) -> WardenResult<Markup> {
    state.login(&mut FormPrompt::login(credentials)).await?;
    Ok(state.render_app().await)
}

pub async fn post_register(
    State(state): State<WardenState>,
    Form(registration): Form<Registration>,
) -> WardenResult<Markup> {
    state.register(&mut FormPrompt::register(registration)).await?;
    Ok(state.render_app().await)
}

pub async fn post_logout(State(state): State<WardenState>) -> WardenResult<Markup> {
    state.logout().await?;
    Ok(state.render_app().await)
}

pub async fn post_close_modal(State(state): State<WardenState>) -> Markup {
    state.close_modal().await;
    state.render_app().await
}
