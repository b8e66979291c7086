use crate::{error::WardenResult, section::Section, state::WardenState};
use axum::{
    extract::{Path, State},
    http::HeaderMap,
};
use maud::Markup;

///A full page load, which is also when everything gets (re)loaded.
pub async fn get_index(State(state): State<WardenState>) -> Markup {
    state.initialize().await;
    state.render_page().await
}

pub async fn get_section(
    State(state): State<WardenState>,
    Path(name): Path<String>,
    headers: HeaderMap,
) -> WardenResult<Markup> {
    let section: Section = name.parse()?;
    state.show_section(section).await;

    //a bookmarked or reloaded section link still needs the whole page around it
    if headers.contains_key("hx-request") {
        Ok(state.render_app().await)
    } else {
        Ok(state.render_page().await)
    }
}
