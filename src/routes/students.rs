use crate::{
    data::student::{EditStudentForm, NewStudentForm},
    document::Modal,
    state::WardenState,
};
use axum::{
    Form,
    extract::{Path, State},
};
use maud::Markup;

pub async fn post_student(
    State(state): State<WardenState>,
    Form(form): Form<NewStudentForm>,
) -> Markup {
    state.register_student(form).await;
    state.render_app().await
}

pub async fn get_edit_student(
    State(state): State<WardenState>,
    Path(student_id): Path<String>,
) -> Markup {
    state.open_modal(Modal::EditStudent { student_id }).await;
    state.render_app().await
}

pub async fn put_student(
    State(state): State<WardenState>,
    Path(student_id): Path<String>,
    Form(form): Form<EditStudentForm>,
) -> Markup {
    state.edit_student(&student_id, &form).await;
    state.render_app().await
}

pub async fn delete_student(
    State(state): State<WardenState>,
    Path(student_id): Path<String>,
) -> Markup {
    state.delete_student(&student_id).await;
    state.render_app().await
}
