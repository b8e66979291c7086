use crate::state::WardenState;
use axum::{
    Router,
    routing::{delete, get, post},
};

pub mod chat;
pub mod complaints;
pub mod index;
pub mod login;
pub mod payments;
pub mod rooms;
pub mod students;
pub mod toasts;

pub fn router(state: WardenState) -> Router {
    Router::new()
        .route("/", get(index::get_index))
        .route("/section/{name}", get(index::get_section))
        .route("/students", post(students::post_student))
        .route(
            "/students/{id}",
            delete(students::delete_student).put(students::put_student),
        )
        .route("/students/{id}/edit", get(students::get_edit_student))
        .route("/rooms/{room_no}/allocate", post(rooms::post_allocate_room))
        .route("/rooms/{room_no}/vacate", post(rooms::post_vacate_room))
        .route("/payments", post(payments::post_payment))
        .route("/complaints", post(complaints::post_complaint))
        .route(
            "/complaints/{id}/resolve",
            post(complaints::post_resolve_complaint),
        )
        .route("/chat", post(chat::post_chat))
        .route("/chat/reply", post(chat::post_chat_reply))
        .route("/chat/toggle", post(chat::post_toggle_chat))
        .route("/chat/close", post(chat::post_close_chat))
        .route("/login", get(login::get_login).post(login::post_login))
        .route(
            "/register",
            get(login::get_register).post(login::post_register),
        )
        .route("/logout", post(login::post_logout))
        .route("/modal/close", post(login::post_close_modal))
        .route("/toasts/{id}", delete(toasts::delete_toast))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        notify::Level,
        test_support::{MockBackend, controller_for, json_routes},
    };
    use axum::Json;
    use reqwest::StatusCode;
    use serde_json::json;
    use std::time::Duration;
    use tokio::net::TcpListener;

    async fn serve(backend: &MockBackend) -> (String, WardenState) {
        let state = WardenState::from_controller(controller_for(backend), Duration::from_secs(3));
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let app = router(state.clone());
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        (format!("http://{addr}"), state)
    }

    #[tokio::test]
    async fn unknown_sections_are_not_found() {
        let backend = MockBackend::spawn(Router::new()).await;
        let (host, _state) = serve(&backend).await;

        let response = reqwest::get(format!("{host}/section/laundry")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn the_index_runs_startup_and_renders_everything() {
        let backend = MockBackend::spawn(json_routes(&[
            ("/dashboard", json!({"totalStudents": 3})),
            ("/students", json!([{"student_id": "S1", "name": "Asha"}])),
            ("/rooms", json!([])),
            ("/rooms/available", json!([{"room_no": "101", "type": "Single"}])),
            ("/complaints", json!([])),
            ("/activities", json!([])),
        ]))
        .await;
        let (host, _state) = serve(&backend).await;

        let page = reqwest::get(format!("{host}/")).await.unwrap().text().await.unwrap();

        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains(r#"<h3 id="totalStudents" class="text-2xl font-bold">1</h3>"#));
        assert!(page.contains("101 (Single)"));
        assert!(page.contains("S1 - Asha"));
        assert!(page.contains("No recent activities"));
    }

    #[tokio::test]
    async fn allocation_takes_the_student_from_the_prompt_header() {
        let backend = MockBackend::spawn(
            Router::new().route("/rooms/allocate", axum::routing::post(|| async { Json(json!({"success": true})) })),
        )
        .await;
        let (host, state) = serve(&backend).await;

        let response = reqwest::Client::new()
            .post(format!("{host}/rooms/101/allocate"))
            .header("HX-Request", "true")
            .header("HX-Prompt", "S1")
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.text().await.unwrap().starts_with(r#"<div id="app""#));
        assert_eq!(
            backend.hits_for("POST", "/rooms/allocate")[0].body,
            Some(json!({"student_id": "S1", "room_no": "101"}))
        );
        let document = state.document().await;
        assert_eq!(document.toasts()[0].message, "Room 101 allocated to S1");
        assert_eq!(document.toasts()[0].level, Level::Success);
    }

    #[tokio::test]
    async fn login_form_reaches_the_backend_as_json() {
        let backend = MockBackend::spawn(Router::new().route(
            "/login",
            axum::routing::post(|| async { Json(json!({"success": true, "user": {"username": "warden1"}})) }),
        ))
        .await;
        let (host, state) = serve(&backend).await;

        let page = reqwest::Client::new()
            .post(format!("{host}/login"))
            .form(&[("username", "warden1"), ("password", "hunter2")])
            .send()
            .await
            .unwrap()
            .text()
            .await
            .unwrap();

        assert_eq!(
            backend.hits_for("POST", "/login")[0].body,
            Some(json!({"username": "warden1", "password": "hunter2"}))
        );
        assert!(page.contains("Welcome, warden1"));
        assert!(state.document().await.is_logged_in());
    }

    #[tokio::test]
    async fn chat_messages_show_before_the_bot_answers() {
        let backend = MockBackend::spawn(Router::new().route(
            "/chatbot",
            axum::routing::post(|| async { Json(json!({"reply": "Breakfast is at 7."})) }),
        ))
        .await;
        let (host, _state) = serve(&backend).await;
        let client = reqwest::Client::new();

        let first = client
            .post(format!("{host}/chat"))
            .form(&[("message", "When is breakfast?")])
            .send()
            .await
            .unwrap()
            .text()
            .await
            .unwrap();

        assert!(first.contains(">When is breakfast?</div>"));
        assert!(first.contains(r#"hx-post="/chat/reply""#));
        assert!(backend.hits().is_empty());

        let second = client
            .post(format!("{host}/chat/reply"))
            .send()
            .await
            .unwrap()
            .text()
            .await
            .unwrap();

        assert!(second.contains(">Breakfast is at 7.</div>"));
        assert!(!second.contains(r#"hx-post="/chat/reply""#));
        assert_eq!(
            backend.hits_for("POST", "/chatbot")[0].body,
            Some(json!({"message": "When is breakfast?"}))
        );
    }

    #[tokio::test]
    async fn toasts_can_be_dismissed_early() {
        let backend = MockBackend::spawn(Router::new()).await;
        let (host, state) = serve(&backend).await;
        state.notify("Saved", Level::Info).await;
        let id = state.document().await.toasts()[0].id;

        let fragment = reqwest::Client::new()
            .delete(format!("{host}/toasts/{id}"))
            .send()
            .await
            .unwrap()
            .text()
            .await
            .unwrap();

        assert!(fragment.starts_with(r#"<div id="toasts""#));
        assert!(!fragment.contains("Saved"));
        assert!(state.document().await.toasts().is_empty());
    }
}
