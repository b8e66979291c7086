use crate::{document::Modal, maud_conveniences::{form_submit_button, title}};
use maud::{Markup, html};

const INPUT_CLASSES: &str = "shadow appearance-none border rounded w-full py-2 px-3 leading-tight focus:outline-none focus:shadow-outline bg-gray-700 border-gray-600";

fn input(id: &str, label: &str, input_type: &str, required: bool) -> Markup {
    html! {
        div class="mb-4" {
            label for=(id) class="block text-sm font-bold mb-2 text-gray-300" {(label)}
            input required[required] type=(input_type) id=(id) name=(id) class=(INPUT_CLASSES) {}
        }
    }
}

fn login_form() -> Markup {
    html! {
        (title("Login"))
        form id="loginForm" hx-post="/login" {
            (input("username", "Username", "text", true))
            (input("password", "Password", "password", true))
            (form_submit_button("Login"))
        }
    }
}

fn register_form() -> Markup {
    html! {
        (title("Register"))
        form id="registerForm" hx-post="/register" {
            (input("username", "Username", "text", true))
            (input("email", "Email", "email", true))
            (input("password", "Password", "password", true))
            (form_submit_button("Register"))
        }
    }
}

fn edit_student_form(student_id: &str) -> Markup {
    html! {
        (title(format!("Edit Student {student_id}")))
        p class="text-sm text-gray-400 mb-4" {"Leave a field blank to keep its current value."}
        form id="editStudentForm" hx-put={"/students/" (student_id)} {
            (input("name", "New name", "text", false))
            (input("age", "New age", "number", false))
            (input("contact", "New contact", "tel", false))
            (input("room_no", "New room no", "text", false))
            (form_submit_button("Save Changes"))
        }
    }
}

pub fn modal(modal: Option<&Modal>) -> Markup {
    let Some(modal) = modal else {
        return html! {};
    };

    let (id, body) = match modal {
        Modal::Login => ("loginModal", login_form()),
        Modal::Register => ("registerModal", register_form()),
        Modal::EditStudent { student_id } => ("editStudentModal", edit_student_form(student_id)),
    };

    html! {
        div id=(id) class="modal fixed inset-0 bg-black/60 flex items-center justify-center z-40" {
            div class="modal-content bg-gray-800 p-8 rounded shadow-md max-w-md w-full relative" {
                button class="close absolute top-2 right-4 text-2xl text-gray-400 hover:text-white" hx-post="/modal/close" {
                    "×"
                }
                (body)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_modal_renders_nothing() {
        assert_eq!(modal(None).into_string(), "");
    }

    #[test]
    fn edit_form_targets_the_student_and_nothing_is_required() {
        let markup = modal(Some(&Modal::EditStudent {
            student_id: "S1".into(),
        }))
        .into_string();

        assert!(markup.contains(r#"hx-put="/students/S1""#));
        assert!(!markup.contains("required"));
    }

    #[test]
    fn login_form_posts_credentials() {
        let markup = modal(Some(&Modal::Login)).into_string();
        assert!(markup.contains(r#"id="loginModal""#));
        assert!(markup.contains(r#"hx-post="/login""#));
        assert!(markup.contains(r#"type="password""#));
    }
}
