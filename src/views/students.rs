use crate::{
    data::{room::Room, student::Student},
    document::{Document, Region},
    maud_conveniences::{
        cell, fixed_select, form_element, form_submit_button, placeholder_row, render_table,
        select_element, title,
    },
};
use maud::{Markup, html};

pub const NO_STUDENTS: &str = "No students registered";
pub const NO_ROOMS_AVAILABLE: &str = "No rooms available";
pub const NO_STUDENT_OPTIONS: &str = "No students";
pub const LOADING: &str = "Loading...";

const GENDERS: [&str; 3] = ["Male", "Female", "Other"];

pub fn student_rows(students: &[Student]) -> Markup {
    if students.is_empty() {
        return placeholder_row(7, NO_STUDENTS);
    }

    html! {
        @for student in students {
            tr {
                (cell(&student.student_id))
                (cell(&student.name))
                (cell(&student.age))
                (cell(&student.gender))
                (cell(&student.room_no))
                (cell(&student.contact))
                td class="py-2 px-4 border-b border-gray-600 space-x-2" {
                    button class="btn btn-warning btn-sm bg-amber-600 hover:bg-amber-800 py-1 px-2 rounded" hx-get={"/students/" (student.student_id) "/edit"} {
                        i class="fas fa-edit" {}
                    }
                    button class="btn btn-danger btn-sm bg-red-600 hover:bg-red-800 py-1 px-2 rounded" hx-delete={"/students/" (student.student_id)} hx-confirm="Are you sure you want to delete this student?" {
                        i class="fas fa-trash" {}
                    }
                }
            }
        }
    }
}

///Options for the registration form's room dropdown, from `GET /rooms/available`.
pub fn room_options(rooms: &[Room]) -> Markup {
    if rooms.is_empty() {
        return html! { option value="" {(NO_ROOMS_AVAILABLE)} };
    }

    html! {
        option value="" {"Select Room"}
        @for room in rooms {
            option value=(room.room_no) {(room.room_no) " (" (room.kind) ")"}
        }
    }
}

///Options for the payment and complaint forms' student dropdowns.
pub fn student_options(students: &[Student]) -> Markup {
    if students.is_empty() {
        return html! { option value="" {(NO_STUDENT_OPTIONS)} };
    }

    html! {
        option value="" {"Select Student"}
        @for student in students {
            option value=(student.student_id) {(student.student_id) " - " (student.name)}
        }
    }
}

pub fn loading_option() -> Markup {
    html! { option value="" {(LOADING)} }
}

pub fn students_panel(document: &Document) -> Markup {
    let draft = document.student_draft();

    html! {
        div class="bg-gray-800 p-6 rounded shadow-md mb-6" {
            (title("Register Student"))
            form id="studentForm" hx-post="/students" class="grid grid-cols-1 md:grid-cols-2 gap-x-4" {
                (form_element("student_id", "Student ID", "text", &draft.student_id))
                (form_element("name", "Full Name", "text", &draft.name))
                (form_element("age", "Age", "number", &draft.age))
                (fixed_select("gender", "Gender", &GENDERS, &draft.gender))
                (form_element("contact", "Contact", "tel", &draft.contact))
                (select_element(Region::StudentRoomSelect.element_id(), "room_no", "Room", document.region(Region::StudentRoomSelect)))
                (form_submit_button("Register Student"))
            }
        }
        (render_table(
            Region::StudentsTable.element_id(),
            ["ID", "Name", "Age", "Gender", "Room", "Contact", "Actions"],
            document.region(Region::StudentsTable),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn students(value: serde_json::Value) -> Vec<Student> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn one_row_per_student_and_no_undefined() {
        let markup = student_rows(&students(json!([
            {"student_id": "S1", "name": "Asha", "age": 19, "gender": "Female", "contact": "98765", "room_no": "101"},
            {"student_id": 7, "name": "Ravi"}
        ])))
        .into_string();

        assert_eq!(markup.matches("<tr>").count(), 2);
        assert!(markup.contains("<td class=\"py-2 px-4 border-b border-gray-600 text-gray-200\">Asha</td>"));
        assert!(markup.contains(r#"hx-delete="/students/7""#));
        assert!(markup.contains(r#"hx-get="/students/S1/edit""#));
        assert!(!markup.contains("undefined"));
        assert!(!markup.contains("null"));
    }

    #[test]
    fn empty_list_gets_the_placeholder() {
        let markup = student_rows(&[]).into_string();
        assert!(markup.contains(r#"colspan="7""#));
        assert!(markup.contains(NO_STUDENTS));
    }

    #[test]
    fn dropdowns_have_a_prompt_option() {
        let rooms: Vec<Room> =
            serde_json::from_value(json!([{"room_no": "101", "type": "Double"}])).unwrap();
        assert_eq!(
            room_options(&rooms).into_string(),
            r#"<option value="">Select Room</option><option value="101">101 (Double)</option>"#
        );
        assert!(room_options(&[]).into_string().contains(NO_ROOMS_AVAILABLE));

        let markup = student_options(&students(json!([{"student_id": "S1", "name": "Asha"}])));
        assert!(markup.into_string().contains(r#"<option value="S1">S1 - Asha</option>"#));
        assert!(student_options(&[]).into_string().contains(NO_STUDENT_OPTIONS));
    }
}
