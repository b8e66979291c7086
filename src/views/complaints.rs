use crate::{
    data::complaint::Complaint,
    document::{Document, Region},
    format::format_date,
    maud_conveniences::{
        cell, fixed_select, form_submit_button, placeholder_row, render_table, select_element,
        status_badge, title,
    },
};
use maud::{Markup, html};

pub const NO_COMPLAINTS: &str = "No complaints filed";

const ISSUE_TYPES: [&str; 5] = ["Maintenance", "Cleanliness", "Food", "Security", "Other"];

pub fn complaint_rows(complaints: &[Complaint]) -> Markup {
    if complaints.is_empty() {
        return placeholder_row(7, NO_COMPLAINTS);
    }

    html! {
        @for complaint in complaints {
            tr {
                (cell(&complaint.complaint_id))
                (cell(&complaint.student_id))
                (cell(&complaint.issue_type))
                (cell(&complaint.description))
                (cell(format_date(&complaint.complaint_date)))
                (cell(status_badge(
                    if complaint.is_resolved() { "resolved" } else { "pending" },
                    &complaint.status,
                )))
                td class="py-2 px-4 border-b border-gray-600" {
                    @if complaint.is_pending() {
                        button class="btn btn-success btn-sm bg-green-600 hover:bg-green-800 py-1 px-2 rounded" hx-post={"/complaints/" (complaint.complaint_id) "/resolve"} hx-confirm="Mark this complaint as resolved?" {
                            "Resolve"
                        }
                    } @else {
                        button class="btn btn-primary btn-sm bg-gray-600 py-1 px-2 rounded" disabled {
                            "Resolved"
                        }
                    }
                }
            }
        }
    }
}

pub fn complaints_panel(document: &Document) -> Markup {
    let draft = document.complaint_draft();

    html! {
        div class="bg-gray-800 p-6 rounded shadow-md mb-6" {
            (title("File Complaint"))
            form id="complaintForm" hx-post="/complaints" {
                (select_element(Region::ComplaintStudentSelect.element_id(), "student_id", "Student", document.region(Region::ComplaintStudentSelect)))
                (fixed_select("issue_type", "Issue Type", &ISSUE_TYPES, &draft.issue_type))
                div class="mb-4" {
                    label for="description" class="block text-sm font-bold mb-2 text-gray-300" {"Description"}
                    textarea required id="description" name="description" rows="3" class="shadow border rounded w-full py-2 px-3 bg-gray-700 border-gray-600" {(draft.description)}
                }
                (form_submit_button("Submit Complaint"))
            }
        }
        (render_table(
            Region::ComplaintsTable.element_id(),
            ["ID", "Student ID", "Issue Type", "Description", "Date", "Status", "Actions"],
            document.region(Region::ComplaintsTable),
        ))
    }
}
