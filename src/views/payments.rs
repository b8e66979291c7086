use crate::{
    data::payment::Payment,
    document::{Document, Region},
    format::{format_date, format_inr},
    maud_conveniences::{
        cell, fixed_select, form_element, form_submit_button, placeholder_row, render_table,
        select_element, status_badge, title,
    },
};
use maud::{Markup, html};

pub const NO_PAYMENTS: &str = "No payment records";

const PAYMENT_TYPES: [&str; 4] = ["Rent", "Mess Fee", "Security Deposit", "Other"];

pub fn payment_rows(payments: &[Payment]) -> Markup {
    if payments.is_empty() {
        return placeholder_row(6, NO_PAYMENTS);
    }

    html! {
        @for payment in payments {
            tr {
                (cell(&payment.payment_id))
                (cell(&payment.student_id))
                (cell(format_inr(&payment.amount)))
                (cell(&payment.payment_type))
                (cell(format_date(&payment.payment_date)))
                (cell(status_badge("completed", "Completed")))
            }
        }
    }
}

pub fn payments_panel(document: &Document) -> Markup {
    let draft = document.payment_draft();

    html! {
        div class="bg-gray-800 p-6 rounded shadow-md mb-6" {
            (title("Record Payment"))
            form id="paymentForm" hx-post="/payments" class="grid grid-cols-1 md:grid-cols-2 gap-x-4" {
                (select_element(Region::PaymentStudentSelect.element_id(), "student_id", "Student", document.region(Region::PaymentStudentSelect)))
                (form_element("amount", "Amount (₹)", "number", &draft.amount))
                (form_element("payment_date", "Payment Date", "date", &draft.payment_date))
                (fixed_select("payment_type", "Payment Type", &PAYMENT_TYPES, &draft.payment_type))
                (form_submit_button("Record Payment"))
            }
        }
        (render_table(
            Region::PaymentsTable.element_id(),
            ["Payment ID", "Student ID", "Amount", "Type", "Date", "Status"],
            document.region(Region::PaymentsTable),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rows_format_money_and_dates() {
        let payments: Vec<Payment> = serde_json::from_value(json!([
            {"payment_id": 1, "student_id": "S1", "amount": "1,500.50", "payment_type": "Rent", "payment_date": "2024-01-05"},
            {"payment_id": 2, "student_id": "S2", "amount": null}
        ]))
        .unwrap();

        let markup = payment_rows(&payments).into_string();
        assert_eq!(markup.matches("<tr>").count(), 2);
        assert!(markup.contains("₹1500.50"));
        assert!(markup.contains("Jan 5, 2024"));
        assert!(markup.contains("₹0.00"));
        assert_eq!(markup.matches(">Completed</span>").count(), 2);
        assert!(!markup.contains("undefined"));
    }

    #[test]
    fn empty_list_gets_the_placeholder() {
        let markup = payment_rows(&[]).into_string();
        assert!(markup.contains(r#"colspan="6""#));
        assert!(markup.contains(NO_PAYMENTS));
    }
}
