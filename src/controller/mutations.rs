use super::ViewController;
use crate::{
    api::ApiRequest,
    data::{
        complaint::NewComplaint,
        payment::{NewPayment, NewPaymentForm},
        room::{Allocation, Vacate},
        student::{EditStudentForm, NewStudent, NewStudentForm, StudentPatch},
    },
    notify::Level,
};

impl ViewController {
    ///The submitted form stays as the draft until the backend accepts it.
    pub async fn register_student(&self, form: NewStudentForm) {
        let body = NewStudent::from(&form);
        self.document.lock().await.set_student_draft(form);

        let outcome = self
            .api_call("/students", ApiRequest::post().json(&body))
            .await;
        if !outcome.is_truthy() {
            return;
        }

        self.notify("Student registered successfully!", Level::Success)
            .await;
        self.document
            .lock()
            .await
            .set_student_draft(NewStudentForm::default());

        futures::join!(
            self.load_students(),
            self.load_dashboard(),
            self.load_rooms_for_selection(),
        );
    }

    ///Blank fields are left alone, and if every field is blank nothing is sent at all.
    pub async fn edit_student(&self, student_id: &str, form: &EditStudentForm) {
        let patch = StudentPatch::from(form);
        if patch.is_empty() {
            self.close_modal().await;
            return;
        }

        let outcome = self
            .api_call(
                &format!("/students/{student_id}"),
                ApiRequest::put().json(&patch),
            )
            .await;
        if !outcome.is_success() {
            return;
        }

        self.close_modal().await;
        self.notify("Student updated successfully", Level::Success)
            .await;
        self.reload_after_student_change().await;
    }

    pub async fn delete_student(&self, student_id: &str) {
        let outcome = self
            .api_call(&format!("/students/{student_id}"), ApiRequest::delete())
            .await;
        if !outcome.is_success() {
            return;
        }

        self.notify("Student deleted successfully", Level::Success)
            .await;
        self.reload_after_student_change().await;
    }

    async fn reload_after_student_change(&self) {
        futures::join!(
            self.load_students(),
            self.load_rooms(),
            self.load_rooms_for_selection(),
            self.load_dashboard(),
        );
    }

    pub async fn allocate_room(&self, room_no: &str, student_id: &str) {
        let student_id = student_id.trim();
        if student_id.is_empty() {
            return;
        }

        let allocation = Allocation {
            student_id: student_id.to_string(),
            room_no: room_no.to_string(),
        };
        let outcome = self
            .api_call("/rooms/allocate", ApiRequest::post().json(&allocation))
            .await;
        if !outcome.is_truthy() {
            return;
        }

        self.notify(
            format!("Room {room_no} allocated to {student_id}"),
            Level::Success,
        )
        .await;
        self.reload_after_room_change().await;
    }

    pub async fn vacate_room(&self, room_no: &str) {
        let vacate = Vacate {
            room_no: room_no.to_string(),
        };
        let outcome = self
            .api_call("/rooms/vacate", ApiRequest::post().json(&vacate))
            .await;
        if !outcome.is_truthy() {
            return;
        }

        self.notify(format!("Room {room_no} vacated"), Level::Success)
            .await;
        self.reload_after_room_change().await;
    }

    async fn reload_after_room_change(&self) {
        futures::join!(
            self.load_rooms(),
            self.load_rooms_for_selection(),
            self.load_students(),
            self.load_dashboard(),
        );
    }

    pub async fn record_payment(&self, form: NewPaymentForm) {
        let body = NewPayment::from(&form);
        self.document.lock().await.set_payment_draft(form);

        let outcome = self
            .api_call("/payments", ApiRequest::post().json(&body))
            .await;
        if !outcome.is_truthy() {
            return;
        }

        self.notify("Payment recorded successfully!", Level::Success)
            .await;
        self.document
            .lock()
            .await
            .set_payment_draft(NewPaymentForm::default());

        futures::join!(self.load_payments(), self.load_dashboard());
    }

    pub async fn submit_complaint(&self, complaint: NewComplaint) {
        let outcome = self
            .api_call("/complaints", ApiRequest::post().json(&complaint))
            .await;
        let accepted = outcome.is_truthy();

        self.document
            .lock()
            .await
            .set_complaint_draft(if accepted {
                NewComplaint::default()
            } else {
                complaint
            });
        if !accepted {
            return;
        }

        self.notify("Complaint submitted successfully!", Level::Success)
            .await;
        futures::join!(self.load_complaints(), self.load_dashboard());
    }

    pub async fn resolve_complaint(&self, complaint_id: &str) {
        let outcome = self
            .api_call(
                &format!("/complaints/{complaint_id}/resolve"),
                ApiRequest::post(),
            )
            .await;
        if !outcome.is_truthy() {
            return;
        }

        self.notify("Complaint marked as resolved", Level::Success)
            .await;
        futures::join!(self.load_complaints(), self.load_dashboard());
    }
}
