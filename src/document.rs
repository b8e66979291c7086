//! The view state.
//!
//! Everything visible on the page lives here, and the page is always rendered from a
//! `Document` by [`crate::views::page::render_app`]. Loaders and handlers only ever write to it.

use crate::{
    chat::ChatPanel,
    data::{
        complaint::NewComplaint, dashboard::DashboardCounters, payment::NewPaymentForm,
        student::NewStudentForm, user::SessionUser,
    },
    notify::Toast,
    section::Section,
};
use maud::{Markup, PreEscaped};
use std::collections::HashMap;
use uuid::Uuid;

///Parts of the page that a loader rewrites wholesale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    DashboardCounters,
    ActivityList,
    StudentsTable,
    RoomsTable,
    PaymentsTable,
    ComplaintsTable,
    StudentRoomSelect,
    PaymentStudentSelect,
    ComplaintStudentSelect,
}

impl Region {
    pub const fn element_id(self) -> &'static str {
        match self {
            Self::DashboardCounters => "dashboardStats",
            Self::ActivityList => "activityList",
            Self::StudentsTable => "studentsTable",
            Self::RoomsTable => "roomsTable",
            Self::PaymentsTable => "paymentsTable",
            Self::ComplaintsTable => "complaintsTable",
            Self::StudentRoomSelect => "studentRoom",
            Self::PaymentStudentSelect => "paymentStudent",
            Self::ComplaintStudentSelect => "complaintStudent",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    Login,
    Register,
    EditStudent { student_id: String },
}

#[derive(Debug, Default)]
pub struct Document {
    section: Section,
    regions: HashMap<Region, Markup>,
    renders: HashMap<Region, usize>,
    counters: DashboardCounters,
    toasts: Vec<Toast>,
    chat: ChatPanel,
    user: Option<SessionUser>,
    modal: Option<Modal>,
    student_draft: NewStudentForm,
    payment_draft: NewPaymentForm,
    complaint_draft: NewComplaint,
}

impl Document {
    pub const fn section(&self) -> Section {
        self.section
    }

    pub const fn set_section(&mut self, section: Section) {
        self.section = section;
    }

    pub fn set_region(&mut self, region: Region, markup: Markup) {
        self.regions.insert(region, markup);
        *self.renders.entry(region).or_default() += 1;
    }

    pub fn region(&self, region: Region) -> PreEscaped<&str> {
        PreEscaped(self.regions.get(&region).map_or("", |markup| markup.0.as_str()))
    }

    ///How many times `region` has been written since startup.
    #[cfg(test)]
    pub fn render_count(&self, region: Region) -> usize {
        self.renders.get(&region).copied().unwrap_or(0)
    }

    pub const fn counters(&self) -> DashboardCounters {
        self.counters
    }

    pub fn set_counters(&mut self, counters: DashboardCounters) {
        self.counters = counters;
        *self.renders.entry(Region::DashboardCounters).or_default() += 1;
    }

    pub fn push_toast(&mut self, toast: Toast) {
        self.toasts.push(toast);
    }

    ///Returns whether the toast was still showing.
    pub fn dismiss_toast(&mut self, id: Uuid) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id != id);
        self.toasts.len() != before
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub const fn chat(&self) -> &ChatPanel {
        &self.chat
    }

    pub const fn chat_mut(&mut self) -> &mut ChatPanel {
        &mut self.chat
    }

    pub const fn user(&self) -> Option<&SessionUser> {
        self.user.as_ref()
    }

    pub fn set_user(&mut self, user: Option<SessionUser>) {
        self.user = user;
    }

    #[cfg(test)]
    pub const fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    pub const fn modal(&self) -> Option<&Modal> {
        self.modal.as_ref()
    }

    pub fn open_modal(&mut self, modal: Modal) {
        self.modal = Some(modal);
    }

    pub fn close_modal(&mut self) {
        self.modal = None;
    }

    pub const fn student_draft(&self) -> &NewStudentForm {
        &self.student_draft
    }

    pub fn set_student_draft(&mut self, draft: NewStudentForm) {
        self.student_draft = draft;
    }

    pub const fn payment_draft(&self) -> &NewPaymentForm {
        &self.payment_draft
    }

    pub fn set_payment_draft(&mut self, draft: NewPaymentForm) {
        self.payment_draft = draft;
    }

    pub const fn complaint_draft(&self) -> &NewComplaint {
        &self.complaint_draft
    }

    pub fn set_complaint_draft(&mut self, draft: NewComplaint) {
        self.complaint_draft = draft;
    }
}
