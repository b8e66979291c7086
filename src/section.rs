use crate::{
    controller::ViewController,
    error::{UnknownSectionSnafu, WardenError},
};
use futures::{FutureExt, future::BoxFuture};
use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Dashboard,
    Students,
    Rooms,
    Payments,
    Complaints,
}

pub type Reload = for<'a> fn(&'a ViewController) -> BoxFuture<'a, ()>;

///Everything the page needs to know about a section: where it lives, what it's called, and what
///has to be fetched when it is shown.
pub struct SectionEntry {
    pub section: Section,
    pub panel_id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub reload: Reload,
}

pub static SECTIONS: [SectionEntry; 5] = [
    SectionEntry {
        section: Section::Dashboard,
        panel_id: "dashboard",
        label: "Dashboard",
        icon: "fa-tachometer-alt",
        reload: reload_dashboard,
    },
    SectionEntry {
        section: Section::Students,
        panel_id: "students",
        label: "Students",
        icon: "fa-user-graduate",
        reload: reload_students,
    },
    SectionEntry {
        section: Section::Rooms,
        panel_id: "rooms",
        label: "Rooms",
        icon: "fa-bed",
        reload: reload_rooms,
    },
    SectionEntry {
        section: Section::Payments,
        panel_id: "payments",
        label: "Payments",
        icon: "fa-money-bill-wave",
        reload: reload_payments,
    },
    SectionEntry {
        section: Section::Complaints,
        panel_id: "complaints",
        label: "Complaints",
        icon: "fa-comments",
        reload: reload_complaints,
    },
];

fn reload_dashboard(controller: &ViewController) -> BoxFuture<'_, ()> {
    controller.load_dashboard().boxed()
}

fn reload_students(controller: &ViewController) -> BoxFuture<'_, ()> {
    controller.load_students().boxed()
}

fn reload_rooms(controller: &ViewController) -> BoxFuture<'_, ()> {
    controller.load_rooms().boxed()
}

//the payment and complaint forms need the student dropdowns filled before their tables
fn reload_payments(controller: &ViewController) -> BoxFuture<'_, ()> {
    async move {
        controller.load_students_for_selection().await;
        controller.load_payments().await;
    }
    .boxed()
}

fn reload_complaints(controller: &ViewController) -> BoxFuture<'_, ()> {
    async move {
        controller.load_students_for_selection().await;
        controller.load_complaints().await;
    }
    .boxed()
}

impl Section {
    pub fn entry(self) -> &'static SectionEntry {
        SECTIONS
            .iter()
            .find(|entry| entry.section == self)
            .unwrap_or(&SECTIONS[0])
    }

    pub fn panel_id(self) -> &'static str {
        self.entry().panel_id
    }
}

impl FromStr for Section {
    type Err = WardenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SECTIONS
            .iter()
            .find(|entry| entry.panel_id == s)
            .map(|entry| entry.section)
            .ok_or_else(|| UnknownSectionSnafu { name: s }.build())
    }
}

impl Display for Section {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.panel_id())
    }
}
