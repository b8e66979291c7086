use crate::{
    data::user::SessionUser,
    document::Document,
    section::{SECTIONS, Section},
    views::{
        chat::chat_widget, complaints::complaints_panel, dashboard::dashboard_panel,
        modals::modal, payments::payments_panel, rooms::rooms_panel, students::students_panel,
        toasts::toast_stack,
    },
};
use maud::{DOCTYPE, Markup, html};
use std::time::Duration;

const HIDDEN: &str = "display: none";

///The whole page, for a full load of `/`.
pub fn render_page(document: &Document, toast_ttl: Duration) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="UTF-8" {}
                meta name="viewport" content="width=device-width, initial-scale=1.0" {}
                script src="https://unpkg.com/htmx.org@2.0.4" integrity="sha384-HGfztofotfshcF7+8n44JQL2oJmowVChPTg48S+jvZoztPfvwD79OC/LTtG6dMp+" crossorigin="anonymous" {}
                script src="https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4" {}
                link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css" {}
                title { "Hostel Management" }
            }
            body class="bg-gray-900 min-h-screen text-white" {
                (render_app(document, toast_ttl))
            }
        }
    }
}

///Everything under `#app`. Every interaction swaps this out wholesale, apart from toast
///dismissal, which only touches `#toasts`.
pub fn render_app(document: &Document, toast_ttl: Duration) -> Markup {
    html! {
        div id="app" hx-target="#app" hx-swap="outerHTML" class="flex flex-row min-h-screen" {
            (render_nav(document.section()))
            div class="flex-1 flex flex-col" {
                (render_header(document.user()))
                main class="p-8" {
                    @for entry in &SECTIONS {
                        @let active = entry.section == document.section();
                        section id=(entry.panel_id) class=(if active { "section active" } else { "section" }) style=[(!active).then_some(HIDDEN)] {
                            (render_panel(entry.section, document))
                        }
                    }
                }
            }
            (chat_widget(document.chat()))
            (toast_stack(document.toasts(), toast_ttl))
            (modal(document.modal()))
        }
    }
}

fn render_panel(section: Section, document: &Document) -> Markup {
    match section {
        Section::Dashboard => dashboard_panel(document),
        Section::Students => students_panel(document),
        Section::Rooms => rooms_panel(document),
        Section::Payments => payments_panel(document),
        Section::Complaints => complaints_panel(document),
    }
}

pub fn render_nav(current: Section) -> Markup {
    html! {
        nav class="w-60 bg-gray-800 p-4 flex flex-col space-y-2" {
            h2 class="text-xl font-bold mb-4" {
                i class="fas fa-building mr-2" {}
                "Hostel Manager"
            }
            @for entry in &SECTIONS {
                @let class = if entry.section == current {
                    "nav-link active bg-slate-600 py-2 px-4 rounded"
                } else {
                    "nav-link hover:bg-slate-700 py-2 px-4 rounded"
                };
                a href={"#" (entry.panel_id)} data-section=(entry.panel_id) hx-get={"/section/" (entry.panel_id)} class=(class) {
                    i class={"fas " (entry.icon) " mr-2"} {}
                    (entry.label)
                }
            }
        }
    }
}

///The logged-in/logged-out affordances. Both sets are always rendered, only visibility changes.
pub fn render_header(user: Option<&SessionUser>) -> Markup {
    let logged_in = user.is_some();
    let hidden_when_logged_in = logged_in.then_some(HIDDEN);
    let hidden_when_logged_out = (!logged_in).then_some(HIDDEN);

    html! {
        header class="flex flex-row justify-end items-center space-x-4 p-4 bg-gray-800 shadow-md" {
            span id="userInfo" style=[hidden_when_logged_out] {
                @if let Some(user) = user {
                    (user.greeting())
                }
            }
            button id="loginBtn" hx-get="/login" style=[hidden_when_logged_in] class="bg-blue-600 hover:bg-blue-800 font-bold py-2 px-4 rounded" {"Login"}
            button id="registerBtn" hx-get="/register" style=[hidden_when_logged_in] class="bg-slate-600 hover:bg-slate-800 font-bold py-2 px-4 rounded" {"Register"}
            button id="logoutBtn" hx-post="/logout" style=[hidden_when_logged_out] class="bg-red-600 hover:bg-red-800 font-bold py-2 px-4 rounded" {"Logout"}
        }
    }
}
