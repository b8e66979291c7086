use crate::{
    data::activity::Activity,
    document::{Document, Region},
    format::format_date,
    maud_conveniences::title,
    section::{SECTIONS, Section},
};
use maud::{Markup, html};

pub const NO_ACTIVITIES: &str = "No recent activities";

pub fn activity_items(activities: &[Activity]) -> Markup {
    if activities.is_empty() {
        return html! { p class="text-gray-400" {(NO_ACTIVITIES)} };
    }

    html! {
        @for activity in activities {
            div class="activity-item flex flex-row items-center space-x-4 py-2 border-b border-gray-700" {
                div class="activity-icon text-xl w-8 text-center" {
                    i class={"fas " (activity.icon())} {}
                }
                div class="activity-content" {
                    h4 class="font-semibold" {(activity.title)}
                    p class="text-sm text-gray-400" {(activity.description) " • " (format_date(&activity.date))}
                }
            }
        }
    }
}

fn stat_card(id: &str, label: &str, icon: &str, value: u64) -> Markup {
    html! {
        div class="stat-card bg-gray-800 p-4 rounded shadow-md flex flex-row items-center space-x-4" {
            i class={"fas " (icon) " text-3xl text-blue-400"} {}
            div {
                h3 id=(id) class="text-2xl font-bold" {(value)}
                p class="text-gray-400" {(label)}
            }
        }
    }
}

pub fn dashboard_panel(document: &Document) -> Markup {
    let counters = document.counters();

    html! {
        (title("Dashboard"))
        div id=(Region::DashboardCounters.element_id()) class="grid grid-cols-2 md:grid-cols-4 gap-4 mb-6" {
            (stat_card("totalStudents", "Total Students", "fa-user-graduate", counters.total_students))
            (stat_card("totalRooms", "Total Rooms", "fa-bed", counters.total_rooms))
            (stat_card("availableRooms", "Available Rooms", "fa-door-open", counters.available_rooms))
            (stat_card("pendingComplaints", "Pending Complaints", "fa-exclamation-circle", counters.pending_complaints))
        }
        div class="grid grid-cols-2 md:grid-cols-4 gap-4 mb-6" {
            @for entry in SECTIONS.iter().filter(|entry| entry.section != Section::Dashboard) {
                a class="action-card bg-gray-800 hover:bg-gray-700 p-4 rounded shadow-md text-center cursor-pointer" data-section=(entry.panel_id) hx-get={"/section/" (entry.panel_id)} {
                    i class={"fas " (entry.icon) " text-2xl mb-2"} {}
                    p {(entry.label)}
                }
            }
        }
        div class="bg-gray-800 p-6 rounded shadow-md" {
            h2 class="text-xl font-semibold mb-4" {"Recent Activities"}
            div id=(Region::ActivityList.element_id()) {
                (document.region(Region::ActivityList))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::dashboard::DashboardCounters;
    use serde_json::json;

    #[test]
    fn activities_show_icon_title_and_date() {
        let activities: Vec<Activity> = serde_json::from_value(json!([
            {"type": "payment", "title": "Rent paid", "description": "S1 paid rent", "date": "2024-03-10T09:30:00Z"},
            {"title": "Something else"}
        ]))
        .unwrap();

        let markup = activity_items(&activities).into_string();
        assert_eq!(markup.matches("activity-item").count(), 2);
        assert!(markup.contains("fas fa-money-bill-wave"));
        assert!(markup.contains("fas fa-bell"));
        assert!(markup.contains("S1 paid rent • Mar 10, 2024"));
        assert!(markup.contains("- • -"));
    }

    #[test]
    fn no_activities_gets_the_placeholder() {
        assert_eq!(
            activity_items(&[]).into_string(),
            format!(r#"<p class="text-gray-400">{NO_ACTIVITIES}</p>"#)
        );
    }

    #[test]
    fn counters_land_on_their_ids() {
        let mut document = Document::default();
        document.set_counters(DashboardCounters {
            total_students: 12,
            total_rooms: 8,
            available_rooms: 3,
            pending_complaints: 2,
        });

        let markup = dashboard_panel(&document).into_string();
        assert!(markup.contains(r#"<h3 id="totalStudents" class="text-2xl font-bold">12</h3>"#));
        assert!(markup.contains(r#"<h3 id="availableRooms" class="text-2xl font-bold">3</h3>"#));
        assert!(markup.contains(r#"<h3 id="pendingComplaints" class="text-2xl font-bold">2</h3>"#));
        assert_eq!(markup.matches("action-card").count(), 4);
        assert!(markup.contains(r#"hx-get="/section/payments""#));
    }
}
