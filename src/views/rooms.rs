use crate::{
    data::room::Room,
    document::{Document, Region},
    maud_conveniences::{cell, placeholder_row, render_table, status_badge, title},
};
use maud::{Markup, html};

pub const NO_ROOMS: &str = "No rooms found";

pub fn room_rows(rooms: &[Room]) -> Markup {
    if rooms.is_empty() {
        return placeholder_row(6, NO_ROOMS);
    }

    html! {
        @for room in rooms {
            tr {
                (cell(&room.room_no))
                (cell(&room.kind))
                (cell(&room.capacity))
                (cell(status_badge(
                    if room.is_available() { "available" } else { "occupied" },
                    &room.availability,
                )))
                (cell(&room.occupied_by))
                td class="py-2 px-4 border-b border-gray-600" {
                    @if room.is_available() {
                        button class="btn btn-primary btn-sm bg-blue-600 hover:bg-blue-800 py-1 px-2 rounded" hx-post={"/rooms/" (room.room_no) "/allocate"} hx-prompt="Enter Student ID to allocate:" {
                            "Allocate"
                        }
                    } @else {
                        button class="btn btn-warning btn-sm bg-amber-600 hover:bg-amber-800 py-1 px-2 rounded" hx-post={"/rooms/" (room.room_no) "/vacate"} hx-confirm={"Are you sure you want to vacate room " (room.room_no) "?"} {
                            "Vacate"
                        }
                    }
                }
            }
        }
    }
}

pub fn rooms_panel(document: &Document) -> Markup {
    html! {
        (title("Rooms"))
        (render_table(
            Region::RoomsTable.element_id(),
            ["Room No", "Type", "Capacity", "Status", "Occupied By", "Actions"],
            document.region(Region::RoomsTable),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn availability_picks_the_action() {
        let rooms: Vec<Room> = serde_json::from_value(json!([
            {"room_no": "101", "type": "Single", "capacity": 1, "availability": "Available", "occupied_by": null},
            {"room_no": "102", "type": "Double", "capacity": 2, "availability": "Occupied", "occupied_by": "S1"},
            {"room_no": "103", "type": "Double", "capacity": 2, "availability": "available"}
        ]))
        .unwrap();

        let rows: Vec<String> = rooms
            .iter()
            .map(|room| room_rows(std::slice::from_ref(room)).into_string())
            .collect();

        assert!(rows[0].contains(">Allocate</button>"));
        assert!(!rows[0].contains("Vacate"));
        assert!(rows[0].contains("status-available"));
        assert!(rows[0].contains(">-</td>"));

        assert!(rows[1].contains(">Vacate</button>"));
        assert!(rows[1].contains("vacate room 102?"));
        assert!(rows[1].contains("status-occupied"));

        //the comparison is exact
        assert!(rows[2].contains(">Vacate</button>"));
    }

    #[test]
    fn one_row_per_room() {
        let rooms: Vec<Room> = serde_json::from_value(json!([
            {"room_no": "101", "type": "Single", "availability": "Available"},
            {"room_no": "102", "type": "Double", "availability": "Occupied", "occupied_by": "S1"},
            {"room_no": "103"},
            {"room_no": "104", "type": "Triple", "capacity": 3}
        ]))
        .unwrap();

        let markup = room_rows(&rooms).into_string();
        assert_eq!(markup.matches("<tr>").count(), 4);
        assert!(!markup.contains(NO_ROOMS));
        assert!(!markup.contains("undefined"));
    }

    #[test]
    fn empty_list_gets_the_placeholder() {
        let markup = room_rows(&[]).into_string();
        assert!(markup.contains(r#"colspan="6""#));
        assert!(markup.contains(NO_ROOMS));
    }
}
