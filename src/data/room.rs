use crate::data::Text;
use serde::{Deserialize, Serialize};

pub const AVAILABLE: &str = "Available";

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Room {
    pub room_no: Text,
    #[serde(rename = "type")]
    pub kind: Text,
    pub capacity: Text,
    pub availability: Text,
    pub occupied_by: Text,
}

impl Room {
    pub fn is_available(&self) -> bool {
        self.availability.is(AVAILABLE)
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Allocation {
    pub student_id: String,
    pub room_no: String,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Vacate {
    pub room_no: String,
}
