use crate::{
    api::is_truthy,
    data::{complaint::Complaint, room::Room, student::Student},
};
use serde_json::Value;

///The four numbers across the top of the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardCounters {
    pub total_students: u64,
    pub total_rooms: u64,
    pub available_rooms: u64,
    pub pending_complaints: u64,
}

impl DashboardCounters {
    ///Reads the pre-aggregated `/dashboard` object, which may use either camelCase or snake_case
    ///keys. The first truthy spelling wins and anything missing is `0`.
    pub fn from_summary(summary: &Value) -> Self {
        let pick = |camel: &str, snake: &str| {
            [camel, snake]
                .into_iter()
                .filter_map(|key| summary.get(key))
                .find(|value| is_truthy(value))
                .and_then(count_of)
                .unwrap_or(0)
        };

        Self {
            total_students: pick("totalStudents", "total_students"),
            total_rooms: pick("totalRooms", "total_rooms"),
            available_rooms: pick("availableRooms", "available_rooms"),
            pending_complaints: pick("pendingComplaints", "pending_complaints"),
        }
    }

    pub fn recount_students(&mut self, students: &[Student]) {
        self.total_students = students.len() as u64;
    }

    pub fn recount_rooms(&mut self, rooms: &[Room]) {
        self.total_rooms = rooms.len() as u64;
        self.available_rooms = rooms.iter().filter(|room| room.is_available()).count() as u64;
    }

    pub fn recount_complaints(&mut self, complaints: &[Complaint]) {
        self.pending_complaints = complaints
            .iter()
            .filter(|complaint| complaint.is_pending())
            .count() as u64;
    }
}

fn count_of(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64().or_else(|| n.as_f64().map(|f| f.max(0.0) as u64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
