use crate::data::Text;
use serde::{Deserialize, Serialize};

pub const PENDING: &str = "Pending";
pub const RESOLVED: &str = "Resolved";

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Complaint {
    pub complaint_id: Text,
    pub student_id: Text,
    pub issue_type: Text,
    pub description: Text,
    pub complaint_date: Text,
    pub status: Text,
}

impl Complaint {
    pub fn is_pending(&self) -> bool {
        self.status.is(PENDING)
    }

    pub fn is_resolved(&self) -> bool {
        self.status.is(RESOLVED)
    }
}

///Both the form draft and the `POST /complaints` body, there's nothing to coerce.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct NewComplaint {
    pub student_id: String,
    pub issue_type: String,
    pub description: String,
}
