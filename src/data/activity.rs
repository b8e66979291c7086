use crate::data::Text;
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Activity {
    #[serde(rename = "type")]
    pub kind: Text,
    pub title: Text,
    pub description: Text,
    pub date: Text,
}

impl Activity {
    ///font-awesome icon for the feed
    pub fn icon(&self) -> &'static str {
        match self.kind.as_str() {
            Some("registration") => "fa-user-plus",
            Some("payment") => "fa-money-bill-wave",
            Some("complaint") => "fa-comments",
            Some("room") => "fa-bed",
            _ => "fa-bell",
        }
    }
}
