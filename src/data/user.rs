use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

///Whatever the backend hands back as `user` on login. Only the username is shown, the rest is
///kept so that the stored copy matches what the backend sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    #[serde(default)]
    pub username: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SessionUser {
    pub fn named(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            extra: Map::new(),
        }
    }

    pub fn greeting(&self) -> String {
        format!("Welcome, {}", self.username)
    }
}
