use maud::{Markup, Render, html};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt::{Display, Formatter};

pub mod activity;
pub mod complaint;
pub mod dashboard;
pub mod payment;
pub mod room;
pub mod student;
pub mod user;

///A backend field rendered as text, whatever JSON type it arrived as.
///
///The backend is free to send ids and numbers as either strings or numbers, and to omit fields
///entirely, so every displayed field goes through this instead of a concrete type. Missing and
///`null` values render as `-`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Text(Option<String>);

impl Text {
    pub const MISSING: &'static str = "-";

    #[cfg(test)]
    pub fn new(s: impl Into<String>) -> Self {
        Self(Some(s.into()))
    }

    pub fn as_str(&self) -> Option<&str> {
        self.0.as_deref()
    }

    pub fn display(&self) -> &str {
        self.as_str().unwrap_or(Self::MISSING)
    }

    pub fn is(&self, expected: &str) -> bool {
        self.as_str() == Some(expected)
    }
}

impl From<&Value> for Text {
    fn from(value: &Value) -> Self {
        Self(match value {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(match n.as_f64() {
                //whole floats print like the browser would, so `21.0` shows as `21`
                Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => {
                    format!("{}", f as i64)
                }
                _ => n.to_string(),
            }),
            other => Some(other.to_string()),
        })
    }
}

impl<'de> Deserialize<'de> for Text {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from(&value))
    }
}

impl Display for Text {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

impl Render for Text {
    fn render(&self) -> Markup {
        html! { (self.display()) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn text_accepts_any_scalar() {
        assert_eq!(Text::from(&json!("S1")).display(), "S1");
        assert_eq!(Text::from(&json!(101)).display(), "101");
        assert_eq!(Text::from(&json!(21.0)).display(), "21");
        assert_eq!(Text::from(&json!(2.5)).display(), "2.5");
        assert_eq!(Text::from(&json!(true)).display(), "true");
        assert_eq!(Text::from(&json!(null)).display(), "-");
    }

    #[test]
    fn missing_fields_default_to_dash() {
        #[derive(Deserialize)]
        struct Row {
            #[serde(default)]
            present: Text,
            #[serde(default)]
            absent: Text,
        }

        let row: Row = serde_json::from_value(json!({"present": "yes"})).unwrap();
        assert_eq!(row.present.display(), "yes");
        assert_eq!(row.absent.display(), "-");
        assert_eq!(row.absent.as_str(), None);
    }

    #[test]
    fn rendering_escapes_markup() {
        let text = Text::new("<b>bold</b>");
        assert_eq!(text.render().into_string(), "&lt;b&gt;bold&lt;/b&gt;");
    }
}
