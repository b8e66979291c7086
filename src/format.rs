use crate::data::Text;
use jiff::{Timestamp, civil, fmt::rfc2822, tz::TimeZone};
use serde_json::Value;

pub const RUPEE: char = '₹';

///Formats a payment amount as rupees with two decimal places.
///
///Thousands separators and any other non-numeric characters are stripped before parsing. Input
///that still doesn't parse comes back unchanged behind the symbol.
pub fn format_inr(value: &Value) -> String {
    let raw = match value {
        Value::Null => return format!("{RUPEE}0.00"),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };

    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    match cleaned.parse::<f64>() {
        Ok(num) if !cleaned.is_empty() && num.is_finite() => format!("{RUPEE}{num:.2}"),
        _ => format!("{RUPEE}{raw}"),
    }
}

///Formats a backend date as `Jan 5, 2024`, in the zone it was written in.
///
///Accepts ISO dates and datetimes, RFC 3339 timestamps and RFC 2822/HTTP dates (which is what
///most JSON backends emit for datetime columns). Anything else is shown as-is.
pub fn format_date(date: &Text) -> String {
    let Some(raw) = date.as_str() else {
        return Text::MISSING.to_string();
    };

    parse_date(raw.trim()).map_or_else(
        || raw.to_string(),
        |date| date.strftime("%b %-d, %Y").to_string(),
    )
}

fn parse_date(raw: &str) -> Option<civil::Date> {
    if let Ok(ts) = raw.parse::<Timestamp>() {
        return Some(ts.to_zoned(TimeZone::UTC).date());
    }
    if let Ok(dt) = raw.parse::<civil::DateTime>() {
        return Some(dt.date());
    }
    if let Ok(date) = raw.parse::<civil::Date>() {
        return Some(date);
    }
    rfc2822::parse(raw).ok().map(|zoned| zoned.date())
}
