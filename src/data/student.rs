use crate::{coerce::parse_int, data::Text};
use serde::{Deserialize, Serialize};
use serde_json::Number;

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Student {
    pub student_id: Text,
    pub name: Text,
    pub age: Text,
    pub gender: Text,
    pub contact: Text,
    pub room_no: Text,
}

///What the registration form submits, kept verbatim as the form draft.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct NewStudentForm {
    pub student_id: String,
    pub name: String,
    pub age: String,
    pub gender: String,
    pub contact: String,
    pub room_no: String,
}

///Registration body sent to `POST /students`.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct NewStudent {
    pub student_id: String,
    pub name: String,
    pub age: Option<Number>,
    pub gender: String,
    pub contact: String,
    pub room_no: String,
}

impl From<&NewStudentForm> for NewStudent {
    fn from(form: &NewStudentForm) -> Self {
        Self {
            student_id: form.student_id.clone(),
            name: form.name.clone(),
            age: parse_int(&form.age),
            gender: form.gender.clone(),
            contact: form.contact.clone(),
            room_no: form.room_no.clone(),
        }
    }
}

///The edit dialog, where a blank field means "keep the current value".
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct EditStudentForm {
    pub name: String,
    pub age: String,
    pub contact: String,
    pub room_no: String,
}

///Partial update sent to `PUT /students/{id}`.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct StudentPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    ///Outer `None` leaves the age alone, an inner `None` is a typed age with no number in it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<Option<Number>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_no: Option<String>,
}

impl StudentPatch {
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.age.is_none() && self.contact.is_none() && self.room_no.is_none()
    }
}

impl From<&EditStudentForm> for StudentPatch {
    fn from(form: &EditStudentForm) -> Self {
        let non_blank = |s: &str| (!s.is_empty()).then(|| s.to_string());

        Self {
            name: non_blank(&form.name),
            age: (!form.age.is_empty()).then(|| parse_int(&form.age)),
            contact: non_blank(&form.contact),
            room_no: non_blank(&form.room_no),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn registration_coerces_age() {
        let form = NewStudentForm {
            student_id: "S1".into(),
            name: "Asha".into(),
            age: "19".into(),
            gender: "Female".into(),
            contact: "98765".into(),
            room_no: "101".into(),
        };

        let body = serde_json::to_value(NewStudent::from(&form)).unwrap();
        assert_eq!(body["age"], json!(19));
        assert_eq!(body["room_no"], json!("101"));
    }

    #[test]
    fn unparsable_age_is_sent_as_null() {
        let form = NewStudentForm {
            age: "nineteen".into(),
            ..Default::default()
        };

        let body = serde_json::to_value(NewStudent::from(&form)).unwrap();
        assert_eq!(body["age"], json!(null));
    }

    #[test]
    fn patch_only_carries_filled_in_fields() {
        let patch = StudentPatch::from(&EditStudentForm {
            name: String::new(),
            age: "22".into(),
            contact: String::new(),
            room_no: "B-12".into(),
        });

        assert_eq!(
            serde_json::to_value(&patch).unwrap(),
            json!({"age": 22, "room_no": "B-12"})
        );
        assert!(StudentPatch::from(&EditStudentForm::default()).is_empty());
    }

    #[test]
    fn typed_but_unparsable_age_is_patched_to_null() {
        let patch = StudentPatch::from(&EditStudentForm {
            age: "abc".into(),
            ..Default::default()
        });

        assert!(!patch.is_empty());
        assert_eq!(serde_json::to_value(&patch).unwrap(), json!({"age": null}));
    }
}
