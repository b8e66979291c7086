use crate::{coerce::parse_float, data::Text};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Payment {
    pub payment_id: Text,
    pub student_id: Text,
    ///kept raw, see [`crate::format::format_inr`]
    pub amount: Value,
    pub payment_type: Text,
    pub payment_date: Text,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct NewPaymentForm {
    pub student_id: String,
    pub amount: String,
    pub payment_date: String,
    pub payment_type: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct NewPayment {
    pub student_id: String,
    pub amount: Option<f64>,
    pub payment_date: String,
    pub payment_type: String,
}

impl From<&NewPaymentForm> for NewPayment {
    fn from(form: &NewPaymentForm) -> Self {
        Self {
            student_id: form.student_id.clone(),
            amount: parse_float(&form.amount),
            payment_date: form.payment_date.clone(),
            payment_type: form.payment_type.clone(),
        }
    }
}
