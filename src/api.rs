//! JSON-over-HTTP access to the hostel backend.
//!
//! [`ApiClient::send`] reports every failure as a [`WardenError`]. The controller's
//! `api_call` is the only caller, and it is what turns those errors into notifications and an
//! [`ApiOutcome::Failed`].

use crate::{
    config::BackendConfig,
    error::{
        BuildClientSnafu, DecodeBodySnafu, EncodeBodySnafu, StatusSnafu, TransportSnafu,
        WardenResult,
    },
};
use reqwest::{
    Client, Method,
    header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue},
};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use snafu::ResultExt;
use std::sync::Arc;

pub const FALLBACK_ERROR_MESSAGE: &str = "Request failed";

#[derive(Debug)]
pub struct ApiRequest {
    method: Method,
    headers: HeaderMap,
    body: Option<serde_json::Result<Value>>,
}

impl ApiRequest {
    pub fn new(method: Method) -> Self {
        Self {
            method,
            headers: HeaderMap::new(),
            body: None,
        }
    }

    pub fn get() -> Self {
        Self::new(Method::GET)
    }

    pub fn post() -> Self {
        Self::new(Method::POST)
    }

    pub fn put() -> Self {
        Self::new(Method::PUT)
    }

    pub fn delete() -> Self {
        Self::new(Method::DELETE)
    }

    ///Serialisation problems surface when the request is sent, as an `EncodeBody` error.
    #[must_use]
    pub fn json(mut self, body: &impl Serialize) -> Self {
        self.body = Some(serde_json::to_value(body));
        self
    }

    ///Caller headers win over the default `Content-Type`.
    #[must_use]
    #[allow(dead_code)]
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    config: Arc<BackendConfig>,
}

impl ApiClient {
    pub fn new(config: Arc<BackendConfig>) -> WardenResult<Self> {
        let client = Client::builder().build().context(BuildClientSnafu)?;
        Ok(Self { client, config })
    }

    ///`Ok(None)` is a successful response with an empty (or non-JSON) body.
    pub async fn send(&self, endpoint: &str, request: ApiRequest) -> WardenResult<Option<Value>> {
        let ApiRequest {
            method,
            headers,
            body,
        } = request;

        let mut all_headers = HeaderMap::new();
        all_headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        all_headers.extend(headers);

        let mut builder = self
            .client
            .request(method, self.config.url_for(endpoint))
            .headers(all_headers);
        if let Some(body) = body.transpose().context(EncodeBodySnafu { endpoint })? {
            builder = builder.json(&body);
        }

        let response = builder.send().await.context(TransportSnafu { endpoint })?;
        let status = response.status();
        let text = response.text().await.context(TransportSnafu { endpoint })?;

        let data = if text.trim().is_empty() {
            None
        } else {
            serde_json::from_str::<Value>(&text).ok()
        };

        if !status.is_success() {
            let message = data
                .as_ref()
                .and_then(|data| {
                    ["error", "message"]
                        .into_iter()
                        .find_map(|key| data.get(key).and_then(truthy_text))
                })
                .or_else(|| status.canonical_reason().map(ToString::to_string))
                .unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string());

            return StatusSnafu {
                endpoint,
                status: status.as_u16(),
                message,
            }
            .fail();
        }

        Ok(data)
    }
}

///What a call to the backend came to.
///
///Browser-style handlers only care about [`ApiOutcome::is_truthy`], where `Empty` and `Failed`
///look the same; the distinction is there for the handlers that want it.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiOutcome {
    Data(Value),
    Empty,
    Failed,
}

impl ApiOutcome {
    pub fn is_truthy(&self) -> bool {
        matches!(self, Self::Data(value) if is_truthy(value))
    }

    pub const fn is_success(&self) -> bool {
        !matches!(self, Self::Failed)
    }

    pub const fn data(&self) -> Option<&Value> {
        match self {
            Self::Data(value) => Some(value),
            _ => None,
        }
    }

    ///`Some` only if the backend sent a JSON array whose items all decode as `T`.
    pub fn records<T: DeserializeOwned>(self, endpoint: &str) -> Option<Vec<T>> {
        let Self::Data(value @ Value::Array(_)) = self else {
            return None;
        };

        match serde_json::from_value(value).context(DecodeBodySnafu { endpoint }) {
            Ok(records) => Some(records),
            Err(e) => {
                warn!(?e, endpoint, "Unable to decode list");
                None
            }
        }
    }
}

///Truthiness the way the markup layer has always seen it: `null`, `false`, `0`, and `""` are
///falsy, everything else (including empty arrays and objects) is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

///The text of a truthy value, for pulling messages out of response bodies.
pub fn truthy_text(value: &Value) -> Option<String> {
    if !is_truthy(value) {
        return None;
    }

    Some(match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    })
}
