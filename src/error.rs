use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use maud::html;
use snafu::Snafu;
use std::{net::AddrParseError, num::ParseIntError, path::PathBuf};

pub type WardenResult<T> = Result<T, WardenError>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum WardenError {
    #[snafu(display("Unable to retrieve env var `{}`", name))]
    BadEnvVar {
        source: dotenvy::Error,
        name: &'static str,
    },
    #[snafu(display("Unable to parse `{}` as a number of milliseconds", original))]
    ParseDuration {
        source: ParseIntError,
        original: String,
    },
    #[snafu(display("Unable to parse `{}` as a socket address", original))]
    ParseAddr {
        source: AddrParseError,
        original: String,
    },
    #[snafu(display("Unable to build the HTTP client"))]
    BuildClient { source: reqwest::Error },
    #[snafu(display("Error connecting to {}", endpoint))]
    Transport {
        source: reqwest::Error,
        endpoint: String,
    },
    #[snafu(display("{} returned {}: {}", endpoint, status, message))]
    Status {
        endpoint: String,
        status: u16,
        message: String,
    },
    #[snafu(display("Error serialising request body for {}", endpoint))]
    EncodeBody {
        source: serde_json::Error,
        endpoint: String,
    },
    #[snafu(display("Unexpected response shape from {}", endpoint))]
    DecodeBody {
        source: serde_json::Error,
        endpoint: String,
    },
    #[snafu(display("Unable to read the session file at {:?}", path))]
    ReadSession {
        source: std::io::Error,
        path: PathBuf,
    },
    #[snafu(display("Unable to write the session file at {:?}", path))]
    WriteSession {
        source: std::io::Error,
        path: PathBuf,
    },
    #[snafu(display("Error serialising with rmp_serde"))]
    RmpSerdeEncode { source: rmp_serde::encode::Error },
    #[snafu(display("Error deserialising with rmp_serde"))]
    RmpSerdeDecode { source: rmp_serde::decode::Error },
    #[snafu(display("Error talking to the terminal"))]
    Terminal { source: std::io::Error },
    #[snafu(display("Unknown section `{}`", name))]
    UnknownSection { name: String },
}

impl IntoResponse for WardenError {
    #[allow(clippy::match_same_arms)]
    fn into_response(self) -> Response {
        const ISE: StatusCode = StatusCode::INTERNAL_SERVER_ERROR; //internal server error
        const NF: StatusCode = StatusCode::NOT_FOUND; //not found
        const BG: StatusCode = StatusCode::BAD_GATEWAY; //backend misbehaved

        let basic_error = |desc| {
            html! {
                div class="bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded relative mb-4" role="alert" {
                    strong class="font-bold" {"Warden Error"}
                    span {(desc)}
                }
            }
        };

        let status_code = match &self {
            Self::BadEnvVar { .. } | Self::ParseDuration { .. } | Self::ParseAddr { .. } => ISE,
            Self::BuildClient { .. } => ISE,
            Self::Transport { .. } | Self::Status { .. } | Self::DecodeBody { .. } => BG,
            Self::EncodeBody { .. } => ISE,
            Self::ReadSession { .. } | Self::WriteSession { .. } => ISE,
            Self::RmpSerdeEncode { .. } | Self::RmpSerdeDecode { .. } => ISE,
            Self::Terminal { .. } => ISE,
            Self::UnknownSection { .. } => NF,
        };

        error!(?self, "Error!");
        (status_code, Html(basic_error(self.to_string()))).into_response()
    }
}
