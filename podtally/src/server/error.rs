use std::{collections::BTreeMap, net::SocketAddr};

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use podtally_inventory::{ParseSortDirectionError, ParseSortKeyError};
use snafu::Snafu;

/// Errors raised while starting or running the HTTP server.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("Failed to register metric {metric}, error: {source}"))]
    RegisterMetric { metric: String, source: prometheus::Error },

    #[snafu(display("Failed to bind HTTP server to {socket_address}, error: {source}"))]
    BindHttpServer { socket_address: SocketAddr, source: std::io::Error },

    #[snafu(display("HTTP server on {socket_address} stopped unexpectedly, error: {source}"))]
    RunHttpServer { socket_address: SocketAddr, source: std::io::Error },
}

/// Errors answered to HTTP clients.
///
/// Caller mistakes map to `400 Bad Request`, cluster and encoding failures to
/// `500 Internal Server Error`. The body is a one-field JSON object carrying
/// the display message.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum ApiError {
    #[snafu(display("{source}"))]
    CountPods { source: podtally_inventory::Error },

    #[snafu(display("{source}"))]
    ListPods { source: podtally_inventory::Error },

    #[snafu(display("{source}"))]
    InvalidSortKey { source: ParseSortKeyError },

    #[snafu(display("{source}"))]
    InvalidSortDirection { source: ParseSortDirectionError },

    #[snafu(display("Failed to encode metrics, error: {source}"))]
    EncodeMetrics { source: prometheus::Error },
}

impl ApiError {
    /// The key of the JSON error body; the count endpoint has always used
    /// `error`, every other endpoint `message`.
    const fn body_field(&self) -> &'static str {
        match self {
            Self::CountPods { .. } => "error",
            _ => "message",
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidSortKey { .. } | Self::InvalidSortDirection { .. } => {
                StatusCode::BAD_REQUEST
            }
            Self::CountPods { .. } | Self::ListPods { .. } | Self::EncodeMetrics { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("{self}");
        } else {
            tracing::debug!("Rejected request: {self}");
        }
        HttpResponse::build(status).json(BTreeMap::from([(self.body_field(), self.to_string())]))
    }
}
