// SPDX-License-Identifier: AGPL-3.0-or-later

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use http::header;
use serde_json::json;

/// Ways an HTTP request can be rejected before it reaches the GraphQL schema.
#[derive(thiserror::Error, Debug)]
pub enum GraphQLHttpError {
    /// GET request without a `query` parameter.
    #[error("Must provide query string.")]
    MissingQuery,

    /// Query string could not be parsed into a GraphQL request.
    #[error("{0}")]
    InvalidRequest(String),

    /// Only queries are executed via GET, other operation types need to come in via POST.
    #[error("Can only perform a {0} operation from a POST request.")]
    OperationNotAllowed(&'static str),
}

impl IntoResponse for GraphQLHttpError {
    fn into_response(self) -> Response {
        // Same shape as errors returned by the schema itself
        let body = Json(json!({
            "errors": [{ "message": self.to_string() }]
        }));

        match self {
            GraphQLHttpError::MissingQuery | GraphQLHttpError::InvalidRequest(_) => {
                (StatusCode::BAD_REQUEST, body).into_response()
            }
            GraphQLHttpError::OperationNotAllowed(_) => (
                StatusCode::METHOD_NOT_ALLOWED,
                [(header::ALLOW, "POST")],
                body,
            )
                .into_response(),
        }
    }
}
