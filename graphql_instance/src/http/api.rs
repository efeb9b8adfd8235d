// SPDX-License-Identifier: AGPL-3.0-or-later

use std::collections::HashMap;

use async_graphql::http::{parse_query_string, GraphiQLSource};
use async_graphql::parser::parse_query;
use async_graphql::parser::types::{DocumentOperations, OperationType};
use async_graphql::Request;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::extract::{Extension, Query, RawQuery};
use axum::http::HeaderMap;
use axum::response::{self, IntoResponse, Response};
use http::header;
use log::debug;
use mediatype::{MediaType, MediaTypeList};

use crate::graphql::GraphQLExecutor;
use crate::http::context::HttpServiceContext;
use crate::http::errors::GraphQLHttpError;

/// Handle GraphQL requests sent via POST.
pub async fn handle_graphql_query<E, R>(
    Extension(context): Extension<HttpServiceContext<E, R>>,
    req: GraphQLRequest,
) -> GraphQLResponse
where
    E: GraphQLExecutor,
    R: Send + Sync + 'static,
{
    context.handler.execute(req.into_inner()).await.into()
}

/// Handle GET requests, either serving GraphiQL or executing the request from the query string.
///
/// GraphiQL is only served when it is enabled, the client prefers HTML over JSON and did not ask
/// for the "raw" GraphQL response.
pub async fn handle_graphql_get<E, R>(
    Extension(context): Extension<HttpServiceContext<E, R>>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
    RawQuery(query): RawQuery,
) -> Result<Response, GraphQLHttpError>
where
    E: GraphQLExecutor,
    R: Send + Sync + 'static,
{
    if context.handler.config().graphiql && prefers_html(&headers) && !params.contains_key("raw") {
        return Ok(response::Html(graphiql_source(&context.path)).into_response());
    }

    let is_missing = |query: &str| query.trim().is_empty();
    if params.get("query").map_or(true, |query| is_missing(query)) {
        return Err(GraphQLHttpError::MissingQuery);
    }

    let request = parse_query_string(&query.unwrap_or_default())
        .map_err(|err| GraphQLHttpError::InvalidRequest(err.to_string()))?;
    if is_missing(&request.query) {
        return Err(GraphQLHttpError::MissingQuery);
    }

    match selected_operation_type(&request) {
        Some(OperationType::Mutation) => {
            debug!("Rejected mutation sent via GET request");
            Err(GraphQLHttpError::OperationNotAllowed("mutation"))
        }
        Some(OperationType::Subscription) => {
            debug!("Rejected subscription sent via GET request");
            Err(GraphQLHttpError::OperationNotAllowed("subscription"))
        }
        _ => {
            let response: GraphQLResponse = context.handler.execute(request).await.into();
            Ok(response.into_response())
        }
    }
}

/// HTML of the GraphiQL explorer sending its requests to the given endpoint.
fn graphiql_source(endpoint: &str) -> String {
    GraphiQLSource::build().endpoint(endpoint).finish()
}

/// Returns true if the client's `Accept` header ranks HTML above JSON.
///
/// Without an `Accept` header or with equal preference the client receives JSON.
fn prefers_html(headers: &HeaderMap) -> bool {
    let ranges: Vec<MediaType<'_>> = headers
        .get_all(header::ACCEPT)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(MediaTypeList::new)
        .filter_map(Result::ok)
        .collect();

    let html = quality(&ranges, "text", "html");
    html > 0.0 && html > quality(&ranges, "application", "json")
}

/// Quality value of a media type, taken from the most specific range matching it.
fn quality(ranges: &[MediaType<'_>], ty: &str, subty: &str) -> f32 {
    ranges
        .iter()
        .filter_map(|range| {
            let range_ty = range.ty.as_str();
            let range_subty = range.subty.as_str();

            let specificity = if range_ty.eq_ignore_ascii_case(ty) {
                if range_subty.eq_ignore_ascii_case(subty) {
                    2
                } else if range_subty == "*" {
                    1
                } else {
                    return None;
                }
            } else if range_ty == "*" && range_subty == "*" {
                0
            } else {
                return None;
            };

            Some((specificity, quality_param(range)))
        })
        .max_by_key(|(specificity, _)| *specificity)
        .map_or(0.0, |(_, quality)| quality)
}

fn quality_param(range: &MediaType<'_>) -> f32 {
    range
        .params
        .iter()
        .find(|(name, _)| name.as_str().eq_ignore_ascii_case("q"))
        .and_then(|(_, value)| value.as_str().parse().ok())
        .unwrap_or(1.0)
}

/// Type of the operation this request selects to execute.
///
/// Documents which can't be parsed or where the operation can't be determined return `None`, the
/// schema reports these errors itself during execution.
fn selected_operation_type(request: &Request) -> Option<OperationType> {
    let document = parse_query(&request.query).ok()?;

    match (&document.operations, &request.operation_name) {
        (DocumentOperations::Single(operation), _) => Some(operation.node.ty),
        (DocumentOperations::Multiple(operations), Some(operation_name)) => operations
            .iter()
            .find(|(name, _)| name.as_str() == operation_name)
            .map(|(_, operation)| operation.node.ty),
        (DocumentOperations::Multiple(_), None) => None,
    }
}
