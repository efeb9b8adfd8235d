// SPDX-License-Identifier: AGPL-3.0-or-later

//! # graphql_instance
//!
//! Assembles a GraphQL HTTP handler from an already built schema, an already built root resolver
//! and a small configuration record. Parsing, validation and execution of GraphQL requests is left
//! entirely to `async-graphql`.
#![warn(
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications
)]

mod config;
mod graphql;
mod http;

#[cfg(test)]
mod test_utils;

pub use crate::config::HandlerConfiguration;
pub use crate::graphql::{graphql_handler, GraphQLExecutor, GraphQLHandler, RootValue};
pub use crate::http::{build_server, http_service, GraphQLHttpError, HttpServiceContext};
