// SPDX-License-Identifier: AGPL-3.0-or-later

mod api;
mod context;
mod errors;
mod service;

pub use context::HttpServiceContext;
pub use errors::GraphQLHttpError;
pub use service::{build_server, http_service};
