// SPDX-License-Identifier: AGPL-3.0-or-later

mod executor;
mod handler;
mod root;

pub use executor::GraphQLExecutor;
pub use handler::{graphql_handler, GraphQLHandler};
pub use root::RootValue;
