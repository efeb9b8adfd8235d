// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::graphql::GraphQLHandler;

/// Context shared by all HTTP routes of the GraphQL endpoint.
#[derive(Debug)]
pub struct HttpServiceContext<E, R> {
    /// Handler executing incoming GraphQL requests.
    pub handler: GraphQLHandler<E, R>,

    /// Path the GraphQL endpoint is served under, GraphiQL sends its queries there.
    pub path: String,
}

impl<E, R> HttpServiceContext<E, R> {
    /// Returns a new instance of `HttpServiceContext`.
    pub fn new(handler: GraphQLHandler<E, R>, path: &str) -> Self {
        Self {
            handler,
            path: path.to_owned(),
        }
    }
}

impl<E: Clone, R> Clone for HttpServiceContext<E, R> {
    fn clone(&self) -> Self {
        Self {
            handler: self.handler.clone(),
            path: self.path.clone(),
        }
    }
}
