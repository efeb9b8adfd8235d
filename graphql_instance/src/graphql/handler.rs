// SPDX-License-Identifier: AGPL-3.0-or-later

use std::fmt;
use std::sync::Arc;

use async_graphql::{Request, Response};
use axum::Router;

use crate::config::HandlerConfiguration;
use crate::graphql::{GraphQLExecutor, RootValue};
use crate::http::{build_server, HttpServiceContext};

/// Assembles a GraphQL handler from a schema, a root resolver and the handler configuration.
///
/// Both schema and root resolver need to be fully constructed beforehand. Nothing gets validated
/// or executed here, inconsistencies between them surface as GraphQL errors at request time.
pub fn graphql_handler<E, R>(
    schema: E,
    root: R,
    config: HandlerConfiguration,
) -> GraphQLHandler<E, R>
where
    E: GraphQLExecutor,
    R: Send + Sync + 'static,
{
    GraphQLHandler::new(schema, root, config)
}

/// Request handler bound to one schema and one root resolver for its whole lifetime.
///
/// Cloning is cheap, all clones share the same schema and root resolver.
pub struct GraphQLHandler<E, R> {
    schema: E,
    root: Arc<R>,
    config: HandlerConfiguration,
}

impl<E, R> GraphQLHandler<E, R>
where
    E: GraphQLExecutor,
    R: Send + Sync + 'static,
{
    /// Returns a new handler, see [`graphql_handler`].
    pub fn new(schema: E, root: R, config: HandlerConfiguration) -> Self {
        Self {
            schema,
            root: Arc::new(root),
            config,
        }
    }

    /// Schema this handler executes requests against.
    pub fn schema(&self) -> &E {
        &self.schema
    }

    /// Root resolver attached to every executed request.
    pub fn root(&self) -> &Arc<R> {
        &self.root
    }

    /// Configuration this handler was assembled with.
    pub fn config(&self) -> &HandlerConfiguration {
        &self.config
    }

    /// Executes a GraphQL request with the root resolver attached to it.
    pub async fn execute(&self, request: impl Into<Request>) -> Response {
        let request = request.into().data(RootValue(self.root.clone()));
        self.schema.execute(request).await
    }

    /// Returns a router serving this handler under the given path.
    pub fn router(&self, path: &str) -> Router {
        build_server(HttpServiceContext::new(self.clone(), path))
    }
}

impl<E: Clone, R> Clone for GraphQLHandler<E, R> {
    fn clone(&self) -> Self {
        Self {
            schema: self.schema.clone(),
            root: self.root.clone(),
            config: self.config,
        }
    }
}

impl<E, R> fmt::Debug for GraphQLHandler<E, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphQLHandler")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
