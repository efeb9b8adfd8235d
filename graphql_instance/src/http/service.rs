// SPDX-License-Identifier: AGPL-3.0-or-later

use std::future::Future;
use std::net::SocketAddr;

use anyhow::Result;
use axum::extract::Extension;
use axum::routing::get;
use axum::Router;
use log::{debug, info};

use crate::graphql::GraphQLExecutor;
use crate::http::api::{handle_graphql_get, handle_graphql_query};
use crate::http::context::HttpServiceContext;

/// Build HTTP router serving the GraphQL handler of this context.
pub fn build_server<E, R>(context: HttpServiceContext<E, R>) -> Router
where
    E: GraphQLExecutor,
    R: Send + Sync + 'static,
{
    let path = context.path.clone();

    Router::new()
        // Add GraphQL routes
        .route(
            &path,
            get(handle_graphql_get::<E, R>).post(handle_graphql_query::<E, R>),
        )
        // Add shared context
        .layer(Extension(context))
}

/// Start HTTP server and serve the given router until the shutdown signal resolves.
pub async fn http_service<F>(address: SocketAddr, router: Router, shutdown: F) -> Result<()>
where
    F: Future<Output = ()>,
{
    let server = axum::Server::try_bind(&address)?.serve(router.into_make_service());
    info!("GraphQL endpoint listening on {}", server.local_addr());

    server
        .with_graceful_shutdown(async {
            debug!("HTTP service is ready");
            shutdown.await;
            debug!("HTTP service received shutdown signal");
        })
        .await?;

    Ok(())
}
