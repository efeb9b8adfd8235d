// SPDX-License-Identifier: AGPL-3.0-or-later

use std::time::Instant;

use async_graphql::{Context, EmptyMutation, EmptySubscription, Object, Result, Schema};
use graphql_instance::RootValue;

/// GraphQL schema served by the command line application.
pub type NodeSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

/// Build the schema. Its fields are computed by the `NodeResolver` attached to each request.
pub fn build_schema() -> NodeSchema {
    Schema::build(QueryRoot, EmptyMutation, EmptySubscription).finish()
}

/// Root resolver computing the top-level fields of the schema.
#[derive(Debug)]
pub struct NodeResolver {
    started_at: Instant,
}

impl NodeResolver {
    pub fn new() -> Self {
        Self {
            started_at: Instant::now(),
        }
    }

    pub fn ping(&self) -> String {
        "pong".into()
    }

    pub fn version(&self) -> String {
        env!("CARGO_PKG_VERSION").into()
    }

    /// Seconds since this resolver got created.
    pub fn uptime(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}

impl Default for NodeResolver {
    fn default() -> Self {
        Self::new()
    }
}

fn resolver<'a>(ctx: &Context<'a>) -> Result<&'a NodeResolver> {
    let root = ctx.data::<RootValue<NodeResolver>>()?;
    Ok(&**root)
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Returns "pong", use it to check if the endpoint is reachable.
    async fn ping(&self, ctx: &Context<'_>) -> Result<String> {
        Ok(resolver(ctx)?.ping())
    }

    /// Version of the running application.
    async fn version(&self, ctx: &Context<'_>) -> Result<String> {
        Ok(resolver(ctx)?.version())
    }

    /// Seconds since the application started.
    async fn uptime(&self, ctx: &Context<'_>) -> Result<u64> {
        Ok(resolver(ctx)?.uptime())
    }
}
