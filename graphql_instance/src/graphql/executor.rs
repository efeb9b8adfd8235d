// SPDX-License-Identifier: AGPL-3.0-or-later

use async_graphql::{dynamic, ObjectType, Request, Response, Schema, SubscriptionType};

/// Capability a schema needs to offer so a handler can be assembled around it.
///
/// This keeps the handler independent of the concrete root types a schema was built with. Static
/// schemas derived from `#[Object]` roots and dynamic schemas both implement it.
#[async_trait::async_trait]
pub trait GraphQLExecutor: Clone + Send + Sync + 'static {
    /// Executes a single GraphQL request against this schema.
    async fn execute(&self, request: Request) -> Response;

    /// Returns the schema definition language of this schema.
    fn sdl(&self) -> String;
}

#[async_trait::async_trait]
impl<Query, Mutation, Subscription> GraphQLExecutor for Schema<Query, Mutation, Subscription>
where
    Query: ObjectType + 'static,
    Mutation: ObjectType + 'static,
    Subscription: SubscriptionType + 'static,
{
    async fn execute(&self, request: Request) -> Response {
        Schema::execute(self, request).await
    }

    fn sdl(&self) -> String {
        Schema::sdl(self)
    }
}

#[async_trait::async_trait]
impl GraphQLExecutor for dynamic::Schema {
    async fn execute(&self, request: Request) -> Response {
        dynamic::Schema::execute(self, request).await
    }

    fn sdl(&self) -> String {
        dynamic::Schema::sdl(self)
    }
}
