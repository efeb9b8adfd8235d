// SPDX-License-Identifier: AGPL-3.0-or-later

use async_graphql::{Context, EmptySubscription, Object, Result, Schema};
use rstest::fixture;

use crate::graphql::RootValue;

/// Root resolver used by the test schema.
#[derive(Debug)]
pub struct Greeter {
    pub name: String,
}

impl Greeter {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
        }
    }
}

/// Query root delegating to the `Greeter` attached to the request.
#[derive(Debug, Default)]
pub struct TestQuery;

#[Object]
impl TestQuery {
    async fn greeting(&self, ctx: &Context<'_>) -> Result<String> {
        let greeter = ctx.data::<RootValue<Greeter>>()?;
        Ok(format!("Hello, {}!", greeter.name))
    }
}

#[derive(Debug, Default)]
pub struct TestMutation;

#[Object]
impl TestMutation {
    async fn echo(&self, ctx: &Context<'_>, message: String) -> Result<String> {
        let greeter = ctx.data::<RootValue<Greeter>>()?;
        Ok(format!("{} says {}", greeter.name, message))
    }
}

pub type TestSchema = Schema<TestQuery, TestMutation, EmptySubscription>;

#[fixture]
pub fn test_schema() -> TestSchema {
    Schema::build(TestQuery, TestMutation, EmptySubscription).finish()
}

#[fixture]
pub fn greeter() -> Greeter {
    Greeter::new("panda")
}
