// SPDX-License-Identifier: AGPL-3.0-or-later

mod client;
mod schema;

pub use client::TestClient;
pub use schema::{greeter, test_schema, Greeter, TestQuery, TestSchema};
