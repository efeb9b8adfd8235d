// SPDX-License-Identifier: AGPL-3.0-or-later

use serde::{Deserialize, Serialize};

/// Options passed through to the GraphQL handler when it gets assembled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HandlerConfiguration {
    /// Serve the interactive GraphiQL explorer for browser requests at the handler's endpoint.
    ///
    /// Defaults to true.
    pub graphiql: bool,
}

impl Default for HandlerConfiguration {
    fn default() -> Self {
        Self { graphiql: true }
    }
}
