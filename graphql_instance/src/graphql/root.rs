// SPDX-License-Identifier: AGPL-3.0-or-later

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// Root resolver attached to every request executed by a [`GraphQLHandler`].
///
/// Resolvers access it via `ctx.data::<RootValue<R>>()`.
///
/// [`GraphQLHandler`]: crate::GraphQLHandler
pub struct RootValue<R>(pub(crate) Arc<R>);

impl<R> RootValue<R> {
    /// Returns the shared root resolver.
    pub fn inner(&self) -> &Arc<R> {
        &self.0
    }
}

impl<R> Clone for RootValue<R> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<R> Deref for RootValue<R> {
    type Target = R;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl<R> fmt::Debug for RootValue<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RootValue").finish()
    }
}
