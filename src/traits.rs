//! Trait abstractions for the publish flow.
//!
//! The network call and the interactive prompt are the two side effects of a run. Both sit
//! behind traits so [`run`](crate::app::run) can be driven with test doubles.

use crate::error::Result;
use crate::post::{Post, PublishedPost};
use async_trait::async_trait;

/// Trait for sending a post to the blogging platform.
#[async_trait]
pub trait Publisher: Send + Sync {
    /// Creates the post and returns what the platform recorded.
    async fn publish(&self, post: &Post) -> Result<PublishedPost>;
}

/// Trait for asking the user whether to go ahead.
pub trait ConfirmationProvider {
    /// Reads a single answer. `Ok(true)` only for an affirmative reply.
    fn confirm(&mut self) -> Result<bool>;
}
