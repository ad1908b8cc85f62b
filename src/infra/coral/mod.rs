//! Coral talk-platform API client.
//!
//! Provides CoralClient for running persisted GraphQL queries against a
//! Coral deployment.

mod client;
pub(crate) mod error;
#[cfg(test)]
mod mock;

pub use client::CoralClient;
pub use error::CoralError;
#[cfg(test)]
pub use mock::{CoralMockServer, comment_edge, comment_edge_with_replies};
