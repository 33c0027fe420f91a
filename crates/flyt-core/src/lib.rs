//! Flyt Core - accounts, posts, the follow graph and timelines.
//!
//! This crate contains the domain logic for the Flyt social feed. It has no
//! dependencies on other Flyt crates and performs no I/O beyond optional
//! echoing of rendered timeline lines to stdout.

pub mod account;
pub mod age;
pub mod error;
pub mod network;
pub mod post;
pub mod timeline;

#[cfg(any(test, feature = "test-utils"))]
pub mod fixtures;

// Re-exports for convenience
pub use account::{Account, AccountId};
pub use age::{AgeUnit, RelativeAge};
pub use error::NetworkError;
pub use network::{FollowOutcome, Network};
pub use post::{Post, PostId};
pub use timeline::{main_entries, personal_entries, write_lines, TimelineEntry};
