//! Core types for the Castway media route provider runtime.
//!
//! Leaf utilities shared by the provider and runtime crates:
//!
//! - [`codec`] — base64 with a URL-safe alphabet variant, for carrying
//!   binary payloads over channels that only accept text.
//! - [`message`] — [`RouteMessage`], the text-or-binary payload exchanged
//!   over a route.
//! - [`settle`] — [`settle_all`](settle::settle_all), awaiting a batch of
//!   independent operations without one failure aborting the rest.

pub mod codec;
pub mod error;
pub mod message;
pub mod settle;

pub use error::CodecError;
pub use message::{Payload, RouteMessage};
pub use settle::{Outcome, settle_all};
