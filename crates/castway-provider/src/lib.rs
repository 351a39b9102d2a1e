//! Discovery and session event model for Castway.
//!
//! A discovery backend (e.g. a DIAL scanner) reports receiver devices
//! ("sinks") and casting sessions ("activities") into an
//! [`EventDispatcher`], which fans the events out to registered
//! [`ProviderCallbacks`] consumers. [`ProviderManager`] is the standard
//! consumer: it holds the latest snapshot of every known sink and
//! activity.
//!
//! [`transport`] carries [`RouteMessage`](castway_core::RouteMessage)s
//! over channels that cannot carry raw bytes.

pub mod backend;
pub mod callbacks;
pub mod dispatch;
pub mod error;
pub mod manager;
pub mod sink;
pub mod transport;

pub use backend::DiscoveryBackend;
pub use callbacks::{ActivityCallbacks, ProviderCallbacks, SinkDiscoveryCallbacks};
pub use dispatch::EventDispatcher;
pub use error::{BackendError, CallbackError, TransportError};
pub use manager::ProviderManager;
pub use sink::{Activity, ActivityId, ActivityState, Sink, SinkId};
