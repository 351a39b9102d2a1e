//! Castway runtime — instance selection and service wiring.
//!
//! At process start the [`InstanceSelector`] decides whether this copy
//! of the runtime, among possibly several co-installed variants, should
//! activate. An active instance builds a [`Runtime`], which wires a
//! [`ProviderManager`](castway_provider::ProviderManager) into the event
//! dispatcher and starts the discovery backends. Heavyweight services
//! are obtained on demand through a [`ServiceLoader`].
//!
//! An inactive resolution is not an error: that copy simply does not
//! run.

pub mod config;
pub mod error;
pub mod instance;
pub mod loader;
pub mod markers;
pub mod runtime;
pub mod selector;

pub use config::CastwayConfig;
pub use error::{ConfigError, LoaderError, QueryError, SelectorError};
pub use instance::{InstanceState, RuntimeInstance};
pub use loader::{FixedLoader, LazyLoader, ServiceLoader};
pub use markers::MarkerQuery;
pub use runtime::Runtime;
pub use selector::{InstanceSelector, VariantQuery};
