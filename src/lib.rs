//! # Creational Patterns
//!
//! Object-creation design patterns, each usable on its own:
//!
//! - **Singleton**: a thread-safe, type-keyed registry that creates each instance lazily
//!   and exactly once, plus per-type slots for the locked ([`GuardedSingleton`]) and
//!   unlocked ([`LocalSingleton`]) variants.
//! - **Factory method**: pluggable language localizers in [`factory`].
//! - **Builder**: step-wise assembly with a director in [`builder`].
//!
//! ## Quick Start
//!
//! ```rust
//! use creational_patterns::{get_instance, Construct};
//! use std::convert::Infallible;
//! use std::sync::Arc;
//!
//! struct Greeter {
//!     greeting: String,
//! }
//!
//! impl Construct for Greeter {
//!     type Args = &'static str;
//!     type Error = Infallible;
//!
//!     fn construct(greeting: Self::Args) -> Result<Self, Infallible> {
//!         Ok(Greeter { greeting: greeting.to_string() })
//!     }
//! }
//!
//! let first: Arc<Greeter> = get_instance::<Greeter>("Hello").unwrap();
//! // Arguments are only used on first creation.
//! let second: Arc<Greeter> = get_instance::<Greeter>("Bonjour").unwrap();
//!
//! assert!(Arc::ptr_eq(&first, &second));
//! assert_eq!(second.greeting, "Hello");
//! ```
//!
//! ## Main Functions
//!
//! - [`get_instance`] - Get or construct the process-wide instance of a [`Construct`] type
//! - [`get_or_init`] - Get or create the process-wide instance with a closure
//! - [`get_or_try_init`] - Same as `get_or_init` with a fallible closure
//! - [`contains`] - Check if an instance exists, without creating it
//! - [`set_trace_callback`] - Observe registry lookups
//! - [`define_registry!`] - Declare an isolated registry

mod construct;
mod guarded;
mod local;
mod macros;
mod registry;
mod registry_error;
mod registry_event;
mod registry_trait;

pub mod builder;
pub mod factory;
pub mod singleton;

pub use construct::Construct;
pub use guarded::GuardedSingleton;
pub use local::LocalSingleton;
pub use registry::{
    clear_trace_callback, contains, get_instance, get_or_init, get_or_try_init,
    set_trace_callback,
};
pub use registry_error::{BoxError, RegistryError};
pub use registry_event::RegistryEvent;
pub use registry_trait::{
    CreationLocks, InstanceMap, SingletonRegistry, Storage, TraceCallback, TraceSlot,
};
