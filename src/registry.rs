//! The process-wide singleton registry.
//!
//! Instances are created lazily on first request and live until process teardown. For
//! isolated registries with their own storage, see [`define_registry!`](crate::define_registry).
//!
//! # Examples
//!
//! ```
//! use creational_patterns::{get_or_init, contains};
//! use std::sync::Arc;
//!
//! struct Settings {
//!     verbose: bool,
//! }
//!
//! let settings: Arc<Settings> = get_or_init(|| Settings { verbose: true });
//! assert!(settings.verbose);
//!
//! // Later initializers are ignored once the instance exists.
//! let again: Arc<Settings> = get_or_init(|| Settings { verbose: false });
//! assert!(Arc::ptr_eq(&settings, &again));
//! assert!(contains::<Settings>());
//! ```

use std::collections::HashMap;
use std::sync::{Arc, LazyLock, Mutex, RwLock};

use crate::registry_trait::{CreationLocks, SingletonRegistry, Storage, TraceSlot};
use crate::{BoxError, Construct, RegistryError, RegistryEvent};

/// Global map from `TypeId` to the unique instance of that type.
static GLOBAL_REGISTRY: Storage = LazyLock::new(|| RwLock::new(HashMap::new()));

/// Creation locks of the global registry, one per type.
static GLOBAL_CREATION_LOCKS: CreationLocks = LazyLock::new(|| Mutex::new(HashMap::new()));

/// Holds an optional user-defined tracing callback.
static TRACE_CALLBACK: TraceSlot = LazyLock::new(|| Mutex::new(None));

struct Global;

impl SingletonRegistry for Global {
    fn storage() -> &'static Storage {
        &GLOBAL_REGISTRY
    }

    fn creation_locks() -> &'static CreationLocks {
        &GLOBAL_CREATION_LOCKS
    }

    fn trace() -> &'static TraceSlot {
        &TRACE_CALLBACK
    }
}

const GLOBAL: Global = Global;

/// Returns the process-wide instance of `T`, constructing it from `args` on first use.
///
/// Only the first successful call constructs. Arguments passed by any later call are
/// ignored and the existing instance is returned unchanged.
///
/// # Errors
///
/// Returns `RegistryError::ConstructionFailed` if `T::construct` fails. The registry stays
/// empty for `T`, so the next call retries with its own arguments.
///
/// # Examples
///
/// ```
/// use creational_patterns::{get_instance, Construct};
/// use std::convert::Infallible;
///
/// struct Pool {
///     size: usize,
/// }
///
/// impl Construct for Pool {
///     type Args = usize;
///     type Error = Infallible;
///
///     fn construct(size: usize) -> Result<Self, Infallible> {
///         Ok(Pool { size })
///     }
/// }
///
/// let pool = get_instance::<Pool>(4).unwrap();
/// let same = get_instance::<Pool>(16).unwrap();
/// assert_eq!(pool.size, 4);
/// assert_eq!(same.size, 4);
/// ```
pub fn get_instance<T>(args: T::Args) -> Result<Arc<T>, RegistryError>
where
    T: Construct + Send + Sync + 'static,
{
    GLOBAL.get_instance::<T>(args)
}

/// Returns the process-wide instance of `T`, creating it with `init` on first use.
pub fn get_or_init<T, F>(init: F) -> Arc<T>
where
    T: Send + Sync + 'static,
    F: FnOnce() -> T,
{
    GLOBAL.get_or_init(init)
}

/// Returns the process-wide instance of `T`, creating it with the fallible `init` on first use.
///
/// # Errors
///
/// Returns `RegistryError::ConstructionFailed` if `init` fails.
///
/// # Examples
///
/// ```
/// use creational_patterns::{get_or_try_init, contains};
///
/// struct Port(u16);
///
/// let failed = get_or_try_init::<Port, _, _>(|| "http".parse::<u16>().map(Port));
/// assert!(failed.is_err());
/// assert!(!contains::<Port>());
///
/// let port = get_or_try_init(|| "8080".parse::<u16>().map(Port)).unwrap();
/// assert_eq!(port.0, 8080);
/// ```
pub fn get_or_try_init<T, E, F>(init: F) -> Result<Arc<T>, RegistryError>
where
    T: Send + Sync + 'static,
    E: Into<BoxError>,
    F: FnOnce() -> Result<T, E>,
{
    GLOBAL.get_or_try_init(init)
}

/// Checks whether the process-wide instance of `T` exists. Never constructs.
pub fn contains<T: Send + Sync + 'static>() -> bool {
    GLOBAL.contains::<T>()
}

/// Sets a tracing callback that will be invoked on every registry interaction.
///
/// # Example
/// ```rust
/// use creational_patterns::{set_trace_callback, clear_trace_callback};
///
/// set_trace_callback(|event| println!("[registry-trace] {}", event));
/// clear_trace_callback();
/// ```
pub fn set_trace_callback(callback: impl Fn(&RegistryEvent) + Send + Sync + 'static) {
    GLOBAL.set_trace_callback(callback)
}

/// Clears the tracing callback (disables registry tracing).
pub fn clear_trace_callback() {
    GLOBAL.clear_trace_callback()
}

// -------------------------------------------------------------------------------------------------
// Tests
// -------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::convert::Infallible;

    #[derive(Debug)]
    struct Label(String);

    impl Construct for Label {
        type Args = &'static str;
        type Error = Infallible;

        fn construct(text: Self::Args) -> Result<Self, Self::Error> {
            Ok(Label(text.to_string()))
        }
    }

    #[test]
    fn test_get_instance_is_idempotent() -> Result<(), RegistryError> {
        let first = get_instance::<Label>("first")?;
        for _ in 0..10 {
            let again = get_instance::<Label>("ignored")?;
            assert!(Arc::ptr_eq(&first, &again));
        }
        assert_eq!(first.0, "first");
        Ok(())
    }

    #[test]
    fn test_distinct_types_get_distinct_instances() {
        #[derive(Debug, PartialEq)]
        struct Left(u8);
        #[derive(Debug, PartialEq)]
        struct Right(u8);

        assert_eq!(*get_or_init(|| Left(1)), Left(1));
        assert_eq!(*get_or_init(|| Right(2)), Right(2));
        assert!(contains::<Left>());
        assert!(contains::<Right>());
    }

    #[test]
    fn test_get_or_try_init_retries_after_failure() {
        struct Retry(u8);

        assert!(get_or_try_init::<Retry, _, _>(|| Err("first attempt")).is_err());
        assert!(!contains::<Retry>());

        let instance = get_or_try_init(|| Ok::<_, Infallible>(Retry(2))).unwrap();
        assert_eq!(instance.0, 2);
    }

    #[test]
    #[serial]
    fn test_trace_callback_invoked() {
        use std::sync::atomic::{AtomicUsize, Ordering};
        static COUNT: AtomicUsize = AtomicUsize::new(0);

        struct Counted;

        set_trace_callback(|e| {
            if e.type_name() == std::any::type_name::<Counted>() {
                COUNT.fetch_add(1, Ordering::SeqCst);
            }
        });
        get_or_init(|| Counted);
        get_or_init(|| Counted);
        assert_eq!(COUNT.load(Ordering::SeqCst), 2);
        clear_trace_callback();
    }
}
