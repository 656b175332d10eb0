//! A lazily initialized, lock-guarded slot for a single type.
//!
//! `GuardedSingleton<T>` is the per-type counterpart of the registry: a type keeps its
//! one instance in a `static` slot instead of a shared map. The fast path is a single
//! atomic read of the slot and never touches the lock.

use std::sync::{Mutex, OnceLock, PoisonError};

use tracing::{debug, trace, warn};

use crate::{Construct, RegistryError};

/// A slot holding at most one `T`, created on first request.
///
/// # Examples
///
/// ```rust
/// use creational_patterns::GuardedSingleton;
///
/// struct Config {
///     retries: u32,
/// }
///
/// static CONFIG: GuardedSingleton<Config> = GuardedSingleton::new();
///
/// let config = CONFIG.get_or_init(|| Config { retries: 3 });
/// assert_eq!(config.retries, 3);
///
/// // The initializer of a later call never runs.
/// let same = CONFIG.get_or_init(|| Config { retries: 10 });
/// assert!(std::ptr::eq(config, same));
/// ```
pub struct GuardedSingleton<T> {
    slot: OnceLock<T>,
    lock: Mutex<()>,
}

impl<T> GuardedSingleton<T> {
    pub const fn new() -> Self {
        GuardedSingleton {
            slot: OnceLock::new(),
            lock: Mutex::new(()),
        }
    }

    /// Returns the instance if it has been created.
    pub fn get(&self) -> Option<&T> {
        self.slot.get()
    }

    pub fn is_initialized(&self) -> bool {
        self.slot.get().is_some()
    }

    /// Returns the instance, creating it with the fallible `init` if absent.
    ///
    /// Exactly one `init` succeeds per slot. If `init` fails, the slot stays empty, the
    /// error is returned to this caller, and the next caller runs its own `init`.
    pub fn get_or_try_init<E, F>(&self, init: F) -> Result<&T, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        let type_name = std::any::type_name::<T>();

        if let Some(instance) = self.slot.get() {
            trace!(type_name, "singleton instance already created");
            return Ok(instance);
        }

        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(instance) = self.slot.get() {
            trace!(type_name, "singleton instance created by a concurrent caller");
            return Ok(instance);
        }

        debug!(type_name, "creating singleton instance");
        let value = init()?;

        // The slot is empty and only lock holders write to it.
        Ok(self.slot.get_or_init(|| value))
    }

    /// Returns the instance, creating it with `init` if absent.
    pub fn get_or_init<F>(&self, init: F) -> &T
    where
        F: FnOnce() -> T,
    {
        match self.get_or_try_init(|| Ok::<T, std::convert::Infallible>(init())) {
            Ok(instance) => instance,
            Err(never) => match never {},
        }
    }
}

impl<T: Construct> GuardedSingleton<T> {
    /// Returns the instance, constructing it from `args` if absent.
    ///
    /// Arguments passed once the instance exists are ignored.
    ///
    /// # Errors
    ///
    /// - `RegistryError::ConstructionFailed` if `T::construct` fails
    pub fn get_instance(&self, args: T::Args) -> Result<&T, RegistryError> {
        self.get_or_try_init(|| T::construct(args)).map_err(|err| {
            let err = RegistryError::construction_failed::<T>(err);
            warn!(error = %err, "singleton construction failed");
            err
        })
    }
}

impl<T> Default for GuardedSingleton<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for GuardedSingleton<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GuardedSingleton")
            .field("slot", &self.slot.get())
            .finish()
    }
}
