//! Core trait defining registry behavior.
//!
//! This module provides the `SingletonRegistry` trait with default implementations for
//! lazily creating, retrieving, and tracing singleton instances.
//!
//! The registry is type-based: each type (`TypeId`) has at most one instance, created on
//! first request and never replaced or removed afterwards.
//!
//! # Creation protocol
//!
//! Every lookup first reads the instance map under a shared guard. If the instance is
//! missing, the caller takes the creation lock of that type and checks again, because
//! several callers may have missed at the same time. Only the caller that still finds the
//! slot empty runs the constructor and publishes the result. The map's write guard is held
//! only for the insert, never while a constructor runs.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::convert::Infallible;
use std::sync::{Arc, LazyLock, Mutex, PoisonError, RwLock};

use tracing::{debug, trace, warn};

use crate::{BoxError, Construct, RegistryError, RegistryEvent};

/// Type-erased instances keyed by their `TypeId`.
pub type InstanceMap = HashMap<TypeId, Arc<dyn Any + Send + Sync>>;

/// Storage static of a registry.
pub type Storage = LazyLock<RwLock<InstanceMap>>;

/// Per-type creation locks of a registry.
pub type CreationLocks = LazyLock<Mutex<HashMap<TypeId, Arc<Mutex<()>>>>>;

/// Type alias for the user-supplied tracing callback.
///
/// The callback receives a reference to a `RegistryEvent` every time the registry is
/// interacted with. It must be thread-safe because registries are globally shared.
pub type TraceCallback = dyn Fn(&RegistryEvent) + Send + Sync + 'static;

/// Trace callback static of a registry.
pub type TraceSlot = LazyLock<Mutex<Option<Arc<TraceCallback>>>>;

/// Core trait defining registry behavior.
///
/// Provides default implementations for all registry operations, requiring only
/// three accessor methods (`storage`, `creation_locks` and `trace`) to be implemented.
pub trait SingletonRegistry {
    // -------------------------------------------------------------------------------------------------
    // Tracing
    // -------------------------------------------------------------------------------------------------

    /// Access the trace callback static.
    fn trace() -> &'static TraceSlot;

    /// Set a tracing callback for registry operations.
    ///
    /// The callback is invoked after every lookup with the event describing which path
    /// the lookup took. It runs outside of all registry locks, so it may call back into
    /// the same registry.
    fn set_trace_callback(&self, callback: impl Fn(&RegistryEvent) + Send + Sync + 'static) {
        let mut guard = Self::trace().lock().unwrap_or_else(PoisonError::into_inner);
        *guard = Some(Arc::new(callback));
    }

    /// Clear the tracing callback.
    fn clear_trace_callback(&self) {
        let mut guard = Self::trace().lock().unwrap_or_else(PoisonError::into_inner);
        *guard = None;
    }

    /// Invoke the current trace callback, if any, with `event`.
    ///
    /// # Panics
    ///
    /// If the callback itself panics, the panic propagates to the caller. No registry
    /// lock is held at that point.
    fn emit_event(&self, event: &RegistryEvent) {
        let callback = Self::trace()
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();

        if let Some(callback) = callback {
            callback(event);
        }
    }

    // -------------------------------------------------------------------------------------------------
    // Registry
    // -------------------------------------------------------------------------------------------------

    /// Access the storage static.
    fn storage() -> &'static Storage;

    /// Access the creation locks static.
    fn creation_locks() -> &'static CreationLocks;

    /// Returns the creation lock dedicated to `T`, creating it on first use.
    ///
    /// Locks are per type, so a constructor may resolve instances of other types from the
    /// same registry. Resolving its own type from inside its constructor deadlocks.
    fn creation_lock<T: 'static>() -> Arc<Mutex<()>> {
        Self::creation_locks()
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(TypeId::of::<T>())
            .or_default()
            .clone()
    }

    /// Returns the published instance of `T` without constructing it.
    fn lookup<T: Send + Sync + 'static>() -> Option<Arc<T>> {
        Self::storage()
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&TypeId::of::<T>())
            .cloned()
            .and_then(|instance| instance.downcast::<T>().ok())
    }

    /// Double-checked get-or-create returning the constructor's own error.
    ///
    /// Backs `get_or_init`, `get_or_try_init` and `get_instance`.
    #[doc(hidden)]
    fn resolve<T, E, F>(&self, init: F) -> Result<Arc<T>, E>
    where
        T: Send + Sync + 'static,
        F: FnOnce() -> Result<T, E>,
    {
        let type_name = std::any::type_name::<T>();

        if let Some(instance) = Self::lookup::<T>() {
            trace!(type_name, "singleton instance already created");
            self.emit_event(&RegistryEvent::Hit { type_name });
            return Ok(instance);
        }

        let lock = Self::creation_lock::<T>();
        // A panicking constructor poisons the lock, but the lock guards no data and
        // nothing was published, so the next caller simply retries.
        let guard = lock.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(instance) = Self::lookup::<T>() {
            drop(guard);
            trace!(type_name, "singleton instance created by a concurrent caller");
            self.emit_event(&RegistryEvent::Contended { type_name });
            return Ok(instance);
        }

        debug!(type_name, "creating singleton instance");
        let instance = match init() {
            Ok(value) => Arc::new(value),
            Err(err) => {
                drop(guard);
                self.emit_event(&RegistryEvent::ConstructionFailed { type_name });
                return Err(err);
            }
        };

        Self::storage()
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(TypeId::of::<T>(), instance.clone());
        drop(guard);

        self.emit_event(&RegistryEvent::Construct { type_name });
        Ok(instance)
    }

    /// Returns the instance of `T`, creating it with `init` if absent.
    ///
    /// `init` runs at most once per registry, even under concurrent first requests.
    /// When the instance already exists, `init` is dropped without being called.
    fn get_or_init<T, F>(&self, init: F) -> Arc<T>
    where
        T: Send + Sync + 'static,
        F: FnOnce() -> T,
    {
        match self.resolve(|| Ok::<T, Infallible>(init())) {
            Ok(instance) => instance,
            Err(never) => match never {},
        }
    }

    /// Returns the instance of `T`, creating it with the fallible `init` if absent.
    ///
    /// # Errors
    ///
    /// - `RegistryError::ConstructionFailed` if `init` fails. Nothing is stored and a
    ///   later call runs its own constructor.
    fn get_or_try_init<T, E, F>(&self, init: F) -> Result<Arc<T>, RegistryError>
    where
        T: Send + Sync + 'static,
        E: Into<BoxError>,
        F: FnOnce() -> Result<T, E>,
    {
        self.resolve(init).map_err(|err| {
            let err = RegistryError::construction_failed::<T>(err);
            warn!(error = %err, "singleton construction failed");
            err
        })
    }

    /// Returns the instance of `T`, constructing it from `args` if absent.
    ///
    /// `args` are used only by the call that actually constructs the instance. Arguments
    /// passed after that are ignored and the existing instance is returned unchanged.
    ///
    /// # Errors
    ///
    /// - `RegistryError::ConstructionFailed` if `T::construct` fails
    fn get_instance<T>(&self, args: T::Args) -> Result<Arc<T>, RegistryError>
    where
        T: Construct + Send + Sync + 'static,
    {
        self.get_or_try_init(|| T::construct(args))
    }

    /// Check if an instance of `T` exists in the registry. Never constructs.
    fn contains<T: Send + Sync + 'static>(&self) -> bool {
        let found = Self::storage()
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(&TypeId::of::<T>());

        self.emit_event(&RegistryEvent::Contains {
            type_name: std::any::type_name::<T>(),
            found,
        });

        found
    }
}

// -------------------------------------------------------------------------------------------------
// Tests
// -------------------------------------------------------------------------------------------------
