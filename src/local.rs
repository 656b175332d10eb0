//! An unlocked cached-instance slot.
//!
//! `LocalSingleton<T>` does no locking and no double check: the first initializer to
//! finish wins. It is `!Sync`, so the compiler keeps it on one thread. Declare it in a
//! `thread_local!` to get one instance per thread.

use std::cell::OnceCell;
use std::rc::Rc;

use tracing::{debug, trace};

use crate::{Construct, RegistryError};

/// Caches a single `T` without any synchronization.
///
/// # Examples
///
/// ```rust
/// use creational_patterns::LocalSingleton;
/// use std::rc::Rc;
///
/// struct Session {
///     user: String,
/// }
///
/// thread_local! {
///     static SESSION: LocalSingleton<Session> = const { LocalSingleton::new() };
/// }
///
/// let first = SESSION.with(|s| s.get_or_init(|| Session { user: "ada".into() }));
/// let second = SESSION.with(|s| s.get_or_init(|| Session { user: "bob".into() }));
///
/// assert!(Rc::ptr_eq(&first, &second));
/// assert_eq!(second.user, "ada");
/// ```
pub struct LocalSingleton<T> {
    slot: OnceCell<Rc<T>>,
}

impl<T> LocalSingleton<T> {
    pub const fn new() -> Self {
        LocalSingleton {
            slot: OnceCell::new(),
        }
    }

    /// Returns the cached instance if it has been created.
    pub fn get(&self) -> Option<Rc<T>> {
        self.slot.get().cloned()
    }

    /// Returns the cached instance, creating it with the fallible `init` if absent.
    ///
    /// If `init` itself initializes this slot, the instance it stored is kept and the
    /// outer value is dropped.
    pub fn get_or_try_init<E, F>(&self, init: F) -> Result<Rc<T>, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        let type_name = std::any::type_name::<T>();

        if let Some(instance) = self.slot.get() {
            trace!(type_name, "local instance already created");
            return Ok(instance.clone());
        }

        debug!(type_name, "creating local instance");
        let instance = Rc::new(init()?);
        Ok(self.slot.get_or_init(|| instance).clone())
    }

    /// Returns the cached instance, creating it with `init` if absent.
    pub fn get_or_init<F>(&self, init: F) -> Rc<T>
    where
        F: FnOnce() -> T,
    {
        match self.get_or_try_init(|| Ok::<T, std::convert::Infallible>(init())) {
            Ok(instance) => instance,
            Err(never) => match never {},
        }
    }
}

impl<T: Construct> LocalSingleton<T> {
    /// Returns the cached instance, constructing it from `args` if absent.
    ///
    /// Arguments passed once the instance exists are ignored.
    ///
    /// # Errors
    ///
    /// - `RegistryError::ConstructionFailed` if `T::construct` fails
    pub fn get_instance(&self, args: T::Args) -> Result<Rc<T>, RegistryError> {
        self.get_or_try_init(|| T::construct(args))
            .map_err(RegistryError::construction_failed::<T>)
    }
}

impl<T> Default for LocalSingleton<T> {
    fn default() -> Self {
        Self::new()
    }
}
