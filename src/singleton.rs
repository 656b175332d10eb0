//! Three ways to restrict a type to a single instance.
//!
//! - [`SingletonA`]: the type owns a static slot and hands out `&'static` references.
//! - [`SingletonB`]: constructed through the process-wide registry, thread-safe and
//!   keyed by type.
//! - [`SingletonC`]: a cached instance without any locking, confined to the calling thread.
//!
//! Every instance carries a `serial` drawn from a process-wide counter, so two handles
//! can be compared by identity even when the type carries no other state.

use std::convert::Infallible;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::{Construct, GuardedSingleton, LocalSingleton};

static NEXT_SERIAL: AtomicU64 = AtomicU64::new(1);

fn next_serial() -> u64 {
    NEXT_SERIAL.fetch_add(1, Ordering::Relaxed)
}

// -------------------------------------------------------------------------------------------------
// SingletonA
// -------------------------------------------------------------------------------------------------

/// Basic singleton: the type keeps its only instance in its own static slot.
#[derive(Debug)]
pub struct SingletonA {
    serial: u64,
}

static SINGLETON_A: GuardedSingleton<SingletonA> = GuardedSingleton::new();

impl SingletonA {
    /// Returns the one `SingletonA`, creating it on first call.
    pub fn instance() -> &'static SingletonA {
        SINGLETON_A.get_or_init(|| SingletonA {
            serial: next_serial(),
        })
    }

    pub fn serial(&self) -> u64 {
        self.serial
    }
}

// -------------------------------------------------------------------------------------------------
// SingletonB
// -------------------------------------------------------------------------------------------------

/// Thread-safe singleton holding a value, created through the process-wide registry.
///
/// The value passed by the first successful caller sticks. Values passed later are
/// ignored: `SingletonB::instance("BAR")` after `SingletonB::instance("FOO")` still
/// reports `"FOO"`.
#[derive(Debug)]
pub struct SingletonB {
    value: String,
    serial: u64,
}

impl SingletonB {
    /// Returns the one `SingletonB`, creating it from `value` on first call.
    pub fn instance(value: impl Into<String>) -> Arc<SingletonB> {
        let value = value.into();
        crate::get_or_init(|| SingletonB {
            value,
            serial: next_serial(),
        })
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn serial(&self) -> u64 {
        self.serial
    }
}

impl Construct for SingletonB {
    type Args = String;
    type Error = Infallible;

    fn construct(value: String) -> Result<Self, Infallible> {
        Ok(SingletonB {
            value,
            serial: next_serial(),
        })
    }
}

// -------------------------------------------------------------------------------------------------
// SingletonC
// -------------------------------------------------------------------------------------------------

/// Unlocked singleton: one cached instance per thread, no synchronization.
#[derive(Debug)]
pub struct SingletonC {
    serial: u64,
}

thread_local! {
    static SINGLETON_C: LocalSingleton<SingletonC> = const { LocalSingleton::new() };
}

impl SingletonC {
    /// Returns this thread's `SingletonC`, creating it on first call.
    pub fn instance() -> Rc<SingletonC> {
        SINGLETON_C.with(|slot| {
            slot.get_or_init(|| SingletonC {
                serial: next_serial(),
            })
        })
    }

    pub fn serial(&self) -> u64 {
        self.serial
    }
}
