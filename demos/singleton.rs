//! Singleton example for creational-patterns.
//!
//! Demonstrates:
//! - The basic variant: one static slot owned by the type
//! - The thread-safe registry variant: two threads race with different arguments
//! - The unlocked variant: one cached instance per thread
//!
//! Run with: `cargo run --example singleton`
//! Set `RUST_LOG=debug` to see which caller constructed each instance.

use creational_patterns::singleton::{SingletonA, SingletonB, SingletonC};
use creational_patterns::{set_trace_callback, RegistryEvent};
use std::rc::Rc;
use std::sync::{Arc, Barrier};
use std::thread;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_thread_names(true)
        .init();

    set_trace_callback(|event| {
        if let RegistryEvent::Construct { type_name } = event {
            info!(type_name = *type_name, "registry constructed a new instance");
        }
    });

    // -------------------------------------------------------------------------
    // 1. Basic variant
    // -------------------------------------------------------------------------
    println!("1. SingletonA (static slot)");

    let s1 = SingletonA::instance();
    let s2 = SingletonA::instance();
    println!("   same instance: {}", std::ptr::eq(s1, s2));

    // -------------------------------------------------------------------------
    // 2. Thread-safe registry variant
    // -------------------------------------------------------------------------
    println!("\n2. SingletonB (guarded registry)");

    let barrier = Arc::new(Barrier::new(2));
    let handles: Vec<_> = ["FOO", "BAR"]
        .into_iter()
        .map(|value| {
            let barrier = barrier.clone();
            thread::Builder::new()
                .name(format!("caller-{}", value.to_lowercase()))
                .spawn(move || {
                    barrier.wait();
                    let singleton = SingletonB::instance(value);
                    println!("   asked for {value}, got {}", singleton.value());
                    singleton
                })
                .expect("failed to spawn caller thread")
        })
        .collect();

    let results: Vec<Arc<SingletonB>> = handles
        .into_iter()
        .map(|h| h.join().expect("caller thread panicked"))
        .collect();

    println!(
        "   winner: {} (both callers share it: {})",
        results[0].value(),
        Arc::ptr_eq(&results[0], &results[1])
    );

    // -------------------------------------------------------------------------
    // 3. Unlocked variant
    // -------------------------------------------------------------------------
    println!("\n3. SingletonC (unlocked, per thread)");

    let s5 = SingletonC::instance();
    let s6 = SingletonC::instance();
    println!("   same instance: {}", Rc::ptr_eq(&s5, &s6));

    let other_thread = thread::spawn(|| SingletonC::instance().serial())
        .join()
        .expect("thread panicked");
    println!(
        "   serial here: {}, serial on another thread: {}",
        s5.serial(),
        other_thread
    );
}
