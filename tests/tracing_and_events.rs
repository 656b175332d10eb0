//! Integration tests for tracing and event monitoring.
//!
//! The trace callback reports which path every lookup took, which makes the
//! double-checked creation protocol observable from the outside.

use creational_patterns::{define_registry, RegistryEvent};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier, Mutex};
use std::thread;
use std::time::Duration;

fn record(events: &Arc<Mutex<Vec<String>>>) -> impl Fn(&RegistryEvent) + Send + Sync + 'static {
    let events = events.clone();
    move |event: &RegistryEvent| events.lock().unwrap().push(format!("{}", event))
}

#[test]
fn test_construct_then_hit() {
    define_registry!(traced1);

    let events = Arc::new(Mutex::new(Vec::new()));
    traced1::set_trace_callback(record(&events));

    traced1::get_or_init(|| 42u32);
    traced1::get_or_init(|| 43u32);
    let _ = traced1::contains::<u32>();

    let captured = events.lock().unwrap();
    assert_eq!(
        *captured,
        [
            "construct { type_name: u32 }",
            "hit { type_name: u32 }",
            "contains { type_name: u32, found: true }",
        ]
    );
}

#[test]
fn test_construction_failed_event() {
    define_registry!(traced2);

    let events = Arc::new(Mutex::new(Vec::new()));
    traced2::set_trace_callback(record(&events));

    let _ = traced2::get_or_try_init::<u64, _, _>(|| Err("no"));
    traced2::get_or_init(|| 7u64);

    let captured = events.lock().unwrap();
    assert_eq!(
        *captured,
        [
            "construction failed { type_name: u64 }",
            "construct { type_name: u64 }",
        ]
    );
}

#[test]
fn test_contains_does_not_construct() {
    define_registry!(traced3);

    let events = Arc::new(Mutex::new(Vec::new()));
    traced3::set_trace_callback(record(&events));

    assert!(!traced3::contains::<String>());
    assert!(!traced3::contains::<String>());

    let captured = events.lock().unwrap();
    assert_eq!(captured.len(), 2);
    assert!(captured
        .iter()
        .all(|e| e == "contains { type_name: alloc::string::String, found: false }"));
}

#[test]
fn test_concurrent_callers_produce_one_construct_event() {
    define_registry!(traced4);

    const CALLERS: usize = 4;

    let constructs = Arc::new(AtomicUsize::new(0));
    let others = Arc::new(AtomicUsize::new(0));
    let (c, o) = (constructs.clone(), others.clone());

    traced4::set_trace_callback(move |event| match event {
        RegistryEvent::Construct { .. } => {
            c.fetch_add(1, Ordering::SeqCst);
        }
        RegistryEvent::Hit { .. } | RegistryEvent::Contended { .. } => {
            o.fetch_add(1, Ordering::SeqCst);
        }
        _ => {}
    });

    let barrier = Arc::new(Barrier::new(CALLERS));
    let handles: Vec<_> = (0..CALLERS)
        .map(|i| {
            let barrier = barrier.clone();
            thread::spawn(move || {
                barrier.wait();
                traced4::get_or_init(|| {
                    thread::sleep(Duration::from_millis(20));
                    i
                })
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(constructs.load(Ordering::SeqCst), 1);
    assert_eq!(others.load(Ordering::SeqCst), CALLERS - 1);
}

#[test]
fn test_clear_trace_callback() {
    define_registry!(traced5);

    let events = Arc::new(Mutex::new(Vec::new()));
    traced5::set_trace_callback(record(&events));

    traced5::get_or_init(|| 1u8);
    traced5::clear_trace_callback();
    traced5::get_or_init(|| 2u8);
    let _ = traced5::contains::<u8>();

    assert_eq!(events.lock().unwrap().len(), 1);
}

#[test]
fn test_trace_callback_replacement() {
    define_registry!(traced6);

    let events1 = Arc::new(Mutex::new(Vec::new()));
    let events2 = Arc::new(Mutex::new(Vec::new()));

    traced6::set_trace_callback(record(&events1));
    traced6::get_or_init(|| 100usize);

    traced6::set_trace_callback(record(&events2));
    traced6::get_or_init(|| 200usize);

    assert_eq!(*events1.lock().unwrap(), ["construct { type_name: usize }"]);
    assert_eq!(*events2.lock().unwrap(), ["hit { type_name: usize }"]);

    traced6::clear_trace_callback();
}

#[test]
fn test_callback_can_use_different_registry() {
    define_registry!(main_registry);
    define_registry!(log_registry);

    struct LastEvent(String);

    main_registry::set_trace_callback(move |event| {
        log_registry::get_or_init(|| LastEvent(format!("first event: {}", event)));
    });

    main_registry::get_or_init(|| 42i32);

    let last = log_registry::get_or_init(|| LastEvent(String::new()));
    assert_eq!(last.0, "first event: construct { type_name: i32 }");

    main_registry::clear_trace_callback();
}
