//! Macros for creating isolated singleton registries.

/// Creates an isolated singleton registry with a single macro invocation.
///
/// The macro generates a module containing:
/// - Storage, creation lock and trace callback statics (hidden)
/// - An `Api` struct that implements `SingletonRegistry`
/// - Free functions delegating to it
///
/// # Examples
///
/// ```rust
/// use creational_patterns::define_registry;
/// use std::sync::Arc;
///
/// define_registry!(services);
///
/// struct Database {
///     url: String,
/// }
///
/// let db: Arc<Database> = services::get_or_init(|| Database {
///     url: "postgres://localhost".to_string(),
/// });
/// assert_eq!(db.url, "postgres://localhost");
/// assert!(services::contains::<Database>());
/// ```
///
/// # Multiple Registries
///
/// Each registry holds its own instance per type:
///
/// ```rust
/// use creational_patterns::define_registry;
///
/// define_registry!(primary);
/// define_registry!(replica);
///
/// struct Endpoint(&'static str);
///
/// primary::get_or_init(|| Endpoint("10.0.0.1"));
/// replica::get_or_init(|| Endpoint("10.0.0.2"));
///
/// assert_eq!(primary::get_or_init(|| Endpoint("unused")).0, "10.0.0.1");
/// assert_eq!(replica::get_or_init(|| Endpoint("unused")).0, "10.0.0.2");
/// ```
#[macro_export]
macro_rules! define_registry {
    ($name:ident) => {
        pub mod $name {
            use std::collections::HashMap;
            use std::sync::{Arc, LazyLock, Mutex, RwLock};

            // Instances created in this registry (module-private)
            static STORAGE: $crate::Storage = LazyLock::new(|| RwLock::new(HashMap::new()));

            // Per-type creation locks (module-private)
            static LOCKS: $crate::CreationLocks = LazyLock::new(|| Mutex::new(HashMap::new()));

            // Trace callback storage (module-private)
            static TRACE: $crate::TraceSlot = LazyLock::new(|| Mutex::new(None));

            /// Zero-sized type that implements the registry API.
            ///
            /// All registry operations are provided by the `SingletonRegistry` trait's
            /// default implementations. This struct only provides access to the statics.
            struct Api;

            impl $crate::SingletonRegistry for Api {
                fn storage() -> &'static $crate::Storage {
                    &STORAGE
                }

                fn creation_locks() -> &'static $crate::CreationLocks {
                    &LOCKS
                }

                fn trace() -> &'static $crate::TraceSlot {
                    &TRACE
                }
            }

            const API: Api = Api;

            /// Returns the instance of `T`, constructing it from `args` on first use.
            /// Arguments passed after the instance exists are ignored.
            #[allow(dead_code)]
            pub fn get_instance<T>(args: T::Args) -> Result<Arc<T>, $crate::RegistryError>
            where
                T: $crate::Construct + Send + Sync + 'static,
            {
                use $crate::SingletonRegistry;
                API.get_instance::<T>(args)
            }

            /// Returns the instance of `T`, creating it with `init` on first use.
            #[allow(dead_code)]
            pub fn get_or_init<T, F>(init: F) -> Arc<T>
            where
                T: Send + Sync + 'static,
                F: FnOnce() -> T,
            {
                use $crate::SingletonRegistry;
                API.get_or_init(init)
            }

            /// Returns the instance of `T`, creating it with the fallible `init` on first use.
            #[allow(dead_code)]
            pub fn get_or_try_init<T, E, F>(init: F) -> Result<Arc<T>, $crate::RegistryError>
            where
                T: Send + Sync + 'static,
                E: Into<$crate::BoxError>,
                F: FnOnce() -> Result<T, E>,
            {
                use $crate::SingletonRegistry;
                API.get_or_try_init(init)
            }

            /// Check if an instance of `T` exists in the registry.
            #[allow(dead_code)]
            pub fn contains<T: Send + Sync + 'static>() -> bool {
                use $crate::SingletonRegistry;
                API.contains::<T>()
            }

            /// Set a tracing callback for registry operations.
            #[allow(dead_code)]
            pub fn set_trace_callback(
                callback: impl Fn(&$crate::RegistryEvent) + Send + Sync + 'static,
            ) {
                use $crate::SingletonRegistry;
                API.set_trace_callback(callback)
            }

            /// Clear the tracing callback.
            #[allow(dead_code)]
            pub fn clear_trace_callback() {
                use $crate::SingletonRegistry;
                API.clear_trace_callback()
            }
        }
    };
}
