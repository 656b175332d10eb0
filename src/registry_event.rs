/// Events emitted by a registry while resolving instances.
///
/// These events are passed to the tracing callback set via `set_trace_callback`.
/// The `Clone` derive allows callbacks to store or forward events if needed.
///
/// # Examples
///
/// ```rust
/// use creational_patterns::RegistryEvent;
///
/// let event = RegistryEvent::Construct { type_name: "i32" };
/// assert_eq!(event.to_string(), "construct { type_name: i32 }");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryEvent {
    /// The instance already existed and was returned without taking the creation lock.
    Hit {
        /// The type name of the requested instance (e.g., "i32", "alloc::string::String")
        type_name: &'static str,
    },

    /// The caller took the creation lock but another caller had published the
    /// instance in the meantime.
    Contended {
        /// The type name of the requested instance
        type_name: &'static str,
    },

    /// The caller constructed and published the instance.
    Construct {
        /// The type name of the constructed instance
        type_name: &'static str,
    },

    /// The constructor failed; the entry stays absent.
    ConstructionFailed {
        /// The type name whose constructor failed
        type_name: &'static str,
    },

    /// A type existence check was performed.
    Contains {
        /// The type name that was checked
        type_name: &'static str,
        /// Whether an instance exists in the registry
        found: bool,
    },
}

impl RegistryEvent {
    /// The type name the event refers to.
    pub fn type_name(&self) -> &'static str {
        match self {
            RegistryEvent::Hit { type_name }
            | RegistryEvent::Contended { type_name }
            | RegistryEvent::Construct { type_name }
            | RegistryEvent::ConstructionFailed { type_name }
            | RegistryEvent::Contains { type_name, .. } => type_name,
        }
    }
}

impl std::fmt::Display for RegistryEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistryEvent::Hit { type_name } => write!(f, "hit {{ type_name: {} }}", type_name),
            RegistryEvent::Contended { type_name } => {
                write!(f, "contended {{ type_name: {} }}", type_name)
            }
            RegistryEvent::Construct { type_name } => {
                write!(f, "construct {{ type_name: {} }}", type_name)
            }
            RegistryEvent::ConstructionFailed { type_name } => {
                write!(f, "construction failed {{ type_name: {} }}", type_name)
            }
            RegistryEvent::Contains { type_name, found } => {
                write!(
                    f,
                    "contains {{ type_name: {}, found: {} }}",
                    type_name, found
                )
            }
        }
    }
}
