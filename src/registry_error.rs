/// Boxed error produced by a singleton constructor.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors returned while resolving a singleton instance.
///
/// Passing different constructor arguments after the instance exists is not an
/// error: the arguments are ignored and the existing instance is returned.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// The constructor failed during first creation. Nothing was stored, so a
    /// later call may retry.
    #[error("failed to construct singleton instance of {type_name}: {source}")]
    ConstructionFailed {
        type_name: &'static str,
        source: BoxError,
    },
}

impl RegistryError {
    pub(crate) fn construction_failed<T>(source: impl Into<BoxError>) -> Self {
        RegistryError::ConstructionFailed {
            type_name: std::any::type_name::<T>(),
            source: source.into(),
        }
    }

    /// Name of the type whose construction failed.
    pub fn type_name(&self) -> &'static str {
        match self {
            RegistryError::ConstructionFailed { type_name, .. } => type_name,
        }
    }
}
