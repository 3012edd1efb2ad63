use thiserror::Error;

/// Errors emitted while building fixture maps and materializing beans.
///
/// All variants are fatal to the current call; nothing here is retried or
/// partially recovered.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// A custom-kind property has no registered generator.
    #[error("no generator registered for type '{type_name}' (property '{property}' of bean '{bean}')")]
    UnresolvableType {
        bean: String,
        property: String,
        type_name: &'static str,
    },
    /// A required constructor parameter has no entry in the supplied map.
    #[error("missing constructor argument '{parameter}' for bean '{bean}'")]
    MissingConstructorArgument { bean: String, parameter: String },
    /// A constructor argument exists but holds a value of the wrong kind.
    #[error("constructor argument '{parameter}' for bean '{bean}' holds {actual}, expected {expected}")]
    MismatchedConstructorArgument {
        bean: String,
        parameter: String,
        expected: &'static str,
        actual: &'static str,
    },
    /// Validation was asked about a property the bean does not declare.
    #[error("bean '{bean}' declares no property named '{property}'")]
    MissingProperty { bean: String, property: String },
    /// An override yielded no value for a key that must stay populated.
    #[error("override for property '{property}' of bean '{bean}' produced no value")]
    OverrideProducedAbsent { bean: String, property: String },
    /// A validated property differs from the reference map.
    #[error("property '{property}' of bean '{bean}' mismatch: actual {actual}, expected {expected}")]
    AssertionMismatch {
        bean: String,
        property: String,
        actual: String,
        expected: String,
    },
}

/// Convenience alias for results returned by this crate.
pub type Result<T> = std::result::Result<T, FixtureError>;
