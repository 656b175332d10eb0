//! Explicit constructor contract used by `get_instance`.

use crate::BoxError;

/// A type that can build itself from constructor arguments.
///
/// Registries and slots call [`Construct::construct`] only on first creation.
/// Arguments supplied once an instance exists are dropped unused.
///
/// # Examples
///
/// ```rust
/// use creational_patterns::Construct;
/// use std::convert::Infallible;
///
/// struct Greeting(String);
///
/// impl Construct for Greeting {
///     type Args = &'static str;
///     type Error = Infallible;
///
///     fn construct(name: Self::Args) -> Result<Self, Self::Error> {
///         Ok(Greeting(format!("Hello, {name}!")))
///     }
/// }
///
/// let greeting = Greeting::construct("World").unwrap();
/// assert_eq!(greeting.0, "Hello, World!");
/// ```
pub trait Construct: Sized {
    /// Arguments consumed by the constructor.
    type Args;

    /// Constructor failure. Use `std::convert::Infallible` when construction cannot fail.
    type Error: Into<BoxError>;

    fn construct(args: Self::Args) -> Result<Self, Self::Error>;
}
