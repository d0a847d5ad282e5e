//! Errors produced by the distance strategies and their surrounding utilities.
//!
//! Errors are never logged by the library; they carry their call site so that the binaries can
//! report where they originated.

use std::{error, fmt};

/// The category of a [DistanceError].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// One of the input sequences was absent.
    NullArgument,
    /// The input sequences do not have the same length, but the strategy requires them to.
    LengthMismatch,
    /// Any other invalid input (unknown names, unreadable or malformed configuration...).
    Invalid,
}

/// An error raised while computing a distance or handling its configuration.
#[derive(Debug, Clone)]
pub struct DistanceError {
    /// The category of the error.
    pub kind: ErrorKind,
    /// The module in which the error was created.
    pub function: String,
    /// The line at which the error was created.
    pub line: u32,
    /// The file in which the error was created.
    pub file: String,
    /// A human-readable description of the error.
    pub message: String,
}

impl error::Error for DistanceError {}
impl fmt::Display for DistanceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Create a [DistanceError] at the call site.
///
/// The error kind may be given as a prefix (`error!(LengthMismatch: "...")`); it defaults to
/// [ErrorKind::Invalid].
#[macro_export]
macro_rules! error {
    ( $kind:ident : $( $arg:expr ),+ ) => {{
        $crate::error::DistanceError {
            kind: $crate::error::ErrorKind::$kind,
            message: format!($( $arg ),+),
            function: module_path!().to_string(),
            file: file!().to_string(),
            line: line!(),
        }
    }};
    ( $( $arg:expr ),+ ) => {{
        $crate::error!(Invalid: $( $arg ),+)
    }};
}

/// Produce an `Err` holding a [DistanceError] created at the call site.
///
/// Accepts the same arguments as [error!].
#[macro_export]
macro_rules! fail {
    ( $( $arg:tt )+ ) => {{
        Err($crate::error!($( $arg )+))
    }};
}

/// Ensure that an argument is present.
///
/// # Arguments
/// * `value` - The argument to check.
/// * `name` - The name of the argument, used in the error message.
pub fn require<'a, T: ?Sized>(value: Option<&'a T>, name: &str) -> Result<&'a T, DistanceError> {
    value.ok_or_else(|| error!(NullArgument: "null sequence: '{}' is absent.", name))
}
