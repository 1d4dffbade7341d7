//! Error types for the Nebula shader subsystem
//!
//! This module defines the error types raised by shader compilation,
//! program linking, uniform validation and source resolution. All errors
//! are raised synchronously to the immediate caller; no local recovery
//! or retry is performed here.

use std::fmt;
use crate::shader::ShaderStage;

/// Result type for shader subsystem operations
pub type Result<T> = std::result::Result<T, Error>;

/// Nebula shader subsystem errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Requested stage has no entry in the fixed stage table
    UnsupportedStage(ShaderStage),

    /// The backend reported a shader compile failure
    CompilationFailed {
        /// Stage of the shader that failed to compile
        stage: ShaderStage,
        /// Backend diagnostic log, verbatim
        log: String,
    },

    /// The backend reported a program link failure
    LinkFailed {
        /// Backend diagnostic log, verbatim
        log: String,
    },

    /// A declared uniform is never referenced by the linked program
    ValidationFailed {
        /// Name of the offending uniform
        uniform: String,
    },

    /// The source provider could not resolve a logical shader name
    SourceNotFound {
        /// The unresolved logical name
        name: String,
    },

    /// A uniform block name is not present in the linked program
    BlockNotFound {
        /// The unresolved block name
        name: String,
    },

    /// Backend-level failure or API misuse (graphics device, locks, lifecycle)
    Device(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnsupportedStage(stage) => {
                write!(f, "Unsupported shader stage: {}", stage)
            }
            Error::CompilationFailed { stage, log } => {
                write!(f, "{} shader compilation failed: {}", stage, log)
            }
            Error::LinkFailed { log } => {
                write!(f, "Shader program link failed: {}", log)
            }
            Error::ValidationFailed { uniform } => {
                write!(f, "Uniform '{}' is not used by the linked program", uniform)
            }
            Error::SourceNotFound { name } => {
                write!(f, "Shader source '{}' not found", name)
            }
            Error::BlockNotFound { name } => {
                write!(f, "Uniform block '{}' not found in the linked program", name)
            }
            Error::Device(msg) => write!(f, "Graphics device error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

// ===== ERROR MACROS =====

/// Build an [`Error::Device`] and log it at ERROR severity
///
/// # Example
///
/// ```no_run
/// use nebula_shader::nebula_err;
///
/// let err = nebula_err!("nebula::ShaderProgram", "apply() called before compile()");
/// ```
#[macro_export]
macro_rules! nebula_err {
    ($source:expr, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::log::log_detailed(
            $crate::log::LogSeverity::Error,
            $source,
            message.clone(),
            file!(),
            line!(),
        );
        $crate::error::Error::Device(message)
    }};
}

/// Log an ERROR and return early with an [`Error::Device`]
///
/// # Example
///
/// ```no_run
/// use nebula_shader::error::Result;
/// use nebula_shader::nebula_bail;
///
/// fn check_uncompiled(compiled: bool, name: &str) -> Result<()> {
///     if compiled {
///         nebula_bail!("nebula::Shader", "Shader '{}' is already compiled", name);
///     }
///     Ok(())
/// }
/// ```
#[macro_export]
macro_rules! nebula_bail {
    ($source:expr, $($arg:tt)*) => {
        return Err($crate::nebula_err!($source, $($arg)*))
    };
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
