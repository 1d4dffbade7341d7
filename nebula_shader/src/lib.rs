/*!
# Nebula Shader

Shader-program management for the Nebula rendering pipeline.

This crate compiles shader source into GPU shader objects, links shader
stages into usable program objects, manages uniform state and GPU
uniform-block bindings, validates the uniform contract of a linked
program, and caches singleton default shaders keyed by logical identity.

It never talks to a graphics API directly: every backend round-trip goes
through the [`GraphicsDevice`](device::GraphicsDevice) capability trait,
implemented by concrete device backends. Backend error reporting is
asynchronous to the call that caused it, so compile and link results are
pulled through explicit status/log queries after each step.

## Architecture

- **GraphicsDevice**: opaque backend capability (create/compile/link/
  query operations over handle newtypes)
- **Shader**: one stage's source compiled into a GPU shader object
- **ShaderProgram**: owns a shader set, links it, applies uniform state,
  validates uniforms, binds uniform blocks
- **UniformContainer / UniformBlock**: host-side uniform state with
  dirty tracking, and identity-keyed block descriptors
- **DefaultShaderFactory**: singleton-per-identity built-in shaders
*/

// Internal modules
pub mod error;
pub mod log;
pub mod device;
pub mod shader;
pub mod utils;

// Main nebula namespace module
pub mod nebula {
    // Error types
    pub use crate::error::{Error, Result};

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
        // Note: nebula_* macros are exported at the crate root
    }

    // Device sub-module with the backend capability types
    pub mod device {
        pub use crate::device::*;
    }

    // Shader sub-module with all shader management types
    pub mod shader {
        pub use crate::shader::*;
    }

    // Utility sub-module
    pub mod utils {
        pub use crate::utils::*;
    }
}

// Re-export math library at crate root
pub use glam;
