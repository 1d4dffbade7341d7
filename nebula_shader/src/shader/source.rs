/// Shader source capabilities.
///
/// File loading and text decoding live outside this subsystem; shaders
/// only see the `SourceProvider` capability, which yields source text
/// for a logical name. Two concrete providers are included: an
/// in-memory map (used by the default-shader factory and by tests) and
/// the sources bundled with the crate at build time.

use rustc_hash::FxHashMap;
use crate::error::{Error, Result};

/// Logical name of the bundled default vertex shader source
pub const DEFAULT_VERTEX_SOURCE_NAME: &str = "default.vert";

/// Logical name of the bundled default fragment shader source
pub const DEFAULT_FRAGMENT_SOURCE_NAME: &str = "default.frag";

/// Capability yielding shader source text for a logical name
pub trait SourceProvider: Send + Sync {
    /// Read the full source text for `name`
    ///
    /// # Errors
    ///
    /// Fails with [`Error::SourceNotFound`] when the name cannot be
    /// resolved.
    fn read_source(&self, name: &str) -> Result<String>;
}

// ===== IN-MEMORY PROVIDER =====

/// Source provider backed by an in-memory name → text map
pub struct MemorySourceProvider {
    sources: FxHashMap<String, String>,
}

impl MemorySourceProvider {
    /// Create a new empty provider
    pub fn new() -> Self {
        Self {
            sources: FxHashMap::default(),
        }
    }

    /// Store (or replace) the source text for `name`
    pub fn insert(&mut self, name: impl Into<String>, source: impl Into<String>) {
        self.sources.insert(name.into(), source.into());
    }

    /// Number of stored sources
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Whether no sources are stored
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

impl Default for MemorySourceProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceProvider for MemorySourceProvider {
    fn read_source(&self, name: &str) -> Result<String> {
        self.sources
            .get(name)
            .cloned()
            .ok_or_else(|| Error::SourceNotFound {
                name: name.to_string(),
            })
    }
}

// ===== BUNDLED PROVIDER =====

/// Provider over the shader sources bundled with the crate at build time
///
/// Resolves exactly the two default logical names,
/// [`DEFAULT_VERTEX_SOURCE_NAME`] and [`DEFAULT_FRAGMENT_SOURCE_NAME`].
pub struct BundledSources;

impl SourceProvider for BundledSources {
    fn read_source(&self, name: &str) -> Result<String> {
        match name {
            DEFAULT_VERTEX_SOURCE_NAME => {
                Ok(include_str!("../../shaders/default.vert").to_string())
            }
            DEFAULT_FRAGMENT_SOURCE_NAME => {
                Ok(include_str!("../../shaders/default.frag").to_string())
            }
            _ => Err(Error::SourceNotFound {
                name: name.to_string(),
            }),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "source_tests.rs"]
mod tests;
