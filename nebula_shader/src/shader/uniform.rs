/// Uniform value storage with dirty tracking.
///
/// A `UniformContainer` holds the host-side value of every uniform a
/// program wants to supply, together with a per-value updated flag and a
/// container-level "any updated" flag. The program's apply path checks
/// the container-level flag first, so a frame with no uniform changes
/// skips the upload loop entirely.

use glam::{Mat4, Vec4};
use rustc_hash::FxHashMap;

// ===== VALUES =====

/// A typed uniform payload
///
/// Closed set of GPU value kinds; upload dispatch matches on the tag
/// exhaustively.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UniformValue {
    Float(f32),
    Double(f64),
    Int(i32),
    Vec4(Vec4),
    Mat4(Mat4),
}

/// A named uniform value with its updated flag
#[derive(Debug, Clone)]
pub struct Uniform {
    name: String,
    value: UniformValue,
    updated: bool,
}

impl Uniform {
    /// Get the uniform name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the current value
    pub fn value(&self) -> &UniformValue {
        &self.value
    }

    /// Whether the value changed since the last bulk clear
    pub fn is_updated(&self) -> bool {
        self.updated
    }
}

// ===== CONTAINER =====

/// Typed storage of named uniform values
///
/// Invariant: the container-level flag is true iff at least one
/// contained uniform's updated flag is true. Setting a value raises
/// both; [`clear_updated`](UniformContainer::clear_updated) resets both
/// in one bulk step.
#[derive(Debug)]
pub struct UniformContainer {
    uniforms: Vec<Uniform>,
    names: FxHashMap<String, usize>,
    any_updated: bool,
}

impl UniformContainer {
    /// Create a new empty container
    pub fn new() -> Self {
        Self {
            uniforms: Vec::new(),
            names: FxHashMap::default(),
            any_updated: false,
        }
    }

    /// Set (insert or overwrite) a uniform value and mark it updated
    pub fn set(&mut self, name: &str, value: UniformValue) {
        match self.names.get(name) {
            Some(&index) => {
                let uniform = &mut self.uniforms[index];
                uniform.value = value;
                uniform.updated = true;
            }
            None => {
                self.names.insert(name.to_string(), self.uniforms.len());
                self.uniforms.push(Uniform {
                    name: name.to_string(),
                    value,
                    updated: true,
                });
            }
        }
        self.any_updated = true;
    }

    /// Get the current value of a uniform by name
    pub fn get(&self, name: &str) -> Option<&UniformValue> {
        self.uniform(name).map(Uniform::value)
    }

    /// Get a uniform entry by name
    pub fn uniform(&self, name: &str) -> Option<&Uniform> {
        let index = self.names.get(name)?;
        self.uniforms.get(*index)
    }

    /// All uniform entries, in insertion order
    pub fn uniforms(&self) -> &[Uniform] {
        &self.uniforms
    }

    /// Whether any contained uniform changed since the last bulk clear
    pub fn any_updated(&self) -> bool {
        self.any_updated
    }

    /// Clear every per-value updated flag and the container-level flag
    pub fn clear_updated(&mut self) {
        for uniform in &mut self.uniforms {
            uniform.updated = false;
        }
        self.any_updated = false;
    }

    /// Number of stored uniforms
    pub fn len(&self) -> usize {
        self.uniforms.len()
    }

    /// Whether the container holds no uniforms
    pub fn is_empty(&self) -> bool {
        self.uniforms.is_empty()
    }
}

impl Default for UniformContainer {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "uniform_tests.rs"]
mod tests;
