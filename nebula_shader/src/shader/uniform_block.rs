/// Uniform block descriptors.

use std::sync::atomic::{AtomicU64, Ordering};

/// Stable identity of a [`UniformBlock`] instance
///
/// Binding dedup is keyed on this id rather than on the block name:
/// two blocks carrying the same name are distinct binding targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockId(u64);

static NEXT_BLOCK_ID: AtomicU64 = AtomicU64::new(0);

/// Named GPU uniform-block descriptor with a binding point
///
/// Each instance receives a unique [`BlockId`] at creation; the id is
/// what a program's bound-block set records. The type is deliberately
/// not `Clone`: an instance *is* a binding identity.
#[derive(Debug)]
pub struct UniformBlock {
    id: BlockId,
    name: String,
    binding_point: u32,
}

impl UniformBlock {
    /// Create a block descriptor for `name` bound at `binding_point`
    pub fn new(name: impl Into<String>, binding_point: u32) -> Self {
        Self {
            id: BlockId(NEXT_BLOCK_ID.fetch_add(1, Ordering::Relaxed)),
            name: name.into(),
            binding_point,
        }
    }

    /// Stable identity of this instance
    pub fn id(&self) -> BlockId {
        self.id
    }

    /// Block name as declared in shader source
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Numbered binding point this block binds to
    pub fn binding_point(&self) -> u32 {
        self.binding_point
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "uniform_block_tests.rs"]
mod tests;
