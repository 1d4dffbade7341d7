/// Shader pipeline stages and the fixed stage-constant table

use std::fmt;
use crate::device::StageConstant;

/// A single phase of the graphics pipeline implemented by a shader object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    /// Vertex shader
    Vertex,
    /// Fragment/Pixel shader
    Fragment,
    /// Geometry shader
    Geometry,
    /// Tessellation control shader
    TessellationControl,
    /// Tessellation evaluation shader
    TessellationEvaluation,
    /// Compute shader
    Compute,
    /// Task stage of the mesh-shading pipeline (vendor extension)
    Task,
    /// Mesh stage of the mesh-shading pipeline (vendor extension)
    Mesh,
}

impl ShaderStage {
    /// Fixed stage table: each classic pipeline stage maps 1:1 to its
    /// backend stage constant. Built at compile time, never mutated.
    ///
    /// The mesh-shading stages (`Task`, `Mesh`) have no entry; requesting
    /// them is the unsupported-stage error condition, not a silent
    /// default.
    pub fn stage_constant(self) -> Option<StageConstant> {
        match self {
            ShaderStage::Vertex => Some(StageConstant(0x8B31)),
            ShaderStage::Fragment => Some(StageConstant(0x8B30)),
            ShaderStage::Geometry => Some(StageConstant(0x8DD9)),
            ShaderStage::TessellationControl => Some(StageConstant(0x8E88)),
            ShaderStage::TessellationEvaluation => Some(StageConstant(0x8E87)),
            ShaderStage::Compute => Some(StageConstant(0x91B9)),
            ShaderStage::Task | ShaderStage::Mesh => None,
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShaderStage::Vertex => "vertex",
            ShaderStage::Fragment => "fragment",
            ShaderStage::Geometry => "geometry",
            ShaderStage::TessellationControl => "tessellation-control",
            ShaderStage::TessellationEvaluation => "tessellation-evaluation",
            ShaderStage::Compute => "compute",
            ShaderStage::Task => "task",
            ShaderStage::Mesh => "mesh",
        };
        write!(f, "{}", name)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "stage_tests.rs"]
mod tests;
