/// GraphicsDevice trait - opaque backend capability for shader management
///
/// The shader subsystem never talks to a graphics API directly. Every
/// backend round-trip goes through this trait, implemented by concrete
/// device backends (GL, WebGL, a software rasterizer, the test mock).
/// Errors from compilation and linking are asynchronous to the call that
/// caused them: the backend only reports them through the explicit
/// status/log queries below.

use glam::{Mat4, Vec4};
use crate::error::Result;

// ============================================================================
// Handle types
// ============================================================================

/// Backend-specific numeric stage constant
///
/// Produced by the fixed stage table (see `shader::stage`) and consumed
/// by [`GraphicsDevice::create_shader`]. The value is opaque to this
/// subsystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StageConstant(pub u32);

/// Opaque handle to a GPU-resident shader object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShaderHandle(pub u32);

/// Opaque handle to a GPU-resident program object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProgramHandle(pub u32);

/// Resolved location of a named uniform within a linked program
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UniformLocation(pub u32);

/// Index of a named uniform block within a linked program
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockIndex(pub u32);

// ============================================================================
// GraphicsDevice trait
// ============================================================================

/// Backend graphics device capability
///
/// All operations are blocking round-trips against the backend context
/// and must execute on the thread that owns that context. Name lookups
/// (`uniform_location`, `uniform_block_index`) return `None` for the
/// backend's not-found sentinel instead of an error; callers decide
/// whether absence is benign.
pub trait GraphicsDevice: Send + Sync {
    // ----- shader objects -----

    /// Create a new shader object for the given stage constant
    fn create_shader(&mut self, stage: StageConstant) -> Result<ShaderHandle>;

    /// Replace the source text of a shader object
    fn shader_source(&mut self, shader: ShaderHandle, source: &str);

    /// Trigger compilation of a shader object
    ///
    /// Success or failure is only observable through
    /// [`shader_compile_status`](Self::shader_compile_status).
    fn compile_shader(&mut self, shader: ShaderHandle);

    /// Query the compile-status flag of a shader object
    fn shader_compile_status(&self, shader: ShaderHandle) -> bool;

    /// Query the diagnostic info log of a shader object
    fn shader_info_log(&self, shader: ShaderHandle) -> String;

    /// Release a shader object
    fn delete_shader(&mut self, shader: ShaderHandle);

    // ----- program objects -----

    /// Create a new program object
    fn create_program(&mut self) -> Result<ProgramHandle>;

    /// Attach a compiled shader object to a program
    fn attach_shader(&mut self, program: ProgramHandle, shader: ShaderHandle);

    /// Trigger linking of a program
    ///
    /// Success or failure is only observable through
    /// [`program_link_status`](Self::program_link_status).
    fn link_program(&mut self, program: ProgramHandle);

    /// Query the link-status flag of a program
    fn program_link_status(&self, program: ProgramHandle) -> bool;

    /// Query the diagnostic info log of a program
    fn program_info_log(&self, program: ProgramHandle) -> String;

    /// Make a program the backend's current program
    fn use_program(&mut self, program: ProgramHandle);

    /// Release a program object
    fn delete_program(&mut self, program: ProgramHandle);

    // ----- uniforms -----

    /// Resolve a uniform name to its location, `None` if the linked
    /// program does not reference it
    fn uniform_location(&self, program: ProgramHandle, name: &str) -> Option<UniformLocation>;

    /// Upload a scalar float uniform
    fn set_uniform_float(&mut self, location: UniformLocation, value: f32);

    /// Upload a scalar double uniform
    fn set_uniform_double(&mut self, location: UniformLocation, value: f64);

    /// Upload a scalar int uniform
    fn set_uniform_int(&mut self, location: UniformLocation, value: i32);

    /// Upload a 4-component float vector uniform
    fn set_uniform_vec4(&mut self, location: UniformLocation, value: Vec4);

    /// Upload a 4x4 float matrix uniform (column-major, never transposed)
    fn set_uniform_mat4(&mut self, location: UniformLocation, value: &Mat4);

    // ----- uniform blocks -----

    /// Resolve a uniform block name to its index, `None` if the linked
    /// program declares no such block
    fn uniform_block_index(&self, program: ProgramHandle, name: &str) -> Option<BlockIndex>;

    /// Bind a uniform block index to a numbered binding point
    fn bind_uniform_block(&mut self, program: ProgramHandle, index: BlockIndex, binding_point: u32);
}
