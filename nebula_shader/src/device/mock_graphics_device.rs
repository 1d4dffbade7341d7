/// Mock GraphicsDevice for unit tests (no GPU required)
///
/// Records every backend call so tests can assert exact call counts and
/// payloads, and exposes knobs to script compile/link failures. Uniform
/// and block names must be registered up front; unregistered names
/// resolve to the not-found sentinel (`None`), which drives the
/// skip/validation-failure paths.

use std::collections::HashMap;
use glam::{Mat4, Vec4};

use crate::device::{
    BlockIndex, GraphicsDevice, ProgramHandle, ShaderHandle, StageConstant, UniformLocation,
};
use crate::error::Result;

/// A recorded uniform upload call
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UniformUpload {
    Float(UniformLocation, f32),
    Double(UniformLocation, f64),
    Int(UniformLocation, i32),
    Vec4(UniformLocation, Vec4),
    Mat4(UniformLocation, Mat4),
}

/// Mock graphics device that tracks every call without a GPU
pub struct MockGraphicsDevice {
    next_id: u32,
    next_location: u32,
    next_block_index: u32,

    // Registered names (resolvable by the "linked program")
    uniform_locations: HashMap<String, UniformLocation>,
    block_indices: HashMap<String, BlockIndex>,

    // Recorded calls
    pub created_shaders: Vec<(ShaderHandle, StageConstant)>,
    pub shader_sources: HashMap<ShaderHandle, String>,
    pub compile_calls: Vec<ShaderHandle>,
    pub deleted_shaders: Vec<ShaderHandle>,
    pub created_programs: Vec<ProgramHandle>,
    pub attached_shaders: Vec<(ProgramHandle, ShaderHandle)>,
    pub link_calls: Vec<ProgramHandle>,
    pub use_program_calls: Vec<ProgramHandle>,
    pub deleted_programs: Vec<ProgramHandle>,
    pub uploads: Vec<UniformUpload>,
    pub block_bindings: Vec<(ProgramHandle, BlockIndex, u32)>,

    // Behaviour knobs
    pub fail_compile: bool,
    pub compile_log: String,
    pub fail_link: bool,
    pub link_log: String,
}

impl MockGraphicsDevice {
    /// Create a new mock device with no registered names and no scripted
    /// failures
    pub fn new() -> Self {
        Self {
            next_id: 1,
            next_location: 0,
            next_block_index: 0,
            uniform_locations: HashMap::new(),
            block_indices: HashMap::new(),
            created_shaders: Vec::new(),
            shader_sources: HashMap::new(),
            compile_calls: Vec::new(),
            deleted_shaders: Vec::new(),
            created_programs: Vec::new(),
            attached_shaders: Vec::new(),
            link_calls: Vec::new(),
            use_program_calls: Vec::new(),
            deleted_programs: Vec::new(),
            uploads: Vec::new(),
            block_bindings: Vec::new(),
            fail_compile: false,
            compile_log: String::new(),
            fail_link: false,
            link_log: String::new(),
        }
    }

    /// Register a uniform name as resolvable, returning its location
    pub fn register_uniform(&mut self, name: &str) -> UniformLocation {
        let location = UniformLocation(self.next_location);
        self.next_location += 1;
        self.uniform_locations.insert(name.to_string(), location);
        location
    }

    /// Register a uniform block name as resolvable, returning its index
    pub fn register_uniform_block(&mut self, name: &str) -> BlockIndex {
        let index = BlockIndex(self.next_block_index);
        self.next_block_index += 1;
        self.block_indices.insert(name.to_string(), index);
        index
    }

    /// Total number of uniform upload calls recorded so far
    pub fn upload_count(&self) -> usize {
        self.uploads.len()
    }

    fn allocate_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

impl Default for MockGraphicsDevice {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphicsDevice for MockGraphicsDevice {
    fn create_shader(&mut self, stage: StageConstant) -> Result<ShaderHandle> {
        let handle = ShaderHandle(self.allocate_id());
        self.created_shaders.push((handle, stage));
        Ok(handle)
    }

    fn shader_source(&mut self, shader: ShaderHandle, source: &str) {
        self.shader_sources.insert(shader, source.to_string());
    }

    fn compile_shader(&mut self, shader: ShaderHandle) {
        self.compile_calls.push(shader);
    }

    fn shader_compile_status(&self, _shader: ShaderHandle) -> bool {
        !self.fail_compile
    }

    fn shader_info_log(&self, _shader: ShaderHandle) -> String {
        self.compile_log.clone()
    }

    fn delete_shader(&mut self, shader: ShaderHandle) {
        self.deleted_shaders.push(shader);
    }

    fn create_program(&mut self) -> Result<ProgramHandle> {
        let handle = ProgramHandle(self.allocate_id());
        self.created_programs.push(handle);
        Ok(handle)
    }

    fn attach_shader(&mut self, program: ProgramHandle, shader: ShaderHandle) {
        self.attached_shaders.push((program, shader));
    }

    fn link_program(&mut self, program: ProgramHandle) {
        self.link_calls.push(program);
    }

    fn program_link_status(&self, _program: ProgramHandle) -> bool {
        !self.fail_link
    }

    fn program_info_log(&self, _program: ProgramHandle) -> String {
        self.link_log.clone()
    }

    fn use_program(&mut self, program: ProgramHandle) {
        self.use_program_calls.push(program);
    }

    fn delete_program(&mut self, program: ProgramHandle) {
        self.deleted_programs.push(program);
    }

    fn uniform_location(&self, _program: ProgramHandle, name: &str) -> Option<UniformLocation> {
        self.uniform_locations.get(name).copied()
    }

    fn set_uniform_float(&mut self, location: UniformLocation, value: f32) {
        self.uploads.push(UniformUpload::Float(location, value));
    }

    fn set_uniform_double(&mut self, location: UniformLocation, value: f64) {
        self.uploads.push(UniformUpload::Double(location, value));
    }

    fn set_uniform_int(&mut self, location: UniformLocation, value: i32) {
        self.uploads.push(UniformUpload::Int(location, value));
    }

    fn set_uniform_vec4(&mut self, location: UniformLocation, value: Vec4) {
        self.uploads.push(UniformUpload::Vec4(location, value));
    }

    fn set_uniform_mat4(&mut self, location: UniformLocation, value: &Mat4) {
        self.uploads.push(UniformUpload::Mat4(location, *value));
    }

    fn uniform_block_index(&self, _program: ProgramHandle, name: &str) -> Option<BlockIndex> {
        self.block_indices.get(name).copied()
    }

    fn bind_uniform_block(&mut self, program: ProgramHandle, index: BlockIndex, binding_point: u32) {
        self.block_bindings.push((program, index, binding_point));
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "mock_graphics_device_tests.rs"]
mod tests;
