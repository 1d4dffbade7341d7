/// Shader program: compiled shaders linked into a usable GPU program.

use std::sync::{Arc, Mutex};
use rustc_hash::FxHashSet;

use crate::device::{GraphicsDevice, ProgramHandle};
use crate::error::{Error, Result};
use crate::shader::uniform_block::BlockId;
use crate::shader::{Shader, UniformBlock, UniformContainer, UniformValue};
use crate::{nebula_bail, nebula_err, nebula_error, nebula_info};

/// A set of shaders linked into a backend program object
///
/// Lifecycle: constructed with its shader set, compiled/linked exactly
/// once, applied many times per frame, destroyed explicitly. The
/// shaders themselves are shared (`Arc`), so factory-cached singletons
/// can participate in several programs; destroying a program never
/// cascades into its shaders.
pub struct ShaderProgram {
    device: Arc<Mutex<dyn GraphicsDevice>>,
    shaders: Vec<Arc<Mutex<Shader>>>,
    handle: Option<ProgramHandle>,
    compiled: bool,
    uniforms: UniformContainer,
    bound_blocks: FxHashSet<BlockId>,
}

impl ShaderProgram {
    /// Create an unlinked program over the given shaders
    ///
    /// # Arguments
    ///
    /// * `device` - Backend graphics device
    /// * `shaders` - Shaders to link, one per stage (stage uniqueness is
    ///   not checked at this layer)
    pub fn new(device: Arc<Mutex<dyn GraphicsDevice>>, shaders: Vec<Arc<Mutex<Shader>>>) -> Self {
        Self {
            device,
            shaders,
            handle: None,
            compiled: false,
            uniforms: UniformContainer::new(),
            bound_blocks: FxHashSet::default(),
        }
    }

    /// Compile every owned shader and link them into a program object
    ///
    /// Allocates the backend program handle, compiles each shader that
    /// is not already compiled, attaches all shader handles, links, and
    /// pulls the backend's link-status flag. Must be called exactly once
    /// per program instance; a second call is rejected.
    ///
    /// # Errors
    ///
    /// * Any [`Shader::compile`] error from an owned shader
    /// * [`Error::LinkFailed`] - the backend reported a link failure;
    ///   carries the program info log verbatim
    pub fn compile(&mut self) -> Result<()> {
        if self.compiled {
            nebula_bail!(
                "nebula::ShaderProgram",
                "compile() called twice on the same program"
            );
        }

        let program = self.device.lock().unwrap().create_program()?;
        self.handle = Some(program);

        for shader in &self.shaders {
            let mut shader = shader.lock().unwrap();
            if !shader.is_compiled() {
                shader.compile()?;
            }
            let shader_handle = shader.handle().ok_or_else(|| {
                nebula_err!(
                    "nebula::ShaderProgram",
                    "Compiled shader '{}' has no backend handle",
                    shader.source_name()
                )
            })?;
            self.device.lock().unwrap().attach_shader(program, shader_handle);
        }

        let mut device = self.device.lock().unwrap();
        device.link_program(program);
        if !device.program_link_status(program) {
            let log = device.program_info_log(program);
            nebula_error!("nebula::ShaderProgram", "Program link failed: {}", log);
            return Err(Error::LinkFailed { log });
        }
        drop(device);

        self.compiled = true;
        nebula_info!(
            "nebula::ShaderProgram",
            "Linked program with {} shader(s)",
            self.shaders.len()
        );
        Ok(())
    }

    /// Activate the program and push updated uniform values
    ///
    /// Makes this program the backend's current program. When the
    /// container-level updated flag is set, every individually-updated
    /// uniform is resolved by name and uploaded through the call
    /// matching its value tag; a name the linked program does not
    /// reference is silently skipped, since unused uniforms are benign
    /// at apply time. All updated flags are then cleared in one bulk step,
    /// so a second `apply()` with no intervening mutation performs the
    /// activation but uploads nothing.
    pub fn apply(&mut self) -> Result<()> {
        let program = self.compiled_handle("apply")?;

        let mut device = self.device.lock().unwrap();
        device.use_program(program);

        if self.uniforms.any_updated() {
            for uniform in self.uniforms.uniforms() {
                if !uniform.is_updated() {
                    continue;
                }
                let Some(location) = device.uniform_location(program, uniform.name()) else {
                    continue;
                };
                match *uniform.value() {
                    UniformValue::Float(value) => device.set_uniform_float(location, value),
                    UniformValue::Double(value) => device.set_uniform_double(location, value),
                    UniformValue::Int(value) => device.set_uniform_int(location, value),
                    UniformValue::Vec4(value) => device.set_uniform_vec4(location, value),
                    UniformValue::Mat4(ref value) => device.set_uniform_mat4(location, value),
                }
            }
            drop(device);
            self.uniforms.clear_updated();
        }
        Ok(())
    }

    /// Check that every contained uniform is consumed by the program
    ///
    /// Strict counterpart of [`apply`](ShaderProgram::apply)'s
    /// permissive skip: every uniform currently in the container must
    /// resolve to a location. Intended to be invoked once after
    /// [`compile`](ShaderProgram::compile), not per frame.
    ///
    /// # Errors
    ///
    /// [`Error::ValidationFailed`] naming the first uniform the linked
    /// program does not reference.
    pub fn validate_uniforms(&self) -> Result<()> {
        let program = self.compiled_handle("validate_uniforms")?;

        let device = self.device.lock().unwrap();
        for uniform in self.uniforms.uniforms() {
            if device.uniform_location(program, uniform.name()).is_none() {
                nebula_error!(
                    "nebula::ShaderProgram",
                    "Uniform '{}' is not used by the linked program",
                    uniform.name()
                );
                return Err(Error::ValidationFailed {
                    uniform: uniform.name().to_string(),
                });
            }
        }
        Ok(())
    }

    /// Bind a uniform block to its declared binding point, once
    ///
    /// Dedup is per block *instance* (its [`BlockId`]), not per name:
    /// a block already recorded as bound is a no-op; two distinct
    /// instances sharing a name bind separately.
    ///
    /// # Errors
    ///
    /// [`Error::BlockNotFound`] when the linked program declares no
    /// block with this name.
    pub fn bind_uniform_block(&mut self, block: &UniformBlock) -> Result<()> {
        let program = self.compiled_handle("bind_uniform_block")?;

        if self.bound_blocks.contains(&block.id()) {
            return Ok(());
        }

        let mut device = self.device.lock().unwrap();
        let Some(index) = device.uniform_block_index(program, block.name()) else {
            nebula_error!(
                "nebula::ShaderProgram",
                "Uniform block '{}' not found in the linked program",
                block.name()
            );
            return Err(Error::BlockNotFound {
                name: block.name().to_string(),
            });
        };
        device.bind_uniform_block(program, index, block.binding_point());
        drop(device);

        self.bound_blocks.insert(block.id());
        Ok(())
    }

    /// Release the backend program handle
    ///
    /// Owned shaders are not destroyed; release them independently if
    /// desired.
    pub fn destroy(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.device.lock().unwrap().delete_program(handle);
            self.compiled = false;
            nebula_info!("nebula::ShaderProgram", "Destroyed program");
        }
    }

    /// Whether the backend reported a successful link
    pub fn is_compiled(&self) -> bool {
        self.compiled
    }

    /// Backend program handle, if one has been created
    pub fn handle(&self) -> Option<ProgramHandle> {
        self.handle
    }

    /// Uniform state supplied to the program on apply
    pub fn uniforms(&self) -> &UniformContainer {
        &self.uniforms
    }

    /// Mutable uniform state; set values here, then call
    /// [`apply`](ShaderProgram::apply)
    pub fn uniforms_mut(&mut self) -> &mut UniformContainer {
        &mut self.uniforms
    }

    /// Number of shaders this program links
    pub fn shader_count(&self) -> usize {
        self.shaders.len()
    }

    /// Resolve the program handle, failing when the program is not in
    /// the compiled state
    fn compiled_handle(&self, operation: &str) -> Result<ProgramHandle> {
        match self.handle {
            Some(handle) if self.compiled => Ok(handle),
            _ => Err(nebula_err!(
                "nebula::ShaderProgram",
                "{}() called before compile()",
                operation
            )),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "program_tests.rs"]
mod tests;
