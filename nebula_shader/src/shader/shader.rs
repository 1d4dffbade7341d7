/// Shader object: one stage's source compiled into a GPU shader.

use std::sync::{Arc, Mutex};

use crate::device::{GraphicsDevice, ShaderHandle};
use crate::error::{Error, Result};
use crate::shader::{ShaderStage, SourceProvider};
use crate::{nebula_bail, nebula_debug, nebula_error};

/// One shader stage's source, compiled on demand into a GPU shader object
///
/// Created uncompiled; [`compile`](Shader::compile) performs the single
/// backend compile round-trip. The backend handle is released only by an
/// explicit [`destroy`](Shader::destroy); dropping a `Shader` does not
/// touch the GPU.
pub struct Shader {
    device: Arc<Mutex<dyn GraphicsDevice>>,
    provider: Arc<dyn SourceProvider>,
    source_name: String,
    stage: ShaderStage,
    handle: Option<ShaderHandle>,
    compiled: bool,
}

impl Shader {
    /// Create an uncompiled shader
    ///
    /// # Arguments
    ///
    /// * `device` - Backend graphics device
    /// * `provider` - Capability yielding the source text at compile time
    /// * `source_name` - Logical name the provider resolves
    /// * `stage` - Pipeline stage this shader implements
    pub fn new(
        device: Arc<Mutex<dyn GraphicsDevice>>,
        provider: Arc<dyn SourceProvider>,
        source_name: impl Into<String>,
        stage: ShaderStage,
    ) -> Self {
        Self {
            device,
            provider,
            source_name: source_name.into(),
            stage,
            handle: None,
            compiled: false,
        }
    }

    /// Compile this shader's source into a backend shader object
    ///
    /// Reads the full source text from the provider, creates the backend
    /// shader object for the mapped stage constant, submits the source
    /// and triggers compilation, then pulls the backend's compile-status
    /// flag. A single attempt: on failure the backend's info log is
    /// queried and returned inside the error; the caller decides whether
    /// to retry with different source.
    ///
    /// # Errors
    ///
    /// * [`Error::UnsupportedStage`] - the stage has no entry in the
    ///   fixed stage table (raised before any backend call)
    /// * [`Error::SourceNotFound`] - the provider cannot resolve the
    ///   logical source name
    /// * [`Error::CompilationFailed`] - the backend rejected the source;
    ///   carries the stage and the backend log verbatim
    pub fn compile(&mut self) -> Result<()> {
        if self.compiled {
            nebula_bail!(
                "nebula::Shader",
                "Shader '{}' is already compiled",
                self.source_name
            );
        }

        let Some(constant) = self.stage.stage_constant() else {
            nebula_error!(
                "nebula::Shader",
                "No stage table entry for {} shader '{}'",
                self.stage,
                self.source_name
            );
            return Err(Error::UnsupportedStage(self.stage));
        };

        let source = self.provider.read_source(&self.source_name)?;

        let mut device = self.device.lock().unwrap();
        let handle = device.create_shader(constant)?;
        self.handle = Some(handle);

        device.shader_source(handle, &source);
        device.compile_shader(handle);

        if !device.shader_compile_status(handle) {
            let log = device.shader_info_log(handle);
            nebula_error!(
                "nebula::Shader",
                "{} shader '{}' failed to compile: {}",
                self.stage,
                self.source_name,
                log
            );
            return Err(Error::CompilationFailed {
                stage: self.stage,
                log,
            });
        }

        self.compiled = true;
        nebula_debug!(
            "nebula::Shader",
            "Compiled {} shader '{}'",
            self.stage,
            self.source_name
        );
        Ok(())
    }

    /// Release the backend shader handle
    ///
    /// No-op when no handle exists (never compiled, or already
    /// destroyed). The shader returns to the uncompiled state.
    pub fn destroy(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.device.lock().unwrap().delete_shader(handle);
            self.compiled = false;
            nebula_debug!(
                "nebula::Shader",
                "Destroyed {} shader '{}'",
                self.stage,
                self.source_name
            );
        }
    }

    /// Pipeline stage this shader implements
    pub fn stage(&self) -> ShaderStage {
        self.stage
    }

    /// Logical source name this shader compiles from
    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    /// Whether the backend reported a successful compile
    pub fn is_compiled(&self) -> bool {
        self.compiled
    }

    /// Backend shader handle, if one has been created
    pub fn handle(&self) -> Option<ShaderHandle> {
        self.handle
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "shader_tests.rs"]
mod tests;
