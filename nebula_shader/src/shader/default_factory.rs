/// Built-in default shaders and their singleton factory.

use std::sync::{Arc, Mutex};

use crate::device::GraphicsDevice;
use crate::error::Result;
use crate::nebula_info;
use crate::shader::{
    MemorySourceProvider, Shader, ShaderStage, SourceProvider, DEFAULT_FRAGMENT_SOURCE_NAME,
    DEFAULT_VERTEX_SOURCE_NAME,
};
use crate::utils::Cache;

/// Logical identity of a built-in default shader
///
/// A closed, build-time-known key (not a content hash). Each identity
/// carries a fixed logical source name and a stage; it is used only as
/// the factory cache key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DefaultShader {
    /// The default vertex shader
    Vertex,
    /// The default fragment shader
    Fragment,
}

impl DefaultShader {
    /// Every built-in shader identity
    pub const ALL: [DefaultShader; 2] = [DefaultShader::Vertex, DefaultShader::Fragment];

    /// Fixed logical source name for this identity
    pub fn source_name(self) -> &'static str {
        match self {
            DefaultShader::Vertex => DEFAULT_VERTEX_SOURCE_NAME,
            DefaultShader::Fragment => DEFAULT_FRAGMENT_SOURCE_NAME,
        }
    }

    /// Pipeline stage this identity compiles for
    pub fn stage(self) -> ShaderStage {
        match self {
            DefaultShader::Vertex => ShaderStage::Vertex,
            DefaultShader::Fragment => ShaderStage::Fragment,
        }
    }
}

/// Factory producing singleton [`Shader`] instances for the built-in
/// shaders
///
/// Construction eagerly loads every built-in source from the given
/// provider, so a missing source fails early instead of at first use.
/// `create_shader` then guarantees at most one `Shader` instance per
/// identity for the factory's lifetime; repeated construction would
/// re-trigger independent compiles and leak backend handles for the
/// same logical shader.
///
/// The cache is owned by the factory instance; there is no module-level
/// singleton.
pub struct DefaultShaderFactory {
    device: Arc<Mutex<dyn GraphicsDevice>>,
    sources: Arc<MemorySourceProvider>,
    cache: Cache<DefaultShader, Arc<Mutex<Shader>>>,
}

impl DefaultShaderFactory {
    /// Create a factory, eagerly loading every built-in shader source
    ///
    /// # Errors
    ///
    /// [`Error::SourceNotFound`](crate::error::Error::SourceNotFound)
    /// when the provider cannot resolve a required source name.
    pub fn new(
        device: Arc<Mutex<dyn GraphicsDevice>>,
        provider: &dyn SourceProvider,
    ) -> Result<Self> {
        let mut sources = MemorySourceProvider::new();
        for identity in DefaultShader::ALL {
            let text = provider.read_source(identity.source_name())?;
            sources.insert(identity.source_name(), text);
        }

        nebula_info!(
            "nebula::DefaultShaderFactory",
            "Preloaded {} built-in shader source(s)",
            DefaultShader::ALL.len()
        );

        Ok(Self {
            device,
            sources: Arc::new(sources),
            cache: Cache::new(),
        })
    }

    /// Get the singleton shader for `identity`
    ///
    /// Constructs an uncompiled [`Shader`] over the pre-loaded source on
    /// first request; every later call returns the identical instance.
    pub fn create_shader(&mut self, identity: DefaultShader) -> Arc<Mutex<Shader>> {
        let device = &self.device;
        let sources = &self.sources;
        self.cache
            .get_or_insert_with(identity, || {
                Arc::new(Mutex::new(Shader::new(
                    device.clone(),
                    sources.clone() as Arc<dyn SourceProvider>,
                    identity.source_name(),
                    identity.stage(),
                )))
            })
            .clone()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "default_factory_tests.rs"]
mod tests;
