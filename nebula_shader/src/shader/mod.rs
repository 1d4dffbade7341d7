/// Shader module - shader objects, programs, uniform state and the
/// default-shader factory

// Module declarations
pub mod stage;
pub mod source;
pub mod uniform;
pub mod uniform_block;
pub mod shader;
pub mod program;
pub mod default_factory;

// Re-export from other modules
pub use stage::*;
pub use source::*;
pub use uniform::*;
pub use uniform_block::*;
pub use shader::*;
pub use program::*;
pub use default_factory::*;
