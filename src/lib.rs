pub mod context;
pub mod pipeline;
pub mod renderer;
pub mod scheduler;
pub mod uniforms;

pub use renderer::Renderer;
pub use scheduler::{FrameScheduler, TARGET_FPS};
pub use uniforms::PatternUniforms;
