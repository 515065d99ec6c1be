/*!
# gpu_handles - OpenGL Backend

OpenGL implementation of the `gpu_handles` native API, built on `glow`.

`GlowGraphicsApi` forwards every call to the current GL context. With the
`gl-debug-output` feature, KHR_debug messages are routed into the
gpu_handles logger.
*/

mod glow_format;
mod glow_graphics_api;
#[cfg(feature = "gl-debug-output")]
mod debug;

pub use glow_graphics_api::{GlowGraphicsApi, GlowConfig};

#[cfg(feature = "gl-debug-output")]
pub use debug::{DebugStats, get_debug_stats, reset_debug_stats, print_debug_stats_report};

use std::rc::Rc;
use gpu_handles::gpu::{ContextConfig, GraphicsContext, Result};

/// Create a graphics context over a GL context
///
/// # Example
///
/// ```no_run
/// use gpu_handles::gpu::ContextConfig;
/// use gpu_handles::gpu::resource::VertexBuffer;
/// use gpu_handles_glow::GlowConfig;
///
/// # fn demo(gl: glow::Context) -> gpu_handles::gpu::Result<()> {
/// let ctx = gpu_handles_glow::create_context(gl, GlowConfig::default(), ContextConfig::default())?;
/// let vb = VertexBuffer::from_slice(&ctx, &[0.0f32, 0.5, -0.5, -0.5, 0.5, -0.5])?;
/// vb.bind();
/// # Ok(())
/// # }
/// ```
pub fn create_context(
    gl: glow::Context,
    glow_config: GlowConfig,
    context_config: ContextConfig,
) -> Result<Rc<GraphicsContext>> {
    let api = GlowGraphicsApi::new(gl, glow_config)?;
    Ok(GraphicsContext::new(Rc::new(api), context_config))
}
