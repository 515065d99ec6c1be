/// GraphicsApi trait - the native API every wrapper forwards to

use crate::error::Result;
use crate::graphics_api::{Handle, BufferTarget};
use crate::resource::VertexAttribPointer;

/// Usage hint passed with a buffer upload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferUsageHint {
    /// Written once, drawn many times
    StaticDraw,
    /// Rewritten often, drawn many times
    DynamicDraw,
    /// Written once, drawn a few times
    StreamDraw,
}

/// Internal format of render buffer storage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(non_camel_case_types)]
pub enum RenderBufferFormat {
    RGBA8,
    RGBA16F,
    DEPTH_COMPONENT24,
    DEPTH_COMPONENT32F,
    DEPTH24_STENCIL8,
    STENCIL_INDEX8,
}

/// Frame buffer attachment point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameBufferAttachment {
    /// Color attachment N
    Color(u32),
    /// Depth attachment
    Depth,
    /// Stencil attachment
    Stencil,
    /// Combined depth/stencil attachment
    DepthStencil,
}

/// Completeness status of the bound frame buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameBufferStatus {
    Complete,
    IncompleteAttachment,
    MissingAttachment,
    Unsupported,
    /// Any other native status code
    Other(u32),
}

/// Native graphics API
///
/// Implemented by backends (e.g. `GlowGraphicsApi`). Every method is a direct
/// forwarding call; implementations perform no state tracking of their own.
/// The methods operate on the API's current context, so implementations are
/// bound to the rendering thread.
pub trait GraphicsApi {
    // ===== BUFFERS =====

    /// Allocate one buffer name
    fn create_buffer(&self) -> Result<Handle>;

    /// Release one buffer name
    fn delete_buffer(&self, handle: Handle);

    /// Bind a buffer to a target (None binds zero)
    fn bind_buffer(&self, target: BufferTarget, handle: Option<Handle>);

    /// Allocate storage for the buffer bound to `target` and upload `data`
    ///
    /// # Arguments
    ///
    /// * `target` - Buffer target the buffer is bound to
    /// * `size` - Storage size in bytes
    /// * `data` - Initial contents (`data.len() == size`), or None to leave the storage uninitialized
    /// * `usage` - Usage hint
    fn buffer_data(&self, target: BufferTarget, size: usize, data: Option<&[u8]>, usage: BufferUsageHint);

    // ===== FRAME BUFFERS =====

    /// Allocate one frame buffer name
    fn create_framebuffer(&self) -> Result<Handle>;

    /// Release one frame buffer name
    fn delete_framebuffer(&self, handle: Handle);

    /// Bind a frame buffer (None binds the default frame buffer)
    fn bind_framebuffer(&self, handle: Option<Handle>);

    /// Attach a render buffer to the bound frame buffer
    fn framebuffer_renderbuffer(&self, attachment: FrameBufferAttachment, render_buffer: Option<Handle>);

    /// Query the completeness of the bound frame buffer
    fn check_framebuffer_status(&self) -> FrameBufferStatus;

    // ===== RENDER BUFFERS =====

    /// Allocate one render buffer name
    fn create_renderbuffer(&self) -> Result<Handle>;

    /// Release one render buffer name
    fn delete_renderbuffer(&self, handle: Handle);

    /// Bind a render buffer (None binds zero)
    fn bind_renderbuffer(&self, handle: Option<Handle>);

    /// Declare storage for the bound render buffer
    fn renderbuffer_storage(&self, format: RenderBufferFormat, width: u32, height: u32);

    // ===== VERTEX ARRAYS =====

    /// Allocate one vertex array name
    fn create_vertex_array(&self) -> Result<Handle>;

    /// Release one vertex array name
    fn delete_vertex_array(&self, handle: Handle);

    /// Bind a vertex array (None binds zero)
    fn bind_vertex_array(&self, handle: Option<Handle>);

    /// Enable a vertex attribute index on the bound vertex array
    fn enable_vertex_attrib_array(&self, index: u32);

    /// Declare where an attribute is read from in the bound array buffer
    fn vertex_attrib_pointer(&self, pointer: &VertexAttribPointer);
}
