/// VertexBuffer - owns one native array buffer

use std::rc::Rc;

use crate::error::Result;
use crate::graphics_api::{GraphicsContext, Handle, ResourceKind, BindingSlot, BufferTarget};
use crate::resource::VertexBufferLayout;

/// GPU array buffer initialized once from caller data
///
/// The native buffer is allocated in the constructor and released exactly
/// once when the VertexBuffer is dropped.
///
/// # Example
///
/// ```no_run
/// # use std::rc::Rc;
/// # use gpu_handles::gpu::{GraphicsContext, resource::VertexBuffer};
/// # fn demo(ctx: &Rc<GraphicsContext>) -> gpu_handles::gpu::Result<()> {
/// let vertices: [f32; 6] = [0.0, 0.5, -0.5, -0.5, 0.5, -0.5];
/// let vb = VertexBuffer::from_slice(ctx, &vertices)?;
/// vb.bind();
/// // draw...
/// vb.unbind();
/// # Ok(())
/// # }
/// ```
pub struct VertexBuffer {
    ctx: Rc<GraphicsContext>,
    handle: Handle,
    size: usize,
    layout: Option<VertexBufferLayout>,
}

impl VertexBuffer {
    /// Create a vertex buffer and upload `data` with a static usage hint
    ///
    /// Leaves the new buffer bound to the array buffer slot.
    pub fn new(ctx: &Rc<GraphicsContext>, data: &[u8]) -> Result<Self> {
        Self::create(ctx, data.len(), Some(data))
    }

    /// Create a vertex buffer from typed vertex data
    pub fn from_slice<T: bytemuck::Pod>(ctx: &Rc<GraphicsContext>, vertices: &[T]) -> Result<Self> {
        Self::new(ctx, bytemuck::cast_slice(vertices))
    }

    /// Create a vertex buffer of `size` bytes without initial contents
    pub fn with_size(ctx: &Rc<GraphicsContext>, size: usize) -> Result<Self> {
        Self::create(ctx, size, None)
    }

    fn create(ctx: &Rc<GraphicsContext>, size: usize, data: Option<&[u8]>) -> Result<Self> {
        let handle = ctx.allocate(ResourceKind::Buffer)?;
        let buffer = Self {
            ctx: Rc::clone(ctx),
            handle,
            size,
            layout: None,
        };
        ctx.bind(BindingSlot::ArrayBuffer, Some(handle));
        ctx.upload(BufferTarget::Array, size, data);
        crate::gpu_debug!("gpu::VertexBuffer", "Created vertex buffer {} ({} bytes)", handle, size);
        Ok(buffer)
    }

    /// Make this buffer the active array buffer
    pub fn bind(&self) {
        self.ctx.bind(BindingSlot::ArrayBuffer, Some(self.handle));
    }

    /// Set the active array buffer back to none
    pub fn unbind(&self) {
        self.ctx.bind(BindingSlot::ArrayBuffer, None);
    }

    /// Whether this buffer is the active array buffer
    pub fn is_bound(&self) -> bool {
        self.ctx.is_bound(BindingSlot::ArrayBuffer, self.handle)
    }

    pub fn handle(&self) -> Handle {
        self.handle
    }

    /// Size in bytes
    pub fn size(&self) -> usize {
        self.size
    }

    /// Declare how one vertex is laid out in this buffer
    pub fn set_layout(&mut self, layout: VertexBufferLayout) {
        self.layout = Some(layout);
    }

    pub fn layout(&self) -> Option<&VertexBufferLayout> {
        self.layout.as_ref()
    }

    /// Number of whole vertices the buffer holds under its layout
    pub fn vertex_count(&self) -> Option<usize> {
        match &self.layout {
            Some(layout) if layout.stride() > 0 => Some(self.size / layout.stride() as usize),
            _ => None,
        }
    }
}

impl Drop for VertexBuffer {
    fn drop(&mut self) {
        self.ctx.release(ResourceKind::Buffer, self.handle);
    }
}

#[cfg(test)]
#[path = "vertex_buffer_tests.rs"]
mod tests;
