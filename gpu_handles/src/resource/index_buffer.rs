/// IndexBuffer - owns one native element array buffer and its index count

use std::rc::Rc;

use crate::error::{Error, Result};
use crate::graphics_api::{GraphicsContext, Handle, ResourceKind, BindingSlot, BufferTarget};

/// GPU element array buffer holding 32-bit indices
///
/// The count is fixed at construction and sizes later indexed draw calls.
pub struct IndexBuffer {
    ctx: Rc<GraphicsContext>,
    handle: Handle,
    count: u32,
}

impl IndexBuffer {
    /// Create an index buffer and upload `indices` with a static usage hint
    ///
    /// The upload size is `count * 4` bytes. Leaves the new buffer bound to
    /// the element array buffer slot.
    pub fn new(ctx: &Rc<GraphicsContext>, indices: &[u32]) -> Result<Self> {
        let count = u32::try_from(indices.len()).map_err(|_| {
            Error::InvalidResource(format!("{} indices exceed the u32 range", indices.len()))
        })?;
        let handle = ctx.allocate(ResourceKind::Buffer)?;
        let buffer = Self {
            ctx: Rc::clone(ctx),
            handle,
            count,
        };

        let bytes: &[u8] = bytemuck::cast_slice(indices);
        ctx.bind(BindingSlot::ElementArrayBuffer, Some(handle));
        ctx.upload(BufferTarget::ElementArray, count as usize * std::mem::size_of::<u32>(), Some(bytes));
        crate::gpu_debug!("gpu::IndexBuffer", "Created index buffer {} ({} indices)", handle, count);
        Ok(buffer)
    }

    /// Make this buffer the active element array buffer
    pub fn bind(&self) {
        self.ctx.bind(BindingSlot::ElementArrayBuffer, Some(self.handle));
    }

    /// Set the active element array buffer back to none
    pub fn unbind(&self) {
        self.ctx.bind(BindingSlot::ElementArrayBuffer, None);
    }

    pub fn is_bound(&self) -> bool {
        self.ctx.is_bound(BindingSlot::ElementArrayBuffer, self.handle)
    }

    pub fn handle(&self) -> Handle {
        self.handle
    }

    /// Number of indices supplied at construction
    pub fn count(&self) -> u32 {
        self.count
    }
}

impl Drop for IndexBuffer {
    fn drop(&mut self) {
        self.ctx.release(ResourceKind::Buffer, self.handle);
    }
}

#[cfg(test)]
#[path = "index_buffer_tests.rs"]
mod tests;
