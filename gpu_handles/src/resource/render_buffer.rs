/// RenderBuffer - owns one native render buffer (attachable depth/stencil/color storage)

use std::rc::Rc;

use crate::error::Result;
use crate::graphics_api::{GraphicsContext, Handle, ResourceKind, BindingSlot, RenderBufferFormat};

/// Storage declared on a render buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderBufferStorage {
    pub format: RenderBufferFormat,
    pub width: u32,
    pub height: u32,
}

pub struct RenderBuffer {
    ctx: Rc<GraphicsContext>,
    handle: Handle,
    storage: Option<RenderBufferStorage>,
}

impl RenderBuffer {
    /// Allocate a render buffer name (no storage yet)
    pub fn new(ctx: &Rc<GraphicsContext>) -> Result<Self> {
        let handle = ctx.allocate(ResourceKind::RenderBuffer)?;
        crate::gpu_debug!("gpu::RenderBuffer", "Created render buffer {}", handle);
        Ok(Self {
            ctx: Rc::clone(ctx),
            handle,
            storage: None,
        })
    }

    pub fn bind(&self) {
        self.ctx.bind(BindingSlot::RenderBuffer, Some(self.handle));
    }

    pub fn unbind(&self) {
        self.ctx.bind(BindingSlot::RenderBuffer, None);
    }

    pub fn is_bound(&self) -> bool {
        self.ctx.is_bound(BindingSlot::RenderBuffer, self.handle)
    }

    pub fn handle(&self) -> Handle {
        self.handle
    }

    /// Bind this render buffer and declare its backing storage
    ///
    /// Calling it again replaces the previous storage.
    pub fn allocate_storage(&mut self, format: RenderBufferFormat, width: u32, height: u32) {
        self.bind();
        self.ctx.render_buffer_storage(format, width, height);
        self.storage = Some(RenderBufferStorage { format, width, height });
    }

    pub fn storage(&self) -> Option<RenderBufferStorage> {
        self.storage
    }
}

impl Drop for RenderBuffer {
    fn drop(&mut self) {
        self.ctx.release(ResourceKind::RenderBuffer, self.handle);
    }
}

#[cfg(test)]
#[path = "render_buffer_tests.rs"]
mod tests;
