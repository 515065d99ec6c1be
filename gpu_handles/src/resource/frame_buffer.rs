/// FrameBuffer - owns one native off-screen render target container
///
/// Attachments are added while the frame buffer is bound. Binding is the
/// caller's job, as with every other configuration call in this crate.

use std::rc::Rc;

use crate::error::Result;
use crate::graphics_api::{
    GraphicsContext, Handle, ResourceKind, BindingSlot, FrameBufferAttachment, FrameBufferStatus,
};
use crate::resource::RenderBuffer;

pub struct FrameBuffer {
    ctx: Rc<GraphicsContext>,
    handle: Handle,
}

impl FrameBuffer {
    pub fn new(ctx: &Rc<GraphicsContext>) -> Result<Self> {
        let handle = ctx.allocate(ResourceKind::FrameBuffer)?;
        crate::gpu_debug!("gpu::FrameBuffer", "Created frame buffer {}", handle);
        Ok(Self {
            ctx: Rc::clone(ctx),
            handle,
        })
    }

    /// Make this frame buffer the render target
    pub fn bind(&self) {
        self.ctx.bind(BindingSlot::FrameBuffer, Some(self.handle));
    }

    /// Return to the default frame buffer
    pub fn unbind(&self) {
        self.ctx.bind(BindingSlot::FrameBuffer, None);
    }

    pub fn is_bound(&self) -> bool {
        self.ctx.is_bound(BindingSlot::FrameBuffer, self.handle)
    }

    pub fn handle(&self) -> Handle {
        self.handle
    }

    /// Attach a render buffer to the bound frame buffer
    ///
    /// The frame buffer refers to the render buffer without owning it.
    pub fn attach_render_buffer(&self, attachment: FrameBufferAttachment, render_buffer: &RenderBuffer) {
        if !self.is_bound() {
            crate::gpu_warn!(
                "gpu::FrameBuffer",
                "Attaching render buffer {} while frame buffer {} is not bound",
                render_buffer.handle(),
                self.handle
            );
        }
        self.ctx.attach_render_buffer(attachment, Some(render_buffer.handle()));
    }

    /// Detach whatever render buffer sits at `attachment`
    pub fn detach(&self, attachment: FrameBufferAttachment) {
        self.ctx.attach_render_buffer(attachment, None);
    }

    /// Completeness of the bound frame buffer
    pub fn status(&self) -> FrameBufferStatus {
        self.ctx.frame_buffer_status()
    }
}

impl Drop for FrameBuffer {
    fn drop(&mut self) {
        self.ctx.release(ResourceKind::FrameBuffer, self.handle);
    }
}

#[cfg(test)]
#[path = "frame_buffer_tests.rs"]
mod tests;
