/// VertexArray - owns one native vertex array and records what is attached to it
///
/// The array refers to its vertex and index buffers without owning them.
/// The `'a` lifetime ties every attached buffer to the array, so a buffer
/// cannot be dropped while an array that reads from it is still alive.

use std::marker::PhantomData;
use std::rc::Rc;

use crate::error::{Error, Result};
use crate::diagnostics::Diagnostics;
use crate::graphics_api::{GraphicsContext, Handle, ResourceKind, BindingSlot};
use crate::resource::{VertexBuffer, IndexBuffer, VertexAttribPointer};

const SOURCE: &str = "gpu::VertexArray";

pub struct VertexArray<'a> {
    ctx: Rc<GraphicsContext>,
    handle: Handle,
    /// Next free attribute index
    next_attribute: u32,
    vertex_buffers: Vec<Handle>,
    /// Attached index buffer and its count
    index_buffer: Option<(Handle, u32)>,
    _buffers: PhantomData<&'a ()>,
}

impl<'a> VertexArray<'a> {
    pub fn new(ctx: &Rc<GraphicsContext>) -> Result<Self> {
        let handle = ctx.allocate(ResourceKind::VertexArray)?;
        crate::gpu_debug!(SOURCE, "Created vertex array {}", handle);
        Ok(Self {
            ctx: Rc::clone(ctx),
            handle,
            next_attribute: 0,
            vertex_buffers: Vec::new(),
            index_buffer: None,
            _buffers: PhantomData,
        })
    }

    pub fn bind(&self) {
        self.ctx.bind(BindingSlot::VertexArray, Some(self.handle));
    }

    pub fn unbind(&self) {
        self.ctx.bind(BindingSlot::VertexArray, None);
    }

    pub fn is_bound(&self) -> bool {
        self.ctx.is_bound(BindingSlot::VertexArray, self.handle)
    }

    pub fn handle(&self) -> Handle {
        self.handle
    }

    /// Read vertex attributes from `vertex_buffer` according to its layout
    ///
    /// Binds this array and the buffer, then enables and declares one
    /// attribute index per layout attribute. Indices continue after the
    /// attributes of previously added buffers.
    ///
    /// # Errors
    ///
    /// `Error::InvalidResource` if the buffer has no layout or an empty one;
    /// nothing is forwarded in that case.
    pub fn add_vertex_buffer(&mut self, vertex_buffer: &'a VertexBuffer) -> Result<()> {
        let layout = match vertex_buffer.layout() {
            Some(layout) if !layout.is_empty() => layout,
            _ => {
                return Err(Diagnostics::log_and_return_error(
                    SOURCE,
                    Error::InvalidResource(format!(
                        "vertex buffer {} has no layout",
                        vertex_buffer.handle()
                    )),
                ));
            }
        };

        self.bind();
        vertex_buffer.bind();
        for attribute in layout {
            let pointer = VertexAttribPointer::from_attribute(self.next_attribute, attribute, layout.stride());
            self.ctx.enable_attribute(pointer.index);
            self.ctx.attribute_pointer(&pointer);
            self.next_attribute += 1;
        }
        self.vertex_buffers.push(vertex_buffer.handle());

        crate::gpu_debug!(
            SOURCE,
            "Vertex array {}: added vertex buffer {} ({} attributes, stride {})",
            self.handle,
            vertex_buffer.handle(),
            layout.len(),
            layout.stride()
        );
        Ok(())
    }

    /// Read element indices from `index_buffer` in indexed draws
    ///
    /// Binds this array, then the index buffer, which records it in the
    /// array's state. Replaces any previously set index buffer.
    pub fn set_index_buffer(&mut self, index_buffer: &'a IndexBuffer) {
        self.bind();
        index_buffer.bind();
        self.index_buffer = Some((index_buffer.handle(), index_buffer.count()));
        crate::gpu_debug!(
            SOURCE,
            "Vertex array {}: index buffer {} ({} indices)",
            self.handle,
            index_buffer.handle(),
            index_buffer.count()
        );
    }

    /// Index count of the attached index buffer, for draw-call sizing
    pub fn index_count(&self) -> Option<u32> {
        self.index_buffer.map(|(_, count)| count)
    }

    pub fn index_buffer(&self) -> Option<Handle> {
        self.index_buffer.map(|(handle, _)| handle)
    }

    pub fn vertex_buffers(&self) -> &[Handle] {
        &self.vertex_buffers
    }

    /// Number of attribute indices enabled so far
    pub fn attribute_count(&self) -> u32 {
        self.next_attribute
    }
}

impl Drop for VertexArray<'_> {
    fn drop(&mut self) {
        self.ctx.release(ResourceKind::VertexArray, self.handle);
    }
}

#[cfg(test)]
#[path = "vertex_array_tests.rs"]
mod tests;
