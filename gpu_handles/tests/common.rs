#![allow(dead_code)]
//! Test utilities - a counting GraphicsApi shared by the integration tests
//!
//! The in-crate mock is only compiled for unit tests, so integration tests
//! carry their own minimal native API: it counts create/delete calls per
//! resource kind and remembers the last handle bound to each target.

use gpu_handles::gpu::api::{
    BufferTarget, BufferUsageHint, FrameBufferAttachment, FrameBufferStatus, GraphicsApi, Handle,
    RenderBufferFormat,
};
use gpu_handles::gpu::resource::VertexAttribPointer;
use gpu_handles::gpu::{ContextConfig, Error, GraphicsContext, Result};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[derive(Default)]
pub struct CountingApi {
    next_id: Cell<u32>,
    pub fail: Cell<bool>,
    pub created: Cell<u32>,
    pub deleted: Cell<u32>,
    pub uploads: RefCell<Vec<(BufferTarget, usize, bool)>>,
    pub array_buffer: Cell<Option<Handle>>,
    pub element_buffer: Cell<Option<Handle>>,
    pub frame_buffer: Cell<Option<Handle>>,
    pub render_buffer: Cell<Option<Handle>>,
    pub vertex_array: Cell<Option<Handle>>,
    pub attrib_pointers: RefCell<Vec<VertexAttribPointer>>,
}

impl CountingApi {
    fn create(&self) -> Result<Handle> {
        if self.fail.get() {
            return Err(Error::BackendError("out of names".to_string()));
        }
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        self.created.set(self.created.get() + 1);
        Handle::new(id).ok_or(Error::OutOfMemory)
    }

    fn delete(&self) {
        self.deleted.set(self.deleted.get() + 1);
    }
}

impl GraphicsApi for CountingApi {
    fn create_buffer(&self) -> Result<Handle> { self.create() }
    fn delete_buffer(&self, _handle: Handle) { self.delete() }
    fn bind_buffer(&self, target: BufferTarget, handle: Option<Handle>) {
        match target {
            BufferTarget::Array => self.array_buffer.set(handle),
            BufferTarget::ElementArray => self.element_buffer.set(handle),
        }
    }
    fn buffer_data(&self, target: BufferTarget, size: usize, data: Option<&[u8]>, _usage: BufferUsageHint) {
        self.uploads.borrow_mut().push((target, size, data.is_some()));
    }

    fn create_framebuffer(&self) -> Result<Handle> { self.create() }
    fn delete_framebuffer(&self, _handle: Handle) { self.delete() }
    fn bind_framebuffer(&self, handle: Option<Handle>) { self.frame_buffer.set(handle) }
    fn framebuffer_renderbuffer(&self, _attachment: FrameBufferAttachment, _render_buffer: Option<Handle>) {}
    fn check_framebuffer_status(&self) -> FrameBufferStatus { FrameBufferStatus::Complete }

    fn create_renderbuffer(&self) -> Result<Handle> { self.create() }
    fn delete_renderbuffer(&self, _handle: Handle) { self.delete() }
    fn bind_renderbuffer(&self, handle: Option<Handle>) { self.render_buffer.set(handle) }
    fn renderbuffer_storage(&self, _format: RenderBufferFormat, _width: u32, _height: u32) {}

    fn create_vertex_array(&self) -> Result<Handle> { self.create() }
    fn delete_vertex_array(&self, _handle: Handle) { self.delete() }
    fn bind_vertex_array(&self, handle: Option<Handle>) { self.vertex_array.set(handle) }
    fn enable_vertex_attrib_array(&self, _index: u32) {}
    fn vertex_attrib_pointer(&self, pointer: &VertexAttribPointer) {
        self.attrib_pointers.borrow_mut().push(*pointer);
    }
}

/// Context over a fresh CountingApi
pub fn counting_context(trace_calls: bool) -> (Rc<CountingApi>, Rc<GraphicsContext>) {
    let api = Rc::new(CountingApi::default());
    let ctx = GraphicsContext::new(
        api.clone(),
        ContextConfig {
            label: "integration".to_string(),
            trace_calls,
        },
    );
    (api, ctx)
}
