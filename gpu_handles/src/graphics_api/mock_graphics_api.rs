/// Mock GraphicsApi for unit tests (no GPU required)
///
/// Records every call in order, hands out increasing handles, and tracks the
/// live handles and the native binding of every slot. As in GL, the element
/// array binding is stored per vertex array. Releasing a handle that is not
/// alive panics, so a double release fails the test that caused it.

use std::cell::{Cell, RefCell};

use rustc_hash::{FxHashMap, FxHashSet};

use crate::error::{Error, Result};
use crate::graphics_api::{
    GraphicsApi, Handle, ResourceKind, BindingSlot, BufferTarget, BufferUsageHint,
    FrameBufferAttachment, FrameBufferStatus, RenderBufferFormat,
};
use crate::resource::VertexAttribPointer;

/// One recorded native call
#[derive(Debug, Clone, PartialEq)]
pub enum ApiCall {
    Create(ResourceKind, Handle),
    Delete(ResourceKind, Handle),
    BindBuffer(BufferTarget, Option<Handle>),
    BufferData {
        target: BufferTarget,
        size: usize,
        data: Option<Vec<u8>>,
        usage: BufferUsageHint,
    },
    BindFramebuffer(Option<Handle>),
    FramebufferRenderbuffer(FrameBufferAttachment, Option<Handle>),
    CheckFramebufferStatus,
    BindRenderbuffer(Option<Handle>),
    RenderbufferStorage(RenderBufferFormat, u32, u32),
    BindVertexArray(Option<Handle>),
    EnableVertexAttribArray(u32),
    VertexAttribPointer(VertexAttribPointer),
}

#[derive(Debug)]
pub struct MockGraphicsApi {
    next_id: Cell<u32>,
    fail_allocations: Cell<bool>,
    status: Cell<FrameBufferStatus>,
    calls: RefCell<Vec<ApiCall>>,
    live: RefCell<FxHashSet<(ResourceKind, Handle)>>,
    bindings: RefCell<FxHashMap<BindingSlot, Handle>>,
    /// Element array binding per vertex array (None is array zero)
    element_buffers: RefCell<FxHashMap<Option<Handle>, Handle>>,
}

impl MockGraphicsApi {
    pub fn new() -> Self {
        Self {
            next_id: Cell::new(1),
            fail_allocations: Cell::new(false),
            status: Cell::new(FrameBufferStatus::Complete),
            calls: RefCell::new(Vec::new()),
            live: RefCell::new(FxHashSet::default()),
            bindings: RefCell::new(FxHashMap::default()),
            element_buffers: RefCell::new(FxHashMap::default()),
        }
    }

    /// Make every following create_* call fail
    pub fn set_fail_allocations(&self, fail: bool) {
        self.fail_allocations.set(fail);
    }

    /// Status returned by check_framebuffer_status
    pub fn set_framebuffer_status(&self, status: FrameBufferStatus) {
        self.status.set(status);
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.borrow().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    pub fn count(&self, predicate: impl Fn(&ApiCall) -> bool) -> usize {
        self.calls.borrow().iter().filter(|call| predicate(call)).count()
    }

    pub fn creates(&self, kind: ResourceKind) -> usize {
        self.count(|call| matches!(call, ApiCall::Create(k, _) if *k == kind))
    }

    pub fn deletes(&self, kind: ResourceKind) -> usize {
        self.count(|call| matches!(call, ApiCall::Delete(k, _) if *k == kind))
    }

    pub fn live_count(&self) -> usize {
        self.live.borrow().len()
    }

    pub fn is_live(&self, kind: ResourceKind, handle: Handle) -> bool {
        self.live.borrow().contains(&(kind, handle))
    }

    /// Native binding of a slot, as last set through this API
    pub fn native_binding(&self, slot: BindingSlot) -> Option<Handle> {
        if slot == BindingSlot::ElementArrayBuffer {
            let vertex_array = self.native_binding(BindingSlot::VertexArray);
            return self.element_buffers.borrow().get(&vertex_array).copied();
        }
        self.bindings.borrow().get(&slot).copied()
    }

    fn record(&self, call: ApiCall) {
        self.calls.borrow_mut().push(call);
    }

    fn create(&self, kind: ResourceKind) -> Result<Handle> {
        if self.fail_allocations.get() {
            return Err(Error::BackendError("mock allocation failure".to_string()));
        }
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        let handle = Handle::new(id).ok_or_else(|| Error::BackendError("handle overflow".to_string()))?;
        self.live.borrow_mut().insert((kind, handle));
        self.record(ApiCall::Create(kind, handle));
        Ok(handle)
    }

    fn delete(&self, kind: ResourceKind, handle: Handle) {
        let removed = self.live.borrow_mut().remove(&(kind, handle));
        assert!(removed, "release of {:?} {} which is not alive", kind, handle);
        self.bindings
            .borrow_mut()
            .retain(|slot, bound| !(slot.resource_kind() == kind && *bound == handle));
        match kind {
            ResourceKind::Buffer => self.element_buffers.borrow_mut().retain(|_, buffer| *buffer != handle),
            ResourceKind::VertexArray => {
                self.element_buffers.borrow_mut().remove(&Some(handle));
            }
            ResourceKind::FrameBuffer | ResourceKind::RenderBuffer => {}
        }
        self.record(ApiCall::Delete(kind, handle));
    }

    fn set_binding(&self, slot: BindingSlot, handle: Option<Handle>) {
        if slot == BindingSlot::ElementArrayBuffer {
            let vertex_array = self.native_binding(BindingSlot::VertexArray);
            let mut element_buffers = self.element_buffers.borrow_mut();
            match handle {
                Some(handle) => {
                    element_buffers.insert(vertex_array, handle);
                }
                None => {
                    element_buffers.remove(&vertex_array);
                }
            }
            return;
        }
        let mut bindings = self.bindings.borrow_mut();
        match handle {
            Some(handle) => {
                bindings.insert(slot, handle);
            }
            None => {
                bindings.remove(&slot);
            }
        }
    }
}

impl GraphicsApi for MockGraphicsApi {
    fn create_buffer(&self) -> Result<Handle> {
        self.create(ResourceKind::Buffer)
    }

    fn delete_buffer(&self, handle: Handle) {
        self.delete(ResourceKind::Buffer, handle);
    }

    fn bind_buffer(&self, target: BufferTarget, handle: Option<Handle>) {
        self.set_binding(target.slot(), handle);
        self.record(ApiCall::BindBuffer(target, handle));
    }

    fn buffer_data(&self, target: BufferTarget, size: usize, data: Option<&[u8]>, usage: BufferUsageHint) {
        self.record(ApiCall::BufferData {
            target,
            size,
            data: data.map(<[u8]>::to_vec),
            usage,
        });
    }

    fn create_framebuffer(&self) -> Result<Handle> {
        self.create(ResourceKind::FrameBuffer)
    }

    fn delete_framebuffer(&self, handle: Handle) {
        self.delete(ResourceKind::FrameBuffer, handle);
    }

    fn bind_framebuffer(&self, handle: Option<Handle>) {
        self.set_binding(BindingSlot::FrameBuffer, handle);
        self.record(ApiCall::BindFramebuffer(handle));
    }

    fn framebuffer_renderbuffer(&self, attachment: FrameBufferAttachment, render_buffer: Option<Handle>) {
        self.record(ApiCall::FramebufferRenderbuffer(attachment, render_buffer));
    }

    fn check_framebuffer_status(&self) -> FrameBufferStatus {
        self.record(ApiCall::CheckFramebufferStatus);
        self.status.get()
    }

    fn create_renderbuffer(&self) -> Result<Handle> {
        self.create(ResourceKind::RenderBuffer)
    }

    fn delete_renderbuffer(&self, handle: Handle) {
        self.delete(ResourceKind::RenderBuffer, handle);
    }

    fn bind_renderbuffer(&self, handle: Option<Handle>) {
        self.set_binding(BindingSlot::RenderBuffer, handle);
        self.record(ApiCall::BindRenderbuffer(handle));
    }

    fn renderbuffer_storage(&self, format: RenderBufferFormat, width: u32, height: u32) {
        self.record(ApiCall::RenderbufferStorage(format, width, height));
    }

    fn create_vertex_array(&self) -> Result<Handle> {
        self.create(ResourceKind::VertexArray)
    }

    fn delete_vertex_array(&self, handle: Handle) {
        self.delete(ResourceKind::VertexArray, handle);
    }

    fn bind_vertex_array(&self, handle: Option<Handle>) {
        self.set_binding(BindingSlot::VertexArray, handle);
        self.record(ApiCall::BindVertexArray(handle));
    }

    fn enable_vertex_attrib_array(&self, index: u32) {
        self.record(ApiCall::EnableVertexAttribArray(index));
    }

    fn vertex_attrib_pointer(&self, pointer: &VertexAttribPointer) {
        self.record(ApiCall::VertexAttribPointer(*pointer));
    }
}

/// Build a context over a fresh mock, keeping a handle on the mock
pub fn mock_context() -> (std::rc::Rc<MockGraphicsApi>, std::rc::Rc<crate::graphics_api::GraphicsContext>) {
    let api = std::rc::Rc::new(MockGraphicsApi::new());
    let ctx = crate::graphics_api::GraphicsContext::new(
        api.clone(),
        crate::graphics_api::ContextConfig {
            label: "mock".to_string(),
            trace_calls: false,
        },
    );
    (api, ctx)
}
