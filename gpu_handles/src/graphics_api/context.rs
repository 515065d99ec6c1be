/// GraphicsContext - owns the native API and the current binding of every slot
///
/// The native API keeps one active handle per binding slot as global mutable
/// state. The context mirrors that state explicitly: every bind, unbind and
/// release issued by a wrapper goes through here, so `bound()` always reports
/// what the native API last saw from this crate.
///
/// The element array binding is vertex array state: each vertex array (and
/// vertex array zero) keeps its own, and binding an array brings its element
/// array buffer back into the slot.
///
/// The context is shared by every wrapper created from it (`Rc`), which keeps
/// it alive until the last resource is dropped and keeps all of them on the
/// rendering thread.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::error::{Error, Result};
use crate::diagnostics::Diagnostics;
use crate::graphics_api::{
    GraphicsApi, Handle, ResourceKind, BindingSlot, BufferTarget, BufferUsageHint,
    FrameBufferAttachment, FrameBufferStatus, RenderBufferFormat,
};
use crate::resource::VertexAttribPointer;

const SOURCE: &str = "gpu::Context";

/// Context configuration
#[derive(Debug, Clone)]
pub struct ContextConfig {
    /// Name used in log messages
    pub label: String,
    /// Log every forwarded native call at TRACE severity
    ///
    /// The default logger drops TRACE entries; install
    /// `DefaultLogger::with_min_severity(LogSeverity::Trace)` to print them.
    pub trace_calls: bool,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            label: "gpu_handles context".to_string(),
            trace_calls: false,
        }
    }
}

/// Resource statistics of a context
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContextStats {
    /// Buffers currently alive
    pub live_buffers: u32,
    /// Frame buffers currently alive
    pub live_frame_buffers: u32,
    /// Render buffers currently alive
    pub live_render_buffers: u32,
    /// Vertex arrays currently alive
    pub live_vertex_arrays: u32,
    /// Native handles allocated since creation
    pub allocations: u64,
    /// Native handles released since creation
    pub releases: u64,
    /// Bind and unbind calls forwarded since creation
    pub bind_calls: u64,
    /// Buffer uploads forwarded since creation
    pub uploads: u64,
}

impl ContextStats {
    /// Total number of live resources
    pub fn live_total(&self) -> u32 {
        self.live_buffers + self.live_frame_buffers + self.live_render_buffers + self.live_vertex_arrays
    }

    fn live_mut(&mut self, kind: ResourceKind) -> &mut u32 {
        match kind {
            ResourceKind::Buffer => &mut self.live_buffers,
            ResourceKind::FrameBuffer => &mut self.live_frame_buffers,
            ResourceKind::RenderBuffer => &mut self.live_render_buffers,
            ResourceKind::VertexArray => &mut self.live_vertex_arrays,
        }
    }
}

/// Current handle of every binding slot
#[derive(Debug, Default)]
pub struct BindingState {
    slots: [Cell<Option<Handle>>; BindingSlot::COUNT],
    /// Element array buffer of every vertex array, keyed by array (None is array zero)
    element_buffers: RefCell<FxHashMap<Option<Handle>, Handle>>,
}

impl BindingState {
    /// Handle currently bound to `slot`
    pub fn get(&self, slot: BindingSlot) -> Option<Handle> {
        self.slots[slot.index()].get()
    }

    fn set(&self, slot: BindingSlot, handle: Option<Handle>) {
        self.slots[slot.index()].set(handle);
        match slot {
            BindingSlot::ElementArrayBuffer => {
                let vertex_array = self.get(BindingSlot::VertexArray);
                let mut element_buffers = self.element_buffers.borrow_mut();
                match handle {
                    Some(buffer) => {
                        element_buffers.insert(vertex_array, buffer);
                    }
                    None => {
                        element_buffers.remove(&vertex_array);
                    }
                }
            }
            BindingSlot::VertexArray => {
                let element_buffer = self.element_buffers.borrow().get(&handle).copied();
                self.slots[BindingSlot::ElementArrayBuffer.index()].set(element_buffer);
            }
            _ => {}
        }
    }

    /// Element array buffer recorded for `vertex_array`
    pub fn element_buffer_of(&self, vertex_array: Option<Handle>) -> Option<Handle> {
        self.element_buffers.borrow().get(&vertex_array).copied()
    }

    /// Drop every per-array element binding that refers to a released handle
    fn forget(&self, kind: ResourceKind, handle: Handle) {
        let mut element_buffers = self.element_buffers.borrow_mut();
        match kind {
            ResourceKind::Buffer => element_buffers.retain(|_, buffer| *buffer != handle),
            ResourceKind::VertexArray => {
                element_buffers.remove(&Some(handle));
            }
            ResourceKind::FrameBuffer | ResourceKind::RenderBuffer => {}
        }
    }

    /// Reset `slot` if `handle` is what it holds
    fn clear_if(&self, slot: BindingSlot, handle: Handle) -> bool {
        if self.get(slot) == Some(handle) {
            self.set(slot, None);
            true
        } else {
            false
        }
    }
}

/// Graphics context shared by all resource wrappers
pub struct GraphicsContext {
    api: Rc<dyn GraphicsApi>,
    config: ContextConfig,
    bindings: BindingState,
    stats: Cell<ContextStats>,
}

impl GraphicsContext {
    /// Create a context over a native API
    ///
    /// All slots start unbound.
    pub fn new(api: Rc<dyn GraphicsApi>, config: ContextConfig) -> Rc<Self> {
        crate::gpu_info!(SOURCE, "Context '{}' created", config.label);
        Rc::new(Self {
            api,
            config,
            bindings: BindingState::default(),
            stats: Cell::new(ContextStats::default()),
        })
    }

    /// Context configuration
    pub fn config(&self) -> &ContextConfig {
        &self.config
    }

    /// Native API this context forwards to
    pub fn api(&self) -> &Rc<dyn GraphicsApi> {
        &self.api
    }

    /// Resource statistics
    pub fn stats(&self) -> ContextStats {
        self.stats.get()
    }

    /// Handle currently bound to `slot`, None if the slot is unbound
    ///
    /// For `ElementArrayBuffer` this is the element array buffer of the
    /// currently bound vertex array.
    pub fn bound(&self, slot: BindingSlot) -> Option<Handle> {
        self.bindings.get(slot)
    }

    /// Element array buffer recorded in `vertex_array` (None is array zero)
    pub fn element_buffer_of(&self, vertex_array: Option<Handle>) -> Option<Handle> {
        self.bindings.element_buffer_of(vertex_array)
    }

    /// Whether `handle` is the active handle of `slot`
    pub fn is_bound(&self, slot: BindingSlot, handle: Handle) -> bool {
        self.bindings.get(slot) == Some(handle)
    }

    /// Bind zero to every slot that currently holds a handle
    ///
    /// The vertex array goes first, so the buffer slots are cleared against
    /// vertex array zero and bound arrays keep their element array buffer.
    pub fn unbind_all(&self) {
        let buffer_slots = BindingSlot::ALL
            .into_iter()
            .filter(|slot| *slot != BindingSlot::VertexArray);
        for slot in std::iter::once(BindingSlot::VertexArray).chain(buffer_slots) {
            if self.bindings.get(slot).is_some() {
                self.bind(slot, None);
            }
        }
    }

    fn update_stats(&self, f: impl FnOnce(&mut ContextStats)) {
        let mut stats = self.stats.get();
        f(&mut stats);
        self.stats.set(stats);
    }

    fn trace(&self, call: std::fmt::Arguments<'_>) {
        if self.config.trace_calls {
            crate::gpu_trace!(SOURCE, "[{}] {}", self.config.label, call);
        }
    }

    // ===== FORWARDING (used by the resource wrappers) =====

    /// Allocate one native handle of `kind`
    pub(crate) fn allocate(&self, kind: ResourceKind) -> Result<Handle> {
        let result = match kind {
            ResourceKind::Buffer => self.api.create_buffer(),
            ResourceKind::FrameBuffer => self.api.create_framebuffer(),
            ResourceKind::RenderBuffer => self.api.create_renderbuffer(),
            ResourceKind::VertexArray => self.api.create_vertex_array(),
        };

        let handle = result.map_err(|err| {
            let err = match err {
                Error::BackendError(msg) => {
                    Error::BackendError(format!("Failed to allocate {:?}: {}", kind, msg))
                }
                other => other,
            };
            Diagnostics::log_and_return_error(SOURCE, err)
        })?;

        self.trace(format_args!("create {:?} -> {}", kind, handle));
        self.update_stats(|stats| {
            *stats.live_mut(kind) += 1;
            stats.allocations += 1;
        });
        Ok(handle)
    }

    /// Release one native handle of `kind`
    ///
    /// Any slot still holding the handle falls back to none, as the native
    /// API does when a bound object is deleted.
    pub(crate) fn release(&self, kind: ResourceKind, handle: Handle) {
        match kind {
            ResourceKind::Buffer => self.api.delete_buffer(handle),
            ResourceKind::FrameBuffer => self.api.delete_framebuffer(handle),
            ResourceKind::RenderBuffer => self.api.delete_renderbuffer(handle),
            ResourceKind::VertexArray => self.api.delete_vertex_array(handle),
        }
        self.trace(format_args!("delete {:?} {}", kind, handle));

        for slot in BindingSlot::ALL {
            if slot.resource_kind() == kind && self.bindings.clear_if(slot, handle) {
                self.trace(format_args!("{:?} reverted to none", slot));
            }
        }
        self.bindings.forget(kind, handle);

        self.update_stats(|stats| {
            let live = stats.live_mut(kind);
            *live = live.saturating_sub(1);
            stats.releases += 1;
        });
    }

    /// Make `handle` the active handle of `slot` (None unbinds)
    pub(crate) fn bind(&self, slot: BindingSlot, handle: Option<Handle>) {
        match slot {
            BindingSlot::ArrayBuffer => self.api.bind_buffer(BufferTarget::Array, handle),
            BindingSlot::ElementArrayBuffer => self.api.bind_buffer(BufferTarget::ElementArray, handle),
            BindingSlot::FrameBuffer => self.api.bind_framebuffer(handle),
            BindingSlot::RenderBuffer => self.api.bind_renderbuffer(handle),
            BindingSlot::VertexArray => self.api.bind_vertex_array(handle),
        }
        self.bindings.set(slot, handle);
        self.trace(format_args!("bind {:?} -> {:?}", slot, handle.map(Handle::raw)));
        self.update_stats(|stats| stats.bind_calls += 1);
    }

    /// Upload into the buffer bound to `target`
    pub(crate) fn upload(&self, target: BufferTarget, size: usize, data: Option<&[u8]>) {
        self.api.buffer_data(target, size, data, BufferUsageHint::StaticDraw);
        self.trace(format_args!(
            "buffer_data {:?} size={} data={}",
            target,
            size,
            if data.is_some() { "some" } else { "none" }
        ));
        self.update_stats(|stats| stats.uploads += 1);
    }

    pub(crate) fn enable_attribute(&self, index: u32) {
        self.api.enable_vertex_attrib_array(index);
        self.trace(format_args!("enable_vertex_attrib_array {}", index));
    }

    pub(crate) fn attribute_pointer(&self, pointer: &VertexAttribPointer) {
        self.api.vertex_attrib_pointer(pointer);
        self.trace(format_args!("vertex_attrib_pointer {:?}", pointer));
    }

    pub(crate) fn attach_render_buffer(&self, attachment: FrameBufferAttachment, render_buffer: Option<Handle>) {
        self.api.framebuffer_renderbuffer(attachment, render_buffer);
        self.trace(format_args!("framebuffer_renderbuffer {:?} -> {:?}", attachment, render_buffer.map(Handle::raw)));
    }

    pub(crate) fn frame_buffer_status(&self) -> FrameBufferStatus {
        let status = self.api.check_framebuffer_status();
        self.trace(format_args!("check_framebuffer_status -> {:?}", status));
        status
    }

    pub(crate) fn render_buffer_storage(&self, format: RenderBufferFormat, width: u32, height: u32) {
        self.api.renderbuffer_storage(format, width, height);
        self.trace(format_args!("renderbuffer_storage {:?} {}x{}", format, width, height));
    }
}

impl Drop for GraphicsContext {
    fn drop(&mut self) {
        crate::gpu_debug!(
            SOURCE,
            "Context '{}' dropped ({} allocations, {} releases)",
            self.config.label,
            self.stats.get().allocations,
            self.stats.get().releases
        );
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
