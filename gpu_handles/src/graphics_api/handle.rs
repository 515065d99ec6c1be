/// Native handle and binding slot types

use std::fmt;
use std::num::NonZeroU32;

/// Opaque native resource id
///
/// The native API reserves zero for "no resource", so a `Handle` is never
/// zero and "none" is spelled `Option::<Handle>::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Handle(NonZeroU32);

impl Handle {
    /// Wrap a raw native id, returning None for the reserved zero id
    pub fn new(raw: u32) -> Option<Self> {
        NonZeroU32::new(raw).map(Self)
    }

    /// Raw native id
    pub fn raw(self) -> u32 {
        self.0.get()
    }

    /// Native id as a non-zero integer
    pub fn non_zero(self) -> NonZeroU32 {
        self.0
    }
}

impl From<NonZeroU32> for Handle {
    fn from(id: NonZeroU32) -> Self {
        Self(id)
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Kind of native resource, one create/delete pair each
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// Array or element-array buffer
    Buffer,
    /// Off-screen render target container
    FrameBuffer,
    /// Attachable storage (depth/stencil/color backing)
    RenderBuffer,
    /// Vertex layout binding object
    VertexArray,
}

/// Slot of the graphics context holding at most one active handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BindingSlot {
    /// Vertex data buffer slot
    ArrayBuffer,
    /// Index data buffer slot
    ElementArrayBuffer,
    /// Frame buffer slot
    FrameBuffer,
    /// Render buffer slot
    RenderBuffer,
    /// Vertex array slot
    VertexArray,
}

impl BindingSlot {
    /// Number of binding slots
    pub const COUNT: usize = 5;

    /// All slots, in index order
    pub const ALL: [BindingSlot; Self::COUNT] = [
        BindingSlot::ArrayBuffer,
        BindingSlot::ElementArrayBuffer,
        BindingSlot::FrameBuffer,
        BindingSlot::RenderBuffer,
        BindingSlot::VertexArray,
    ];

    /// Dense index of this slot
    pub fn index(self) -> usize {
        match self {
            BindingSlot::ArrayBuffer => 0,
            BindingSlot::ElementArrayBuffer => 1,
            BindingSlot::FrameBuffer => 2,
            BindingSlot::RenderBuffer => 3,
            BindingSlot::VertexArray => 4,
        }
    }

    /// Resource kind that can be bound to this slot
    pub fn resource_kind(self) -> ResourceKind {
        match self {
            BindingSlot::ArrayBuffer | BindingSlot::ElementArrayBuffer => ResourceKind::Buffer,
            BindingSlot::FrameBuffer => ResourceKind::FrameBuffer,
            BindingSlot::RenderBuffer => ResourceKind::RenderBuffer,
            BindingSlot::VertexArray => ResourceKind::VertexArray,
        }
    }
}

/// Target of a buffer bind or upload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BufferTarget {
    /// Vertex attribute data
    Array,
    /// Vertex indices
    ElementArray,
}

impl BufferTarget {
    /// Binding slot driven by this target
    pub fn slot(self) -> BindingSlot {
        match self {
            BufferTarget::Array => BindingSlot::ArrayBuffer,
            BufferTarget::ElementArray => BindingSlot::ElementArrayBuffer,
        }
    }
}

#[cfg(test)]
#[path = "handle_tests.rs"]
mod tests;
