/*!
# gpu_handles

RAII wrappers around native graphics resource handles: vertex buffers,
index buffers, frame buffers, render buffers and vertex arrays.

Each wrapper allocates one native handle when it is created, releases it
exactly once when it is dropped, and forwards bind/unbind to the native API.
The native API is reached through the `GraphicsApi` trait; backends
(e.g. `gpu_handles_glow`) provide the implementation.

## Architecture

- **GraphicsApi**: native API boundary (create/delete/bind per resource kind)
- **GraphicsContext**: shared by all wrappers, tracks the current binding of every slot
- **VertexBuffer / IndexBuffer**: array and element-array buffers
- **FrameBuffer / RenderBuffer**: off-screen targets and their attachable storage
- **VertexArray**: vertex layout binding, refers to attached buffers without owning them
*/

// Internal modules
mod error;
mod diagnostics;
pub mod log;
pub mod graphics_api;
pub mod resource;

// Main gpu namespace module
pub mod gpu {
    // Error types
    pub use crate::error::{Error, Result};

    // Process-wide logger
    pub use crate::diagnostics::Diagnostics;

    // Context and native API boundary
    pub use crate::graphics_api::{GraphicsApi, GraphicsContext, ContextConfig, ContextStats, Handle, BindingSlot};

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Native API sub-module
    pub mod api {
        pub use crate::graphics_api::*;
    }

    // Resource sub-module
    pub mod resource {
        pub use crate::resource::*;
    }
}

// Re-export math library at crate root
pub use glam;
