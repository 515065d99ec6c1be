/// Graphics API module - native API boundary and the context that tracks bindings

pub mod handle;
pub mod graphics_api;
pub mod context;

pub use handle::*;
pub use graphics_api::*;
pub use context::*;

// Mock graphics API for tests (no GPU required)
#[cfg(test)]
pub mod mock_graphics_api;
