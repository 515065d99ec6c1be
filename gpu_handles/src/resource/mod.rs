/// Resource module - RAII wrappers over native graphics resources

pub mod vertex_layout;
pub mod vertex_buffer;
pub mod index_buffer;
pub mod frame_buffer;
pub mod render_buffer;
pub mod vertex_array;

pub use vertex_layout::*;
pub use vertex_buffer::*;
pub use index_buffer::*;
pub use frame_buffer::*;
pub use render_buffer::*;
pub use vertex_array::*;
