/// GlowGraphicsApi - OpenGL implementation of the GraphicsApi trait

use glow::HasContext;
use gpu_handles::gpu::api::{
    BufferTarget, BufferUsageHint, FrameBufferAttachment, FrameBufferStatus, GraphicsApi, Handle,
    RenderBufferFormat,
};
use gpu_handles::gpu::resource::VertexAttribPointer;
use gpu_handles::gpu::{Error, Result};
use gpu_handles::{gpu_error, gpu_info};

use crate::glow_format;

const SOURCE: &str = "gpu::glow";

/// Backend configuration
#[derive(Debug, Clone)]
pub struct GlowConfig {
    /// Route KHR_debug messages into the logger (needs the `gl-debug-output` feature)
    pub enable_debug_output: bool,
    /// Drain glGetError after every forwarded call and log what it reports
    pub check_errors: bool,
}

impl Default for GlowConfig {
    fn default() -> Self {
        Self {
            enable_debug_output: cfg!(debug_assertions),
            check_errors: cfg!(debug_assertions),
        }
    }
}

/// OpenGL backend over a `glow::Context`
///
/// The GL context must be current on the calling thread for every call.
pub struct GlowGraphicsApi {
    gl: glow::Context,
    config: GlowConfig,
}

impl GlowGraphicsApi {
    /// Wrap a GL context
    ///
    /// # Errors
    ///
    /// `Error::InitializationFailed` if debug output is requested and the
    /// context does not support it.
    #[allow(unused_mut)]
    pub fn new(mut gl: glow::Context, config: GlowConfig) -> Result<Self> {
        if config.enable_debug_output {
            #[cfg(feature = "gl-debug-output")]
            crate::debug::install(&mut gl)?;

            #[cfg(not(feature = "gl-debug-output"))]
            gpu_handles::gpu_warn!(SOURCE, "Debug output requested but the gl-debug-output feature is disabled");
        }

        let version = gl.version();
        gpu_info!(
            SOURCE,
            "OpenGL backend ready (GL {}.{}{})",
            version.major,
            version.minor,
            if version.is_embedded { " ES" } else { "" }
        );

        Ok(Self { gl, config })
    }

    /// Underlying GL context
    pub fn gl(&self) -> &glow::Context {
        &self.gl
    }

    pub fn config(&self) -> &GlowConfig {
        &self.config
    }

    /// Log every pending GL error, if error checking is enabled
    fn check(&self, call: &str) {
        if !self.config.check_errors {
            return;
        }
        loop {
            let code = unsafe { self.gl.get_error() };
            if code == glow::NO_ERROR {
                break;
            }
            gpu_error!(SOURCE, "{} raised {} (0x{:04X})", call, glow_format::error_name(code), code);
        }
    }

    fn created(&self, call: &str, result: std::result::Result<std::num::NonZeroU32, String>) -> Result<Handle> {
        self.check(call);
        result
            .map(Handle::from)
            .map_err(|msg| Error::BackendError(format!("{} failed: {}", call, msg)))
    }
}

impl GraphicsApi for GlowGraphicsApi {
    // ===== BUFFERS =====

    fn create_buffer(&self) -> Result<Handle> {
        let result = unsafe { self.gl.create_buffer() }.map(|buffer| buffer.0);
        self.created("glGenBuffers", result)
    }

    fn delete_buffer(&self, handle: Handle) {
        unsafe { self.gl.delete_buffer(glow::NativeBuffer(handle.non_zero())) };
        self.check("glDeleteBuffers");
    }

    fn bind_buffer(&self, target: BufferTarget, handle: Option<Handle>) {
        unsafe {
            self.gl.bind_buffer(
                glow_format::buffer_target(target),
                handle.map(|h| glow::NativeBuffer(h.non_zero())),
            )
        };
        self.check("glBindBuffer");
    }

    fn buffer_data(&self, target: BufferTarget, size: usize, data: Option<&[u8]>, usage: BufferUsageHint) {
        let target = glow_format::buffer_target(target);
        let usage = glow_format::usage_hint(usage);
        match data {
            Some(bytes) => unsafe { self.gl.buffer_data_u8_slice(target, bytes, usage) },
            None => {
                let Ok(size) = i32::try_from(size) else {
                    gpu_error!(SOURCE, "glBufferData size {} exceeds the GL size range", size);
                    return;
                };
                unsafe { self.gl.buffer_data_size(target, size, usage) }
            }
        }
        self.check("glBufferData");
    }

    // ===== FRAME BUFFERS =====

    fn create_framebuffer(&self) -> Result<Handle> {
        let result = unsafe { self.gl.create_framebuffer() }.map(|fb| fb.0);
        self.created("glGenFramebuffers", result)
    }

    fn delete_framebuffer(&self, handle: Handle) {
        unsafe { self.gl.delete_framebuffer(glow::NativeFramebuffer(handle.non_zero())) };
        self.check("glDeleteFramebuffers");
    }

    fn bind_framebuffer(&self, handle: Option<Handle>) {
        unsafe {
            self.gl.bind_framebuffer(
                glow::FRAMEBUFFER,
                handle.map(|h| glow::NativeFramebuffer(h.non_zero())),
            )
        };
        self.check("glBindFramebuffer");
    }

    fn framebuffer_renderbuffer(&self, attachment: FrameBufferAttachment, render_buffer: Option<Handle>) {
        unsafe {
            self.gl.framebuffer_renderbuffer(
                glow::FRAMEBUFFER,
                glow_format::attachment(attachment),
                glow::RENDERBUFFER,
                render_buffer.map(|h| glow::NativeRenderbuffer(h.non_zero())),
            )
        };
        self.check("glFramebufferRenderbuffer");
    }

    fn check_framebuffer_status(&self) -> FrameBufferStatus {
        let status = unsafe { self.gl.check_framebuffer_status(glow::FRAMEBUFFER) };
        self.check("glCheckFramebufferStatus");
        glow_format::frame_buffer_status(status)
    }

    // ===== RENDER BUFFERS =====

    fn create_renderbuffer(&self) -> Result<Handle> {
        let result = unsafe { self.gl.create_renderbuffer() }.map(|rb| rb.0);
        self.created("glGenRenderbuffers", result)
    }

    fn delete_renderbuffer(&self, handle: Handle) {
        unsafe { self.gl.delete_renderbuffer(glow::NativeRenderbuffer(handle.non_zero())) };
        self.check("glDeleteRenderbuffers");
    }

    fn bind_renderbuffer(&self, handle: Option<Handle>) {
        unsafe {
            self.gl.bind_renderbuffer(
                glow::RENDERBUFFER,
                handle.map(|h| glow::NativeRenderbuffer(h.non_zero())),
            )
        };
        self.check("glBindRenderbuffer");
    }

    fn renderbuffer_storage(&self, format: RenderBufferFormat, width: u32, height: u32) {
        let (Ok(width), Ok(height)) = (i32::try_from(width), i32::try_from(height)) else {
            gpu_error!(SOURCE, "glRenderbufferStorage size {}x{} exceeds the GL size range", width, height);
            return;
        };
        unsafe {
            self.gl.renderbuffer_storage(
                glow::RENDERBUFFER,
                glow_format::render_buffer_format(format),
                width,
                height,
            )
        };
        self.check("glRenderbufferStorage");
    }

    // ===== VERTEX ARRAYS =====

    fn create_vertex_array(&self) -> Result<Handle> {
        let result = unsafe { self.gl.create_vertex_array() }.map(|va| va.0);
        self.created("glGenVertexArrays", result)
    }

    fn delete_vertex_array(&self, handle: Handle) {
        unsafe { self.gl.delete_vertex_array(glow::NativeVertexArray(handle.non_zero())) };
        self.check("glDeleteVertexArrays");
    }

    fn bind_vertex_array(&self, handle: Option<Handle>) {
        unsafe {
            self.gl
                .bind_vertex_array(handle.map(|h| glow::NativeVertexArray(h.non_zero())))
        };
        self.check("glBindVertexArray");
    }

    fn enable_vertex_attrib_array(&self, index: u32) {
        unsafe { self.gl.enable_vertex_attrib_array(index) };
        self.check("glEnableVertexAttribArray");
    }

    fn vertex_attrib_pointer(&self, pointer: &VertexAttribPointer) {
        let data_type = glow_format::scalar_type(pointer.scalar);
        let components = pointer.components as i32;
        let stride = pointer.stride as i32;
        let offset = pointer.offset as i32;

        unsafe {
            if pointer.is_integer() {
                self.gl.vertex_attrib_pointer_i32(pointer.index, components, data_type, stride, offset);
            } else {
                self.gl.vertex_attrib_pointer_f32(
                    pointer.index,
                    components,
                    data_type,
                    pointer.normalized,
                    stride,
                    offset,
                );
            }
        }
        self.check(if pointer.is_integer() { "glVertexAttribIPointer" } else { "glVertexAttribPointer" });
    }
}
