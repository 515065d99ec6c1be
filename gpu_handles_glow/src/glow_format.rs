/// Conversions between gpu_handles enums and OpenGL enum values

use gpu_handles::gpu::api::{
    BufferTarget, BufferUsageHint, FrameBufferAttachment, FrameBufferStatus, RenderBufferFormat,
};
use gpu_handles::gpu::resource::ScalarType;

pub(crate) fn buffer_target(target: BufferTarget) -> u32 {
    match target {
        BufferTarget::Array => glow::ARRAY_BUFFER,
        BufferTarget::ElementArray => glow::ELEMENT_ARRAY_BUFFER,
    }
}

pub(crate) fn usage_hint(usage: BufferUsageHint) -> u32 {
    match usage {
        BufferUsageHint::StaticDraw => glow::STATIC_DRAW,
        BufferUsageHint::DynamicDraw => glow::DYNAMIC_DRAW,
        BufferUsageHint::StreamDraw => glow::STREAM_DRAW,
    }
}

pub(crate) fn render_buffer_format(format: RenderBufferFormat) -> u32 {
    match format {
        RenderBufferFormat::RGBA8 => glow::RGBA8,
        RenderBufferFormat::RGBA16F => glow::RGBA16F,
        RenderBufferFormat::DEPTH_COMPONENT24 => glow::DEPTH_COMPONENT24,
        RenderBufferFormat::DEPTH_COMPONENT32F => glow::DEPTH_COMPONENT32F,
        RenderBufferFormat::DEPTH24_STENCIL8 => glow::DEPTH24_STENCIL8,
        RenderBufferFormat::STENCIL_INDEX8 => glow::STENCIL_INDEX8,
    }
}

pub(crate) fn attachment(attachment: FrameBufferAttachment) -> u32 {
    match attachment {
        FrameBufferAttachment::Color(index) => glow::COLOR_ATTACHMENT0 + index,
        FrameBufferAttachment::Depth => glow::DEPTH_ATTACHMENT,
        FrameBufferAttachment::Stencil => glow::STENCIL_ATTACHMENT,
        FrameBufferAttachment::DepthStencil => glow::DEPTH_STENCIL_ATTACHMENT,
    }
}

pub(crate) fn frame_buffer_status(status: u32) -> FrameBufferStatus {
    match status {
        glow::FRAMEBUFFER_COMPLETE => FrameBufferStatus::Complete,
        glow::FRAMEBUFFER_INCOMPLETE_ATTACHMENT => FrameBufferStatus::IncompleteAttachment,
        glow::FRAMEBUFFER_INCOMPLETE_MISSING_ATTACHMENT => FrameBufferStatus::MissingAttachment,
        glow::FRAMEBUFFER_UNSUPPORTED => FrameBufferStatus::Unsupported,
        other => FrameBufferStatus::Other(other),
    }
}

pub(crate) fn scalar_type(scalar: ScalarType) -> u32 {
    match scalar {
        ScalarType::F32 => glow::FLOAT,
        ScalarType::I32 => glow::INT,
        ScalarType::U32 => glow::UNSIGNED_INT,
        ScalarType::I16 => glow::SHORT,
        ScalarType::U16 => glow::UNSIGNED_SHORT,
        ScalarType::I8 => glow::BYTE,
        ScalarType::U8 => glow::UNSIGNED_BYTE,
    }
}

/// Symbolic name of a glGetError code
pub(crate) fn error_name(code: u32) -> &'static str {
    match code {
        glow::NO_ERROR => "GL_NO_ERROR",
        glow::INVALID_ENUM => "GL_INVALID_ENUM",
        glow::INVALID_VALUE => "GL_INVALID_VALUE",
        glow::INVALID_OPERATION => "GL_INVALID_OPERATION",
        glow::INVALID_FRAMEBUFFER_OPERATION => "GL_INVALID_FRAMEBUFFER_OPERATION",
        glow::OUT_OF_MEMORY => "GL_OUT_OF_MEMORY",
        glow::STACK_UNDERFLOW => "GL_STACK_UNDERFLOW",
        glow::STACK_OVERFLOW => "GL_STACK_OVERFLOW",
        _ => "unknown GL error",
    }
}

#[cfg(test)]
#[path = "glow_format_tests.rs"]
mod tests;
