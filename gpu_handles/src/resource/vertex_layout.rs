/// Vertex layout types - describe how one vertex is laid out in a vertex buffer

/// Scalar component type of a vertex attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarType {
    F32,
    I32,
    U32,
    I16,
    U16,
    I8,
    U8,
}

impl ScalarType {
    /// Size in bytes of one component
    pub fn size_bytes(&self) -> u32 {
        match self {
            ScalarType::F32 | ScalarType::I32 | ScalarType::U32 => 4,
            ScalarType::I16 | ScalarType::U16 => 2,
            ScalarType::I8 | ScalarType::U8 => 1,
        }
    }

    pub fn is_float(&self) -> bool {
        matches!(self, ScalarType::F32)
    }
}

/// Attribute data format (component type and count)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(non_camel_case_types)]
pub enum AttributeFormat {
    // Float formats
    R32_SFLOAT,         // float
    R32G32_SFLOAT,      // vec2
    R32G32B32_SFLOAT,   // vec3
    R32G32B32A32_SFLOAT, // vec4

    // Integer formats (signed)
    R32_SINT,
    R32G32_SINT,
    R32G32B32_SINT,
    R32G32B32A32_SINT,

    // Integer formats (unsigned)
    R32_UINT,
    R32G32_UINT,
    R32G32B32_UINT,
    R32G32B32A32_UINT,

    // Short formats (signed)
    R16_SINT,
    R16G16_SINT,
    R16G16B16A16_SINT,

    // Short formats (unsigned)
    R16_UINT,
    R16G16_UINT,
    R16G16B16A16_UINT,

    // Byte formats (signed)
    R8_SINT,
    R8G8_SINT,
    R8G8B8A8_SINT,

    // Byte formats (unsigned)
    R8_UINT,
    R8G8_UINT,
    R8G8B8A8_UINT,
}

impl AttributeFormat {
    /// Component type
    pub fn scalar_type(&self) -> ScalarType {
        use AttributeFormat::*;
        match self {
            R32_SFLOAT | R32G32_SFLOAT | R32G32B32_SFLOAT | R32G32B32A32_SFLOAT => ScalarType::F32,
            R32_SINT | R32G32_SINT | R32G32B32_SINT | R32G32B32A32_SINT => ScalarType::I32,
            R32_UINT | R32G32_UINT | R32G32B32_UINT | R32G32B32A32_UINT => ScalarType::U32,
            R16_SINT | R16G16_SINT | R16G16B16A16_SINT => ScalarType::I16,
            R16_UINT | R16G16_UINT | R16G16B16A16_UINT => ScalarType::U16,
            R8_SINT | R8G8_SINT | R8G8B8A8_SINT => ScalarType::I8,
            R8_UINT | R8G8_UINT | R8G8B8A8_UINT => ScalarType::U8,
        }
    }

    /// Number of components (1 to 4)
    pub fn component_count(&self) -> u32 {
        use AttributeFormat::*;
        match self {
            R32_SFLOAT | R32_SINT | R32_UINT | R16_SINT | R16_UINT | R8_SINT | R8_UINT => 1,
            R32G32_SFLOAT | R32G32_SINT | R32G32_UINT | R16G16_SINT | R16G16_UINT | R8G8_SINT | R8G8_UINT => 2,
            R32G32B32_SFLOAT | R32G32B32_SINT | R32G32B32_UINT => 3,
            R32G32B32A32_SFLOAT | R32G32B32A32_SINT | R32G32B32A32_UINT
            | R16G16B16A16_SINT | R16G16B16A16_UINT
            | R8G8B8A8_SINT | R8G8B8A8_UINT => 4,
        }
    }

    /// Returns size in bytes for this format
    pub fn size_bytes(&self) -> u32 {
        self.scalar_type().size_bytes() * self.component_count()
    }
}

/// One attribute of a vertex
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexAttribute {
    /// Name of the shader input, for diagnostics only
    pub name: String,
    /// Format of the attribute
    pub format: AttributeFormat,
    /// Map integer components to [0, 1] / [-1, 1] floats
    pub normalized: bool,
    /// Offset in bytes from the start of the vertex (filled by VertexBufferLayout)
    pub offset: u32,
}

impl VertexAttribute {
    pub fn new(name: impl Into<String>, format: AttributeFormat) -> Self {
        Self {
            name: name.into(),
            format,
            normalized: false,
            offset: 0,
        }
    }

    /// Same attribute, read as normalized floats
    pub fn normalized(mut self) -> Self {
        self.normalized = true;
        self
    }
}

/// Tightly packed, interleaved vertex layout
///
/// Attributes are laid out in declaration order; offsets and stride are
/// computed at construction.
///
/// # Example
///
/// ```
/// use gpu_handles::gpu::resource::{AttributeFormat, VertexAttribute, VertexBufferLayout};
///
/// let layout = VertexBufferLayout::new(vec![
///     VertexAttribute::new("position", AttributeFormat::R32G32B32_SFLOAT),
///     VertexAttribute::new("uv", AttributeFormat::R32G32_SFLOAT),
/// ]);
/// assert_eq!(layout.stride(), 20);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VertexBufferLayout {
    attributes: Vec<VertexAttribute>,
    stride: u32,
}

impl VertexBufferLayout {
    pub fn new(mut attributes: Vec<VertexAttribute>) -> Self {
        let mut offset = 0;
        for attribute in &mut attributes {
            attribute.offset = offset;
            offset += attribute.format.size_bytes();
        }
        Self { attributes, stride: offset }
    }

    /// Size in bytes of one vertex
    pub fn stride(&self) -> u32 {
        self.stride
    }

    pub fn attributes(&self) -> &[VertexAttribute] {
        &self.attributes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, VertexAttribute> {
        self.attributes.iter()
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

impl<'a> IntoIterator for &'a VertexBufferLayout {
    type Item = &'a VertexAttribute;
    type IntoIter = std::slice::Iter<'a, VertexAttribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.attributes.iter()
    }
}

/// Attribute pointer declared on the bound vertex array
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexAttribPointer {
    /// Attribute index
    pub index: u32,
    /// Number of components (1 to 4)
    pub components: u32,
    /// Component type
    pub scalar: ScalarType,
    /// Normalize integer components
    pub normalized: bool,
    /// Stride in bytes between consecutive vertices
    pub stride: u32,
    /// Offset in bytes of the attribute within a vertex
    pub offset: u32,
}

impl VertexAttribPointer {
    pub fn from_attribute(index: u32, attribute: &VertexAttribute, stride: u32) -> Self {
        Self {
            index,
            components: attribute.format.component_count(),
            scalar: attribute.format.scalar_type(),
            normalized: attribute.normalized,
            stride,
            offset: attribute.offset,
        }
    }

    /// Whether the shader reads the attribute as integers rather than floats
    pub fn is_integer(&self) -> bool {
        !self.scalar.is_float() && !self.normalized
    }
}

#[cfg(test)]
#[path = "vertex_layout_tests.rs"]
mod tests;
