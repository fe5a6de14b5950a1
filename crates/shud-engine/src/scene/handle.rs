/// Renderer-issued handle to uploaded geometry buffers.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct GeometryId(u64);

/// Renderer-issued handle to a compiled material (pipeline + uniforms).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct MaterialId(u64);

impl GeometryId {
    #[inline]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl MaterialId {
    #[inline]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn raw(self) -> u64 {
        self.0
    }
}
