//! Shader stages known to the Rogue compiler.

/// Number of stages tracked in per-stage build arrays.
pub const SHADER_STAGE_COUNT: usize = 3;

/// Shader stage, used to address per-stage build data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
    Compute,
}

impl ShaderStage {
    /// All stages, in index order.
    pub const ALL: [ShaderStage; SHADER_STAGE_COUNT] =
        [ShaderStage::Vertex, ShaderStage::Fragment, ShaderStage::Compute];

    /// Slot of this stage in per-stage arrays.
    pub const fn index(self) -> usize {
        match self {
            ShaderStage::Vertex => 0,
            ShaderStage::Fragment => 1,
            ShaderStage::Compute => 2,
        }
    }

    /// Short lowercase name for diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            ShaderStage::Vertex => "vertex",
            ShaderStage::Fragment => "fragment",
            ShaderStage::Compute => "compute",
        }
    }
}

impl std::fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
