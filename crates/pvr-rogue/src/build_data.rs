//! Build metadata produced by the compiler for each shader stage.
//!
//! The driver reads these after compilation to size register files, program
//! the PDS and lay out uniform buffers. [`RogueBuildCtx`] is the accumulator
//! that every stage writes into while a pipeline is being built.

use crate::shader_stage::{ShaderStage, SHADER_STAGE_COUNT};

/// Register index meaning "no register assigned".
pub const ROGUE_REG_UNUSED: u32 = u32::MAX;

/// Maximum number of UBOs a shader can reference.
pub const ROGUE_MAX_BUFFERS: usize = 24;

/// Maximum number of varyings iterated into a fragment shader.
pub const ROGUE_MAX_IO_VARYING_VARS: usize = 16;

/// Register usage common to every stage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RogueCommonBuildData {
    /// Temporary registers.
    pub temps: u32,
    /// Internal registers.
    pub internals: u32,
    /// Coefficient registers.
    pub coeffs: u32,
    /// Shared registers.
    pub shareds: u32,
}

impl RogueCommonBuildData {
    pub const ZERO: Self = Self {
        temps: 0,
        internals: 0,
        coeffs: 0,
        shareds: 0,
    };
}

/// Layout of the UBOs a shader reads, as loaded into shared registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RogueUboData {
    pub num_ubo_entries: u32,
    pub desc_set: [u32; ROGUE_MAX_BUFFERS],
    pub binding: [u32; ROGUE_MAX_BUFFERS],
    /// Destination shared register of each entry.
    pub dest: [u32; ROGUE_MAX_BUFFERS],
    /// Size in dwords of each entry.
    pub size: [u32; ROGUE_MAX_BUFFERS],
}

impl RogueUboData {
    pub const EMPTY: Self = Self {
        num_ubo_entries: 0,
        desc_set: [0; ROGUE_MAX_BUFFERS],
        binding: [0; ROGUE_MAX_BUFFERS],
        dest: [0; ROGUE_MAX_BUFFERS],
        size: [0; ROGUE_MAX_BUFFERS],
    };
}

impl Default for RogueUboData {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// Fragment shader varying iteration setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RogueIteratorArgs {
    pub num_fpu_iterators: u32,
    pub fpu_iterators: [u32; ROGUE_MAX_IO_VARYING_VARS],
    pub destination: [u32; ROGUE_MAX_IO_VARYING_VARS],
    pub base: [u32; ROGUE_MAX_IO_VARYING_VARS],
    pub components: [u32; ROGUE_MAX_IO_VARYING_VARS],
}

impl RogueIteratorArgs {
    pub const EMPTY: Self = Self {
        num_fpu_iterators: 0,
        fpu_iterators: [0; ROGUE_MAX_IO_VARYING_VARS],
        destination: [0; ROGUE_MAX_IO_VARYING_VARS],
        base: [0; ROGUE_MAX_IO_VARYING_VARS],
        components: [0; ROGUE_MAX_IO_VARYING_VARS],
    };
}

impl Default for RogueIteratorArgs {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// Fragment shader MSAA mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RogueMsaaMode {
    #[default]
    Undef,
    Pixel,
    Selective,
    Full,
}

/// Fragment-stage specific build data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RogueFsBuildData {
    pub iterator_args: RogueIteratorArgs,
    /// Phase-change register count.
    pub phas: u32,
    pub msaa_mode: RogueMsaaMode,
}

impl RogueFsBuildData {
    pub const EMPTY: Self = Self {
        iterator_args: RogueIteratorArgs::EMPTY,
        phas: 0,
        msaa_mode: RogueMsaaMode::Undef,
    };
}

/// Vertex-stage specific build data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RogueVsBuildData {
    pub num_vertex_input_regs: u32,
    pub num_vertex_outputs: u32,
    pub num_varyings: u32,
}

impl RogueVsBuildData {
    pub const EMPTY: Self = Self {
        num_vertex_input_regs: 0,
        num_vertex_outputs: 0,
        num_varyings: 0,
    };
}

/// Stage-specific build data for a graphics pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RogueBuildData {
    pub fs: RogueFsBuildData,
    pub vs: RogueVsBuildData,
}

impl RogueBuildData {
    pub const EMPTY: Self = Self {
        fs: RogueFsBuildData::EMPTY,
        vs: RogueVsBuildData::EMPTY,
    };
}

/// Cross-stage build accumulator for one pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RogueBuildCtx {
    pub common_data: [RogueCommonBuildData; SHADER_STAGE_COUNT],
    pub stage_data: RogueBuildData,
}

impl RogueBuildCtx {
    pub fn new() -> Self {
        Self::default()
    }

    /// Common build data of `stage`.
    pub fn common(&self, stage: ShaderStage) -> &RogueCommonBuildData {
        &self.common_data[stage.index()]
    }

    /// Mutable common build data of `stage`.
    pub fn common_mut(&mut self, stage: ShaderStage) -> &mut RogueCommonBuildData {
        &mut self.common_data[stage.index()]
    }
}
