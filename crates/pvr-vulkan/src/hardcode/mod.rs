//! Hard-coded shaders.
//!
//! While the compiler cannot build every application's shaders, the driver
//! recognises a few applications by process name and serves precompiled USC
//! programs plus the pipeline state and build data that go with them. This
//! should eventually be deleted as the compiler becomes more capable.
//!
//! [`Registry`] holds the static table and answers "is hard coding needed" and
//! "which entry". [`HardCoder`] binds a registry to one process name and
//! provides the per-pipeline provisioning calls used during pipeline creation.

mod compute;
mod graphics;
mod registry;
mod table;

#[cfg(test)]
pub(crate) mod fixtures;

pub use compute::HardCodedCompute;
pub use registry::Registry;
pub use table::{COMPILABLE_PROGS, HARD_CODING_TABLE};

use log::error;
use pvr_rogue::{RogueBuildData, RogueCommonBuildData, RogueShaderBinary, RogueUboData};

use crate::config::{hardcode_config, HardcodeConfig};
use crate::error::HardcodeError;
use crate::pipeline_state::{ComputePipelineShaderState, FragmentShaderState, VertexShaderState};
use crate::process::{CurrentProcess, ProcessIdentity};

/// Kind of pipeline an entry provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HardCodeShaderType {
    Compute,
    Graphics,
}

/// Where a stage's explicit constants start.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExplicitConstantUsage {
    /// Hardware register assigned to the explicit constant with the lowest
    /// pre-assigned offset.
    pub start_offset: u32,
}

/// Build data for a hard-coded compute pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComputeBuildInfo {
    pub ubo_data: RogueUboData,

    pub local_invocation_regs: [u32; 2],
    pub work_group_regs: [u32; 3],
    /// `ROGUE_REG_UNUSED` when the shader has no barrier.
    pub barrier_reg: u32,
    pub usc_temps: u32,

    pub explicit_conts_usage: ExplicitConstantUsage,
}

/// Build data for one pipeline of a hard-coded graphics application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphicsBuildInfo {
    pub stage_data: RogueBuildData,

    pub vert_common_data: RogueCommonBuildData,
    pub frag_common_data: RogueCommonBuildData,

    pub vert_explicit_conts_usage: ExplicitConstantUsage,
    pub frag_explicit_conts_usage: ExplicitConstantUsage,
}

/// A precompiled compute pipeline.
#[derive(Debug, Clone, Copy)]
pub struct ComputeHardCoding {
    pub shader: &'static [u8],
    pub shader_info: ComputePipelineShaderState,
    pub build_info: ComputeBuildInfo,
}

/// Precompiled graphics pipelines, in creation order.
///
/// Every table is indexed by pipeline number and holds `shader_count` entries.
#[derive(Debug, Clone, Copy)]
pub struct GraphicsHardCoding {
    pub vert_shaders: &'static [RogueShaderBinary],
    pub frag_shaders: &'static [RogueShaderBinary],

    pub vert_shader_states: &'static [VertexShaderState],
    pub frag_shader_states: &'static [FragmentShaderState],

    pub build_infos: &'static [GraphicsBuildInfo],

    pub shader_count: u32,
}

#[derive(Debug, Clone, Copy)]
pub enum HardCodingPayload {
    Compute(ComputeHardCoding),
    Graphics(GraphicsHardCoding),
}

/// One recognised application.
#[derive(Debug, Clone, Copy)]
pub struct HardCodingData {
    /// Process name, matched exactly.
    pub name: &'static str,
    pub payload: HardCodingPayload,
}

impl HardCodingData {
    pub fn shader_type(&self) -> HardCodeShaderType {
        match self.payload {
            HardCodingPayload::Compute(_) => HardCodeShaderType::Compute,
            HardCodingPayload::Graphics(_) => HardCodeShaderType::Graphics,
        }
    }

    pub fn as_compute(&self) -> Result<&ComputeHardCoding, HardcodeError> {
        match &self.payload {
            HardCodingPayload::Compute(compute) => Ok(compute),
            HardCodingPayload::Graphics(_) => Err(self.wrong_kind(HardCodeShaderType::Compute)),
        }
    }

    pub fn as_graphics(&self) -> Result<&GraphicsHardCoding, HardcodeError> {
        match &self.payload {
            HardCodingPayload::Graphics(graphics) => Ok(graphics),
            HardCodingPayload::Compute(_) => Err(self.wrong_kind(HardCodeShaderType::Graphics)),
        }
    }

    fn wrong_kind(&self, expected: HardCodeShaderType) -> HardcodeError {
        let err = HardcodeError::WrongKind {
            name: self.name,
            expected,
            actual: self.shader_type(),
        };
        error!("{}", err);
        err
    }
}

/// Hard-coding calls for one process.
pub struct HardCoder<'r> {
    registry: &'r Registry,
    program: String,
    config: HardcodeConfig,
}

impl<'r> HardCoder<'r> {
    /// Bind `registry` to the name reported by `identity`, using the
    /// process-wide config.
    pub fn new<I: ProcessIdentity + ?Sized>(registry: &'r Registry, identity: &I) -> Self {
        Self::with_config(registry, identity, hardcode_config())
    }

    pub fn with_config<I: ProcessIdentity + ?Sized>(
        registry: &'r Registry,
        identity: &I,
        config: HardcodeConfig,
    ) -> Self {
        Self {
            registry,
            program: identity.process_name(),
            config,
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn config(&self) -> &HardcodeConfig {
        &self.config
    }

    /// True if this process needs hard-coded shaders.
    pub fn shader_required(&self) -> bool {
        self.registry.requires_hard_coded_shaders(&self.program)
    }

    /// The registry entry for this process.
    pub fn data(&self) -> Result<&'r HardCodingData, HardcodeError> {
        self.registry.lookup(&self.program)
    }
}

impl HardCoder<'static> {
    /// Built-in table, current process, process-wide config.
    pub fn for_current_process() -> Self {
        Self::new(Registry::builtin(), &CurrentProcess::new())
    }
}
