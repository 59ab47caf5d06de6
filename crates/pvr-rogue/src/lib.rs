//! Rogue compiler types shared with the PowerVR Vulkan driver.
//!
//! The driver consumes these when it builds a pipeline: per-stage build
//! metadata, the build context that accumulates it, finished shader binaries
//! and the device feature values the compiler cares about.

pub mod binary;
pub mod build_data;
pub mod hw_utils;
pub mod shader_stage;

pub use binary::RogueShaderBinary;
pub use build_data::{
    RogueBuildCtx, RogueBuildData, RogueCommonBuildData, RogueFsBuildData, RogueIteratorArgs,
    RogueMsaaMode, RogueUboData, RogueVsBuildData, ROGUE_MAX_BUFFERS, ROGUE_MAX_IO_VARYING_VARS,
    ROGUE_REG_UNUSED,
};
pub use hw_utils::{slc_cache_line_size, DeviceInfo};
pub use shader_stage::{ShaderStage, SHADER_STAGE_COUNT};
