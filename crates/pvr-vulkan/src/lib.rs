//! PowerVR Vulkan driver support code.
//!
//! Holds the hard-coded shader path used while the Rogue compiler cannot yet
//! build every application's shaders, together with the pipeline state types
//! it fills in and the collaborators it talks to (process identity and USC
//! code upload).

pub mod config;
pub mod error;
pub mod hardcode;
pub mod hardcoded_apps;
pub mod pipeline_state;
pub mod process;
pub mod upload;

pub use config::{hardcode_config, init_hardcode_config, HardcodeConfig, StateIndexing};
pub use error::HardcodeError;
pub use hardcode::{
    ComputeBuildInfo, ExplicitConstantUsage, GraphicsBuildInfo, HardCodeShaderType,
    HardCodedCompute, HardCoder, HardCodingData, HardCodingPayload, Registry,
};
pub use pipeline_state::{
    ComputePipelineShaderState, FragmentShaderState, PipelineStageState, VertexShaderState,
};
pub use process::{CurrentProcess, ProcessIdentity};
pub use upload::{AllocatorUploader, UscBo, UscUploader};
