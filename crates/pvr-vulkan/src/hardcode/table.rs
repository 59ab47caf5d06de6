//! The hard-coding table shipped with the driver.

use pvr_rogue::{RogueUboData, ROGUE_REG_UNUSED};

use super::{
    ComputeBuildInfo, ComputeHardCoding, ExplicitConstantUsage, HardCodingData, HardCodingPayload,
};
use crate::hardcoded_apps::simple_compute::SIMPLE_COMPUTE_SHADER;
use crate::pipeline_state::ComputePipelineShaderState;

/// Applications for which the compiler is capable of generating valid shaders.
pub const COMPILABLE_PROGS: &[&str] = &["triangle"];

pub const HARD_CODING_TABLE: &[HardCodingData] = &[HardCodingData {
    name: "simple-compute",
    payload: HardCodingPayload::Compute(ComputeHardCoding {
        shader: &SIMPLE_COMPUTE_SHADER,

        shader_info: ComputePipelineShaderState {
            uses_atomic_ops: false,
            uses_barrier: false,
            uses_num_workgroups: false,

            const_shared_reg_count: 4,
            input_register_count: 8,
            work_size: 1 * 1 * 1,
            coefficient_register_count: 4,
        },

        build_info: ComputeBuildInfo {
            ubo_data: RogueUboData::EMPTY,

            local_invocation_regs: [0, 1],
            work_group_regs: [0, 1, 2],
            barrier_reg: ROGUE_REG_UNUSED,
            usc_temps: 0,

            explicit_conts_usage: ExplicitConstantUsage { start_offset: 0 },
        },
    }),
}];
