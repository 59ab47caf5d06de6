//! Hand-written tables for exercising the hard-coding paths.

use pvr_rogue::{
    RogueBuildData, RogueCommonBuildData, RogueShaderBinary, RogueUboData, RogueVsBuildData,
    ROGUE_REG_UNUSED,
};

use super::{
    ComputeBuildInfo, ComputeHardCoding, ExplicitConstantUsage, GraphicsBuildInfo,
    GraphicsHardCoding, HardCodingData, HardCodingPayload, Registry,
};
use crate::pipeline_state::{
    ComputePipelineShaderState, FragmentShaderState, PipelineStageState, VertexShaderState,
};

pub const TWO_PIPELINE_APP: &str = "two-pipelines";
pub const COMPUTE_APP: &str = "compute-fixture";
pub const BAD_TEMPS_APP: &str = "bad-temps";
pub const BAD_COEFFS_APP: &str = "bad-coeffs";
pub const SHORT_TABLE_APP: &str = "short-table";

pub const VERT_0: [u8; 8] = [0x10, 0x00, 0x00, 0x00, 0xa0, 0x01, 0x00, 0x00];
pub const FRAG_0: [u8; 8] = [0x20, 0x00, 0x00, 0x00, 0xb0, 0x01, 0x00, 0x00];
pub const VERT_1: [u8; 12] = [
    0x11, 0x00, 0x00, 0x00, 0xa1, 0x01, 0x00, 0x00, 0xff, 0x00, 0x00, 0x00,
];
pub const FRAG_1: [u8; 4] = [0x21, 0x00, 0x00, 0x00];
pub const COMPUTE_CODE: [u8; 4] = [0xc0, 0xde, 0x00, 0x00];

const fn stage_state(temps_count: u32, coefficient_size: u32) -> PipelineStageState {
    PipelineStageState {
        temps_count,
        coefficient_size,
        ..PipelineStageState::EMPTY
    }
}

const fn vert_state(temps: u32, coeffs: u32, vertex_input_size: u32) -> VertexShaderState {
    VertexShaderState {
        stage_state: stage_state(temps, coeffs),
        vertex_input_size,
        ..VertexShaderState::EMPTY
    }
}

const fn frag_state(temps: u32, coeffs: u32) -> FragmentShaderState {
    FragmentShaderState {
        stage_state: stage_state(temps, coeffs),
        ..FragmentShaderState::EMPTY
    }
}

const fn common(temps: u32, coeffs: u32) -> RogueCommonBuildData {
    RogueCommonBuildData {
        temps,
        coeffs,
        ..RogueCommonBuildData::ZERO
    }
}

const fn build_info(
    vert: RogueCommonBuildData,
    frag: RogueCommonBuildData,
    num_vertex_input_regs: u32,
    vert_start: u32,
    frag_start: u32,
) -> GraphicsBuildInfo {
    GraphicsBuildInfo {
        stage_data: RogueBuildData {
            vs: RogueVsBuildData {
                num_vertex_input_regs,
                ..RogueVsBuildData::EMPTY
            },
            ..RogueBuildData::EMPTY
        },
        vert_common_data: vert,
        frag_common_data: frag,
        vert_explicit_conts_usage: ExplicitConstantUsage {
            start_offset: vert_start,
        },
        frag_explicit_conts_usage: ExplicitConstantUsage {
            start_offset: frag_start,
        },
    }
}

pub const TWO_PIPELINE_VERT_SHADERS: [RogueShaderBinary; 2] =
    [RogueShaderBinary::new(&VERT_0), RogueShaderBinary::new(&VERT_1)];
pub const TWO_PIPELINE_FRAG_SHADERS: [RogueShaderBinary; 2] =
    [RogueShaderBinary::new(&FRAG_0), RogueShaderBinary::new(&FRAG_1)];
pub const TWO_PIPELINE_VERT_STATES: [VertexShaderState; 2] =
    [vert_state(4, 0, 3), vert_state(6, 2, 5)];
pub const TWO_PIPELINE_FRAG_STATES: [FragmentShaderState; 2] =
    [frag_state(2, 4), frag_state(3, 8)];
pub const TWO_PIPELINE_BUILD_INFOS: [GraphicsBuildInfo; 2] = [
    build_info(common(4, 0), common(2, 4), 3, 0, 0),
    build_info(common(6, 2), common(3, 8), 5, 4, 12),
];

const TWO_PIPELINE_ENTRY: HardCodingData = HardCodingData {
    name: TWO_PIPELINE_APP,
    payload: HardCodingPayload::Graphics(GraphicsHardCoding {
        vert_shaders: &TWO_PIPELINE_VERT_SHADERS,
        frag_shaders: &TWO_PIPELINE_FRAG_SHADERS,
        vert_shader_states: &TWO_PIPELINE_VERT_STATES,
        frag_shader_states: &TWO_PIPELINE_FRAG_STATES,
        build_infos: &TWO_PIPELINE_BUILD_INFOS,
        shader_count: 2,
    }),
};

pub const COMPUTE_BUILD_INFO: ComputeBuildInfo = ComputeBuildInfo {
    ubo_data: RogueUboData::EMPTY,
    local_invocation_regs: [0, 1],
    work_group_regs: [2, 3, 4],
    barrier_reg: ROGUE_REG_UNUSED,
    usc_temps: 3,
    explicit_conts_usage: ExplicitConstantUsage { start_offset: 8 },
};

pub const COMPUTE_SHADER_INFO: ComputePipelineShaderState = ComputePipelineShaderState {
    uses_atomic_ops: true,
    uses_barrier: false,
    uses_num_workgroups: true,
    const_shared_reg_count: 2,
    input_register_count: 5,
    work_size: 32,
    coefficient_register_count: 0,
};

const COMPUTE_ENTRY: HardCodingData = HardCodingData {
    name: COMPUTE_APP,
    payload: HardCodingPayload::Compute(ComputeHardCoding {
        shader: &COMPUTE_CODE,
        shader_info: COMPUTE_SHADER_INFO,
        build_info: COMPUTE_BUILD_INFO,
    }),
};

static FIXTURE_ENTRIES: [HardCodingData; 2] = [TWO_PIPELINE_ENTRY, COMPUTE_ENTRY];

pub static FIXTURE_REGISTRY: Registry = Registry::new(&FIXTURE_ENTRIES, &["triangle"]);

// Fragment temps disagree on pipeline 0.
const BAD_TEMPS_VERT_STATES: [VertexShaderState; 1] = [vert_state(4, 0, 0)];
const BAD_TEMPS_FRAG_STATES: [FragmentShaderState; 1] = [frag_state(5, 4)];
const BAD_TEMPS_BUILD_INFOS: [GraphicsBuildInfo; 1] =
    [build_info(common(4, 0), common(6, 4), 0, 0, 0)];

const SINGLE_VERT_SHADERS: [RogueShaderBinary; 1] = [RogueShaderBinary::new(&VERT_0)];
const SINGLE_FRAG_SHADERS: [RogueShaderBinary; 1] = [RogueShaderBinary::new(&FRAG_0)];

static BAD_TEMPS_ENTRIES: [HardCodingData; 1] = [HardCodingData {
    name: BAD_TEMPS_APP,
    payload: HardCodingPayload::Graphics(GraphicsHardCoding {
        vert_shaders: &SINGLE_VERT_SHADERS,
        frag_shaders: &SINGLE_FRAG_SHADERS,
        vert_shader_states: &BAD_TEMPS_VERT_STATES,
        frag_shader_states: &BAD_TEMPS_FRAG_STATES,
        build_infos: &BAD_TEMPS_BUILD_INFOS,
        shader_count: 1,
    }),
}];

pub static BAD_TEMPS_REGISTRY: Registry = Registry::new(&BAD_TEMPS_ENTRIES, &[]);

// Vertex coeffs disagree on pipeline 1 only.
const BAD_COEFFS_VERT_STATES: [VertexShaderState; 2] = [vert_state(4, 0, 0), vert_state(4, 8, 0)];
const BAD_COEFFS_FRAG_STATES: [FragmentShaderState; 2] = [frag_state(2, 4), frag_state(2, 4)];
const BAD_COEFFS_BUILD_INFOS: [GraphicsBuildInfo; 2] = [
    build_info(common(4, 0), common(2, 4), 0, 0, 0),
    build_info(common(4, 4), common(2, 4), 0, 0, 0),
];

static BAD_COEFFS_ENTRIES: [HardCodingData; 1] = [HardCodingData {
    name: BAD_COEFFS_APP,
    payload: HardCodingPayload::Graphics(GraphicsHardCoding {
        vert_shaders: &TWO_PIPELINE_VERT_SHADERS,
        frag_shaders: &TWO_PIPELINE_FRAG_SHADERS,
        vert_shader_states: &BAD_COEFFS_VERT_STATES,
        frag_shader_states: &BAD_COEFFS_FRAG_STATES,
        build_infos: &BAD_COEFFS_BUILD_INFOS,
        shader_count: 2,
    }),
}];

pub static BAD_COEFFS_REGISTRY: Registry = Registry::new(&BAD_COEFFS_ENTRIES, &[]);

// Claims two pipelines but only has one fragment state.
const SHORT_FRAG_STATES: [FragmentShaderState; 1] = [frag_state(2, 4)];

static SHORT_TABLE_ENTRIES: [HardCodingData; 1] = [HardCodingData {
    name: SHORT_TABLE_APP,
    payload: HardCodingPayload::Graphics(GraphicsHardCoding {
        vert_shaders: &TWO_PIPELINE_VERT_SHADERS,
        frag_shaders: &TWO_PIPELINE_FRAG_SHADERS,
        vert_shader_states: &TWO_PIPELINE_VERT_STATES,
        frag_shader_states: &SHORT_FRAG_STATES,
        build_infos: &TWO_PIPELINE_BUILD_INFOS,
        shader_count: 2,
    }),
}];

pub static SHORT_TABLE_REGISTRY: Registry = Registry::new(&SHORT_TABLE_ENTRIES, &[]);

static DUPLICATE_ENTRIES: [HardCodingData; 3] =
    [TWO_PIPELINE_ENTRY, COMPUTE_ENTRY, TWO_PIPELINE_ENTRY];

pub static DUPLICATE_REGISTRY: Registry = Registry::new(&DUPLICATE_ENTRIES, &[]);
