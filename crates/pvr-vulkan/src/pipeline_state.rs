//! Per-stage shader state recorded in a pipeline.
//!
//! These are plain values: the hard-coding tables hold `const` instances and
//! the provisioning calls hand out copies.

/// Register usage and behaviour shared by every graphics stage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineStageState {
    pub const_shared_reg_count: u32,
    pub const_shared_reg_offset: u32,
    pub temps_count: u32,
    pub coefficient_size: u32,
    pub uses_atomic_ops: bool,
    pub uses_texture_rw: bool,
    pub uses_barrier: bool,
    pub has_side_effects: bool,
    pub empty_program: bool,
}

impl PipelineStageState {
    pub const EMPTY: Self = Self {
        const_shared_reg_count: 0,
        const_shared_reg_offset: 0,
        temps_count: 0,
        coefficient_size: 0,
        uses_atomic_ops: false,
        uses_texture_rw: false,
        uses_barrier: false,
        has_side_effects: false,
        empty_program: false,
    };
}

/// Vertex shader state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VertexShaderState {
    /// Offset of the entry point within the uploaded code.
    pub entry_offset: u32,
    pub stage_state: PipelineStageState,
    /// Size in dwords of the vertex input.
    pub vertex_input_size: u32,
    /// Size in dwords of the vertex output.
    pub vertex_output_size: u32,
    pub user_clip_planes_mask: u32,
}

impl VertexShaderState {
    pub const EMPTY: Self = Self {
        entry_offset: 0,
        stage_state: PipelineStageState::EMPTY,
        vertex_input_size: 0,
        vertex_output_size: 0,
        user_clip_planes_mask: 0,
    };
}

/// Fragment shader state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FragmentShaderState {
    pub entry_offset: u32,
    pub stage_state: PipelineStageState,
    pub pass_type: u32,
}

impl FragmentShaderState {
    pub const EMPTY: Self = Self {
        entry_offset: 0,
        stage_state: PipelineStageState::EMPTY,
        pass_type: 0,
    };
}

/// Compute pipeline shader state, minus the uploaded code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ComputePipelineShaderState {
    pub uses_atomic_ops: bool,
    pub uses_barrier: bool,
    /// Whether the shader reads the number of workgroups.
    pub uses_num_workgroups: bool,
    pub const_shared_reg_count: u32,
    pub input_register_count: u32,
    pub work_size: u32,
    pub coefficient_register_count: u32,
}
