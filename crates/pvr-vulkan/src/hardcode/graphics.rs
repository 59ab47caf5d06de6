//! Graphics pipeline hard coding.
//!
//! `pipeline_n` is the pipeline number. Each pipeline an application creates
//! needs its own data; the first pipeline created is 0 and the number is
//! incremented for each subsequent one.

use log::{debug, error};
use pvr_rogue::{RogueBuildCtx, RogueCommonBuildData, RogueShaderBinary, ShaderStage};

use super::{ExplicitConstantUsage, GraphicsHardCoding, HardCoder, HardCodingData};
use crate::error::HardcodeError;
use crate::pipeline_state::{FragmentShaderState, PipelineStageState, VertexShaderState};

impl<'r> HardCoder<'r> {
    /// Entry and graphics payload for `pipeline_n`, after checking the kind
    /// and range.
    fn graphics_data(
        &self,
        pipeline_n: u32,
    ) -> Result<(&'r HardCodingData, &'r GraphicsHardCoding), HardcodeError> {
        let data = self.data()?;
        let graphics = data.as_graphics()?;

        if pipeline_n >= graphics.shader_count {
            let err = HardcodeError::PipelineOutOfRange {
                name: data.name,
                pipeline: pipeline_n,
                shader_count: graphics.shader_count,
            };
            error!("{}", err);
            return Err(err);
        }

        Ok((data, graphics))
    }

    /// Vertex and fragment binaries of pipeline `pipeline_n`.
    pub fn graphics_shaders(
        &self,
        pipeline_n: u32,
    ) -> Result<(&'static RogueShaderBinary, &'static RogueShaderBinary), HardcodeError> {
        let (data, graphics) = self.graphics_data(pipeline_n)?;

        debug!("Hard coding graphics pipeline for {}", data.name);

        let n = pipeline_n as usize;
        let vert = table_entry(data, graphics, "vert_shaders", graphics.vert_shaders, n)?;
        let frag = table_entry(data, graphics, "frag_shaders", graphics.frag_shaders, n)?;

        Ok((vert, frag))
    }

    /// Vertex shader state of pipeline `pipeline_n`.
    ///
    /// With [`crate::StateIndexing::FirstPipeline`] the first pipeline's state
    /// is returned for every `pipeline_n`.
    pub fn graphics_vertex_state(
        &self,
        pipeline_n: u32,
    ) -> Result<VertexShaderState, HardcodeError> {
        let (data, graphics) = self.graphics_data(pipeline_n)?;
        let slot = self.config().state_indexing.slot(pipeline_n);
        let states = graphics.vert_shader_states;

        table_entry(data, graphics, "vert_shader_states", states, slot).copied()
    }

    /// Fragment shader state of pipeline `pipeline_n`.
    ///
    /// Indexed the same way as [`HardCoder::graphics_vertex_state`].
    pub fn graphics_fragment_state(
        &self,
        pipeline_n: u32,
    ) -> Result<FragmentShaderState, HardcodeError> {
        let (data, graphics) = self.graphics_data(pipeline_n)?;
        let slot = self.config().state_indexing.slot(pipeline_n);
        let states = graphics.frag_shader_states;

        table_entry(data, graphics, "frag_shader_states", states, slot).copied()
    }

    /// Write pipeline `pipeline_n`'s build data into `ctx`.
    ///
    /// Checks that the pipeline's temps and coeffs agree between its build
    /// data and its shader states, then overwrites the stage data and the
    /// vertex and fragment common data. `ctx` is left untouched on error.
    /// Returns the vertex and fragment explicit constant usage.
    pub fn graphics_inject_build_info(
        &self,
        pipeline_n: u32,
        ctx: &mut RogueBuildCtx,
    ) -> Result<(ExplicitConstantUsage, ExplicitConstantUsage), HardcodeError> {
        let (data, graphics) = self.graphics_data(pipeline_n)?;
        let n = pipeline_n as usize;

        let build_info = table_entry(data, graphics, "build_infos", graphics.build_infos, n)?;
        let vert_state =
            table_entry(data, graphics, "vert_shader_states", graphics.vert_shader_states, n)?;
        let frag_state =
            table_entry(data, graphics, "frag_shader_states", graphics.frag_shader_states, n)?;

        check_pipeline_parity(
            data.name,
            pipeline_n,
            &build_info.vert_common_data,
            &build_info.frag_common_data,
            vert_state,
            frag_state,
        )
        .inspect_err(|err| error!("{}", err))?;

        ctx.stage_data = build_info.stage_data;
        *ctx.common_mut(ShaderStage::Vertex) = build_info.vert_common_data;
        *ctx.common_mut(ShaderStage::Fragment) = build_info.frag_common_data;

        Ok((
            build_info.vert_explicit_conts_usage,
            build_info.frag_explicit_conts_usage,
        ))
    }
}

/// `table[index]`, or a [`HardcodeError::ShaderCountMismatch`] if the table is
/// shorter than the entry claims.
fn table_entry<'t, T>(
    data: &HardCodingData,
    graphics: &GraphicsHardCoding,
    table_name: &'static str,
    table: &'t [T],
    index: usize,
) -> Result<&'t T, HardcodeError> {
    table.get(index).ok_or(HardcodeError::ShaderCountMismatch {
        name: data.name,
        table: table_name,
        len: table.len(),
        shader_count: graphics.shader_count,
    })
}

/// Temps and coeffs of one pipeline must agree between build data and shader
/// state, vertex before fragment, temps before coeffs.
pub(super) fn check_pipeline_parity(
    name: &'static str,
    pipeline_n: u32,
    vert_common: &RogueCommonBuildData,
    frag_common: &RogueCommonBuildData,
    vert_state: &VertexShaderState,
    frag_state: &FragmentShaderState,
) -> Result<(), HardcodeError> {
    let stages = [
        (ShaderStage::Vertex, vert_common, &vert_state.stage_state),
        (ShaderStage::Fragment, frag_common, &frag_state.stage_state),
    ];

    for (stage, common, state) in stages {
        check_temps(name, pipeline_n, stage, common, state)?;
    }
    for (stage, common, state) in stages {
        check_coeffs(name, pipeline_n, stage, common, state)?;
    }

    Ok(())
}

fn check_temps(
    name: &'static str,
    pipeline: u32,
    stage: ShaderStage,
    common: &RogueCommonBuildData,
    state: &PipelineStageState,
) -> Result<(), HardcodeError> {
    if common.temps != state.temps_count {
        return Err(HardcodeError::TempsMismatch {
            name,
            pipeline,
            stage,
            build_info: common.temps,
            state: state.temps_count,
        });
    }
    Ok(())
}

fn check_coeffs(
    name: &'static str,
    pipeline: u32,
    stage: ShaderStage,
    common: &RogueCommonBuildData,
    state: &PipelineStageState,
) -> Result<(), HardcodeError> {
    if common.coeffs != state.coefficient_size {
        return Err(HardcodeError::CoeffsMismatch {
            name,
            pipeline,
            stage,
            build_info: common.coeffs,
            state: state.coefficient_size,
        });
    }
    Ok(())
}
