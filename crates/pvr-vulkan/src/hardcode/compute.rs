use log::debug;
use pvr_rogue::slc_cache_line_size;

use super::{ComputeBuildInfo, HardCoder};
use crate::error::HardcodeError;
use crate::pipeline_state::ComputePipelineShaderState;
use crate::upload::UscUploader;

/// A hard-coded compute pipeline with its code uploaded.
#[derive(Debug)]
pub struct HardCodedCompute<Bo> {
    pub shader_state: ComputePipelineShaderState,
    pub build_info: ComputeBuildInfo,
    /// Whatever the uploader returned for the shader code.
    pub bo: Bo,
}

impl HardCoder<'_> {
    /// Copy out this process's compute pipeline and upload its code.
    ///
    /// Upload failures are returned as [`HardcodeError::Upload`] holding the
    /// uploader's result unchanged.
    pub fn compute_pipeline<U: UscUploader + ?Sized>(
        &self,
        uploader: &U,
    ) -> Result<HardCodedCompute<U::Bo>, HardcodeError> {
        let cache_line_size = slc_cache_line_size(uploader.device_info());
        let data = self.data()?;
        let compute = data.as_compute()?;

        debug!("Hard coding compute pipeline for {}", data.name);

        let build_info = compute.build_info;
        let shader_state = compute.shader_info;

        let bo = uploader
            .upload_usc(compute.shader, u64::from(cache_line_size))
            .map_err(HardcodeError::Upload)?;

        Ok(HardCodedCompute {
            shader_state,
            build_info,
            bo,
        })
    }
}
