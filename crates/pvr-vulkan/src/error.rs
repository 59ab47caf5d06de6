use ash::vk;
use pvr_rogue::ShaderStage;
use thiserror::Error;

use crate::hardcode::HardCodeShaderType;

/// Errors raised by the hard-coding path.
///
/// Apart from [`HardcodeError::EntryNotFound`] and [`HardcodeError::Upload`]
/// every variant means the static tables or the caller are wrong; see
/// [`HardcodeError::is_authoring_bug`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HardcodeError {
    #[error("Could not find hard coding data for {program}")]
    EntryNotFound { program: String },

    #[error("Hard coding data for {name} is {actual:?}, expected {expected:?}")]
    WrongKind {
        name: &'static str,
        expected: HardCodeShaderType,
        actual: HardCodeShaderType,
    },

    #[error("Pipeline {pipeline} requested for {name}, which only has {shader_count}")]
    PipelineOutOfRange {
        name: &'static str,
        pipeline: u32,
        shader_count: u32,
    },

    #[error("{name}: {table} has {len} entries but shader_count is {shader_count}")]
    ShaderCountMismatch {
        name: &'static str,
        table: &'static str,
        len: usize,
        shader_count: u32,
    },

    #[error(
        "{name} pipeline {pipeline}: {stage} temps is {build_info} in build info \
         but {state} in shader state"
    )]
    TempsMismatch {
        name: &'static str,
        pipeline: u32,
        stage: ShaderStage,
        build_info: u32,
        state: u32,
    },

    #[error(
        "{name} pipeline {pipeline}: {stage} coeffs is {build_info} in build info \
         but {state} in shader state"
    )]
    CoeffsMismatch {
        name: &'static str,
        pipeline: u32,
        stage: ShaderStage,
        build_info: u32,
        state: u32,
    },

    #[error("Hard coding table has more than one entry named {name}")]
    DuplicateEntry { name: &'static str },

    #[error("USC upload failed: {0}")]
    Upload(vk::Result),
}

impl HardcodeError {
    /// True for errors caused by inconsistent tables or out of contract calls.
    /// These are never retried.
    pub fn is_authoring_bug(&self) -> bool {
        !matches!(
            self,
            HardcodeError::EntryNotFound { .. } | HardcodeError::Upload(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authoring_bug_classification() {
        let not_found = HardcodeError::EntryNotFound {
            program: "vkcube".into(),
        };
        let upload = HardcodeError::Upload(vk::Result::ERROR_OUT_OF_DEVICE_MEMORY);
        let range = HardcodeError::PipelineOutOfRange {
            name: "app",
            pipeline: 3,
            shader_count: 1,
        };

        assert!(!not_found.is_authoring_bug());
        assert!(!upload.is_authoring_bug());
        assert!(range.is_authoring_bug());
    }

    #[test]
    fn test_not_found_message_names_program() {
        let err = HardcodeError::EntryNotFound {
            program: "vkcube".into(),
        };
        assert_eq!(err.to_string(), "Could not find hard coding data for vkcube");
    }

    #[test]
    fn test_mismatch_message_names_stage() {
        let err = HardcodeError::TempsMismatch {
            name: "app",
            pipeline: 1,
            stage: ShaderStage::Fragment,
            build_info: 4,
            state: 6,
        };
        assert!(err.to_string().contains("fragment temps"));
    }
}
