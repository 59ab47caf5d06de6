//! Hard-coding configuration.
//!
//! Read once from the environment at driver load and kept in a process-wide
//! slot. Callers that want explicit control pass a [`HardcodeConfig`] to
//! [`crate::HardCoder::with_config`] instead.

use log::{info, warn};
use parking_lot::RwLock;

/// Overrides the process name used to pick hard-coded data.
pub const PROCESS_NAME_ENV: &str = "MESA_PROCESS_NAME";

/// Selects how graphics state accessors use the pipeline number.
pub const STATE_INDEXING_ENV: &str = "PVR_HARDCODE_STATE_INDEXING";

/// Which table slot the vertex/fragment state accessors read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StateIndexing {
    /// Read the state of the requested pipeline.
    #[default]
    PerPipeline,
    /// Always read the first pipeline's state, whatever pipeline was asked for.
    FirstPipeline,
}

impl StateIndexing {
    /// Parse a config value ("pipeline" or "first").
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pipeline" | "per-pipeline" => Some(StateIndexing::PerPipeline),
            "first" | "first-pipeline" => Some(StateIndexing::FirstPipeline),
            _ => None,
        }
    }

    /// Table slot to read for pipeline `pipeline_n`.
    pub fn slot(self, pipeline_n: u32) -> usize {
        match self {
            StateIndexing::PerPipeline => pipeline_n as usize,
            StateIndexing::FirstPipeline => 0,
        }
    }
}

/// Hard-coding settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HardcodeConfig {
    pub state_indexing: StateIndexing,
    /// Used instead of the executable name when set.
    pub process_name_override: Option<String>,
}

impl HardcodeConfig {
    pub const fn new() -> Self {
        Self {
            state_indexing: StateIndexing::PerPipeline,
            process_name_override: None,
        }
    }

    /// Build the config from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary key/value source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::new();

        if let Some(name) = lookup(PROCESS_NAME_ENV) {
            if !name.is_empty() {
                config.process_name_override = Some(name);
            }
        }

        if let Some(value) = lookup(STATE_INDEXING_ENV) {
            match StateIndexing::parse(&value) {
                Some(indexing) => config.state_indexing = indexing,
                None => warn!("Ignoring unknown {}={}", STATE_INDEXING_ENV, value),
            }
        }

        config
    }
}

static HARDCODE_CONFIG: RwLock<HardcodeConfig> = RwLock::new(HardcodeConfig::new());

/// Install the process-wide configuration.
pub fn init_hardcode_config(config: HardcodeConfig) {
    info!(
        "Hard-code config: state indexing {:?}, process name override {:?}",
        config.state_indexing, config.process_name_override,
    );
    *HARDCODE_CONFIG.write() = config;
}

/// Current process-wide configuration.
pub fn hardcode_config() -> HardcodeConfig {
    HARDCODE_CONFIG.read().clone()
}
