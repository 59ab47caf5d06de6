//! Device feature helpers used by the compiler and the driver.

/// Hardware description of a PowerVR core.
///
/// Only the values the hard-coding path and the USC upload need are carried.
/// Features absent on a core are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceInfo {
    /// SLC cache line size in bits.
    pub slc_cache_line_size_bits: Option<u32>,
}

/// Default SLC line size when the feature is not reported.
const DEFAULT_SLC_CACHE_LINE_SIZE_BITS: u32 = 8;

/// SLC cache line size in bytes.
pub fn slc_cache_line_size(dev_info: &DeviceInfo) -> u32 {
    dev_info
        .slc_cache_line_size_bits
        .unwrap_or(DEFAULT_SLC_CACHE_LINE_SIZE_BITS)
        / 8
}
