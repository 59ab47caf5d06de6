//! Finished USC shader binaries.

/// A compiled USC program.
///
/// Hard-coded binaries live in static tables, so the code is borrowed for the
/// lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RogueShaderBinary {
    data: &'static [u8],
}

impl RogueShaderBinary {
    pub const fn new(data: &'static [u8]) -> Self {
        Self { data }
    }

    /// Program code.
    pub const fn data(&self) -> &'static [u8] {
        self.data
    }
}
