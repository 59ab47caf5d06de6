use log::error;

use super::graphics::check_pipeline_parity;
use super::table::{COMPILABLE_PROGS, HARD_CODING_TABLE};
use super::{HardCodingData, HardCodingPayload};
use crate::error::HardcodeError;

static BUILTIN: Registry = Registry::new(HARD_CODING_TABLE, COMPILABLE_PROGS);

/// Static table of hard-coded applications.
#[derive(Debug)]
pub struct Registry {
    entries: &'static [HardCodingData],
    /// Applications the compiler can already handle.
    compilable_progs: &'static [&'static str],
}

impl Registry {
    pub const fn new(
        entries: &'static [HardCodingData],
        compilable_progs: &'static [&'static str],
    ) -> Self {
        Self {
            entries,
            compilable_progs,
        }
    }

    /// The table shipped with the driver.
    pub fn builtin() -> &'static Registry {
        &BUILTIN
    }

    pub fn entries(&self) -> &'static [HardCodingData] {
        self.entries
    }

    pub fn compilable_progs(&self) -> &'static [&'static str] {
        self.compilable_progs
    }

    /// False only for programs the compiler can build shaders for.
    pub fn requires_hard_coded_shaders(&self, program: &str) -> bool {
        !self.compilable_progs.iter().any(|prog| *prog == program)
    }

    /// Find the entry named exactly `program`.
    pub fn lookup(&self, program: &str) -> Result<&'static HardCodingData, HardcodeError> {
        match self.entries.iter().find(|data| data.name == program) {
            Some(data) => Ok(data),
            None => {
                error!("Could not find hard coding data for {}", program);
                Err(HardcodeError::EntryNotFound {
                    program: program.to_owned(),
                })
            }
        }
    }

    /// Check every entry for authoring mistakes.
    ///
    /// Reports the first duplicate name, graphics table whose length differs
    /// from its `shader_count`, or pipeline whose temps/coeffs disagree between
    /// build info and shader state.
    pub fn validate(&self) -> Result<(), HardcodeError> {
        for (i, data) in self.entries.iter().enumerate() {
            if self.entries[..i].iter().any(|other| other.name == data.name) {
                return Err(HardcodeError::DuplicateEntry { name: data.name });
            }

            let HardCodingPayload::Graphics(graphics) = &data.payload else {
                continue;
            };

            let tables = [
                ("vert_shaders", graphics.vert_shaders.len()),
                ("frag_shaders", graphics.frag_shaders.len()),
                ("vert_shader_states", graphics.vert_shader_states.len()),
                ("frag_shader_states", graphics.frag_shader_states.len()),
                ("build_infos", graphics.build_infos.len()),
            ];
            for (table, len) in tables {
                if len != graphics.shader_count as usize {
                    return Err(HardcodeError::ShaderCountMismatch {
                        name: data.name,
                        table,
                        len,
                        shader_count: graphics.shader_count,
                    });
                }
            }

            for pipeline_n in 0..graphics.shader_count {
                let n = pipeline_n as usize;
                check_pipeline_parity(
                    data.name,
                    pipeline_n,
                    &graphics.build_infos[n].vert_common_data,
                    &graphics.build_infos[n].frag_common_data,
                    &graphics.vert_shader_states[n],
                    &graphics.frag_shader_states[n],
                )?;
            }
        }

        Ok(())
    }
}
