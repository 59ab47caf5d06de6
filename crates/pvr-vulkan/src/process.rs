//! Identity of the running process.

use std::path::Path;

use crate::config::hardcode_config;

/// Supplies the name used to look up hard-coded data.
///
/// The name is compared verbatim: no case folding, no extension stripping.
pub trait ProcessIdentity {
    fn process_name(&self) -> String;
}

impl ProcessIdentity for str {
    fn process_name(&self) -> String {
        self.to_owned()
    }
}

impl ProcessIdentity for String {
    fn process_name(&self) -> String {
        self.clone()
    }
}

/// The process this driver is loaded into.
#[derive(Debug, Clone, Default)]
pub struct CurrentProcess {
    name_override: Option<String>,
}

impl CurrentProcess {
    /// Use the override from the process-wide config, if any.
    pub fn new() -> Self {
        Self {
            name_override: hardcode_config().process_name_override,
        }
    }

    /// Report `name` instead of the executable name.
    pub fn with_override(name: impl Into<String>) -> Self {
        Self {
            name_override: Some(name.into()),
        }
    }
}

impl ProcessIdentity for CurrentProcess {
    fn process_name(&self) -> String {
        let arg0 = std::env::args_os()
            .next()
            .map(|arg0| arg0.to_string_lossy().into_owned());
        let exe = std::env::current_exe().ok();

        resolve_process_name(self.name_override.as_deref(), arg0.as_deref(), exe.as_deref())
    }
}

/// Pick the process name: the override, else `argv[0]`'s file name, else the
/// executable's file name, else "".
///
/// `argv[0]` comes first so a binary started through a symlink is known by the
/// link's name.
pub fn resolve_process_name(
    name_override: Option<&str>,
    arg0: Option<&str>,
    exe: Option<&Path>,
) -> String {
    if let Some(name) = name_override {
        return name.to_owned();
    }

    arg0.map(basename)
        .filter(|name| !name.is_empty())
        .map(str::to_owned)
        .or_else(|| {
            exe.and_then(|exe| exe.file_name())
                .map(|name| name.to_string_lossy().into_owned())
        })
        .unwrap_or_default()
}

/// Final path component of `path`, or `path` itself if it has none.
pub fn basename(path: &str) -> &str {
    Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(path)
}
