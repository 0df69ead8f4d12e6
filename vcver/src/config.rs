//! Build-time constants for the `vcver` tool itself.

/// Version of this tool, as stamped by the build script.
pub const VERSION: &str = include_str!(concat!(env!("OUT_DIR"), "/version"));

/// Name used to prefix every diagnostic line.
pub const TOOL_NAME: &str = "vcver";

/// Name of the fallback file, relative to the project root.
pub const DEFAULT_VERSION_FILE: &str = "{root}/version.txt";

/// Default root: the current working directory.
pub const DEFAULT_ROOT: &str = "{pwd}";

/// `--git-dir` is given explicitly so that we never pick up the repository
/// of some enclosing directory.
pub const DEFAULT_COMMAND: [&str; 6] = [
    "git", "--git-dir", "{root}/.git", "describe", "--tags", "--long",
];
