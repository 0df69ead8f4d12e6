use std::fmt;
use std::io::{self, Write};

use snafu::Snafu;

use crate::config::TOOL_NAME;


/// Where a raw version string came from.
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum VersionSource {
    /// The output of the describe command.
    Command,
    /// The fallback file at the given path.
    File(String),
}

impl fmt::Display for VersionSource {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            VersionSource::Command => write!(f, "the command"),
            VersionSource::File(path) => write!(f, "{path:?}"),
        }
    }
}


#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum ResolveError {
    #[snafu(display("{args:?} failed."))]
    CommandFailed {
        args: Vec<String>,
        output: Vec<String>,
    },

    #[snafu(display("{args:?} failed and {path:?} isn't present."))]
    FallbackMissing {
        args: Vec<String>,
        path: String,
        output: Vec<String>,
    },

    #[snafu(display("{raw:?} (from {origin}) couldn't be parsed into a version."))]
    Unparsable {
        raw: String,
        origin: VersionSource,
        output: Vec<String>,
    },

    #[snafu(display(r#"the root directory cannot refer to itself: "{template}""#))]
    SelfReferentialRoot { template: String },

    #[snafu(display("cannot determine the current working directory: {source}"))]
    WorkingDir { source: io::Error },

    #[snafu(display("cannot read {path:?}: {source}"))]
    ReadVersionFile { path: String, source: io::Error },

    #[snafu(display("cannot write {path:?}: {source}"))]
    WriteFile { path: String, source: io::Error },
}

impl ResolveError {
    /// Lines of the diagnostic for this error, without the tool prefix.
    ///
    /// The output captured from the describe command (its stderr) is appended
    /// when there is any.
    pub fn diagnostics(&self) -> Vec<String> {
        let mut lines = vec![self.to_string()];

        if let ResolveError::FallbackMissing { .. } = self {
            lines.push("are you installing from a source tarball?".to_string());
        }

        let output: &[String] = match self {
            ResolveError::CommandFailed { output, .. } |
            ResolveError::FallbackMissing { output, .. } |
            ResolveError::Unparsable { output, .. } => output.as_slice(),
            _ => &[],
        };
        if !output.is_empty() {
            lines.push("-- command output follows --".to_string());
            lines.extend(output.iter().cloned());
        }

        lines
    }

    /// Write the diagnostic lines, each prefixed with the tool name.
    pub fn report<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for line in self.diagnostics() {
            writeln!(out, "{TOOL_NAME}: {line}")?;
        }
        Ok(())
    }
}
