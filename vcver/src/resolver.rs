use std::env;
use std::path::{Path, PathBuf, MAIN_SEPARATOR};

use serde::Deserialize;
use snafu::{ensure, ResultExt};
use tracing::{debug, trace};

use crate::command::{pretty_command, CommandRunner, SystemCommand};
use crate::config::{DEFAULT_COMMAND, DEFAULT_ROOT, DEFAULT_VERSION_FILE};
use crate::error::{
    CommandFailedSnafu, FallbackMissingSnafu, ReadVersionFileSnafu, ResolveError,
    SelfReferentialRootSnafu, UnparsableSnafu, VersionSource, WorkingDirSnafu, WriteFileSnafu,
};
use crate::files::{FileAccess, OsFiles};
use crate::module::ModuleFormat;
use crate::template::{Substitutions, ROOT};
use crate::version::{Describe, Version};


/// Options controlling how a version is resolved.
///
/// `root`, `version_file` and every entry of `command` are templates, see
/// [`crate::template`].
///
/// Options can also be read from a JSON object, in which case missing keys
/// keep their default value:
/// ```
/// # use vcver::Options;
/// let opts = Options::from_json(r#"{"include_dev_version": false, "version_file": null}"#)?;
/// assert!(!opts.include_dev_version);
/// assert_eq!(opts.version_file, None);
/// assert_eq!(opts.root, "{pwd}");
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Options {
    /// Append `.devN` to the tag when there are `N > 0` commits after it.
    pub include_dev_version: bool,

    /// The directory of the project root.
    pub root: String,

    /// File caching the raw describe output, used when the command fails.
    /// `None` disables reading and writing it altogether.
    pub version_file: Option<String>,

    /// Files to generate with the resolved version and sha.
    pub module_paths: Vec<PathBuf>,

    /// Format of the generated files, regardless of their extension.
    pub module_format: ModuleFormat,

    /// The command to run to get a raw version, program name included.
    pub command: Vec<String>,

    /// Value for the `{pwd}` placeholder. Defaults to the process working directory.
    pub pwd: Option<PathBuf>,

    /// Path separator that `/` gets translated into.
    pub separator: char,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            include_dev_version: true,
            root: DEFAULT_ROOT.to_string(),
            version_file: Some(DEFAULT_VERSION_FILE.to_string()),
            module_paths: vec![],
            module_format: ModuleFormat::Python,
            command: DEFAULT_COMMAND.iter().map(|s| s.to_string()).collect(),
            pwd: None,
            separator: MAIN_SEPARATOR,
        }
    }
}

impl Options {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn include_dev_version(self, include_dev_version: bool) -> Self {
        Options { include_dev_version, ..self }
    }

    pub fn root(self, root: impl Into<String>) -> Self {
        Options { root: root.into(), ..self }
    }

    pub fn version_file(self, version_file: Option<impl Into<String>>) -> Self {
        Options { version_file: version_file.map(Into::into), ..self }
    }

    pub fn no_version_file(self) -> Self {
        Options { version_file: None, ..self }
    }

    pub fn module_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.module_paths.push(path.into());
        self
    }

    pub fn module_format(self, module_format: ModuleFormat) -> Self {
        Options { module_format, ..self }
    }

    pub fn command<I, S>(self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Options { command: args.into_iter().map(Into::into).collect(), ..self }
    }

    pub fn pwd(self, pwd: impl Into<PathBuf>) -> Self {
        Options { pwd: Some(pwd.into()), ..self }
    }

    pub fn separator(self, separator: char) -> Self {
        Options { separator, ..self }
    }

    /// Perform all the placeholder substitutions.
    pub fn expand(&self) -> Result<Expanded, ResolveError> {
        let pwd = match &self.pwd {
            Some(pwd) => pwd.clone(),
            None => env::current_dir().context(WorkingDirSnafu)?,
        };

        ensure!(!self.root.contains(ROOT), SelfReferentialRootSnafu { template: &self.root });

        let subs = Substitutions::new(pwd.to_string_lossy(), self.separator);
        let root = subs.expand(&self.root);
        let subs = subs.with_root(&root);

        Ok(Expanded {
            root,
            command: self.command.iter().map(|arg| subs.expand(arg)).collect(),
            version_file: self.version_file.as_deref().map(|f| subs.expand(f)),
        })
    }
}


/// Options after placeholder substitution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expanded {
    pub root: String,
    pub command: Vec<String>,
    pub version_file: Option<String>,
}


/// Resolves a [`Version`] using a command runner and a file accessor.
///
/// The default resolver runs real processes and touches the real filesystem,
/// other implementations can be given for testing.
#[derive(Debug, Clone, Default)]
pub struct Resolver<R = SystemCommand, F = OsFiles> {
    runner: R,
    files: F,
}

impl<R: CommandRunner, F: FileAccess> Resolver<R, F> {
    pub fn new(runner: R, files: F) -> Self {
        Resolver { runner, files }
    }

    /// Find the version, either from the output of the describe command or,
    /// if that fails, from the fallback file.
    ///
    /// On success, the fallback file (if enabled) is overwritten with the raw
    /// describe output and every module in `options.module_paths` is generated.
    pub fn resolve(&self, options: &Options) -> Result<Version, ResolveError> {
        let Expanded { root, command, version_file } = options.expand()?;
        trace!("Resolving version with root: {root}");

        // try to pull the version from the command, or (perhaps) fall back on
        // a previously-saved version
        let (from_command, output) = match self.runner.run(&command) {
            Ok(out) => (Some(out.stdout_trimmed()), out.stderr_lines()),
            Err(e) => {
                debug!("Could not run `{}`: {e}", pretty_command(&command));
                (None, vec![])
            }
        };

        let (raw, origin) = match from_command {
            Some(raw) if !raw.is_empty() => (raw, VersionSource::Command),
            _ => {
                let Some(path) = &version_file else {
                    return CommandFailedSnafu { args: command, output }.fail();
                };
                ensure!(self.files.exists(Path::new(path)),
                        FallbackMissingSnafu { args: command, path, output });

                debug!("Reading version from fallback file: {path}");
                let raw = self.files.read_to_string(Path::new(path))
                    .context(ReadVersionFileSnafu { path })?;
                (raw, VersionSource::File(path.clone()))
            }
        };

        let Some(describe) = Describe::parse(&raw) else {
            // command output is only relevant if the raw version came from it
            let output = match origin {
                VersionSource::Command => output,
                VersionSource::File(_) => vec![],
            };
            return UnparsableSnafu { raw: raw.clone(), origin, output }.fail();
        };

        if let Some(path) = &version_file {
            self.files.write(Path::new(path), &raw).context(WriteFileSnafu { path })?;
        }

        let version = describe.to_version(options.include_dev_version);

        for path in &options.module_paths {
            let format = options.module_format;
            trace!("Generating {format} module: {}", path.display());
            self.files.write(path, &format.render(&version))
                .context(WriteFileSnafu { path: path.display().to_string() })?;
        }

        debug!("Resolved version: {version:?}");
        Ok(version)
    }
}

/// Resolve a version using the real OS facilities.
pub fn resolve(options: &Options) -> Result<Version, ResolveError> {
    Resolver::new(SystemCommand, OsFiles).resolve(options)
}
