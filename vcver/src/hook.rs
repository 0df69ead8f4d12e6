//! Glue for build systems: resolve a version and hand it to a build target.
//!
//! In a Cargo build script:
//! ```no_run
//! use vcver::{hook::{self, CargoEnv}, Options, OsFiles};
//!
//! let options = Options::default().root(env!("CARGO_MANIFEST_DIR"));
//! let mut target = CargoEnv::new("MY_CRATE_VERSION");
//! if let Err(e) = hook::apply(&mut target, &options) {
//!     e.report(&mut std::io::stdout()).unwrap();
//!     std::process::exit(2);
//! }
//! for directive in target.rerun_on(&options, &OsFiles).unwrap() {
//!     println!("{directive}");
//! }
//! ```

use std::path::Path;

use crate::command::CommandRunner;
use crate::files::FileAccess;
use crate::resolver::{resolve, Options, Resolver};
use crate::{ResolveError, Version};


/// Something that receives the resolved version string.
pub trait VersionTarget {
    fn set_version(&mut self, version: &str);
}

impl VersionTarget for String {
    fn set_version(&mut self, version: &str) {
        version.clone_into(self);
    }
}

impl VersionTarget for Option<String> {
    fn set_version(&mut self, version: &str) {
        *self = Some(version.to_string());
    }
}


/// A package description whose version lives in two places: on the package
/// itself and on its metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildTarget {
    pub version: Option<String>,
    pub metadata: BuildMetadata,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildMetadata {
    pub version: Option<String>,
}

impl VersionTarget for BuildTarget {
    fn set_version(&mut self, version: &str) {
        self.version.set_version(version);
        self.metadata.version.set_version(version);
    }
}


/// Exports the version to the crate being built, as an environment variable
/// readable with `env!()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CargoEnv {
    var: String,
}

impl CargoEnv {
    pub fn new(var: impl Into<String>) -> Self {
        CargoEnv { var: var.into() }
    }

    pub fn directive(&self, version: &str) -> String {
        format!("cargo:rustc-env={}={}", self.var, version)
    }

    /// Directives asking Cargo to rerun the build script when the git `HEAD`
    /// or the fallback file change. Only paths that exist are included.
    pub fn rerun_on<F: FileAccess + ?Sized>(&self, options: &Options, files: &F) -> Result<Vec<String>, ResolveError> {
        let expanded = options.expand()?;
        let head = format!("{}{}.git{}HEAD", expanded.root, options.separator, options.separator);

        Ok([Some(head), expanded.version_file]
           .into_iter()
           .flatten()
           .filter(|path| files.exists(Path::new(path)))
           .map(|path| format!("cargo:rerun-if-changed={path}"))
           .collect())
    }
}

impl VersionTarget for CargoEnv {
    fn set_version(&mut self, version: &str) {
        println!("{}", self.directive(version));
    }
}


/// Resolve a version with the OS facilities and assign it on `target`.
pub fn apply<T: VersionTarget + ?Sized>(target: &mut T, options: &Options) -> Result<Version, ResolveError> {
    let version = resolve(options)?;
    target.set_version(version.version());
    Ok(version)
}

/// Same as [`apply()`], with an explicit resolver.
pub fn apply_with<R, F, T>(resolver: &Resolver<R, F>, target: &mut T, options: &Options) -> Result<Version, ResolveError>
where
    R: CommandRunner,
    F: FileAccess,
    T: VersionTarget + ?Sized,
{
    let version = resolver.resolve(options)?;
    target.set_version(version.version());
    Ok(version)
}
