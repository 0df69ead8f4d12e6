//!
//! Derive a package version number from version control tags.
//!
//! It's much more convenient to use the tagging mechanism of your version
//! control system to derive a version number than to duplicate that
//! information all over the place. `vcver` runs `git describe --tags --long`,
//! which outputs something like `1.0-2-gfeeb` (tag, number of commits since
//! the tag, abbreviated sha), and turns it into a [`Version`]:
//!
//! ```
//! # use vcver::Describe;
//! let version = Describe::parse("1.0-2-gfeeb").unwrap().to_version(true);
//! assert_eq!(version.version(), "1.0.dev2");
//! assert_eq!(version.commits(), "2");
//! assert_eq!(version.sha(), "gfeeb");
//! ```
//!
//! # Fallback file
//!
//! Every successful resolution writes the raw `git describe` output to a
//! `version.txt` file at the project root. When git isn't installed or there is
//! no `.git` directory (eg: when building from a source tarball), the version is
//! read from that file instead, so it should be shipped in release tarballs.
//!
//! # Templates
//!
//! The root directory, the fallback file and the command arguments accept the
//! `{pwd}` and `{root}` placeholders, see [`template`].
//!
//! # Errors
//!
//! Nothing is printed on success. On failure a [`ResolveError`] is returned,
//! whose [`ResolveError::report()`] prints a diagnostic prefixed with `vcver:`.
//! The `vcver` binary then exits with status 2.
//!
//! # Feature flags
//!
//! - `cli`: whether to compile the `vcver` command-line tool alongside the library.
//!          This feature is enabled by default.

pub mod command;
pub mod config;
pub mod error;
pub mod files;
pub mod hook;
pub mod module;
pub mod resolver;
pub mod template;
pub mod util;
pub mod version;

pub use command::{CommandOutput, CommandRunner, SystemCommand};
pub use error::{ResolveError, VersionSource};
pub use files::{FileAccess, OsFiles};
pub use module::ModuleFormat;
pub use resolver::{resolve, Expanded, Options, Resolver};
pub use version::{Describe, Version};
