//! Generated source files exposing the resolved version.
//!
//! By default a small Python module defining `__version__` and `__sha__` is
//! written. The Rust format, with constants suitable for `include!()`, has to
//! be asked for explicitly.

use serde::Deserialize;
use strum::{Display, EnumString};

use crate::util::python_literal;
use crate::Version;


/// Language of the generated modules, whatever their file name.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Default, Display, EnumString, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ModuleFormat {
    #[default]
    Python,
    Rust,
}

impl ModuleFormat {
    pub fn render(&self, version: &Version) -> String {
        match self {
            ModuleFormat::Python => format!(
                "\n# This file is automatically generated by setup.py.\n__version__ = {}\n__sha__ = {}\n",
                python_literal(version.version()),
                python_literal(version.sha()),
            ),
            ModuleFormat::Rust => format!(
                "// This file is automatically generated by vcver.\npub const VERSION: &str = {:?};\npub const SHA: &str = {:?};\n",
                version.version(),
                version.sha(),
            ),
        }
    }
}
