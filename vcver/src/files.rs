use std::fs;
use std::io;
use std::path::Path;

use tracing::trace;


/// Whole-file access to the fallback file and the generated modules.
pub trait FileAccess {
    fn exists(&self, path: &Path) -> bool;

    /// Read the full contents of a UTF-8 text file.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Create or truncate `path` and write `contents` to it.
    fn write(&self, path: &Path, contents: &str) -> io::Result<()>;
}

impl<T: FileAccess + ?Sized> FileAccess for &T {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        (**self).read_to_string(path)
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        (**self).write(path, contents)
    }
}


/// The real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFiles;

impl FileAccess for OsFiles {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        trace!("Reading file: {}", path.display());
        fs::read_to_string(path)
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        trace!("Writing {} bytes to: {}", contents.len(), path.display());
        fs::write(path, contents)
    }
}
