use std::fs;
use std::io;
use std::path::Path;

/// Read-only file system probes used to pick between browser install locations.
///
/// Injected rather than called directly so tests can answer with deterministic fakes
/// instead of depending on what is installed on the host.
#[cfg_attr(test, mockall::automock)]
pub trait FileSystem {
    /// Check if a path exists
    fn exists(&self, path: &Path) -> bool;

    /// Stat a path, failing when it cannot be found
    fn stat(&self, path: &Path) -> io::Result<()>;
}

/// Real file system implementation that delegates to std::fs
#[derive(Debug, Clone, Copy, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn stat(&self, path: &Path) -> io::Result<()> {
        fs::metadata(path).map(|_| ())
    }
}
