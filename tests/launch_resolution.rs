use chrome_debug_utils::{
    resolve_launch_command, FileSystem, Platform, CHROME_WIN_X64_PATH, CHROME_WIN_X86_PATH,
};
use std::cell::RefCell;
use std::collections::HashSet;
use std::io::{self, Error, ErrorKind};
use std::path::{Path, PathBuf};

/// In-memory file system that records every probe so tests can assert what was asked.
#[derive(Default)]
struct FakeFileSystem {
    present: HashSet<PathBuf>,
    stat_calls: RefCell<Vec<PathBuf>>,
    exists_calls: RefCell<Vec<PathBuf>>,
}

impl FakeFileSystem {
    fn with_paths(paths: &[&str]) -> Self {
        FakeFileSystem {
            present: paths.iter().map(PathBuf::from).collect(),
            ..Default::default()
        }
    }
}

impl FileSystem for FakeFileSystem {
    fn exists(&self, path: &Path) -> bool {
        self.exists_calls.borrow_mut().push(path.to_path_buf());
        self.present.contains(path)
    }

    fn stat(&self, path: &Path) -> io::Result<()> {
        self.stat_calls.borrow_mut().push(path.to_path_buf());
        if self.present.contains(path) {
            Ok(())
        } else {
            Err(Error::new(ErrorKind::NotFound, "Not found"))
        }
    }
}

#[test]
fn test_macos_never_probes() {
    let fs = FakeFileSystem::with_paths(&[CHROME_WIN_X86_PATH]);
    let command = resolve_launch_command(Platform::from_raw("darwin"), &fs);

    assert_eq!(
        command.as_slice(),
        ["open", "-a", "google chrome", "-n", "--args"]
    );
    assert!(fs.stat_calls.borrow().is_empty());
    assert!(fs.exists_calls.borrow().is_empty());
}

#[test]
fn test_windows_only_64_bit_install() {
    let fs = FakeFileSystem::with_paths(&[CHROME_WIN_X64_PATH]);
    let command = resolve_launch_command(Platform::from_raw("win32"), &fs);

    assert_eq!(
        command.as_slice(),
        [r"C:\Program Files\Google\Chrome\Application\chrome.exe"]
    );
    assert_eq!(*fs.stat_calls.borrow(), vec![PathBuf::from(CHROME_WIN_X86_PATH)]);
}

#[test]
fn test_windows_both_installs_prefer_x86() {
    let fs = FakeFileSystem::with_paths(&[CHROME_WIN_X64_PATH, CHROME_WIN_X86_PATH]);
    let command = resolve_launch_command(Platform::from_raw("win32"), &fs);

    assert_eq!(
        command.as_slice(),
        [r"C:\Program Files (x86)\Google\Chrome\Application\chrome.exe"]
    );
}

#[test]
fn test_windows_nothing_installed_still_resolves() {
    let fs = FakeFileSystem::default();
    let command = resolve_launch_command(Platform::Windows, &fs);

    assert_eq!(command.as_slice(), [CHROME_WIN_X64_PATH]);
    assert_eq!(fs.stat_calls.borrow().len(), 1);
    assert!(fs.exists_calls.borrow().is_empty());
}

#[test]
fn test_unknown_platforms_use_linux_command() {
    let fs = FakeFileSystem::default();
    for raw in ["linux", "freebsd", "aix", ""] {
        let command = resolve_launch_command(Platform::from_raw(raw), &fs);
        assert_eq!(command.as_slice(), ["/usr/bin/google-chrome"], "platform {raw:?}");
    }
    assert!(fs.stat_calls.borrow().is_empty());
}

#[test]
fn test_trait_object_probe() {
    let fs = FakeFileSystem::with_paths(&[CHROME_WIN_X86_PATH]);
    let dyn_fs: &dyn FileSystem = &fs;
    let command = resolve_launch_command(Platform::Windows, dyn_fs);

    assert_eq!(command.program(), Some(CHROME_WIN_X86_PATH));
}
