use crate::filesystem::{FileSystem, RealFileSystem};
use crate::platform::Platform;
use serde::Serialize;
use std::fmt;
use tracing::debug;

mod linux;
mod macos;
mod windows;

pub use linux::CHROME_LINUX_PATH;
pub use windows::{CHROME_WIN_X64_PATH, CHROME_WIN_X86_PATH};

/// Program and arguments needed to start Chrome.
///
/// The first element is the executable or launcher, the rest are its arguments. Values
/// are kept verbatim and serialize as a plain JSON array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LaunchCommand(Vec<String>);

impl LaunchCommand {
    pub fn new<I, S>(parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        LaunchCommand(parts.into_iter().map(Into::into).collect())
    }

    pub fn program(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    pub fn args(&self) -> &[String] {
        self.0.get(1..).unwrap_or_default()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }

    /// Shell-quoted form for display to humans.
    pub fn display(&self) -> String {
        shell_words::join(&self.0)
    }
}

impl fmt::Display for LaunchCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

impl PartialEq<[&str]> for LaunchCommand {
    fn eq(&self, other: &[&str]) -> bool {
        self.0.len() == other.len() && self.0.iter().zip(other).all(|(a, b)| a == b)
    }
}

impl<const N: usize> PartialEq<[&str; N]> for LaunchCommand {
    fn eq(&self, other: &[&str; N]) -> bool {
        *self == other[..]
    }
}

/// Resolve the command that launches Chrome on `platform`.
///
/// Only the Windows branch touches the file system, and it never fails: a failed probe
/// just selects the other install location.
///
/// # Examples
///
/// ```
/// use chrome_debug_utils::{resolve_launch_command, Platform, RealFileSystem};
///
/// let command = resolve_launch_command(Platform::from_raw("linux"), &RealFileSystem);
/// assert_eq!(command.as_slice(), ["/usr/bin/google-chrome"]);
/// ```
pub fn resolve_launch_command<F: FileSystem + ?Sized>(
    platform: Platform,
    fs: &F,
) -> LaunchCommand {
    let command = match platform {
        Platform::MacOs => macos::launch_command(),
        Platform::Windows => windows::launch_command(fs),
        Platform::Other => linux::launch_command(),
    };
    debug!(
        platform = %platform,
        command = ?command.as_slice(),
        "Resolved browser launch command"
    );
    command
}

/// Resolve the launch command for the host platform against the real file system.
pub fn resolve_host_launch_command() -> LaunchCommand {
    resolve_launch_command(Platform::current(), &RealFileSystem)
}
