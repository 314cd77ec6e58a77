use super::LaunchCommand;
use crate::filesystem::FileSystem;
use std::path::Path;
use tracing::debug;

pub const CHROME_WIN_X64_PATH: &str = r"C:\Program Files\Google\Chrome\Application\chrome.exe";
pub const CHROME_WIN_X86_PATH: &str =
    r"C:\Program Files (x86)\Google\Chrome\Application\chrome.exe";

/// Pick the Chrome install location on Windows.
///
/// The x86 location is probed and wins whenever it can be stat'ed; every probe error,
/// not only `NotFound`, selects the 64-bit location. `exists` is never consulted.
pub fn launch_command<F: FileSystem + ?Sized>(fs: &F) -> LaunchCommand {
    let path = match fs.stat(Path::new(CHROME_WIN_X86_PATH)) {
        Ok(()) => {
            debug!(path = CHROME_WIN_X86_PATH, "Found 32-bit Chrome install");
            CHROME_WIN_X86_PATH
        }
        Err(err) => {
            debug!(
                probed = CHROME_WIN_X86_PATH,
                error = %err,
                "32-bit Chrome install not found, using 64-bit location"
            );
            CHROME_WIN_X64_PATH
        }
    };

    LaunchCommand::new([path])
}
