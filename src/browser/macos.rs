use super::LaunchCommand;

/// `open -n` starts a new instance and `--args` forwards whatever the caller appends to
/// Chrome itself. App bundles are resolved by name, so nothing is probed.
const OPEN_CHROME: &[&str] = &["open", "-a", "google chrome", "-n", "--args"];

pub fn launch_command() -> LaunchCommand {
    LaunchCommand::new(OPEN_CHROME.iter().copied())
}
