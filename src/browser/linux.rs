use super::LaunchCommand;

pub const CHROME_LINUX_PATH: &str = "/usr/bin/google-chrome";

pub fn launch_command() -> LaunchCommand {
    LaunchCommand::new([CHROME_LINUX_PATH])
}
