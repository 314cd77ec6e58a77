pub mod browser;
pub mod error;
pub mod filesystem;
pub mod logging;
pub mod platform;
pub mod target;

pub use browser::{
    resolve_host_launch_command, resolve_launch_command, LaunchCommand, CHROME_LINUX_PATH,
    CHROME_WIN_X64_PATH, CHROME_WIN_X86_PATH,
};
pub use error::{DebugUtilsError, Result};
pub use filesystem::{FileSystem, RealFileSystem};
pub use platform::Platform;
pub use target::{
    default_target_filter, filter_targets, target_filter, TargetDescriptor, PAGE_TARGET_TYPE,
};
