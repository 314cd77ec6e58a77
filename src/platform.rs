use serde::Serialize;
use std::fmt;

/// Operating system families the launch command is resolved for.
///
/// Anything that is not recognized as macOS or Windows is treated as `Other`, which
/// shares the Linux launch command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    MacOs,
    Windows,
    Other,
}

impl Platform {
    /// Normalize a raw platform string such as `darwin`, `win32` or `linux`.
    pub fn from_raw(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "darwin" | "macos" | "osx" => Platform::MacOs,
            "win32" | "windows" => Platform::Windows,
            _ => Platform::Other,
        }
    }

    /// The platform this binary is running on.
    pub fn current() -> Self {
        Self::from_raw(std::env::consts::OS)
    }

    pub fn canonical_name(self) -> &'static str {
        match self {
            Platform::MacOs => "macos",
            Platform::Windows => "windows",
            Platform::Other => "other",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical_name())
    }
}

impl From<&str> for Platform {
    fn from(raw: &str) -> Self {
        Self::from_raw(raw)
    }
}
