//! Paste tool factory with automatic detection

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

#[cfg(target_os = "linux")]
use std::env;
#[cfg(target_os = "linux")]
use std::path::Path;

use tracing::debug;

use crate::application::ports::{PasteError, PasteInjector};

#[cfg(target_os = "linux")]
use super::command::is_tool_available;
use super::enigo::EnigoPasteInjector;
#[cfg(target_os = "macos")]
use super::macos::AppleScriptPasteInjector;
use super::noop::NoOpPasteInjector;
#[cfg(windows)]
use super::windows::Win32PasteInjector;
#[cfg(target_os = "linux")]
use super::wtype::WtypePasteInjector;
#[cfg(target_os = "linux")]
use super::xdotool::XdotoolPasteInjector;
#[cfg(target_os = "linux")]
use super::ydotool::YdotoolPasteInjector;

/// Concrete paste backends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasteTool {
    /// Cross-platform enigo library (no focus tracking)
    Enigo,
    /// macOS: osascript + System Events
    AppleScript,
    /// Windows: foreground window API + enigo
    Win32,
    /// Linux: xdotool (X11)
    Xdotool,
    /// Linux: wtype (Wayland native)
    Wtype,
    /// Linux: ydotool (requires ydotoold daemon)
    Ydotool,
    /// Paste injection disabled
    None,
}

impl fmt::Display for PasteTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PasteTool::Enigo => "enigo",
            PasteTool::AppleScript => "applescript",
            PasteTool::Win32 => "win32",
            PasteTool::Xdotool => "xdotool",
            PasteTool::Wtype => "wtype",
            PasteTool::Ydotool => "ydotool",
            PasteTool::None => "none",
        };
        f.write_str(name)
    }
}

/// User preference for paste tool selection.
///
/// - All platforms support `Auto` (the default), `Enigo` and `None`.
/// - Linux additionally supports `Xdotool`, `Wtype` and `Ydotool`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PasteToolPreference {
    /// Best native backend for the platform
    #[default]
    Auto,
    Enigo,
    None,
    #[cfg(target_os = "linux")]
    Xdotool,
    #[cfg(target_os = "linux")]
    Wtype,
    #[cfg(target_os = "linux")]
    Ydotool,
}

impl fmt::Display for PasteToolPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PasteToolPreference::Auto => write!(f, "auto"),
            PasteToolPreference::Enigo => write!(f, "enigo"),
            PasteToolPreference::None => write!(f, "none"),
            #[cfg(target_os = "linux")]
            PasteToolPreference::Xdotool => write!(f, "xdotool"),
            #[cfg(target_os = "linux")]
            PasteToolPreference::Wtype => write!(f, "wtype"),
            #[cfg(target_os = "linux")]
            PasteToolPreference::Ydotool => write!(f, "ydotool"),
        }
    }
}

#[cfg(target_os = "linux")]
pub const VALID_PASTE_TOOLS: &str = "auto, enigo, none, xdotool, wtype, ydotool";
#[cfg(not(target_os = "linux"))]
pub const VALID_PASTE_TOOLS: &str = "auto, enigo, none";

/// Error type for parsing paste tool preference
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid paste tool '{value}'. Valid options: {valid_options}")]
pub struct ParsePasteToolError {
    pub value: String,
    pub valid_options: &'static str,
}

impl FromStr for PasteToolPreference {
    type Err = ParsePasteToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(PasteToolPreference::Auto),
            "enigo" => Ok(PasteToolPreference::Enigo),
            "none" => Ok(PasteToolPreference::None),
            #[cfg(target_os = "linux")]
            "xdotool" => Ok(PasteToolPreference::Xdotool),
            #[cfg(target_os = "linux")]
            "wtype" => Ok(PasteToolPreference::Wtype),
            #[cfg(target_os = "linux")]
            "ydotool" => Ok(PasteToolPreference::Ydotool),
            _ => Err(ParsePasteToolError {
                value: s.to_string(),
                valid_options: VALID_PASTE_TOOLS,
            }),
        }
    }
}

/// Check if ydotool is available (binary exists AND daemon socket exists)
#[cfg(target_os = "linux")]
async fn is_ydotool_available() -> bool {
    if !is_tool_available("ydotool").await {
        return false;
    }

    let socket_paths = [
        env::var("YDOTOOL_SOCKET").ok(),
        env::var("XDG_RUNTIME_DIR")
            .map(|dir| format!("{}/.ydotool_socket", dir))
            .ok(),
        Some("/tmp/.ydotool_socket".to_string()),
    ];

    socket_paths
        .into_iter()
        .flatten()
        .any(|path| Path::new(&path).exists())
}

/// Detect the best available paste tool
///
/// Linux Wayland: wtype → ydotool → enigo. Linux X11: xdotool → enigo.
#[cfg(target_os = "linux")]
pub async fn detect_paste_tool() -> PasteTool {
    let wayland = env::var_os("WAYLAND_DISPLAY").is_some();
    if wayland {
        if is_tool_available("wtype").await {
            return PasteTool::Wtype;
        }
        if is_ydotool_available().await {
            return PasteTool::Ydotool;
        }
    } else if is_tool_available("xdotool").await {
        return PasteTool::Xdotool;
    }
    PasteTool::Enigo
}

/// Detect the best available paste tool (AppleScript on macOS)
#[cfg(target_os = "macos")]
pub async fn detect_paste_tool() -> PasteTool {
    PasteTool::AppleScript
}

/// Detect the best available paste tool (Win32 on Windows)
#[cfg(windows)]
pub async fn detect_paste_tool() -> PasteTool {
    PasteTool::Win32
}

/// Detect the best available paste tool
#[cfg(not(any(target_os = "macos", windows, target_os = "linux")))]
pub async fn detect_paste_tool() -> PasteTool {
    PasteTool::Enigo
}

/// Create a paste adapter using the specified preference.
///
/// Returns the adapter and the selected tool, or an error if an explicitly
/// requested tool is missing. External helpers are bounded by `timeout`.
pub async fn create_paste_injector(
    preference: PasteToolPreference,
    timeout: Duration,
) -> Result<(Box<dyn PasteInjector>, PasteTool), PasteError> {
    let tool = match preference {
        PasteToolPreference::Auto => detect_paste_tool().await,
        PasteToolPreference::Enigo => PasteTool::Enigo,
        PasteToolPreference::None => PasteTool::None,
        #[cfg(target_os = "linux")]
        PasteToolPreference::Xdotool => {
            if !is_tool_available("xdotool").await {
                return Err(PasteError::ToolNotFound("xdotool"));
            }
            PasteTool::Xdotool
        }
        #[cfg(target_os = "linux")]
        PasteToolPreference::Wtype => {
            if !is_tool_available("wtype").await {
                return Err(PasteError::ToolNotFound("wtype"));
            }
            PasteTool::Wtype
        }
        #[cfg(target_os = "linux")]
        PasteToolPreference::Ydotool => {
            if !is_ydotool_available().await {
                return Err(PasteError::ToolNotFound("ydotool"));
            }
            PasteTool::Ydotool
        }
    };

    debug!(%preference, %tool, "selected paste tool");
    Ok((create_specific_tool(tool, timeout), tool))
}

/// Create a specific paste tool adapter
fn create_specific_tool(tool: PasteTool, timeout: Duration) -> Box<dyn PasteInjector> {
    let _ = timeout;
    match tool {
        #[cfg(target_os = "macos")]
        PasteTool::AppleScript => Box::new(AppleScriptPasteInjector::new(timeout)),
        #[cfg(windows)]
        PasteTool::Win32 => Box::new(Win32PasteInjector::new()),
        #[cfg(target_os = "linux")]
        PasteTool::Xdotool => Box::new(XdotoolPasteInjector::new(timeout)),
        #[cfg(target_os = "linux")]
        PasteTool::Wtype => Box::new(WtypePasteInjector::new(timeout)),
        #[cfg(target_os = "linux")]
        PasteTool::Ydotool => Box::new(YdotoolPasteInjector::new(timeout)),
        PasteTool::None => Box::new(NoOpPasteInjector::new()),
        _ => Box::new(EnigoPasteInjector::new()),
    }
}
