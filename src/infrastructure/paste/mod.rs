//! Paste injection infrastructure module
//!
//! Provides focus tracking and paste keystroke injection: AppleScript on
//! macOS, the Win32 foreground-window API on Windows, and xdotool, wtype or
//! ydotool on Linux, with enigo as the cross-platform fallback.

#[cfg(unix)]
mod command;
mod enigo;
mod factory;
#[cfg(target_os = "macos")]
mod macos;
mod noop;
#[cfg(windows)]
mod windows;
#[cfg(target_os = "linux")]
mod wtype;
#[cfg(target_os = "linux")]
mod xdotool;
#[cfg(target_os = "linux")]
mod ydotool;

pub use enigo::EnigoPasteInjector;
pub use factory::{
    create_paste_injector, detect_paste_tool, ParsePasteToolError, PasteTool,
    PasteToolPreference, VALID_PASTE_TOOLS,
};
#[cfg(target_os = "macos")]
pub use macos::AppleScriptPasteInjector;
pub use noop::NoOpPasteInjector;
#[cfg(windows)]
pub use windows::Win32PasteInjector;
#[cfg(target_os = "linux")]
pub use wtype::WtypePasteInjector;
#[cfg(target_os = "linux")]
pub use xdotool::XdotoolPasteInjector;
#[cfg(target_os = "linux")]
pub use ydotool::YdotoolPasteInjector;
