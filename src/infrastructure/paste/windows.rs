//! Win32 paste adapter

use async_trait::async_trait;
use windows_sys::Win32::Foundation::{CloseHandle, HWND};
use windows_sys::Win32::System::Threading::{
    OpenProcess, QueryFullProcessImageNameW, PROCESS_NAME_WIN32,
    PROCESS_QUERY_LIMITED_INFORMATION,
};
use windows_sys::Win32::UI::WindowsAndMessaging::{
    GetForegroundWindow, GetWindowThreadProcessId, IsWindow, SetForegroundWindow,
};

use crate::application::ports::{AppTarget, PasteError, PasteInjector};

use super::enigo::press_paste_chord;

/// Focus tracking through the foreground window handle, paste through enigo
pub struct Win32PasteInjector;

impl Win32PasteInjector {
    pub fn new() -> Self {
        Self
    }
}

impl Default for Win32PasteInjector {
    fn default() -> Self {
        Self::new()
    }
}

/// Executable file name of the process owning `hwnd`
fn process_name(hwnd: HWND) -> Option<String> {
    let mut pid = 0u32;
    // SAFETY: hwnd came from GetForegroundWindow; pid is a valid out pointer
    unsafe { GetWindowThreadProcessId(hwnd, &mut pid) };
    if pid == 0 {
        return None;
    }

    // SAFETY: plain handle lifecycle; the handle is closed below
    let process = unsafe { OpenProcess(PROCESS_QUERY_LIMITED_INFORMATION, 0, pid) };
    if process.is_null() {
        return None;
    }

    let mut buf = [0u16; 1024];
    let mut len = buf.len() as u32;
    // SAFETY: buf and len describe a valid writable buffer
    let ok = unsafe {
        QueryFullProcessImageNameW(process, PROCESS_NAME_WIN32, buf.as_mut_ptr(), &mut len)
    };
    // SAFETY: process is an open handle owned here
    unsafe { CloseHandle(process) };
    if ok == 0 {
        return None;
    }

    let path = String::from_utf16_lossy(&buf[..len as usize]);
    path.rsplit('\\').next().map(str::to_string)
}

fn foreground_app() -> Option<AppTarget> {
    // SAFETY: no preconditions
    let hwnd = unsafe { GetForegroundWindow() };
    if hwnd.is_null() {
        return None;
    }
    let name = process_name(hwnd).unwrap_or_else(|| "unknown".to_string());
    Some(AppTarget::new((hwnd as isize).to_string(), name))
}

fn bring_to_front(id: &str) -> Result<(), PasteError> {
    let raw: isize = id
        .parse()
        .map_err(|_| PasteError::Failed(format!("invalid window handle: {}", id)))?;
    let hwnd = raw as HWND;

    // SAFETY: IsWindow accepts any value and validates it
    if unsafe { IsWindow(hwnd) } == 0 {
        return Err(PasteError::Failed("target window no longer exists".to_string()));
    }
    // SAFETY: hwnd was validated above
    if unsafe { SetForegroundWindow(hwnd) } == 0 {
        return Err(PasteError::Failed(
            "SetForegroundWindow was refused".to_string(),
        ));
    }
    Ok(())
}

#[async_trait]
impl PasteInjector for Win32PasteInjector {
    fn name(&self) -> &'static str {
        "win32"
    }

    async fn frontmost_app(&self) -> Result<Option<AppTarget>, PasteError> {
        tokio::task::spawn_blocking(foreground_app)
            .await
            .map_err(|e| PasteError::Failed(format!("Task join error: {}", e)))
    }

    async fn activate(&self, target: &AppTarget) -> Result<(), PasteError> {
        let id = target.id.clone();
        tokio::task::spawn_blocking(move || bring_to_front(&id))
            .await
            .map_err(|e| PasteError::Failed(format!("Task join error: {}", e)))?
    }

    async fn send_paste(&self) -> Result<(), PasteError> {
        tokio::task::spawn_blocking(press_paste_chord)
            .await
            .map_err(|e| PasteError::Failed(format!("Task join error: {}", e)))?
    }
}
