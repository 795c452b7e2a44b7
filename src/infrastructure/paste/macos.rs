//! AppleScript paste adapter for macOS

use std::time::Duration;

use async_trait::async_trait;

use crate::application::ports::{AppTarget, PasteError, PasteInjector};

use super::command::run_tool;

const FRONTMOST_SCRIPT: &str = r#"tell application "System Events"
    set frontApp to first application process whose frontmost is true
    return (bundle identifier of frontApp) & "|" & (name of frontApp)
end tell"#;

const PASTE_SCRIPT: &str =
    r#"tell application "System Events" to keystroke "v" using command down"#;

const ACCESSIBILITY_HINT: &str = "allow this terminal under System Settings > Privacy & Security > Accessibility";

/// macOS focus tracking and paste via `osascript` and System Events
pub struct AppleScriptPasteInjector {
    timeout: Duration,
}

impl AppleScriptPasteInjector {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    async fn osascript(&self, script: &str) -> Result<String, PasteError> {
        run_tool("osascript", &["-e", script], self.timeout)
            .await
            .map_err(map_permission_error)
    }
}

/// System Events reports missing Accessibility rights as error 1002 / -1719 / -25211
fn map_permission_error(err: PasteError) -> PasteError {
    match err {
        PasteError::Failed(message)
            if ["1002", "-1719", "-25211", "not allowed"]
                .iter()
                .any(|needle| message.contains(needle)) =>
        {
            PasteError::PermissionDenied(ACCESSIBILITY_HINT.to_string())
        }
        other => other,
    }
}

fn parse_frontmost(output: &str) -> Option<AppTarget> {
    let (bundle, name) = output.split_once('|')?;
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    let bundle = bundle.trim();
    let id = if bundle.is_empty() || bundle == "missing value" {
        name
    } else {
        bundle
    };
    Some(AppTarget::new(id, name))
}

/// Escape a value for use inside an AppleScript string literal
fn quote(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

#[async_trait]
impl PasteInjector for AppleScriptPasteInjector {
    fn name(&self) -> &'static str {
        "applescript"
    }

    async fn frontmost_app(&self) -> Result<Option<AppTarget>, PasteError> {
        let output = self.osascript(FRONTMOST_SCRIPT).await?;
        Ok(parse_frontmost(&output))
    }

    async fn activate(&self, target: &AppTarget) -> Result<(), PasteError> {
        let script = if target.id.contains('.') {
            format!(r#"tell application id "{}" to activate"#, quote(&target.id))
        } else {
            format!(r#"tell application "{}" to activate"#, quote(&target.name))
        };
        self.osascript(&script).await.map(|_| ())
    }

    async fn send_paste(&self) -> Result<(), PasteError> {
        self.osascript(PASTE_SCRIPT).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bundle_and_name() {
        let app = parse_frontmost("com.apple.finder|Finder").unwrap();
        assert_eq!(app.id, "com.apple.finder");
        assert!(app.is_desktop_shell());
    }

    #[test]
    fn missing_bundle_uses_name() {
        let app = parse_frontmost("missing value|MyTool").unwrap();
        assert_eq!(app.id, "MyTool");
        assert!(parse_frontmost("").is_none());
    }

    #[test]
    fn recognizes_accessibility_denial() {
        let err = map_permission_error(PasteError::Failed(
            "osascript exited with status: 1 System Events got an error: osascript is not allowed to send keystrokes. (1002)".to_string(),
        ));
        assert!(matches!(err, PasteError::PermissionDenied(_)));
    }

    #[test]
    fn quotes_script_strings() {
        assert_eq!(quote(r#"a"b\c"#), r#"a\"b\\c"#);
    }
}
