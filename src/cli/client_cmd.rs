//! Client commands - send requests to the running daemon via IPC

use super::args::Commands;
use super::ipc::{create_ipc_client, IpcClient, Request, Response};
use super::presenter::Presenter;

const NOT_RUNNING: &str = "Daemon is not running. Start it with: clipstash --daemon";

/// Map a client subcommand onto its protocol request.
///
/// Returns `None` for subcommands that are handled locally.
pub fn request_for(command: &Commands) -> Option<Request> {
    let request = match command {
        Commands::Config { .. } => return None,
        Commands::List { .. } => Request::GetHistory,
        Commands::Copy { id } => Request::Copy { id: *id },
        Commands::Delete { id } => Request::Delete { id: *id },
        Commands::Clear => Request::Clear,
        Commands::Show => Request::ShowPicker,
        Commands::Hide => Request::HidePicker,
        Commands::AutoPaste { state: None } => Request::GetAutoPaste,
        Commands::AutoPaste { state: Some(state) } => Request::SetAutoPaste {
            enabled: (*state).into(),
        },
        Commands::Pause => Request::Pause,
        Commands::Resume => Request::Resume,
        Commands::Status => Request::Status,
        Commands::Watch => Request::Watch,
    };
    Some(request)
}

/// Handle a client subcommand
pub async fn handle_client_command(command: Commands, presenter: &Presenter) -> Result<(), String> {
    let Some(request) = request_for(&command) else {
        return Err("not a daemon command".to_string());
    };

    let client = create_ipc_client();
    if !client.is_daemon_running() {
        return Err(NOT_RUNNING.to_string());
    }

    if request == Request::Watch {
        return watch(client.as_ref(), presenter).await;
    }

    let response = client
        .request(&request)
        .await
        .map_err(|e| format!("Failed to communicate with daemon: {}", e))?;

    present(&command, response, presenter)
}

fn present(command: &Commands, response: Response, presenter: &Presenter) -> Result<(), String> {
    match (command, response) {
        (_, Response::Error { message }) => return Err(message),
        (Commands::List { json: true }, Response::History { items }) => {
            let json = serde_json::to_string_pretty(&items).map_err(|e| e.to_string())?;
            presenter.output(&json);
        }
        (Commands::List { .. }, Response::History { items }) => presenter.history(&items),
        (Commands::Delete { id }, Response::History { items }) => {
            presenter.success(&format!("Deleted {} ({} items left)", id, items.len()))
        }
        (Commands::Clear, Response::History { .. }) => presenter.success("History cleared"),
        (Commands::Copy { id }, Response::Ok) => {
            presenter.success(&format!("Restored {} to the clipboard", id))
        }
        (Commands::AutoPaste { .. }, Response::AutoPaste { enabled }) => {
            presenter.key_value("auto_paste", if enabled { "on" } else { "off" })
        }
        (Commands::Status, Response::Status(status)) => presenter.status(&status),
        (Commands::Pause, Response::Ok) => presenter.success("Monitoring paused"),
        (Commands::Resume, Response::Ok) => presenter.success("Monitoring resumed"),
        (_, Response::Ok) => {}
        (_, other) => return Err(format!("Unexpected response from daemon: {:?}", other)),
    }
    Ok(())
}

async fn watch(client: &dyn IpcClient, presenter: &Presenter) -> Result<(), String> {
    let mut connection = client
        .connect()
        .await
        .map_err(|e| format!("Failed to communicate with daemon: {}", e))?;
    connection
        .send(&Request::Watch)
        .await
        .map_err(|e| format!("Failed to communicate with daemon: {}", e))?;

    presenter.info("Watching clipboard history (Ctrl+C to stop)");
    loop {
        let next = tokio::select! {
            next = connection.recv() => next.map_err(|e| format!("Lost connection to daemon: {}", e))?,
            _ = tokio::signal::ctrl_c() => return Ok(()),
        };

        match next {
            None => return Err("Daemon closed the connection".to_string()),
            Some(Response::History { items }) => match items.first() {
                Some(newest) => presenter.output(&presenter.format_item(newest)),
                None => presenter.info("History is empty"),
            },
            Some(Response::PasteFeedback(feedback)) => presenter.paste_feedback(&feedback),
            Some(Response::Error { message }) => return Err(message),
            Some(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::{ConfigAction, Toggle};

    #[test]
    fn commands_map_to_requests() {
        assert_eq!(
            request_for(&Commands::List { json: false }),
            Some(Request::GetHistory)
        );
        assert_eq!(
            request_for(&Commands::Copy { id: 3 }),
            Some(Request::Copy { id: 3 })
        );
        assert_eq!(request_for(&Commands::Show), Some(Request::ShowPicker));
        assert_eq!(
            request_for(&Commands::AutoPaste {
                state: Some(Toggle::On)
            }),
            Some(Request::SetAutoPaste { enabled: true })
        );
        assert_eq!(
            request_for(&Commands::AutoPaste { state: None }),
            Some(Request::GetAutoPaste)
        );
        assert_eq!(
            request_for(&Commands::Config {
                action: ConfigAction::Path
            }),
            None
        );
    }

    #[test]
    fn error_response_becomes_error() {
        let presenter = Presenter::new();
        let result = present(
            &Commands::Copy { id: 1 },
            Response::error("No history item with id 1"),
            &presenter,
        );
        assert_eq!(result, Err("No history item with id 1".to_string()));
    }

    #[test]
    fn mismatched_response_is_reported() {
        let presenter = Presenter::new();
        let result = present(
            &Commands::Status,
            Response::AutoPaste { enabled: true },
            &presenter,
        );
        assert!(result.unwrap_err().starts_with("Unexpected response"));
    }
}
