//! Daemon app runner

use std::process::ExitCode;
use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::application::ports::{
    Notification, Notifier, PasteInjector, PersistenceStore, PickerView, SystemClipboard,
};
use crate::application::{
    run_monitor, ClipboardService, ServiceConfig, Subscription,
};
use crate::domain::config::AppConfig;
use crate::infrastructure::{
    create_clipboard, create_notifier, create_paste_injector, HeadlessPicker, JsonFileStore,
    MemoryStore, PasteToolPreference,
};

use super::app::{EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE_ERROR};
use super::args::DaemonOptions;
use super::ipc::{create_ipc_server, IpcServer, ServiceHandler};
use super::pid_file::{PidFile, PidFileError};
use super::presenter::Presenter;
use super::signals::{wait_for_shutdown, ShutdownReason, ShutdownSignal};

/// Run daemon mode
pub async fn run_daemon(options: DaemonOptions, config: AppConfig) -> ExitCode {
    let presenter = Presenter::new();

    let preference = match config.paste_tool_or_default().parse::<PasteToolPreference>() {
        Ok(p) => p,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    };

    // Acquire PID file
    let mut pid_file = PidFile::new();
    if let Err(e) = pid_file.acquire() {
        match e {
            PidFileError::AlreadyRunning(pid) => {
                presenter.error(&format!("Another daemon is already running (PID: {})", pid));
            }
            _ => {
                presenter.error(&e.to_string());
            }
        }
        return ExitCode::from(EXIT_ERROR);
    }

    // Create adapters
    let (injector, tool) =
        match create_paste_injector(preference, config.paste_timeout_or_default()).await {
            Ok(created) => created,
            Err(e) => {
                presenter.error(&format!("Failed to set up paste tool: {}", e));
                return ExitCode::from(EXIT_ERROR);
            }
        };
    let store: Box<dyn PersistenceStore> = if options.ephemeral {
        Box::new(MemoryStore::new())
    } else {
        Box::new(JsonFileStore::new())
    };

    let service = Arc::new(
        ClipboardService::load(
            create_clipboard(),
            injector,
            store,
            HeadlessPicker::new(),
            ServiceConfig::from_app_config(&config),
        )
        .await,
    );

    // Setup IPC server
    let mut server = create_ipc_server();
    if let Err(e) = server.bind() {
        presenter.error(&format!("Failed to bind {}: {}", server.path(), e));
        return ExitCode::from(EXIT_ERROR);
    }
    let server: Arc<dyn IpcServer> = Arc::from(server);
    let ipc_task = {
        let server = Arc::clone(&server);
        let handler = Arc::new(ServiceHandler::new(Arc::clone(&service)));
        tokio::spawn(async move {
            if let Err(e) = server.run(handler).await {
                warn!(error = %e, "IPC server stopped");
            }
        })
    };

    let _notifications = config
        .notify_or_default()
        .then(|| spawn_feedback_notifier(&service, create_notifier()));

    // Start monitoring
    let shutdown = ShutdownSignal::new();
    let monitor_task = {
        let service = Arc::clone(&service);
        let interval = config.poll_interval_or_default();
        let stop = shutdown.subscribe();
        tokio::spawn(async move { run_monitor(&*service, interval, stop).await })
    };

    presenter.success("Started, watching the clipboard");
    presenter.info(&format!(
        "PID: {} | IPC: {} | paste: {} | history: {}",
        std::process::id(),
        server.path(),
        tool,
        if options.ephemeral { "memory" } else { "disk" }
    ));

    let result = match wait_for_shutdown().await {
        Ok(reason) => {
            shutdown.trigger(reason);
            true
        }
        Err(e) => {
            presenter.error(&format!("Failed to setup signal handler: {}", e));
            shutdown.trigger(ShutdownReason::Terminate);
            false
        }
    };

    if monitor_task.await.is_err() {
        warn!("monitor task panicked");
    }
    ipc_task.abort();
    server.cleanup();
    let _ = pid_file.release();
    presenter.info("Daemon stopped");

    if result {
        ExitCode::from(EXIT_SUCCESS)
    } else {
        ExitCode::from(EXIT_ERROR)
    }
}

/// Raise a desktop notification for every paste attempt that did not paste
fn spawn_feedback_notifier<C, P, S, V>(
    service: &ClipboardService<C, P, S, V>,
    notifier: Box<dyn Notifier>,
) -> Subscription
where
    C: SystemClipboard,
    P: PasteInjector + 'static,
    S: PersistenceStore,
    V: PickerView,
{
    let (tx, mut rx) = mpsc::unbounded_channel::<Notification>();

    tokio::spawn(async move {
        while let Some(notification) = rx.recv().await {
            if let Err(e) = notifier.notify(&notification).await {
                debug!(error = %e, "paste feedback notification failed");
            }
        }
    });

    service.subscribe_paste_feedback(move |feedback| {
        if let Some(notification) = Notification::for_feedback(feedback) {
            let _ = tx.send(notification);
        }
    })
}
