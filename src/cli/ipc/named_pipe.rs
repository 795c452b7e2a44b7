//! Named Pipe transport for daemon control on Windows

use std::io;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::net::windows::named_pipe::{ClientOptions, ServerOptions};
use tracing::debug;

use super::{serve_connection, IpcClient, IpcConnection, IpcServer, RequestHandler};

/// Named pipe path
const PIPE_NAME: &str = r"\\.\pipe\clipstash";

/// Named pipe path resolver
#[derive(Debug, Clone)]
pub struct PipePath {
    path: String,
}

impl PipePath {
    /// Create the default pipe path
    pub fn new() -> Self {
        Self {
            path: PIPE_NAME.to_string(),
        }
    }

    /// Get the pipe path
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Check if named pipe exists
    pub fn exists(&self) -> bool {
        std::fs::metadata(&self.path).is_ok()
    }
}

impl Default for PipePath {
    fn default() -> Self {
        Self::new()
    }
}

/// Named Pipe server for daemon requests
pub struct NamedPipeServer {
    pipe_path: PipePath,
    bound: bool,
}

impl NamedPipeServer {
    /// Create a new pipe server
    pub fn new(pipe_path: PipePath) -> Self {
        Self {
            pipe_path,
            bound: false,
        }
    }
}

#[async_trait]
impl IpcServer for NamedPipeServer {
    fn bind(&mut self) -> io::Result<()> {
        // Named pipes on Windows are created when first listening
        self.bound = true;
        Ok(())
    }

    fn path(&self) -> String {
        self.pipe_path.path().to_string()
    }

    async fn run(&self, handler: Arc<dyn RequestHandler>) -> io::Result<()> {
        if !self.bound {
            return Err(io::Error::new(
                io::ErrorKind::NotConnected,
                "Pipe not bound",
            ));
        }

        let mut first = true;
        loop {
            let server = ServerOptions::new()
                .first_pipe_instance(first)
                .create(&self.pipe_path.path)?;
            first = false;

            server.connect().await?;

            let handler = Arc::clone(&handler);
            tokio::spawn(async move {
                if let Err(e) = serve_connection(server, handler).await {
                    debug!(error = %e, "pipe connection ended with error");
                }
            });
        }
    }

    fn cleanup(&self) {
        // Named pipes are removed when the last server handle closes
    }
}

/// Named Pipe client for sending requests to the daemon
pub struct NamedPipeClient {
    pipe_path: PipePath,
}

impl NamedPipeClient {
    /// Create a new pipe client
    pub fn new(pipe_path: PipePath) -> Self {
        Self { pipe_path }
    }
}

#[async_trait]
impl IpcClient for NamedPipeClient {
    fn is_daemon_running(&self) -> bool {
        self.pipe_path.exists()
    }

    async fn connect(&self) -> io::Result<IpcConnection> {
        let client = ClientOptions::new().open(&self.pipe_path.path)?;
        Ok(IpcConnection::new(client))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pipe_path_is_named_after_app() {
        let path = PipePath::new();
        assert_eq!(path.path(), r"\\.\pipe\clipstash");
    }
}
