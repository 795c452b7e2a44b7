//! IPC (Inter-Process Communication) module for daemon control
//!
//! Provides platform-specific implementations:
//! - Unix (Linux/macOS): Unix Domain Sockets
//! - Windows: Named Pipes
//!
//! Both transports carry the same line-delimited JSON protocol.

mod handler;
#[cfg(windows)]
mod named_pipe;
mod protocol;
#[cfg(unix)]
mod unix_socket;

pub use handler::ServiceHandler;
#[cfg(windows)]
pub use named_pipe::{NamedPipeClient, NamedPipeServer, PipePath};
pub use protocol::{encode_line, Request, Response};
#[cfg(unix)]
pub use unix_socket::{SocketPath, UnixSocketClient, UnixSocketServer};

use std::io;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;
use tracing::debug;

/// Responses buffered per connection before the handler waits on the writer
const RESPONSE_BUFFER: usize = 16;

/// Answers protocol requests inside the daemon
#[async_trait]
pub trait RequestHandler: Send + Sync {
    /// Handle one request, sending zero or more responses.
    ///
    /// The connection stays open until the handler returns; streaming
    /// requests should stop once `responses` is closed.
    async fn handle(&self, request: Request, responses: mpsc::Sender<Response>);
}

/// Trait for IPC servers that listen for daemon commands
#[async_trait]
pub trait IpcServer: Send + Sync {
    /// Bind to the IPC endpoint
    fn bind(&mut self) -> io::Result<()>;

    /// Get the path/name of the IPC endpoint
    fn path(&self) -> String;

    /// Accept connections until the task is dropped, passing each request
    /// to `handler`
    async fn run(&self, handler: Arc<dyn RequestHandler>) -> io::Result<()>;

    /// Cleanup IPC resources
    fn cleanup(&self);
}

/// Trait for IPC clients that send commands to the daemon
#[async_trait]
pub trait IpcClient: Send + Sync {
    /// Check if daemon appears to be running (endpoint exists)
    fn is_daemon_running(&self) -> bool;

    /// Open a connection to the daemon
    async fn connect(&self) -> io::Result<IpcConnection>;

    /// Send one request and wait for the first response
    async fn request(&self, request: &Request) -> io::Result<Response> {
        let mut connection = self.connect().await?;
        connection.send(request).await?;
        connection.recv().await?.ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "daemon closed the connection without replying",
            )
        })
    }
}

type BoxedReader = Box<dyn AsyncRead + Send + Unpin>;
type BoxedWriter = Box<dyn AsyncWrite + Send + Unpin>;

/// Client side of one daemon connection
pub struct IpcConnection {
    reader: BufReader<BoxedReader>,
    writer: BoxedWriter,
}

impl IpcConnection {
    pub fn new<T>(stream: T) -> Self
    where
        T: AsyncRead + AsyncWrite + Send + 'static,
    {
        let (reader, writer) = tokio::io::split(stream);
        Self {
            reader: BufReader::new(Box::new(reader)),
            writer: Box::new(writer),
        }
    }

    pub async fn send(&mut self, request: &Request) -> io::Result<()> {
        let line = encode_line(request).map_err(io::Error::other)?;
        self.writer.write_all(line.as_bytes()).await?;
        self.writer.flush().await
    }

    /// Next response, or `None` once the daemon closes the connection
    pub async fn recv(&mut self) -> io::Result<Option<Response>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line).await? == 0 {
            return Ok(None);
        }
        serde_json::from_str(line.trim())
            .map(Some)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

/// Serve a single accepted connection: read one request, stream responses
pub(crate) async fn serve_connection<T>(
    stream: T,
    handler: Arc<dyn RequestHandler>,
) -> io::Result<()>
where
    T: AsyncRead + AsyncWrite + Send + 'static,
{
    let (reader, mut writer) = tokio::io::split(stream);
    let mut reader = BufReader::new(reader);
    let mut line = String::new();

    reader.read_line(&mut line).await?;

    let (tx, mut rx) = mpsc::channel(RESPONSE_BUFFER);
    match serde_json::from_str::<Request>(line.trim()) {
        Ok(request) => {
            debug!(?request, "ipc request");
            tokio::spawn(async move { handler.handle(request, tx).await });
        }
        Err(e) => {
            let _ = tx.send(Response::error(format!("invalid request: {}", e))).await;
            drop(tx);
        }
    }

    // Keep reading so a client hanging up mid-stream is noticed; dropping
    // `rx` then closes the handler's sender and ends its stream
    let mut trailing = String::new();
    loop {
        tokio::select! {
            response = rx.recv() => {
                let Some(response) = response else { break };
                let line = encode_line(&response).map_err(io::Error::other)?;
                writer.write_all(line.as_bytes()).await?;
                writer.flush().await?;
            }
            read = reader.read_line(&mut trailing) => {
                match read {
                    Ok(0) | Err(_) => {
                        debug!("ipc client disconnected");
                        return Ok(());
                    }
                    Ok(_) => trailing.clear(),
                }
            }
        }
    }

    writer.shutdown().await
}

/// Create the appropriate IPC server for the current platform
#[cfg(unix)]
pub fn create_ipc_server() -> Box<dyn IpcServer> {
    Box::new(UnixSocketServer::new(SocketPath::new()))
}

#[cfg(windows)]
pub fn create_ipc_server() -> Box<dyn IpcServer> {
    Box::new(NamedPipeServer::new(PipePath::new()))
}

/// Create the appropriate IPC client for the current platform
#[cfg(unix)]
pub fn create_ipc_client() -> Box<dyn IpcClient> {
    Box::new(UnixSocketClient::new(SocketPath::new()))
}

#[cfg(windows)]
pub fn create_ipc_client() -> Box<dyn IpcClient> {
    Box::new(NamedPipeClient::new(PipePath::new()))
}
