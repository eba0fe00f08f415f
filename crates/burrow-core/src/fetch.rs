//! Transport
//!
//! The session only sees the [`Fetcher`] trait: send a payload to host:port,
//! get the raw response back. [`TcpFetcher`] is the plain TCP implementation.

use std::future::Future;
use std::io;

use thiserror::Error;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("could not reach {host}:{port}: {reason}")]
    Connection {
        host: String,
        port: u16,
        reason: String,
    },

    #[error("timed out")]
    Timeout,
}

impl FetchError {
    fn from_io(host: &str, port: u16, error: io::Error) -> Self {
        if error.kind() == io::ErrorKind::TimedOut {
            return FetchError::Timeout;
        }
        FetchError::Connection {
            host: host.to_string(),
            port,
            reason: error.to_string(),
        }
    }
}

pub trait Fetcher: Send + Sync {
    /// Send `payload` to `host:port` and return everything the server wrote back
    fn fetch(
        &self,
        host: &str,
        port: u16,
        payload: &str,
    ) -> impl Future<Output = std::result::Result<Vec<u8>, FetchError>> + Send;
}

pub struct TcpFetcher {
    /// Bytes read past this limit are dropped
    max_response_bytes: u64,
}

impl TcpFetcher {
    pub fn new(max_response_bytes: u64) -> Self {
        Self { max_response_bytes }
    }
}

impl Fetcher for TcpFetcher {
    async fn fetch(
        &self,
        host: &str,
        port: u16,
        payload: &str,
    ) -> std::result::Result<Vec<u8>, FetchError> {
        let mut stream = TcpStream::connect((host, port))
            .await
            .map_err(|e| FetchError::from_io(host, port, e))?;

        stream
            .write_all(payload.as_bytes())
            .await
            .map_err(|e| FetchError::from_io(host, port, e))?;

        let mut response = Vec::new();
        stream
            .take(self.max_response_bytes)
            .read_to_end(&mut response)
            .await
            .map_err(|e| FetchError::from_io(host, port, e))?;

        tracing::debug!(host = %host, port, bytes = response.len(), "Response received");

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::net::TcpListener;

    #[tokio::test]
    async fn test_tcp_round_trip() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();

        let server = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = vec![0u8; 7];
            socket.read_exact(&mut request).await.unwrap();
            socket
                .write_all(b"iHello\t\t\t0\r\n.\r\n")
                .await
                .unwrap();
            request
        });

        let fetcher = TcpFetcher::new(1024);
        let response = fetcher.fetch("127.0.0.1", port, "/docs\r\n").await.unwrap();
        assert_eq!(response, b"iHello\t\t\t0\r\n.\r\n");

        let request = server.await.unwrap();
        assert_eq!(request, b"/docs\r\n");
    }

    #[tokio::test]
    async fn test_response_is_capped() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = [0u8; 2];
            socket.read_exact(&mut request).await.unwrap();
            let _ = socket.write_all(&[b'x'; 64]).await;
        });

        let fetcher = TcpFetcher::new(16);
        let response = fetcher.fetch("127.0.0.1", port, "\r\n").await.unwrap();
        assert_eq!(response.len(), 16);
    }

    #[tokio::test]
    async fn test_connection_refused() {
        // Bind then drop to get a port nobody listens on
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let fetcher = TcpFetcher::new(1024);
        let error = fetcher.fetch("127.0.0.1", port, "\r\n").await.unwrap_err();
        assert!(matches!(error, FetchError::Connection { port: p, .. } if p == port));
    }
}
