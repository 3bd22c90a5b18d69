//! Line-oriented transports between the server and its two clients.

#[async_trait::async_trait]
pub trait Transport: Send {
    /// Send one reply line; the transport appends framing.
    async fn send_line(&mut self, line: &str) -> anyhow::Result<()>;
    /// Receive the next line, or `None` when the peer closed cleanly.
    async fn recv_line(&mut self) -> anyhow::Result<Option<String>>;
}

pub mod in_memory;
pub mod tcp;
