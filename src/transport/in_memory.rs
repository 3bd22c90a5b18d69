use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use tokio::task::yield_now;

use crate::transport::Transport;

/// Paired queue transport for exercising the server loop without sockets.
/// `recv_line` yields until a line arrives or the other end is dropped.
pub struct InMemoryTransport {
    recv_queue: Arc<Mutex<VecDeque<String>>>,
    send_queue: Arc<Mutex<VecDeque<String>>>,
}

impl InMemoryTransport {
    pub fn pair() -> (Self, Self) {
        let q1 = Arc::new(Mutex::new(VecDeque::new()));
        let q2 = Arc::new(Mutex::new(VecDeque::new()));
        (
            Self {
                recv_queue: q1.clone(),
                send_queue: q2.clone(),
            },
            Self {
                recv_queue: q2,
                send_queue: q1,
            },
        )
    }
}

#[async_trait::async_trait]
impl Transport for InMemoryTransport {
    async fn send_line(&mut self, line: &str) -> anyhow::Result<()> {
        let mut queue = self
            .send_queue
            .lock()
            .map_err(|_| anyhow::anyhow!("send queue poisoned"))?;
        queue.push_back(line.to_string());
        Ok(())
    }

    async fn recv_line(&mut self) -> anyhow::Result<Option<String>> {
        loop {
            if let Some(line) = {
                let mut queue = self
                    .recv_queue
                    .lock()
                    .map_err(|_| anyhow::anyhow!("recv queue poisoned"))?;
                queue.pop_front()
            } {
                return Ok(Some(line));
            }
            if Arc::strong_count(&self.recv_queue) == 1 {
                // peer end dropped with nothing queued
                return Ok(None);
            }
            yield_now().await;
        }
    }
}
