// Line-oriented transport to the game server
use async_trait::async_trait;
use crate::error::BotResult;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Stdin, Stdout};

#[async_trait]
pub trait Transport: Send {
    /// Next line from the server without its terminator, `None` once the
    /// server has closed the stream.
    async fn read_line(&mut self) -> BotResult<Option<String>>;

    /// Send one line and flush it
    async fn write_line(&mut self, line: &str) -> BotResult<()>;
}

/// The server talks to bots over stdin/stdout
pub struct StdioTransport {
    reader: BufReader<Stdin>,
    writer: Stdout,
}

impl StdioTransport {
    pub fn new() -> Self {
        Self {
            reader: BufReader::new(tokio::io::stdin()),
            writer: tokio::io::stdout(),
        }
    }
}

impl Default for StdioTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for StdioTransport {
    async fn read_line(&mut self) -> BotResult<Option<String>> {
        let mut line = String::new();
        let read = self.reader.read_line(&mut line).await?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    async fn write_line(&mut self, line: &str) -> BotResult<()> {
        self.writer.write_all(line.as_bytes()).await?;
        self.writer.write_all(b"\n").await?;
        self.writer.flush().await?;
        Ok(())
    }
}

/// Scripted transport: serves queued server lines and records what was sent
#[derive(Clone, Default)]
pub struct MemoryTransport {
    incoming: Arc<Mutex<VecDeque<String>>>,
    sent: Arc<Mutex<Vec<String>>>,
}

impl MemoryTransport {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            incoming: Arc::new(Mutex::new(lines.into_iter().map(Into::into).collect())),
            sent: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Lines written so far. Clones share the same record.
    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().map(|sent| sent.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl Transport for MemoryTransport {
    async fn read_line(&mut self) -> BotResult<Option<String>> {
        Ok(self.incoming.lock().ok().and_then(|mut incoming| incoming.pop_front()))
    }

    async fn write_line(&mut self, line: &str) -> BotResult<()> {
        if let Ok(mut sent) = self.sent.lock() {
            sent.push(line.to_string());
        }
        Ok(())
    }
}
