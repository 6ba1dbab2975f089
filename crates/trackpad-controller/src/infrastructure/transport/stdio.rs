//! Newline-delimited frames over any async byte stream.
//!
//! The bridge binary writes to stdout, so the frames can be piped into
//! whatever process carries them to the host (`socat`, `ssh`, a WebSocket
//! client, …).

use async_trait::async_trait;
use tokio::io::{AsyncWrite, AsyncWriteExt};

use super::{FrameWriter, TransportError};

/// Writes each frame followed by `\n` and flushes immediately, so a frame is
/// never held back waiting for the next one.
pub struct LineWriter<W> {
    inner: W,
}

impl<W> LineWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

/// A [`LineWriter`] on the process's standard output.
pub fn stdout_writer() -> LineWriter<tokio::io::Stdout> {
    LineWriter::new(tokio::io::stdout())
}

#[async_trait]
impl<W> FrameWriter for LineWriter<W>
where
    W: AsyncWrite + Unpin + Send,
{
    async fn write_frame(&mut self, frame: &str) -> Result<(), TransportError> {
        self.inner.write_all(frame.as_bytes()).await?;
        self.inner.write_all(b"\n").await?;
        self.inner.flush().await?;
        Ok(())
    }
}
