use std::time::{Duration, Instant};

use uuid::Uuid;

use crate::{
    model::Block,
    parsing::{ParsedDoc, parse_document, parse_document_prefix},
};

use super::{
    buffer::StreamBuffer,
    sink::{RenderFrame, RenderSink, SinkError},
};

pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(120);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleConfig {
    /// Minimum time between two preview renders.
    pub interval: Duration,
}

impl ScheduleConfig {
    pub fn from_millis(ms: u64) -> Self {
        Self {
            interval: Duration::from_millis(ms),
        }
    }
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            interval: DEFAULT_INTERVAL,
        }
    }
}

/// What the generation side reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamEvent {
    Token(String),
    /// The buffer is complete.
    Done,
    /// Generation failed; the buffer is discarded.
    Error(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Rendered,
    /// No new complete line since the last render.
    Idle,
    /// New text is waiting but the interval has not elapsed.
    Throttled,
    /// The session finished or was aborted.
    Stopped,
    /// Another render held the session; the tick was discarded.
    Dropped,
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Render session {0} is closed")]
    Closed(Uuid),
    #[error("Render sink failed: {0}")]
    Sink(SinkError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Streaming,
    Finished,
    Aborted,
}

/// Drives a [`RenderSink`] from a growing markdown buffer.
///
/// The session never parses incrementally: every render scans from byte zero,
/// so a preview frame is always exactly what a full scan of that prefix
/// would produce.
pub struct RenderSession<S: RenderSink> {
    id: Uuid,
    sink: S,
    config: ScheduleConfig,
    buffer: StreamBuffer,
    phase: Phase,
    last_render: Option<Instant>,
    /// Complete-prefix length covered by the last preview.
    rendered_len: usize,
    previous: Vec<Block>,
}

impl<S: RenderSink> RenderSession<S> {
    pub fn new(sink: S, config: ScheduleConfig) -> Self {
        Self {
            id: Uuid::new_v4(),
            sink,
            config,
            buffer: StreamBuffer::new(),
            phase: Phase::Streaming,
            last_render: None,
            rendered_len: 0,
            previous: Vec::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn is_open(&self) -> bool {
        self.phase == Phase::Streaming
    }

    pub fn is_aborted(&self) -> bool {
        self.phase == Phase::Aborted
    }

    pub fn buffer(&self) -> &StreamBuffer {
        &self.buffer
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Appends a token. Rendering waits for the next [`tick`](Self::tick).
    pub fn push(&mut self, token: &str) -> Result<(), SessionError> {
        if !self.is_open() {
            return Err(SessionError::Closed(self.id));
        }
        self.buffer.append(token);
        Ok(())
    }

    /// Renders a preview if the complete prefix grew and the interval elapsed.
    pub fn tick(&mut self, now: Instant) -> Result<TickOutcome, SessionError> {
        if !self.is_open() {
            return Ok(TickOutcome::Stopped);
        }

        let complete = self.buffer.complete_len();
        if complete <= self.rendered_len {
            return Ok(TickOutcome::Idle);
        }
        if let Some(last) = self.last_render
            && now.saturating_duration_since(last) < self.config.interval
        {
            return Ok(TickOutcome::Throttled);
        }

        let doc = parse_document_prefix(self.buffer.rope(), complete);
        self.rendered_len = complete;
        self.last_render = Some(now);
        log::debug!(
            "session {}: preview of {complete} bytes, {} blocks ({} settled)",
            self.id,
            doc.blocks.len(),
            doc.settled
        );
        self.render(doc, false)?;
        Ok(TickOutcome::Rendered)
    }

    /// Applies one stream event. Returns the final blocks on `Done`.
    pub fn handle(
        &mut self,
        event: StreamEvent,
        now: Instant,
    ) -> Result<Option<Vec<Block>>, SessionError> {
        match event {
            StreamEvent::Token(token) => {
                self.push(&token)?;
                self.tick(now)?;
                Ok(None)
            }
            StreamEvent::Done => self.finish().map(Some),
            StreamEvent::Error(reason) => {
                self.abort(&reason);
                Ok(None)
            }
        }
    }

    /// Scans the whole buffer once more, renders it as the final frame and
    /// returns the canonical block list.
    pub fn finish(&mut self) -> Result<Vec<Block>, SessionError> {
        if !self.is_open() {
            return Err(SessionError::Closed(self.id));
        }
        self.phase = Phase::Finished;

        let mut doc = parse_document(self.buffer.rope());
        doc.settled = doc.blocks.len();
        log::info!(
            "session {}: finished with {} blocks from {} bytes",
            self.id,
            doc.blocks.len(),
            self.buffer.len()
        );
        self.render(doc, true)?;
        Ok(self.previous.clone())
    }

    /// Stops the session and discards the buffer. No further frames are
    /// rendered. Aborting a closed session does nothing.
    pub fn abort(&mut self, reason: &str) {
        if !self.is_open() {
            return;
        }
        log::warn!(
            "session {}: aborted after {} bytes: {reason}",
            self.id,
            self.buffer.len()
        );
        self.phase = Phase::Aborted;
        self.buffer.clear();
        self.previous.clear();
    }

    fn render(&mut self, doc: ParsedDoc, is_final: bool) -> Result<(), SessionError> {
        let settled = doc.settled;
        let blocks = doc.into_blocks();
        let unchanged = self
            .previous
            .iter()
            .zip(&blocks)
            .take_while(|(a, b)| a == b)
            .count();

        let frame = RenderFrame {
            blocks,
            settled,
            unchanged,
            is_final,
            version: self.buffer.version(),
        };
        self.sink.render(&frame).map_err(SessionError::Sink)?;
        self.previous = frame.blocks;
        Ok(())
    }
}
