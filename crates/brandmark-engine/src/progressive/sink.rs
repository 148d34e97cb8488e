use crate::model::Block;

pub type SinkError = Box<dyn std::error::Error + Send + Sync>;

/// One redraw of the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderFrame {
    pub blocks: Vec<Block>,
    /// Leading blocks that later frames will repeat unchanged.
    pub settled: usize,
    /// Leading blocks identical to the previous frame. A sink can keep what
    /// it drew for those and redraw only the rest.
    pub unchanged: usize,
    /// Set only on the single frame produced from the complete buffer.
    pub is_final: bool,
    /// Buffer version the frame was scanned from.
    pub version: u64,
}

impl RenderFrame {
    /// Blocks that differ from the previous frame.
    pub fn changed(&self) -> &[Block] {
        &self.blocks[self.unchanged..]
    }
}

/// Receives frames from a [`RenderSession`](super::RenderSession).
pub trait RenderSink {
    fn render(&mut self, frame: &RenderFrame) -> Result<(), SinkError>;
}

/// Collects every frame; used by tests and batch tools.
impl RenderSink for Vec<RenderFrame> {
    fn render(&mut self, frame: &RenderFrame) -> Result<(), SinkError> {
        self.push(frame.clone());
        Ok(())
    }
}
