use xi_rope::{Rope, delta::Builder};

use crate::parsing::rope::complete_prefix_len;

/// Append-only text buffer for a token stream.
///
/// Each append is applied as a single insert delta, so a scan always sees
/// whole tokens.
#[derive(Debug, Clone)]
pub struct StreamBuffer {
    rope: Rope,
    /// Bumped on every non-empty append.
    version: u64,
}

impl StreamBuffer {
    pub fn new() -> Self {
        Self {
            rope: Rope::from(""),
            version: 0,
        }
    }

    pub fn append(&mut self, token: &str) {
        if token.is_empty() {
            return;
        }
        let len = self.rope.len();
        let mut builder = Builder::new(len);
        builder.replace(len..len, Rope::from(token));
        self.rope = builder.build().apply(&self.rope);
        self.version += 1;
    }

    pub fn rope(&self) -> &Rope {
        &self.rope
    }

    pub fn len(&self) -> usize {
        self.rope.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rope.len() == 0
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// Length of the prefix made of complete (newline-terminated) lines.
    pub fn complete_len(&self) -> usize {
        complete_prefix_len(&self.rope)
    }

    pub fn clear(&mut self) {
        self.rope = Rope::from("");
    }

    pub fn text(&self) -> String {
        self.rope.to_string()
    }
}

impl Default for StreamBuffer {
    fn default() -> Self {
        Self::new()
    }
}
