use super::DrawCmd;

/// Recorded draw stream for a frame.
///
/// Commands are painted in insertion order; there is no sorting or batching.
/// `push()` is O(1) and `clear()` keeps the allocation for the next frame.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DrawList {
    items: Vec<DrawCmd>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded commands. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns commands in paint order.
    #[inline]
    pub fn items(&self) -> &[DrawCmd] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        self.items.push(cmd);
    }

    /// Moves the recorded commands out, leaving an empty list behind.
    #[inline]
    pub fn take(&mut self) -> DrawList {
        std::mem::take(self)
    }
}
