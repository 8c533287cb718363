//! Frame identifier type.

use std::fmt;

/// Identifies a frame (slot) in the frame pool.
///
/// Using `usize` so it indexes the pool's slot vector directly:
/// `slots[frame_id.0]`. Frame ids also fix the order in which step mode
/// prints the resident pages.
///
/// # Example
/// ```
/// use vmsim::FrameId;
///
/// let frame_id = FrameId::new(5);
/// assert_eq!(frame_id.0, 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameId(pub usize);

impl FrameId {
    /// Create a new FrameId.
    #[inline]
    pub fn new(id: usize) -> Self {
        FrameId(id)
    }
}

impl fmt::Display for FrameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Frame({})", self.0)
    }
}
