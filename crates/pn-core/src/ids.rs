use core::fmt;
use core::num::NonZeroU32;

/// Slot of a node in the graph arena.
///
/// Edges refer to their neighbor through this index instead of a handle,
/// so the adjacency structure owns no cycles.
/// - `u32` keeps adjacency entries small
/// - `NonZero` lets `Option<NodeIdx>` (predecessor maps) stay the same size
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeIdx(NonZeroU32);

impl NodeIdx {
    /// Create an index from a 0-based arena slot by storing slot+1.
    pub fn from_index(index: usize) -> Self {
        let stored = u32::try_from(index)
            .ok()
            .and_then(|i| i.checked_add(1))
            .and_then(NonZeroU32::new);
        match stored {
            Some(v) => Self(v),
            None => panic!("arena slot {index} does not fit a NodeIdx"),
        }
    }

    /// Recover the 0-based arena slot.
    pub fn index(self) -> usize {
        (self.0.get() - 1) as usize
    }
}

impl fmt::Debug for NodeIdx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeIdx({})", self.index())
    }
}

impl fmt::Display for NodeIdx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.index())
    }
}
