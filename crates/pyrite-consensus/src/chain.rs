//! Chain-index collaborator interface and a reference arena implementation.
//!
//! The difficulty policy needs a read-only view of block ancestry: height,
//! timestamp, compact bits, and ancestor lookup. [`ChainNode`] is that seam;
//! node implementations are cheap handles (the policy clones them while
//! walking), and must be safe for concurrent reads.

/// Block height (genesis is 0).
pub type Height = u64;

/// Block timestamp (seconds since Epoch).
pub type BlockTime = u64;

/// Compact difficulty bits of a block.
pub type Bits = u32;

/// Read-only view of one block's position in a chain.
pub trait ChainNode: Clone {
    /// Height of this block.
    fn height(&self) -> Height;
    /// Block timestamp in Unix seconds.
    fn time(&self) -> BlockTime;
    /// Compact difficulty target carried in the block header.
    fn bits(&self) -> Bits;
    /// Immediate predecessor, absent only at genesis.
    fn parent(&self) -> Option<Self>;
    /// Ancestor at `height`, or `None` when out of range.
    fn ancestor(&self, height: Height) -> Option<Self>;
}

/// One block record in a [`ChainIndex`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChainEntry {
    /// Block timestamp in Unix seconds.
    pub time: BlockTime,
    /// Compact difficulty target of the block.
    pub bits: Bits,
}

/// Dense, append-only chain index: record `i` is the block at height `i`.
///
/// Integer indices stand in for parent pointers, so ancestor lookup is O(1)
/// and the policy's bounded walk-back never chases pointers.
#[derive(Clone, Debug, Default)]
pub struct ChainIndex {
    entries: Vec<ChainEntry>,
}

impl ChainIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a block record at the next height and returns that height.
    pub fn push(&mut self, time: BlockTime, bits: Bits) -> Height {
        self.entries.push(ChainEntry { time, bits });
        self.entries.len() as Height - 1
    }

    /// Number of records in the index.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the index holds no records.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// View of the record at `height`, if present.
    pub fn node_at(&self, height: Height) -> Option<IndexedNode<'_>> {
        if (height as usize) < self.entries.len() {
            Some(IndexedNode {
                index: self,
                height,
            })
        } else {
            None
        }
    }

    /// View of the highest record, if any.
    pub fn tip(&self) -> Option<IndexedNode<'_>> {
        match self.entries.len() {
            0 => None,
            n => self.node_at(n as Height - 1),
        }
    }
}

/// Borrowed handle to one [`ChainIndex`] record, implementing [`ChainNode`].
#[derive(Clone, Copy, Debug)]
pub struct IndexedNode<'a> {
    index: &'a ChainIndex,
    height: Height,
}

impl IndexedNode<'_> {
    fn entry(&self) -> &ChainEntry {
        &self.index.entries[self.height as usize]
    }
}

impl ChainNode for IndexedNode<'_> {
    fn height(&self) -> Height {
        self.height
    }

    fn time(&self) -> BlockTime {
        self.entry().time
    }

    fn bits(&self) -> Bits {
        self.entry().bits
    }

    fn parent(&self) -> Option<Self> {
        match self.height {
            0 => None,
            h => self.index.node_at(h - 1),
        }
    }

    fn ancestor(&self, height: Height) -> Option<Self> {
        if height > self.height {
            return None;
        }
        self.index.node_at(height)
    }
}
