use std::collections::BinaryHeap;
use std::ops::{Deref, DerefMut};

// ---------------------------------------------------------------------------
// Per-cell search record
// ---------------------------------------------------------------------------

/// Heading of the start state, which was entered from nowhere.
pub(crate) const START: u8 = 8;

/// Eight headings plus [`START`].
const HEADINGS: usize = 9;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Status {
    Unvisited,
    Open,
    Closed,
}

/// Search bookkeeping for one grid cell, split by the heading the cell was
/// entered with. Turn penalties depend on that heading, so each one is a
/// separate search state. Only meaningful while `generation` matches the
/// owning [`Scratch`].
#[derive(Clone, Debug)]
pub(crate) struct SearchCell {
    g: [i32; HEADINGS],
    f: [i32; HEADINGS],
    /// Heading the parent cell was itself entered with.
    parent: [u8; HEADINGS],
    open: u16,
    closed: u16,
    generation: u32,
}

impl Default for SearchCell {
    fn default() -> Self {
        Self {
            g: [0; HEADINGS],
            f: [0; HEADINGS],
            parent: [START; HEADINGS],
            open: 0,
            closed: 0,
            generation: 0,
        }
    }
}

/// Open-list entry, ordered by `f` for use in `BinaryHeap`.
///
/// There is no secondary key: among equal `f` the heap's internal layout
/// decides, so tie-breaking depends on insertion order.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) heading: u8,
    pub(crate) f: i32,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first.
        other.f.cmp(&self.f)
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// Scratch
// ---------------------------------------------------------------------------

/// Reusable search memory: a dense cell array plus the open list.
///
/// Cells are invalidated lazily by bumping `generation`, so starting a new
/// search costs nothing once the array is large enough.
#[derive(Default)]
pub(crate) struct Scratch {
    cells: Vec<SearchCell>,
    generation: u32,
    open: BinaryHeap<NodeRef>,
}

impl Scratch {
    /// Start a search over `len` cells. The open list is drained when the
    /// returned scope is dropped, whatever the outcome.
    pub(crate) fn begin(&mut self, len: usize) -> ScratchScope<'_> {
        if self.cells.len() < len {
            self.cells.resize(len, SearchCell::default());
        }
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            // Wrapped: stale cells could alias the new generation.
            for c in self.cells.iter_mut() {
                c.generation = 0;
            }
            self.generation = 1;
        }
        self.open.clear();
        ScratchScope { scratch: self }
    }

    /// Status of cell `idx` entered with `heading` in the current search.
    #[inline]
    pub(crate) fn status(&self, idx: usize, heading: u8) -> Status {
        let c = &self.cells[idx];
        let bit = 1u16 << heading;
        if c.generation != self.generation {
            Status::Unvisited
        } else if c.closed & bit != 0 {
            Status::Closed
        } else if c.open & bit != 0 {
            Status::Open
        } else {
            Status::Unvisited
        }
    }

    /// Best known cost of reaching `idx` with `heading`.
    #[inline]
    pub(crate) fn g(&self, idx: usize, heading: u8) -> i32 {
        self.cells[idx].g[heading as usize]
    }

    /// Heading of the state that `(idx, heading)` was reached from.
    #[inline]
    pub(crate) fn parent(&self, idx: usize, heading: u8) -> u8 {
        self.cells[idx].parent[heading as usize]
    }

    /// Take ownership of `idx` for the current generation.
    fn touch(&mut self, idx: usize) -> &mut SearchCell {
        let generation = self.generation;
        let c = &mut self.cells[idx];
        if c.generation != generation {
            c.generation = generation;
            c.open = 0;
            c.closed = 0;
        }
        c
    }

    /// Record the start state: no heading, cost zero.
    pub(crate) fn seed(&mut self, idx: usize, h: i32) {
        let c = self.touch(idx);
        let s = START as usize;
        c.g[s] = 0;
        c.f[s] = h;
        c.parent[s] = START;
        c.open |= 1 << START;
        self.open.push(NodeRef {
            idx,
            heading: START,
            f: h,
        });
    }

    /// Offer cost `g` for entering `idx` with `heading` from a state entered
    /// with `parent`. Closed states and non-improving costs are ignored.
    pub(crate) fn relax(&mut self, idx: usize, heading: u8, parent: u8, g: i32, h: i32) {
        let c = self.touch(idx);
        let bit = 1u16 << heading;
        let k = heading as usize;
        if c.closed & bit != 0 || (c.open & bit != 0 && g >= c.g[k]) {
            return;
        }
        let f = g.saturating_add(h);
        c.g[k] = g;
        c.f[k] = f;
        c.parent[k] = parent;
        c.open |= bit;
        self.open.push(NodeRef { idx, heading, f });
    }

    /// Pop the open state with the smallest `f`, skipping entries superseded
    /// by a cheaper push or already closed.
    pub(crate) fn pop(&mut self) -> Option<(usize, u8)> {
        while let Some(n) = self.open.pop() {
            if self.status(n.idx, n.heading) == Status::Open
                && self.cells[n.idx].f[n.heading as usize] == n.f
            {
                return Some((n.idx, n.heading));
            }
        }
        None
    }

    #[inline]
    pub(crate) fn close(&mut self, idx: usize, heading: u8) {
        let c = &mut self.cells[idx];
        let bit = 1u16 << heading;
        c.open &= !bit;
        c.closed |= bit;
    }

    #[cfg(test)]
    pub(crate) fn open_len(&self) -> usize {
        self.open.len()
    }
}

/// Borrow of [`Scratch`] for the duration of one search.
pub(crate) struct ScratchScope<'a> {
    scratch: &'a mut Scratch,
}

impl Deref for ScratchScope<'_> {
    type Target = Scratch;
    fn deref(&self) -> &Scratch {
        self.scratch
    }
}

impl DerefMut for ScratchScope<'_> {
    fn deref_mut(&mut self) -> &mut Scratch {
        self.scratch
    }
}

impl Drop for ScratchScope<'_> {
    fn drop(&mut self) {
        self.scratch.open.clear();
    }
}
