use crate::board::Move;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bound {
    Exact,
    /// Fail-high: the true score is at least `score`.
    Lower,
    /// Fail-low: the true score is at most `score`.
    Upper,
}

#[derive(Clone, Copy, Debug)]
pub struct Entry {
    pub key: u64,
    pub depth: u32,
    pub score: i32,
    pub best: Move,
    pub bound: Bound,
    /// Stamped by [`Tt::put`]; the value passed in is ignored.
    pub gen: u32,
}

const WAYS: usize = 4;
// Approximate footprint of one slot, bucket lock included
const SLOT_BYTES: usize = 48;
pub const DEFAULT_CAPACITY_ENTRIES: usize = 1 << 16;

/// Entries that fit in `mb` megabytes, never fewer than one bucket.
pub fn entries_for_mb(mb: usize) -> usize {
    (mb.saturating_mul(1 << 20) / SLOT_BYTES).max(WAYS)
}

#[derive(Default)]
struct Bucket([Option<Entry>; WAYS]);

impl Bucket {
    fn find(&self, key: u64) -> Option<Entry> {
        self.0.iter().flatten().find(|e| e.key == key).copied()
    }

    fn occupied(&self) -> usize {
        self.0.iter().filter(|s| s.is_some()).count()
    }

    fn store(&mut self, e: Entry) {
        if let Some(cur) = self.0.iter_mut().flatten().find(|cur| cur.key == e.key) {
            // Same position: a shallower result only wins over a stale one
            if e.depth >= cur.depth || cur.gen != e.gen {
                *cur = e;
            }
            return;
        }
        let slot = match self.0.iter().position(Option::is_none) {
            Some(free) => free,
            // Shallowest goes first, then the oldest among equal depths
            None => (0..WAYS)
                .min_by_key(|&i| self.0[i].map_or((0, 0), |cur| (cur.depth, cur.gen)))
                .unwrap_or(0),
        };
        self.0[slot] = Some(e);
    }
}

/// Fixed-capacity transposition table of `WAYS`-slot buckets, each behind its
/// own lock so lookups and stores only need `&self`.
pub struct Tt {
    buckets: Vec<Mutex<Bucket>>,
    gen: AtomicU32,
}

impl Default for Tt {
    fn default() -> Self { Self::with_capacity_entries(DEFAULT_CAPACITY_ENTRIES) }
}

impl Tt {
    pub fn new() -> Self { Self::default() }

    pub fn with_capacity_entries(cap: usize) -> Self {
        let mut tt = Self { buckets: Vec::new(), gen: AtomicU32::new(0) };
        tt.set_capacity_entries(cap);
        tt
    }

    /// Rebuilds the table with room for at least `cap` entries, rounded up to
    /// whole buckets. Existing entries are dropped.
    pub fn set_capacity_entries(&mut self, cap: usize) {
        let n = cap.max(1).div_ceil(WAYS);
        self.buckets = (0..n).map(|_| Mutex::new(Bucket::default())).collect();
    }

    pub fn set_capacity_mb(&mut self, mb: usize) {
        self.set_capacity_entries(entries_for_mb(mb));
    }

    pub fn capacity(&self) -> usize { self.buckets.len() * WAYS }

    fn bucket(&self, key: u64) -> MutexGuard<'_, Bucket> {
        let idx = (key.wrapping_mul(0x9E37_79B9_7F4A_7C15) >> 32) as usize % self.buckets.len();
        self.buckets[idx].lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn each_bucket(&self) -> impl Iterator<Item = MutexGuard<'_, Bucket>> {
        self.buckets.iter().map(|b| b.lock().unwrap_or_else(PoisonError::into_inner))
    }

    pub fn get(&self, key: u64) -> Option<Entry> {
        self.bucket(key).find(key)
    }

    pub fn put(&self, mut e: Entry) {
        e.gen = self.generation();
        self.bucket(e.key).store(e);
    }

    pub fn clear(&self) {
        for mut b in self.each_bucket() {
            *b = Bucket::default();
        }
    }

    pub fn len(&self) -> usize {
        self.each_bucket().map(|b| b.occupied()).sum()
    }

    pub fn is_empty(&self) -> bool { self.len() == 0 }

    pub fn generation(&self) -> u32 { self.gen.load(Ordering::Relaxed) }

    /// Marks every stored entry as belonging to an earlier search.
    pub fn bump_generation(&self) { self.gen.fetch_add(1, Ordering::Relaxed); }
}
