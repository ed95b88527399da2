//! Sharded string interner for identifiers, struct names and mangled names.
//!
//! Symbol lookups by the tree builders go through [`StringInterner::get`],
//! which never inserts: looking up a name nobody declared must not grow the
//! table.

use super::Name;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Per-shard storage for interned strings.
struct InternShard {
    /// Map from string content to slot.
    map: FxHashMap<&'static str, u32>,
    /// Storage for string contents.
    strings: Vec<&'static str>,
}

impl InternShard {
    fn new() -> Self {
        Self {
            map: FxHashMap::default(),
            strings: Vec::with_capacity(64),
        }
    }

    fn with_empty() -> Self {
        let mut shard = Self::new();
        // Slot 0 of shard 0 is Name::ANONYMOUS
        let empty: &'static str = "";
        shard.map.insert(empty, 0);
        shard.strings.push(empty);
        shard
    }
}

/// Sharded string interner.
///
/// Interning takes `&self`; each shard sits behind its own `RwLock` so a
/// symbol table holding the interner can be shared by reference.
pub struct StringInterner {
    shards: [RwLock<InternShard>; Name::SHARDS],
    total_count: AtomicUsize,
}

impl StringInterner {
    /// Create a new interner with the builtin variable names pre-interned.
    pub fn new() -> Self {
        let shards = std::array::from_fn(|i| {
            if i == 0 {
                RwLock::new(InternShard::with_empty())
            } else {
                RwLock::new(InternShard::new())
            }
        });

        let interner = Self {
            shards,
            total_count: AtomicUsize::new(1),
        };
        interner.pre_intern_builtins();
        interner
    }

    #[inline]
    fn shard_for(s: &str) -> usize {
        let mut hash = 0u32;
        for byte in s.bytes().take(8) {
            hash = hash.wrapping_mul(31).wrapping_add(u32::from(byte));
        }
        (hash as usize) % Name::SHARDS
    }

    /// Look up an already-interned string without inserting it.
    pub fn get(&self, s: &str) -> Option<Name> {
        let shard_idx = Self::shard_for(s);
        let guard = self.shards[shard_idx].read();
        guard
            .map
            .get(s)
            .map(|&slot| Name::from_parts(shard_index_u32(shard_idx), slot))
    }

    /// Intern a string, returning its Name.
    #[inline]
    pub fn intern(&self, s: &str) -> Name {
        self.get(s).unwrap_or_else(|| self.insert(s.to_owned()))
    }

    /// Intern an owned String without re-allocating it.
    ///
    /// Mangled names are built as owned strings and land here.
    pub fn intern_owned(&self, s: String) -> Name {
        self.get(&s).unwrap_or_else(|| self.insert(s))
    }

    /// # Panics
    /// Panics if the shard has no free slot left.
    fn insert(&self, s: String) -> Name {
        let shard_idx = Self::shard_for(&s);
        let mut guard = self.shards[shard_idx].write();

        // Double-check after acquiring write lock
        if let Some(&slot) = guard.map.get(s.as_str()) {
            return Name::from_parts(shard_index_u32(shard_idx), slot);
        }

        let count = guard.strings.len();
        let Some(slot) = u32::try_from(count)
            .ok()
            .filter(|&slot| slot <= Name::SLOT_MASK)
        else {
            panic!("interner shard {shard_idx} is full ({count} strings)");
        };

        let leaked: &'static str = Box::leak(s.into_boxed_str());
        guard.strings.push(leaked);
        guard.map.insert(leaked, slot);
        self.total_count.fetch_add(1, Ordering::Relaxed);

        Name::from_parts(shard_index_u32(shard_idx), slot)
    }

    /// Look up the string for a Name.
    pub fn lookup(&self, name: Name) -> &str {
        let guard = self.shards[name.shard()].read();
        guard.strings[name.slot()]
    }

    fn pre_intern_builtins(&self) {
        const BUILTINS: &[&str] = &[
            "gl_Position",
            "gl_PointSize",
            "gl_FragCoord",
            "gl_FrontFacing",
            "gl_PointCoord",
            "gl_FragColor",
            "gl_FragData",
            "gl_DepthRange",
        ];

        for name in BUILTINS {
            self.intern(name);
        }
    }

    /// Get the number of interned strings (O(1)).
    pub fn len(&self) -> usize {
        self.total_count.load(Ordering::Relaxed)
    }

    /// Check if the interner only holds the empty string.
    pub fn is_empty(&self) -> bool {
        self.len() <= 1
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for StringInterner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StringInterner")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}

#[inline]
#[expect(
    clippy::cast_possible_truncation,
    reason = "shard_idx is bounded by NUM_SHARDS (16)"
)]
fn shard_index_u32(shard_idx: usize) -> u32 {
    shard_idx as u32
}
