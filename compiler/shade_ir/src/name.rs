//! Interned identifiers.

use std::fmt;

/// Interned identifier: variable, field, struct and function names, and
/// mangled overload keys.
///
/// The top four bits pick one of the interner's shards, the low 28 bits are
/// the slot inside that shard. Compiler-injected temporaries and
/// anonymous structs are named [`Name::ANONYMOUS`], the pre-interned empty
/// string.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct Name(u32);

impl Name {
    pub const ANONYMOUS: Name = Name(0);

    pub(crate) const SHARDS: usize = 16;
    pub(crate) const SLOT_MASK: u32 = (1 << 28) - 1;

    #[inline]
    pub(crate) const fn from_parts(shard: u32, slot: u32) -> Self {
        debug_assert!((shard as usize) < Self::SHARDS);
        debug_assert!(slot <= Self::SLOT_MASK);
        Name((shard << 28) | slot)
    }

    #[inline]
    pub(crate) const fn shard(self) -> usize {
        (self.0 >> 28) as usize
    }

    #[inline]
    pub(crate) const fn slot(self) -> usize {
        (self.0 & Self::SLOT_MASK) as usize
    }

    /// No source-level name: internal temporaries and anonymous structs.
    #[inline]
    pub const fn is_anonymous(self) -> bool {
        self.0 == Self::ANONYMOUS.0
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_anonymous() {
            f.write_str("Name(<anonymous>)")
        } else {
            write!(f, "Name({}:{})", self.shard(), self.slot())
        }
    }
}
