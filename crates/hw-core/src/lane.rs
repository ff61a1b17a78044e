//! The two parallel lanes of the highway.

use std::fmt;

/// One of the two lanes.
///
/// `Left` is stored at index 0 and `Right` at index 1; use [`Lane::index`]
/// rather than raw integers when indexing per-lane arrays.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Lane {
    Left,
    Right,
}

impl Lane {
    /// Both lanes in processing order.
    pub const ALL: [Lane; 2] = [Lane::Left, Lane::Right];

    /// The adjacent lane a vehicle would change into.
    #[inline]
    pub fn opposite(self) -> Lane {
        match self {
            Lane::Left  => Lane::Right,
            Lane::Right => Lane::Left,
        }
    }

    /// Index into per-lane arrays.
    #[inline(always)]
    pub fn index(self) -> usize {
        match self {
            Lane::Left  => 0,
            Lane::Right => 1,
        }
    }
}

impl fmt::Display for Lane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Lane::Left  => "left",
            Lane::Right => "right",
        };
        f.write_str(s)
    }
}
