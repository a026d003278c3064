//! Value Objects for Node Lookup

use std::cmp::Ordering;

use serde::Deserialize;

use crate::domain::LookupError;

/// Result of XOR distance calculation between two node identifiers.
///
/// Stored as the big-endian XOR bytes and ordered as unsigned integers.
/// Distances of different widths still compare by value; when the values
/// match, the narrower one sorts first so that `Ord` agrees with `Eq`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Distance(Box<[u8]>);

impl Ord for Distance {
    fn cmp(&self, other: &Self) -> Ordering {
        let (a, b) = (self.significant(), other.significant());
        a.len()
            .cmp(&b.len())
            .then_with(|| a.cmp(b))
            .then_with(|| self.0.len().cmp(&other.0.len()))
    }
}

impl PartialOrd for Distance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Distance {
    pub(crate) fn from_xor(bytes: Box<[u8]>) -> Self {
        Self(bytes)
    }

    /// Big-endian XOR bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// True when both identifiers were equal.
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&b| b == 0)
    }

    /// Number of leading zero bits, i.e. the length of the shared prefix.
    pub fn leading_zeros(&self) -> usize {
        for (i, &byte) in self.0.iter().enumerate() {
            if byte != 0 {
                return i * 8 + byte.leading_zeros() as usize;
            }
        }
        self.0.len() * 8
    }

    /// Bytes from the first non-zero one onward.
    fn significant(&self) -> &[u8] {
        let start = self.0.iter().position(|&b| b != 0).unwrap_or(self.0.len());
        &self.0[start..]
    }
}

/// Parameters for one iterative lookup.
///
/// `ksize` becomes the candidate set's visible window. `alpha` and
/// `max_rounds` are carried for the driver, which owns parallelism and the
/// iteration budget.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LookupConfig {
    /// Visible window of the closest-node set (default: 20)
    pub ksize: usize,
    /// Parallel queries per round (default: 3)
    pub alpha: usize,
    /// Upper bound on query rounds before the driver gives up (default: 20)
    pub max_rounds: usize,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            ksize: 20,
            alpha: 3,
            max_rounds: 20,
        }
    }
}

impl LookupConfig {
    /// Create a config suitable for testing (smaller values)
    pub fn for_testing() -> Self {
        Self {
            ksize: 3,
            alpha: 2,
            max_rounds: 8,
        }
    }

    /// Reject windows or parallelism of zero.
    pub fn validate(&self) -> Result<(), LookupError> {
        if self.ksize == 0 {
            return Err(LookupError::InvalidCapacity {
                maxsize: self.ksize,
            });
        }
        if self.alpha == 0 {
            return Err(LookupError::InvalidParallelism { alpha: self.alpha });
        }
        Ok(())
    }
}
