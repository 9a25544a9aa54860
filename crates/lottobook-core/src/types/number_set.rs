use crate::{PICK_COUNT, POOL_MAX, POOL_MIN, error::NumberSetError};
use derive_more::Deref;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{
    fmt::{self, Debug, Display},
    str::FromStr,
};

///
/// NumberSet
///
/// Exactly six pairwise-distinct numbers from the 1..=49 pool. Immutable
/// once constructed; the sorted array is the canonical reading order and
/// the occupancy mask makes intersection and equality single-word ops.
///

// Comparisons are set comparisons: the input ordering is forgotten at
// construction, so the derived impls over the sorted array are
// order-independent.
#[derive(Clone, Copy, Deref, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct NumberSet {
    #[deref]
    numbers: [u8; PICK_COUNT],
    mask: u64,
}

impl NumberSet {
    /// Validate and construct a set from any ordering of candidate values.
    pub fn new(values: &[u8]) -> Result<Self, NumberSetError> {
        if values.len() != PICK_COUNT {
            return Err(NumberSetError::WrongCount {
                found: values.len(),
            });
        }

        let mut mask = 0u64;
        let mut numbers = [0u8; PICK_COUNT];

        for (slot, &value) in numbers.iter_mut().zip(values) {
            if !(POOL_MIN..=POOL_MAX).contains(&value) {
                return Err(NumberSetError::OutOfRange { value });
            }

            let bit = 1u64 << value;
            if mask & bit != 0 {
                return Err(NumberSetError::Duplicate { value });
            }

            mask |= bit;
            *slot = value;
        }

        numbers.sort_unstable();

        Ok(Self { numbers, mask })
    }

    /// The six numbers in ascending order.
    #[must_use]
    pub const fn numbers(&self) -> [u8; PICK_COUNT] {
        self.numbers
    }

    /// Returns `true` if the set contains the value.
    #[must_use]
    pub const fn contains(&self, value: u8) -> bool {
        value <= POOL_MAX && self.mask & (1u64 << value) != 0
    }

    /// Occupancy mask: bit `n` is set iff number `n` is in the set.
    #[must_use]
    pub(crate) const fn mask(&self) -> u64 {
        self.mask
    }

    /// Count and sorted list of the numbers shared with `other`.
    #[must_use]
    pub fn overlap(&self, other: &Self) -> Overlap {
        let shared = self.mask & other.mask;

        #[expect(clippy::cast_possible_truncation)]
        let hits = shared.count_ones() as u8;

        let numbers = self
            .numbers
            .iter()
            .copied()
            .filter(|&n| shared & (1u64 << n) != 0)
            .collect();

        Overlap { hits, numbers }
    }

    pub fn iter(&self) -> std::array::IntoIter<u8, PICK_COUNT> {
        self.numbers.into_iter()
    }
}

///
/// Overlap
///
/// The shared numbers of two sets: a hit count in 0..=6 and the hits
/// themselves in ascending order.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Overlap {
    pub hits: u8,
    pub numbers: Vec<u8>,
}

impl Debug for NumberSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NumberSet({self})")
    }
}

impl Display for NumberSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sep = "";
        for n in self.numbers {
            write!(f, "{sep}{n}")?;
            sep = " ";
        }

        Ok(())
    }
}

/// Accepts the shapes a CSV import cell carries: numbers separated by
/// commas, semicolons, or whitespace.
impl FromStr for NumberSet {
    type Err = NumberSetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split(|c: char| c == ',' || c == ';' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .map(|token| {
                token
                    .parse::<u8>()
                    .map_err(|_| NumberSetError::Unparsable {
                        token: token.to_string(),
                    })
            })
            .collect::<Result<Vec<u8>, _>>()?;

        Self::new(&values)
    }
}

impl TryFrom<[u8; PICK_COUNT]> for NumberSet {
    type Error = NumberSetError;

    fn try_from(values: [u8; PICK_COUNT]) -> Result<Self, Self::Error> {
        Self::new(&values)
    }
}

impl IntoIterator for &NumberSet {
    type Item = u8;
    type IntoIter = std::array::IntoIter<u8, PICK_COUNT>;

    fn into_iter(self) -> Self::IntoIter {
        self.numbers.into_iter()
    }
}

impl Serialize for NumberSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.numbers.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for NumberSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let values = Vec::<u8>::deserialize(deserializer)?;

        Self::new(&values).map_err(serde::de::Error::custom)
    }
}

///
/// TESTS
///
