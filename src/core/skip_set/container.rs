use crate::common::constants::BITMAP_CONTAINER_WORDS;

/// An inclusive range of low 16-bit values `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub start: u16,
    pub end: u16,
}

impl Interval {
    pub fn new(start: u16, end: u16) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> u32 {
        (self.end - self.start) as u32 + 1
    }
}

/// Holds the low 16 bits of every value sharing one high 16-bit key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Container {
    /// Sorted values, used up to 4096 elements.
    Array(Vec<u16>),
    /// One bit per value of the 65536-wide range.
    Bitmap(Box<[u64; BITMAP_CONTAINER_WORDS]>),
    /// Sorted, non-overlapping runs.
    Run(Vec<Interval>),
}

impl Container {
    pub fn contains(&self, low: u16) -> bool {
        match self {
            Container::Array(values) => values.binary_search(&low).is_ok(),
            Container::Bitmap(words) => {
                let word = words[(low >> 6) as usize];
                (word >> (low & 63)) & 1 == 1
            }
            Container::Run(intervals) => {
                // first run whose start is beyond `low`, the candidate run sits right before it.
                let idx = intervals.partition_point(|interval| interval.start <= low);
                idx > 0 && low <= intervals[idx - 1].end
            }
        }
    }

    pub fn cardinality(&self) -> u64 {
        match self {
            Container::Array(values) => values.len() as u64,
            Container::Bitmap(words) => words.iter().map(|w| w.count_ones() as u64).sum(),
            Container::Run(intervals) => intervals.iter().map(|i| i.len() as u64).sum(),
        }
    }

    /// Iterate low 16 bits in ascending order.
    pub fn iter(&self) -> Box<dyn Iterator<Item = u16> + '_> {
        match self {
            Container::Array(values) => Box::new(values.iter().copied()),
            Container::Bitmap(words) => Box::new(words.iter().enumerate().flat_map(|(idx, &word)| {
                (0..64u16)
                    .filter(move |bit| (word >> bit) & 1 == 1)
                    .map(move |bit| ((idx as u16) << 6) | bit)
            })),
            Container::Run(intervals) => Box::new(intervals.iter().flat_map(|i| i.start..=i.end)),
        }
    }
}
