use super::Container;

/// Immutable compact bitmap of `u32` document identifiers.
///
/// Values are split into a high 16-bit key selecting a [`Container`] and the low 16 bits
/// stored inside it. `keys` is strictly ascending and `containers[i]` belongs to `keys[i]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkipSet {
    keys: Vec<u16>,
    containers: Vec<Container>,
}

impl SkipSet {
    pub(super) fn from_parts(keys: Vec<u16>, containers: Vec<Container>) -> Self {
        debug_assert_eq!(keys.len(), containers.len());
        Self { keys, containers }
    }

    pub fn contains(&self, value: u32) -> bool {
        let high = (value >> 16) as u16;
        let low = value as u16;
        match self.keys.binary_search(&high) {
            Ok(idx) => self.containers[idx].contains(low),
            Err(_) => false,
        }
    }

    pub fn len(&self) -> u64 {
        self.containers.iter().map(|c| c.cardinality()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn container_count(&self) -> usize {
        self.containers.len()
    }

    /// Iterate all values in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.keys.iter().zip(self.containers.iter()).flat_map(|(&key, container)| {
            let high = (key as u32) << 16;
            container.iter().map(move |low| high | low as u32)
        })
    }
}
