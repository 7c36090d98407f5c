use std::ops::{Index, IndexMut};

#[derive(Clone, Debug)]
pub struct Entry<K, V> {
    pub key: K,
    pub value: V,
}

/// A single cell of the table.
///
/// `Deleted` keeps the last entry written there so probes for the same key
/// still stop on it.
#[derive(Clone, Debug)]
pub enum Slot<K, V> {
    Empty,
    Active(Entry<K, V>),
    Deleted(Entry<K, V>),
}

impl<K, V> Slot<K, V> {
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active(_))
    }

    /// The stored entry, live or tombstoned.
    pub fn entry(&self) -> Option<&Entry<K, V>> {
        match self {
            Self::Empty => None,
            Self::Active(entry) | Self::Deleted(entry) => Some(entry),
        }
    }

    /// Turns an active slot into a tombstone, keeping its entry.
    ///
    /// Returns false if the slot was not active.
    pub fn delete(&mut self) -> bool {
        match std::mem::take(self) {
            Self::Active(entry) => {
                *self = Self::Deleted(entry);
                true
            }
            other => {
                *self = other;
                false
            }
        }
    }
}

impl<K, V> Default for Slot<K, V> {
    fn default() -> Self {
        Self::Empty
    }
}

/// Fixed length backing array for the table.
#[derive(Clone, Debug)]
pub struct SlotStore<K, V> {
    slots: Vec<Slot<K, V>>,
}

impl<K, V> SlotStore<K, V> {
    pub fn with_len(len: usize) -> Self {
        let mut slots = Vec::with_capacity(len);
        slots.resize_with(len, Slot::default);

        Self { slots }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn reset(&mut self) {
        self.slots.fill_with(Slot::default);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Slot<K, V>> {
        self.slots.iter()
    }

    /// Active slots in slot order, with their index.
    pub fn active(&self) -> impl Iterator<Item = (usize, &Entry<K, V>)> {
        self.iter()
            .enumerate()
            .filter_map(|(idx, slot)| match slot {
                Slot::Active(entry) => Some((idx, entry)),
                _ => None,
            })
    }

    /// Consumes the store, dropping tombstones.
    pub fn into_active(self) -> impl Iterator<Item = Entry<K, V>> {
        self.slots.into_iter().filter_map(|slot| match slot {
            Slot::Active(entry) => Some(entry),
            _ => None,
        })
    }
}

impl<K, V> Index<usize> for SlotStore<K, V> {
    type Output = Slot<K, V>;

    fn index(&self, idx: usize) -> &Self::Output {
        &self.slots[idx]
    }
}

impl<K, V> IndexMut<usize> for SlotStore<K, V> {
    fn index_mut(&mut self, idx: usize) -> &mut Self::Output {
        &mut self.slots[idx]
    }
}
