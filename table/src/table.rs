use std::{
    borrow::Borrow,
    collections::hash_map::DefaultHasher,
    fmt::{self, Debug, Display, Write as _},
    hash::{BuildHasher, BuildHasherDefault, Hash},
    mem,
};

use tracing::{debug, trace};

use crate::{
    error::Error,
    prime::next_prime,
    store::{Entry, Slot, SlotStore},
};

/// Size hint used by [`ProbeTable::new`]
pub const DEFAULT_TABLE_SIZE: usize = 101;

/// Hash table using quadratic probing and lazy deletion.
///
/// Each key is stored at most once. Removed entries stay in place as
/// tombstones until the next rehash so that probes for keys placed after
/// them keep working.
pub struct ProbeTable<K, V, S = BuildHasherDefault<DefaultHasher>> {
    slots: SlotStore<K, V>,
    /// Every write since the last clear or rehash, tombstones included
    occupied: usize,
    active: usize,
    hasher: S,
}

impl<K: Eq + Hash, V> ProbeTable<K, V> {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_TABLE_SIZE)
    }

    /// Creates a table with at least `size_hint` slots.
    pub fn with_capacity(size_hint: usize) -> Self {
        Self::with_capacity_and_hasher(size_hint, BuildHasherDefault::default())
    }
}

impl<K, V, S> ProbeTable<K, V, S> {
    /// Number of live entries
    pub const fn size(&self) -> usize {
        self.active
    }

    pub const fn is_empty(&self) -> bool {
        self.active == 0
    }

    /// Number of slots, always prime
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Removes every entry, keeping the current capacity.
    pub fn clear(&mut self) {
        trace!(capacity = self.capacity(), "clearing table");
        self.slots.reset();
        self.occupied = 0;
        self.active = 0;
    }

    /// Live entries in slot order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.slots.iter(),
        }
    }
}

impl<K, V, S> ProbeTable<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    pub fn with_capacity_and_hasher(size_hint: usize, hasher: S) -> Self {
        Self {
            slots: SlotStore::with_len(next_prime(size_hint)),
            occupied: 0,
            active: 0,
            hasher,
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn hash<Q>(&self, key: &Q) -> usize
    where
        Q: ?Sized + Hash,
    {
        (self.hasher.hash_one(key) % self.capacity() as u64) as usize
    }

    /// Probes `h, h+1, h+4, h+9, ...` until it reaches an empty slot or a
    /// slot holding `key`, live or deleted.
    fn find_pos<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let capacity = self.capacity();
        let mut offset = 1;
        let mut pos = self.hash(key);

        while let Some(entry) = self.slots[pos].entry() {
            let stored: &Q = entry.key.borrow();
            if stored == key {
                break;
            }
            pos = (pos + offset) % capacity;
            offset += 2;
        }

        pos
    }

    /// Inserts `key` unless it is already present.
    ///
    /// Returns false, leaving the table untouched, if the key is live.
    pub fn insert(&mut self, key: K, value: V) -> bool {
        let pos = self.find_pos(&key);
        if self.slots[pos].is_active() {
            return false;
        }

        self.slots[pos] = Slot::Active(Entry { key, value });
        self.active += 1;
        // counts reused tombstones too, so insert/remove churn on a single
        // key still grows the table
        self.occupied += 1;

        if self.occupied > self.capacity() / 2 {
            self.rehash();
        }

        true
    }

    pub fn try_insert(&mut self, key: K, value: V) -> Result<(), Error> {
        self.insert(key, value)
            .then_some(())
            .ok_or(Error::DuplicateKey)
    }

    /// Marks the entry for `key` as deleted.
    ///
    /// Returns false if the key isn't live.
    pub fn remove<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let pos = self.find_pos(key);
        if !self.slots[pos].delete() {
            return false;
        }

        self.active -= 1;
        true
    }

    pub fn try_remove<Q>(&mut self, key: &Q) -> Result<(), Error>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.remove(key).then_some(()).ok_or(Error::NotFound)
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.slots[self.find_pos(key)].is_active()
    }

    pub fn find<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        match &self.slots[self.find_pos(key)] {
            Slot::Active(entry) => Some(&entry.value),
            _ => None,
        }
    }

    pub fn find_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let pos = self.find_pos(key);
        match &mut self.slots[pos] {
            Slot::Active(entry) => Some(&mut entry.value),
            _ => None,
        }
    }

    /// Moves every live entry into a store at least twice as large.
    fn rehash(&mut self) {
        let old_capacity = self.capacity();
        let new_store = SlotStore::with_len(next_prime(2 * old_capacity));
        let old_store = mem::replace(&mut self.slots, new_store);

        self.occupied = 0;
        self.active = 0;

        for Entry { key, value } in old_store.into_active() {
            self.insert(key, value);
        }

        debug!(
            old_capacity,
            new_capacity = self.capacity(),
            migrated = self.active,
            "rehashed table"
        );
    }
}

impl<K, V: Display, S> ProbeTable<K, V, S> {
    /// Dumps live entries as `slot: value` lines in slot order, stopping
    /// after `limit` lines if given.
    pub fn render(&self, limit: Option<usize>) -> String {
        let mut out = String::new();
        for (idx, entry) in self.slots.active().take(limit.unwrap_or(usize::MAX)) {
            let _ = writeln!(out, "{idx}: {}", entry.value);
        }

        out
    }
}

impl<K: Eq + Hash, V> Default for ProbeTable<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V: Display, S> Display for ProbeTable<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, entry) in self.slots.active() {
            writeln!(f, "{idx}: {}", entry.value)?;
        }

        Ok(())
    }
}

impl<K: Debug, V: Debug, S> Debug for ProbeTable<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

pub struct Iter<'a, K, V> {
    inner: std::slice::Iter<'a, Slot<K, V>>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.find_map(|slot| match slot {
            Slot::Active(entry) => Some((&entry.key, &entry.value)),
            _ => None,
        })
    }
}

impl<'a, K, V, S> IntoIterator for &'a ProbeTable<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
