/*
 * Copyright (c) 2022 Frank Fischer <frank-fischer@shadow-soft.de>
 *
 * This program is free software: you can redistribute it and/or
 * modify it under the terms of the GNU General Public License as
 * published by the Free Software Foundation, either version 3 of the
 * License, or (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful, but
 * WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
 * General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see  <http://www.gnu.org/licenses/>
 */

use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

/// An associative container mapping vertices to some value.
///
/// Keys are cheap handles (typically references to the vertex keys stored
/// in a graph), hence `K: Copy`.
pub trait ItemMap<K, V>
where
    K: Copy,
{
    /// Return `true` if there is no entry.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Return the number of entries.
    fn len(&self) -> usize;

    /// Remove all entries.
    fn clear(&mut self);

    /// Insert `value` for `key` unless there already is an entry.
    ///
    /// Return `true` iff the entry is new. An existing value is never
    /// replaced.
    fn insert(&mut self, key: K, value: V) -> bool;

    /// Remove the entry of `key`, returning its value.
    fn remove(&mut self, key: K) -> Option<V>;

    /// Return the value stored for `key`.
    fn get(&self, key: K) -> Option<&V>;

    /// Return `true` iff there is an entry for `key`.
    fn contains(&self, key: K) -> bool {
        self.get(key).is_some()
    }
}

impl<'a, K, V, M> ItemMap<K, V> for &'a mut M
where
    K: Copy,
    M: ItemMap<K, V>,
{
    fn len(&self) -> usize {
        (**self).len()
    }

    fn clear(&mut self) {
        (**self).clear()
    }

    fn insert(&mut self, key: K, value: V) -> bool {
        (**self).insert(key, value)
    }

    fn remove(&mut self, key: K) -> Option<V> {
        (**self).remove(key)
    }

    fn get(&self, key: K) -> Option<&V> {
        (**self).get(key)
    }
}

impl<K, V, S> ItemMap<K, V> for HashMap<K, V, S>
where
    K: Copy + Eq + Hash,
    S: BuildHasher,
{
    fn len(&self) -> usize {
        HashMap::len(self)
    }

    fn clear(&mut self) {
        HashMap::clear(self)
    }

    fn insert(&mut self, key: K, value: V) -> bool {
        let mut new = false;
        self.entry(key).or_insert_with(|| {
            new = true;
            value
        });
        new
    }

    fn remove(&mut self, key: K) -> Option<V> {
        HashMap::remove(self, &key)
    }

    fn get(&self, key: K) -> Option<&V> {
        HashMap::get(self, &key)
    }

    fn contains(&self, key: K) -> bool {
        HashMap::contains_key(self, &key)
    }
}

#[cfg(test)]
mod tests {
    use super::ItemMap;
    use std::collections::HashMap;

    #[test]
    fn test_insert_keeps_first() {
        let mut m = HashMap::new();
        assert!(ItemMap::insert(&mut m, "a", 1));
        assert!(!ItemMap::insert(&mut m, "a", 2));
        assert_eq!(ItemMap::get(&m, "a"), Some(&1));
        assert_eq!(ItemMap::len(&m), 1);
        assert_eq!(ItemMap::remove(&mut m, "a"), Some(1));
        assert!(ItemMap::is_empty(&m));
    }
}
