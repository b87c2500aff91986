//! Insertion-ordered variants of the mapping operations.
//!
//! An [`IndexMap`] iterates in insertion order, so key collisions resolve
//! deterministically: the value produced from the later input entry wins,
//! while the key keeps the position of its first insertion.

use std::hash::{
  BuildHasher,
  Hash,
};

use indexmap::IndexMap;

/// Invokes `f` on each key-value pair of `m`, in order, and collects the
/// returned pairs into a new map.
pub fn map<K, V, R, S, H>(
  m: &IndexMap<K, V, H>,
  mut f: impl FnMut(&K, &V) -> (R, S),
) -> IndexMap<R, S, H>
where
  R: Eq + Hash,
  H: BuildHasher + Default,
{
  let mut r = IndexMap::with_capacity_and_hasher(m.len(), H::default());
  for (k, v) in m {
    let (rk, rv) = f(k, v);
    r.insert(rk, rv);
  }
  r
}

/// Invokes `f` on each key-value pair of `m`, in order, and collects every
/// pair it returns into a new map.
pub fn flat_map<K, V, R, S, H, I>(
  m: &IndexMap<K, V, H>,
  mut f: impl FnMut(&K, &V) -> I,
) -> IndexMap<R, S, H>
where
  R: Eq + Hash,
  H: BuildHasher + Default,
  I: IntoIterator<Item = (R, S)>,
{
  let mut r = IndexMap::with_hasher(H::default());
  for (k, v) in m {
    r.extend(f(k, v));
  }
  r
}

/// Returns a copy of `m` keeping only the pairs for which `f` returns true, in
/// their original order.
pub fn filter<K, V, H>(
  m: &IndexMap<K, V, H>,
  mut f: impl FnMut(&K, &V) -> bool,
) -> IndexMap<K, V, H>
where
  K: Eq + Hash + Clone,
  V: Clone,
  H: BuildHasher + Default,
{
  m.iter()
    .filter(|&(k, v)| f(k, v))
    .map(|(k, v)| (k.clone(), v.clone()))
    .collect()
}
