//! Higher-order operations over hash maps.
//!
//! Every function borrows its input map and builds a new one. When `f` maps
//! two input entries onto the same output key, the entry written last wins.
//! A `HashMap` iterates in an unspecified order, so which entry that is cannot
//! be relied upon; enable the `indexmap` feature and use [`ordered`] when it
//! matters.

use std::{
  collections::HashMap,
  hash::{
    BuildHasher,
    Hash,
  },
};

#[cfg(feature = "indexmap")]
pub mod ordered;

/// Invokes `f` on each key-value pair of `m` and collects the returned pairs
/// into a new map.
pub fn map<K, V, R, S, H>(
  m: &HashMap<K, V, H>,
  mut f: impl FnMut(&K, &V) -> (R, S),
) -> HashMap<R, S, H>
where
  R: Eq + Hash,
  H: BuildHasher + Default,
{
  let mut r = HashMap::with_capacity_and_hasher(m.len(), H::default());
  for (k, v) in m {
    let (rk, rv) = f(k, v);
    r.insert(rk, rv);
  }
  r
}

/// Invokes `f` on each key-value pair of `m` and collects every pair it
/// returns, zero, one or more per input entry, into a new map.
pub fn flat_map<K, V, R, S, H, I>(
  m: &HashMap<K, V, H>,
  mut f: impl FnMut(&K, &V) -> I,
) -> HashMap<R, S, H>
where
  R: Eq + Hash,
  H: BuildHasher + Default,
  I: IntoIterator<Item = (R, S)>,
{
  let mut r = HashMap::with_hasher(H::default());
  for (k, v) in m {
    r.extend(f(k, v));
  }
  r
}

/// Returns a copy of `m` keeping only the pairs for which `f` returns true.
pub fn filter<K, V, H>(m: &HashMap<K, V, H>, mut f: impl FnMut(&K, &V) -> bool) -> HashMap<K, V, H>
where
  K: Eq + Hash + Clone,
  V: Clone,
  H: BuildHasher + Default,
{
  let mut r = HashMap::with_hasher(H::default());
  for (k, v) in m {
    if f(k, v) {
      r.insert(k.clone(), v.clone());
    }
  }
  r
}
