//! Element-wise transformations and their partition-aware counterparts.
//!
//! The `*_cons`, `*_chunk`, `*_split_between`, `*_split_by` and `*_zip`
//! combinators transform each partition as the matching `each_*` traversal
//! produces it, without materialising the list of partitions first.

use crate::each::{
  each_chunk,
  each_cons,
  each_split_between,
  each_split_by,
  each_zip,
};

/// Returns a copy of `v` keeping only the elements for which `f` returns true.
pub fn filter<T: Clone>(v: &[T], mut f: impl FnMut(&T) -> bool) -> Vec<T> {
  v.iter().filter(|&a| f(a)).cloned().collect()
}

/// Invokes `f` with each element of `v` and collects one result per element.
pub fn map<T, U>(v: &[T], f: impl FnMut(&T) -> U) -> Vec<U> {
  v.iter().map(f).collect()
}

/// Invokes `f` with each element of `v` and collects zero, one or more results
/// per element.
pub fn flat_map<T, U, I>(v: &[T], f: impl FnMut(&T) -> I) -> Vec<U>
where
  I: IntoIterator<Item = U>,
{
  v.iter().flat_map(f).collect()
}

/// Invokes `f` with each element of `v` and collects zero or one result per
/// element.
pub fn filter_map<T, U>(v: &[T], f: impl FnMut(&T) -> Option<U>) -> Vec<U> {
  v.iter().filter_map(f).collect()
}

// Cons

/// Invokes `f` with each window of [`cons`](crate::each::cons) and collects one
/// result per window.
#[track_caller]
pub fn map_cons<T, U>(v: &[T], n: usize, mut f: impl FnMut(&[T]) -> U) -> Vec<U> {
  let mut r = Vec::with_capacity((v.len() + 1).saturating_sub(n));
  each_cons(v, n, |p| r.push(f(p)));
  r
}

/// Invokes `f` with each window of [`cons`](crate::each::cons) and collects
/// zero, one or more results per window.
#[track_caller]
pub fn flat_map_cons<T, U, I>(v: &[T], n: usize, mut f: impl FnMut(&[T]) -> I) -> Vec<U>
where
  I: IntoIterator<Item = U>,
{
  let mut r = Vec::new();
  each_cons(v, n, |p| r.extend(f(p)));
  r
}

/// Invokes `f` with each window of [`cons`](crate::each::cons) and collects
/// zero or one result per window.
#[track_caller]
pub fn filter_map_cons<T, U>(v: &[T], n: usize, mut f: impl FnMut(&[T]) -> Option<U>) -> Vec<U> {
  let mut r = Vec::new();
  each_cons(v, n, |p| r.extend(f(p)));
  r
}

// Chunk

/// Invokes `f` with each chunk of [`chunk`](crate::each::chunk) and collects
/// one result per chunk.
#[track_caller]
pub fn map_chunk<T, U>(v: &[T], n: usize, mut f: impl FnMut(&[T]) -> U) -> Vec<U> {
  let mut r = Vec::with_capacity(if n == 0 { 0 } else { v.len().div_ceil(n) });
  each_chunk(v, n, |p| r.push(f(p)));
  r
}

/// Invokes `f` with each chunk of [`chunk`](crate::each::chunk) and collects
/// zero, one or more results per chunk.
#[track_caller]
pub fn flat_map_chunk<T, U, I>(v: &[T], n: usize, mut f: impl FnMut(&[T]) -> I) -> Vec<U>
where
  I: IntoIterator<Item = U>,
{
  let mut r = Vec::new();
  each_chunk(v, n, |p| r.extend(f(p)));
  r
}

/// Invokes `f` with each chunk of [`chunk`](crate::each::chunk) and collects
/// zero or one result per chunk.
#[track_caller]
pub fn filter_map_chunk<T, U>(v: &[T], n: usize, mut f: impl FnMut(&[T]) -> Option<U>) -> Vec<U> {
  let mut r = Vec::new();
  each_chunk(v, n, |p| r.extend(f(p)));
  r
}

// Split between

/// Splits `v` according to `should_split`, invokes `f` with each group and
/// collects one result per group.
pub fn map_split_between<T, U>(
  v: &[T],
  should_split: impl FnMut(&T, &T) -> bool,
  mut f: impl FnMut(&[T]) -> U,
) -> Vec<U> {
  let mut r = Vec::new();
  each_split_between(v, should_split, |p| r.push(f(p)));
  r
}

/// Splits `v` according to `should_split`, invokes `f` with each group and
/// collects zero, one or more results per group.
pub fn flat_map_split_between<T, U, I>(
  v: &[T],
  should_split: impl FnMut(&T, &T) -> bool,
  mut f: impl FnMut(&[T]) -> I,
) -> Vec<U>
where
  I: IntoIterator<Item = U>,
{
  let mut r = Vec::new();
  each_split_between(v, should_split, |p| r.extend(f(p)));
  r
}

/// Splits `v` according to `should_split`, invokes `f` with each group and
/// collects zero or one result per group.
pub fn filter_map_split_between<T, U>(
  v: &[T],
  should_split: impl FnMut(&T, &T) -> bool,
  mut f: impl FnMut(&[T]) -> Option<U>,
) -> Vec<U> {
  let mut r = Vec::new();
  each_split_between(v, should_split, |p| r.extend(f(p)));
  r
}

// Split by

/// Splits `v` into runs of equal `classify` values, invokes `f` with each run
/// and collects one result per run.
pub fn map_split_by<T, K: PartialEq, U>(
  v: &[T],
  classify: impl FnMut(&T) -> K,
  mut f: impl FnMut(&[T]) -> U,
) -> Vec<U> {
  let mut r = Vec::new();
  each_split_by(v, classify, |p| r.push(f(p)));
  r
}

/// Splits `v` into runs of equal `classify` values, invokes `f` with each run
/// and collects zero, one or more results per run.
pub fn flat_map_split_by<T, K: PartialEq, U, I>(
  v: &[T],
  classify: impl FnMut(&T) -> K,
  mut f: impl FnMut(&[T]) -> I,
) -> Vec<U>
where
  I: IntoIterator<Item = U>,
{
  let mut r = Vec::new();
  each_split_by(v, classify, |p| r.extend(f(p)));
  r
}

/// Splits `v` into runs of equal `classify` values, invokes `f` with each run
/// and collects zero or one result per run.
pub fn filter_map_split_by<T, K: PartialEq, U>(
  v: &[T],
  classify: impl FnMut(&T) -> K,
  mut f: impl FnMut(&[T]) -> Option<U>,
) -> Vec<U> {
  let mut r = Vec::new();
  each_split_by(v, classify, |p| r.extend(f(p)));
  r
}

// Zip

/// Zips the sequences of `v` into one tuple per index, invokes `f` with each
/// tuple and collects one result per tuple.
pub fn map_zip<S, T, U>(v: &[S], mut f: impl FnMut(&[&T]) -> U) -> Vec<U>
where
  S: AsRef<[T]>,
{
  let mut r = Vec::new();
  each_zip(v, |t| r.push(f(t.as_slice())));
  r
}

/// Zips the sequences of `v` into one tuple per index, invokes `f` with each
/// tuple and collects zero, one or more results per tuple.
pub fn flat_map_zip<S, T, U, I>(v: &[S], mut f: impl FnMut(&[&T]) -> I) -> Vec<U>
where
  S: AsRef<[T]>,
  I: IntoIterator<Item = U>,
{
  let mut r = Vec::new();
  each_zip(v, |t| r.extend(f(t.as_slice())));
  r
}

/// Zips the sequences of `v` into one tuple per index, invokes `f` with each
/// tuple and collects zero or one result per tuple.
pub fn filter_map_zip<S, T, U>(v: &[S], mut f: impl FnMut(&[&T]) -> Option<U>) -> Vec<U>
where
  S: AsRef<[T]>,
{
  let mut r = Vec::new();
  each_zip(v, |t| r.extend(f(t.as_slice())));
  r
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::each::{
    chunk,
    cons,
    split_between,
    split_by,
    zip,
  };

  fn range(n: i32) -> Vec<i32> {
    (0..n).collect()
  }

  fn with_marker(a: &[i32]) -> Vec<i32> {
    let mut r = a.to_vec();
    r.push(-1);
    r
  }

  #[test]
  fn test_filter() {
    assert_eq!(filter(&range(4), |a| a % 2 == 0), vec![0, 2]);
  }

  #[test]
  fn test_map() {
    assert_eq!(map(&range(4), |a| *a as f64 * 1.5), vec![0.0, 1.5, 3.0, 4.5]);
  }

  #[test]
  fn test_flat_map() {
    assert_eq!(flat_map(&range(4), |a| range(*a)), vec![0, 0, 1, 0, 1, 2]);
  }

  #[test]
  fn test_filter_map() {
    assert_eq!(filter_map(&range(4), |a| (a % 2 == 0).then_some(*a)), vec![0, 2]);
  }

  #[test]
  fn test_map_cons() {
    assert_eq!(map_cons(&range(4), 3, |a| a.len()), vec![3, 3]);
  }

  #[test]
  fn test_flat_map_cons() {
    assert_eq!(flat_map_cons(&range(4), 3, |a| a.to_vec()), vec![0, 1, 2, 1, 2, 3]);
  }

  #[test]
  fn test_filter_map_cons() {
    assert_eq!(
      filter_map_cons(&range(4), 3, |a| (a[2] % 2 == 0).then_some(a[2])),
      vec![2]
    );
  }

  #[test]
  #[should_panic(expected = "window size must be non-zero")]
  fn map_cons_rejects_zero() {
    map_cons(&range(4), 0, |a| a.len());
  }

  #[test]
  fn test_map_chunk() {
    assert_eq!(map_chunk(&range(4), 3, |a| a.len()), vec![3, 1]);
  }

  #[test]
  fn test_flat_map_chunk() {
    let v = range(4);
    assert_eq!(flat_map_chunk(&v, 3, with_marker), vec![0, 1, 2, -1, 3, -1]);
    assert_eq!(v, range(4));
  }

  #[test]
  fn test_filter_map_chunk() {
    assert_eq!(
      filter_map_chunk(&range(4), 3, |a| (a.len() < 3).then_some(a.len())),
      vec![1]
    );
  }

  #[test]
  #[should_panic(expected = "chunk size must be non-zero")]
  fn map_chunk_rejects_zero() {
    map_chunk(&range(4), 0, |a| a.len());
  }

  #[test]
  fn test_map_split_between() {
    let v = [1, 2, 4, 3, 5];
    assert_eq!(map_split_between(&v, |a, b| b < a, |a| a.len()), vec![3, 2]);
  }

  #[test]
  fn test_flat_map_split_between() {
    let v = [1, 2, 4, 3, 5];
    assert_eq!(
      flat_map_split_between(&v, |a, b| b < a, with_marker),
      vec![1, 2, 4, -1, 3, 5, -1]
    );
  }

  #[test]
  fn test_filter_map_split_between() {
    let v = [1, 2, 4, 3, 5];
    assert_eq!(
      filter_map_split_between(&v, |a, b| b < a, |a| (a.len() < 3).then_some(a.len())),
      vec![2]
    );
  }

  #[test]
  fn test_map_split_by() {
    let v = [2, 4, 6, 3, 5];
    assert_eq!(map_split_by(&v, |a| a % 2 == 0, |a| a.len()), vec![3, 2]);
  }

  #[test]
  fn test_flat_map_split_by() {
    let v = [2, 4, 6, 3, 5];
    assert_eq!(
      flat_map_split_by(&v, |a| a % 2 == 0, with_marker),
      vec![2, 4, 6, -1, 3, 5, -1]
    );
  }

  #[test]
  fn test_filter_map_split_by() {
    let v = [2, 4, 6, 3, 5];
    assert_eq!(
      filter_map_split_by(&v, |a| a % 2 == 0, |a| (a.len() < 3).then_some(a.len())),
      vec![2]
    );
  }

  #[test]
  fn test_map_zip() {
    let v = [vec![1, 2, 3, 4], vec![5, 6, 7]];
    assert_eq!(map_zip(&v, |t| t[0] + t[1]), vec![6, 8, 10]);
  }

  #[test]
  fn test_flat_map_zip() {
    let v = [vec![1, 2, 3, 4], vec![5, 6, 7]];
    assert_eq!(
      flat_map_zip(&v, |t| [*t[0], *t[1], -1]),
      vec![1, 5, -1, 2, 6, -1, 3, 7, -1]
    );
  }

  #[test]
  fn test_filter_map_zip() {
    let v = [vec![1, 2, 3, 4], vec![5, 6, 7]];
    assert_eq!(
      filter_map_zip(&v, |t| (t[0] % 2 != 0).then_some(t[0] + t[1])),
      vec![6, 10]
    );
  }

  // Transforming partitions on the fly must match transforming the
  // materialised partition list.
  quickcheck::quickcheck! {
    fn cons_combinators_match_two_step(v: Vec<u8>, n: u8) -> bool {
      let n = n as usize % 6 + 1;
      let windows = cons(&v, n);
      map_cons(&v, n, <[u8]>::to_vec) == map(&windows, |w| w.to_vec())
        && flat_map_cons(&v, n, <[u8]>::to_vec) == flat_map(&windows, |w| w.to_vec())
        && filter_map_cons(&v, n, |w| w.first().copied())
          == filter_map(&windows, |w| w.first().copied())
    }

    fn chunk_combinators_match_two_step(v: Vec<u8>, n: u8) -> bool {
      let n = n as usize % 6 + 1;
      let chunks = chunk(&v, n);
      let keep_even = |c: &[u8]| (c.len() % 2 == 0).then(|| c.to_vec());
      map_chunk(&v, n, <[u8]>::len) == map(&chunks, |c| c.len())
        && flat_map_chunk(&v, n, <[u8]>::to_vec) == flat_map(&chunks, |c| c.to_vec())
        && filter_map_chunk(&v, n, keep_even) == filter_map(&chunks, |c| keep_even(*c))
    }

    fn split_between_combinators_match_two_step(v: Vec<u8>) -> bool {
      let groups = split_between(&v, |a, b| b < a);
      map_split_between(&v, |a, b| b < a, <[u8]>::len) == map(&groups, |g| g.len())
        && flat_map_split_between(&v, |a, b| b < a, <[u8]>::to_vec)
          == flat_map(&groups, |g| g.to_vec())
        && filter_map_split_between(&v, |a, b| b < a, |g| g.last().copied())
          == filter_map(&groups, |g| g.last().copied())
    }

    fn split_by_combinators_match_two_step(v: Vec<u8>) -> bool {
      let groups = split_by(&v, |a| a % 3);
      map_split_by(&v, |a| a % 3, <[u8]>::len) == map(&groups, |g| g.len())
        && flat_map_split_by(&v, |a| a % 3, <[u8]>::to_vec) == flat_map(&groups, |g| g.to_vec())
        && filter_map_split_by(&v, |a| a % 3, |g| g.get(1).copied())
          == filter_map(&groups, |g| g.get(1).copied())
    }

    fn zip_combinators_match_two_step(a: Vec<u8>, b: Vec<u8>) -> bool {
      let v = [a, b];
      let tuples = zip(&v);
      let sum = |t: &[&u8]| t.iter().map(|x| **x as u32).sum::<u32>();
      map_zip(&v, sum) == map(&tuples, |t| sum(t.as_slice()))
        && flat_map_zip(&v, |t| t.iter().map(|x| **x).collect::<Vec<_>>())
          == flat_map(&tuples, |t| t.iter().map(|x| **x).collect::<Vec<_>>())
        && filter_map_zip(&v, |t| (sum(t) % 2 == 0).then(|| sum(t)))
          == filter_map(&tuples, |t| (sum(t.as_slice()) % 2 == 0).then(|| sum(t.as_slice())))
    }
  }
}
