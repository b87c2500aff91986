//! Partitioning operations.
//!
//! Each operation has a streaming `each_*` form that invokes a callback once
//! per partition, in order, and a materialising form that collects those same
//! partitions into a `Vec`. Partitions are borrowed views into the input.

use crate::error::{
  Result,
  check_size,
  require_size,
};

/// Returns every overlapping window of `n` consecutive elements.
///
/// All windows have length `n` and consecutive windows share `n - 1`
/// elements. The result is empty when `v` is shorter than `n`.
///
/// # Panics
///
/// Panics if `n` is zero. See [`try_cons`] for a non-panicking variant.
#[track_caller]
pub fn cons<T>(v: &[T], n: usize) -> Vec<&[T]> {
  let n = require_size(n, "window");
  let mut r = Vec::with_capacity((v.len() + 1).saturating_sub(n));
  each_cons(v, n, |w| r.push(w));
  r
}

/// Like [`cons`], but reports a zero `n` as an error.
pub fn try_cons<T>(v: &[T], n: usize) -> Result<Vec<&[T]>> {
  let n = check_size(n, "window")?;
  Ok(cons(v, n))
}

/// Invokes `f` with each window returned by [`cons`].
#[track_caller]
pub fn each_cons<'a, T>(v: &'a [T], n: usize, f: impl FnMut(&'a [T])) {
  let n = require_size(n, "window");
  v.windows(n).for_each(f);
}

/// Splits `v` into successive non-overlapping chunks of `n` elements.
///
/// Every chunk has length `n` except the last one, which holds the remaining
/// `v.len() % n` elements when the length is not a multiple of `n`.
///
/// # Panics
///
/// Panics if `n` is zero. See [`try_chunk`] for a non-panicking variant.
#[track_caller]
pub fn chunk<T>(v: &[T], n: usize) -> Vec<&[T]> {
  let n = require_size(n, "chunk");
  let mut r = Vec::with_capacity(v.len().div_ceil(n));
  each_chunk(v, n, |c| r.push(c));
  r
}

/// Like [`chunk`], but reports a zero `n` as an error.
pub fn try_chunk<T>(v: &[T], n: usize) -> Result<Vec<&[T]>> {
  let n = check_size(n, "chunk")?;
  Ok(chunk(v, n))
}

/// Invokes `f` with each chunk returned by [`chunk`].
#[track_caller]
pub fn each_chunk<'a, T>(v: &'a [T], n: usize, f: impl FnMut(&'a [T])) {
  let n = require_size(n, "chunk");
  v.chunks(n).for_each(f);
}

/// Splits `v` between every pair of adjacent elements `(a, b)` for which
/// `should_split(a, b)` returns true.
///
/// The trailing group is always emitted, so an empty input yields a single
/// empty group.
pub fn split_between<T>(v: &[T], should_split: impl FnMut(&T, &T) -> bool) -> Vec<&[T]> {
  let mut r = Vec::new();
  each_split_between(v, should_split, |g| r.push(g));
  r
}

/// Invokes `f` with each group returned by [`split_between`].
pub fn each_split_between<'a, T>(
  v: &'a [T],
  mut should_split: impl FnMut(&T, &T) -> bool,
  mut f: impl FnMut(&'a [T]),
) {
  let mut start = 0;
  for end in 1..v.len() {
    if should_split(&v[end - 1], &v[end]) {
      f(&v[start..end]);
      start = end;
    }
  }
  f(&v[start..]);
}

/// Splits `v` into runs of consecutive elements for which `classify` returns
/// equal values. Groups are never empty; an empty input yields no groups.
pub fn split_by<T, U: PartialEq>(v: &[T], classify: impl FnMut(&T) -> U) -> Vec<&[T]> {
  let mut r = Vec::new();
  each_split_by(v, classify, |g| r.push(g));
  r
}

/// Invokes `f` with each group returned by [`split_by`].
pub fn each_split_by<'a, T, U: PartialEq>(
  v: &'a [T],
  mut classify: impl FnMut(&T) -> U,
  mut f: impl FnMut(&'a [T]),
) {
  let mut start = 0;
  let mut current: Option<U> = None;
  for (end, a) in v.iter().enumerate() {
    let key = classify(a);
    if current.as_ref() != Some(&key) {
      if start != end {
        f(&v[start..end]);
      }
      start = end;
      current = Some(key);
    }
  }
  if start != v.len() {
    f(&v[start..]);
  }
}

/// Combines the sequences in `v` index by index.
///
/// Tuple `i` holds a reference to element `i` of every input sequence, in the
/// order the sequences were given. The output is as long as the shortest
/// input; extra elements of longer inputs are ignored. No inputs, or any empty
/// input, gives an empty result.
///
/// The tuples borrow from `v`. Use [`zip_slices`] when the inputs are already
/// slices and the tuples should outlive the array holding them.
pub fn zip<'a, S, T: 'a>(v: &'a [S]) -> Vec<Vec<&'a T>>
where
  S: AsRef<[T]>,
{
  let mut r = Vec::new();
  each_zip(v, |t| r.push(t));
  r
}

/// Invokes `f` with each tuple returned by [`zip`].
pub fn each_zip<'a, S, T: 'a>(v: &'a [S], f: impl FnMut(Vec<&'a T>))
where
  S: AsRef<[T]>,
{
  let slices: Vec<&'a [T]> = v.iter().map(|s| s.as_ref()).collect();
  each_zip_slices(&slices, f);
}

/// Like [`zip`], but the tuples borrow the element data rather than `v`.
pub fn zip_slices<'a, T>(v: &[&'a [T]]) -> Vec<Vec<&'a T>> {
  let mut r = Vec::with_capacity(zip_len(v));
  each_zip_slices(v, |t| r.push(t));
  r
}

/// Invokes `f` with each tuple returned by [`zip_slices`].
pub fn each_zip_slices<'a, T>(v: &[&'a [T]], mut f: impl FnMut(Vec<&'a T>)) {
  for i in 0..zip_len(v) {
    f(v.iter().map(|s| &s[i]).collect());
  }
}

fn zip_len<T>(v: &[&[T]]) -> usize {
  v.iter().map(|s| s.len()).min().unwrap_or(0)
}
