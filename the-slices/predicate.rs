//! Quantifiers over the elements of a slice.

/// Returns true if `p` holds for at least one element of `v`. Stops at the
/// first match.
pub fn any<T>(v: &[T], p: impl FnMut(&T) -> bool) -> bool {
  v.iter().any(p)
}

/// Returns true if `p` holds for every element of `v`. Stops at the first
/// mismatch.
pub fn all<T>(v: &[T], p: impl FnMut(&T) -> bool) -> bool {
  v.iter().all(p)
}

/// Returns true if `p` holds for no element of `v`. Stops at the first match.
pub fn none<T>(v: &[T], p: impl FnMut(&T) -> bool) -> bool {
  !any(v, p)
}

/// Returns true if `p` holds for exactly one element of `v`. Stops at the
/// second match.
pub fn exactly_one<T>(v: &[T], mut p: impl FnMut(&T) -> bool) -> bool {
  let mut matches = v.iter().filter(|&a| p(a));
  matches.next().is_some() && matches.next().is_none()
}
