#![no_main]

mod common;

use libfuzzer_sys::fuzz_target;
use the_slices::{
  chunk,
  cons,
  filter_map_split_by,
  flat_map_chunk,
  map,
  map_cons,
  map_split_between,
  split_between,
  split_by,
};

use crate::common::{
  classify,
  split_input,
};

// Each combinator must agree with partitioning first and transforming the
// materialised partitions afterwards.
fuzz_target!(|data: &[u8]| {
  let Some((size, items)) = split_input(data) else {
    return;
  };

  let sums = |p: &[u8]| p.iter().map(|a| *a as u32).sum::<u32>();

  assert_eq!(
    map_cons(items, size, sums),
    map(&cons(items, size), |w| sums(*w))
  );
  assert_eq!(
    flat_map_chunk(items, size, |c| c.iter().rev().copied().collect::<Vec<_>>()),
    chunk(items, size)
      .iter()
      .flat_map(|c| c.iter().rev().copied())
      .collect::<Vec<_>>()
  );
  assert_eq!(
    map_split_between(items, |a, b| b < a, sums),
    map(&split_between(items, |a, b| b < a), |g| sums(*g))
  );
  assert_eq!(
    filter_map_split_by(items, classify(size), |g| g.get(1).copied()),
    split_by(items, classify(size))
      .iter()
      .filter_map(|g| g.get(1).copied())
      .collect::<Vec<_>>()
  );
});
