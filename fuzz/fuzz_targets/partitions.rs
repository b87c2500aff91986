#![no_main]

mod common;

use libfuzzer_sys::fuzz_target;
use the_slices::{
  chunk,
  cons,
  split_between,
  split_by,
  zip_slices,
};

use crate::common::{
  classify,
  split_input,
};

fuzz_target!(|data: &[u8]| {
  let Some((size, items)) = split_input(data) else {
    return;
  };

  let chunks = chunk(items, size);
  assert_eq!(chunks.concat(), items);
  if let Some((last, init)) = chunks.split_last() {
    assert!(init.iter().all(|c| c.len() == size));
    assert!(!last.is_empty() && last.len() <= size);
  }

  let windows = cons(items, size);
  assert_eq!(windows.len(), (items.len() + 1).saturating_sub(size));
  for (i, w) in windows.iter().enumerate() {
    assert_eq!(*w, &items[i..i + size]);
  }

  let groups = split_between(items, |a, b| b < a);
  assert_eq!(groups.concat(), items);
  assert!(groups.iter().skip(1).all(|g| !g.is_empty()));

  let runs = split_by(items, classify(size));
  assert_eq!(runs.concat(), items);
  assert!(runs.iter().all(|g| !g.is_empty()));

  let (left, right) = items.split_at(items.len() / 2);
  let tuples = zip_slices(&[left, right]);
  assert_eq!(tuples.len(), left.len().min(right.len()));
});
