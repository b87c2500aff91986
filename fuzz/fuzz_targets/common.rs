const MAX_SIZE: usize = 16;

/// Splits fuzzer input into a partition size and the sequence to partition.
pub fn split_input(data: &[u8]) -> Option<(usize, &[u8])> {
  let (&size, items) = data.split_first()?;
  Some((size as usize % MAX_SIZE + 1, items))
}

/// Classifier shared by the split targets, derived from the size byte so that
/// run lengths vary between inputs.
pub fn classify(size: usize) -> impl Fn(&u8) -> u8 {
  let divisor = size as u8 * 8;
  move |a: &u8| a / divisor
}
