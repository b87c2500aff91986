//! Higher-order operations over slices.
//!
//! Every function borrows its input and returns a freshly built result; the
//! input slice is never modified. Partitioning operations come in two forms: a
//! materialising form returning `Vec<&[T]>` and an `each_*` form that hands
//! each partition to a callback. The materialising forms and the
//! `map_*`/`flat_map_*`/`filter_map_*` combinators in [`mappers`] are all built
//! on top of the `each_*` traversals, so they always agree.

pub mod each;
pub mod error;
pub mod mappers;
pub mod ordered;
pub mod predicate;
pub mod reducers;

pub use each::*;
pub use error::{
  PartitionError,
  Result,
};
pub use mappers::*;
pub use ordered::*;
pub use predicate::*;
pub use reducers::*;
