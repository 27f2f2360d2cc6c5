//! Argument normalization.
//!
//! Source-API calls arrive with loosely typed arguments: a parameter may be
//! missing, `null`, a boolean, a number, a typed array or an object handle.
//! [`Arg`] captures those shapes as a tagged union and the normalizers in
//! [`normalize`] turn each one into the fixed type a driver call needs.
//!
//! Every normalizer is an exhaustive match over [`Arg`]; a shape a parameter
//! does not expect falls back to that parameter's default.

mod arg;
pub mod normalize;

pub use arg::{Arg, NumericSeq, NumericSeqMut};
pub use normalize::{to_int32, to_uint32};
