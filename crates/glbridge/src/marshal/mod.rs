//! Numeric buffer marshalling.
//!
//! Converts caller sequences into [`NativeBuffer`]s for exactly one driver
//! call and copies read-back results into caller-owned storage. Buffers are
//! never pooled; each call builds its own and drops it afterwards.

mod buffer;
mod convert;

pub use buffer::{ElementKind, NativeBuffer};
pub use convert::{
    destination_for, from_signed_byte, natural_kind, read_back, to_signed_byte, write, write_natural,
};
