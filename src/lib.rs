//! Optional values with a transparent JSON encoding
//!
//! [`Opt`] is a two-variant container (`Some` / `None`) with
//! `map`/`flat_map` style transformations. It serializes inline:
//! `Some(x)` as `x`, `None` as `null`.

pub mod codec;
pub mod option;

pub use codec::{Codec, CodecConfig};
pub use option::{Opt, flat_map, map};
