//! Transparent serde encoding for `Opt`
//!
//! `Some(x)` is written as `x` with no wrapper or tag, `None` is written as
//! `null`. Reading is the inverse: `null` yields `None`, anything else is
//! handed to `A`'s own deserializer and its error, if any, is returned as-is.
//!
//! The encoding cannot tell `None` apart from `Some(v)` when `v` itself
//! encodes as `null` (e.g. `Opt<Opt<A>>` or `Opt<()>`). Such values come
//! back as `None`.

use super::Opt;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

impl<A: Serialize> Serialize for Opt<A> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Opt::Some(value) => serializer.serialize_some(value),
            Opt::None => serializer.serialize_none(),
        }
    }
}

impl<'de, A: Deserialize<'de>> Deserialize<'de> for Opt<A> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<A>::deserialize(deserializer).map(Opt::from)
    }
}
