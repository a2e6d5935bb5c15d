//! Optional value container
//!
//! `Opt<A>` holds either exactly one value (`Some`) or nothing (`None`).
//! Values are never mutated after construction; every transformation
//! consumes the receiver and produces a new `Opt`.

mod encoding;

use std::fmt;

/// A value that is either present or absent.
///
/// On the wire an `Opt` is transparent: `Some(x)` encodes exactly as `x`
/// and `None` encodes as `null`. See the `encoding` module for details.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opt<A> {
    Some(A),
    None,
}

impl<A> Opt<A> {
    /// Wrap a value
    pub fn some(value: A) -> Self {
        Opt::Some(value)
    }

    /// The empty option
    pub fn none() -> Self {
        Opt::None
    }

    /// Return the wrapped value.
    ///
    /// # Panics
    ///
    /// Panics if the option is empty. Only call this where presence has
    /// already been established; use [`Opt::get_or_else`], [`Opt::map`] or
    /// [`Opt::flat_map`] when absence is an expected case.
    #[track_caller]
    pub fn get(self) -> A {
        match self {
            Opt::Some(value) => value,
            Opt::None => panic!("no value in Option!"),
        }
    }

    /// Return the wrapped value, or `default` when empty
    pub fn get_or_else(self, default: A) -> A {
        match self {
            Opt::Some(value) => value,
            Opt::None => default,
        }
    }

    /// Like [`Opt::get_or_else`], but the default is only computed when needed
    pub fn get_or_else_with<F>(self, default: F) -> A
    where
        F: FnOnce() -> A,
    {
        match self {
            Opt::Some(value) => value,
            Opt::None => default(),
        }
    }

    pub fn is_defined(&self) -> bool {
        matches!(self, Opt::Some(_))
    }

    pub fn is_empty(&self) -> bool {
        !self.is_defined()
    }

    /// Apply `f` to the wrapped value. `f` is not called on `None`.
    pub fn map<B, F>(self, f: F) -> Opt<B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Opt::Some(value) => Opt::Some(f(value)),
            Opt::None => Opt::None,
        }
    }

    /// Apply `f` to the wrapped value and flatten the result.
    /// `f` is not called on `None`.
    pub fn flat_map<B, F>(self, f: F) -> Opt<B>
    where
        F: FnOnce(A) -> Opt<B>,
    {
        match self {
            Opt::Some(value) => f(value),
            Opt::None => Opt::None,
        }
    }

    /// Keep the value only if `predicate` accepts it
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&A) -> bool,
    {
        match self {
            Opt::Some(value) if predicate(&value) => Opt::Some(value),
            _ => Opt::None,
        }
    }

    /// Return `self` if defined, otherwise the option produced by `fallback`
    pub fn or_else<F>(self, fallback: F) -> Self
    where
        F: FnOnce() -> Opt<A>,
    {
        match self {
            Opt::Some(value) => Opt::Some(value),
            Opt::None => fallback(),
        }
    }

    /// Borrow the wrapped value without consuming the option
    pub fn as_ref(&self) -> Opt<&A> {
        match self {
            Opt::Some(value) => Opt::Some(value),
            Opt::None => Opt::None,
        }
    }

    pub fn into_option(self) -> Option<A> {
        self.into()
    }
}

/// Free-function form of [`Opt::map`]
pub fn map<A, B, F>(o: Opt<A>, f: F) -> Opt<B>
where
    F: FnOnce(A) -> B,
{
    o.map(f)
}

/// Free-function form of [`Opt::flat_map`]
pub fn flat_map<A, B, F>(o: Opt<A>, f: F) -> Opt<B>
where
    F: FnOnce(A) -> Opt<B>,
{
    o.flat_map(f)
}

impl<A> Default for Opt<A> {
    fn default() -> Self {
        Opt::None
    }
}

impl<A> From<Option<A>> for Opt<A> {
    fn from(value: Option<A>) -> Self {
        match value {
            Some(v) => Opt::Some(v),
            None => Opt::None,
        }
    }
}

impl<A> From<Opt<A>> for Option<A> {
    fn from(value: Opt<A>) -> Self {
        match value {
            Opt::Some(v) => Some(v),
            Opt::None => None,
        }
    }
}

// Renders the same shape as the JSON encoding.
impl<A: fmt::Display> fmt::Display for Opt<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Opt::Some(value) => write!(f, "{}", value),
            Opt::None => write!(f, "null"),
        }
    }
}
