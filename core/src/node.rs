//! The host contract.
//!
//! The combinators never look inside a rendered node. They only need a host
//! to produce an empty render and to group an ordered sequence of keyed
//! siblings into one node without a wrapping layer. Anything implementing
//! [`Node`] can be the output of a [`Component`](crate::Component).

use alloc::borrow::Cow;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt::Display;

/// Output of a component, supplied by the host rendering engine.
pub trait Node: Sized + 'static {
    /// A render that shows nothing.
    fn empty() -> Self;

    /// Combines ordered siblings into one node with no wrapper of its own.
    ///
    /// Order must be preserved. Every sibling carries a [`Key`] that is
    /// distinct among its siblings and stable across renders.
    fn group(children: Vec<Keyed<Self>>) -> Self;
}

/// Position identity of a grouped sibling.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Key(Cow<'static, str>);

impl Key {
    /// The first slot of a pair.
    pub const LEFT: Self = Self(Cow::Borrowed("l"));
    /// The second slot of a pair.
    pub const RIGHT: Self = Self(Cow::Borrowed("r"));

    /// Creates a key from any string.
    pub fn new(key: impl Into<Cow<'static, str>>) -> Self {
        Self(key.into())
    }

    /// A positional key, `"0"`, `"1"`, ...
    #[must_use]
    pub fn index(index: usize) -> Self {
        Self(Cow::Owned(index.to_string()))
    }

    /// The key as a string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Path key of `child` nested under `self`, joined with `.`.
    #[must_use]
    pub fn join(&self, child: &Self) -> Self {
        let mut path = String::with_capacity(self.0.len() + child.0.len() + 1);
        path.push_str(&self.0);
        path.push('.');
        path.push_str(&child.0);
        Self(Cow::Owned(path))
    }
}

impl Display for Key {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A node paired with its position key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyed<N> {
    /// Position identity among siblings.
    pub key: Key,
    /// The rendered sibling.
    pub node: N,
}

impl<N> Keyed<N> {
    /// Pairs `node` with `key`.
    pub const fn new(key: Key, node: N) -> Self {
        Self { key, node }
    }
}

/// A flat list of leaves. Grouping concatenates the children in order.
impl<T: 'static> Node for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }

    fn group(children: Vec<Keyed<Self>>) -> Self {
        children.into_iter().flat_map(|child| child.node).collect()
    }
}

/// Plain text. Grouping concatenates the children in order.
impl Node for String {
    fn empty() -> Self {
        Self::new()
    }

    fn group(children: Vec<Keyed<Self>>) -> Self {
        children.into_iter().map(|child| child.node).collect()
    }
}
