//! Normalised renderings of an element tree.
//!
//! A snapshot is what a test renderer would serialise: fragments are
//! flattened into their parent, empty renders vanish and keys are dropped.
//! Two element trees are observationally equivalent exactly when their
//! snapshots are equal.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt::{self, Display};

use crate::element::Element;

/// A rendered leaf or element, after normalisation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Rendered {
    /// A text leaf.
    Text(String),
    /// A named element with normalised children.
    Tag {
        /// The element name.
        name: String,
        /// Children with fragments flattened.
        children: Vec<Rendered>,
    },
}

/// The normalised rendering of a whole tree.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Snapshot {
    /// Nothing was rendered.
    Null,
    /// A single root.
    One(Rendered),
    /// Several roots, in order.
    Many(Vec<Rendered>),
}

impl Snapshot {
    fn from_roots(mut roots: Vec<Rendered>) -> Self {
        match roots.len() {
            0 => Self::Null,
            1 => roots.pop().map_or(Self::Null, Self::One),
            _ => Self::Many(roots),
        }
    }

    /// The roots in order; empty for [`Snapshot::Null`].
    #[must_use]
    pub fn roots(&self) -> &[Rendered] {
        match self {
            Self::Null => &[],
            Self::One(root) => core::slice::from_ref(root),
            Self::Many(roots) => roots,
        }
    }
}

impl Element {
    /// Normalises this tree into a [`Snapshot`].
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        let mut roots = Vec::new();
        self.render_into(&mut roots);
        Snapshot::from_roots(roots)
    }

    fn render_into(&self, out: &mut Vec<Rendered>) {
        match self {
            Self::Empty => {}
            Self::Text(content) => out.push(Rendered::Text(content.clone())),
            Self::Tag(tag) => {
                let mut children = Vec::new();
                for child in tag.child_nodes() {
                    child.render_into(&mut children);
                }
                out.push(Rendered::Tag {
                    name: tag.name().to_string(),
                    children,
                });
            }
            Self::Fragment(items) => {
                for item in items {
                    item.node.render_into(out);
                }
            }
        }
    }
}

impl Display for Rendered {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(content) => f.write_str(content),
            Self::Tag { name, children } => {
                write!(f, "<{name}>")?;
                for child in children {
                    Display::fmt(child, f)?;
                }
                write!(f, "</{name}>")
            }
        }
    }
}

impl Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for root in self.roots() {
            Display::fmt(root, f)?;
        }
        Ok(())
    }
}
