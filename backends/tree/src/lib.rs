//! Reference render tree host for `cascade`.
//!
//! [`Element`] implements [`Node`](cascade_core::Node), so any component can
//! be rendered into it. Grouping produces a keyed [`Element::Fragment`];
//! [`Element::snapshot`] normalises a tree the way a test renderer would,
//! and [`Element::flatten`] lists the top-level siblings with their key
//! paths.
//!
//! ```
//! use cascade_core::{Component, PropMap, Props, concat};
//! use cascade_tree::{Element, text};
//!
//! let foo = Component::new(|p: Props<Element>| text(format!("foo:{}", p.get::<i32>("foo").unwrap_or(&0))));
//! let bar = Component::new(|p: Props<Element>| text(format!("bar:{}", p.get::<i32>("bar").unwrap_or(&0))));
//!
//! let rendered = concat([foo, bar]).invoke(Props::new(PropMap::new().with("foo", 1).with("bar", 2)));
//! assert_eq!(rendered.snapshot(), Element::fragment(["foo:1", "bar:2"]).snapshot());
//! ```

#![no_std]

extern crate alloc;

pub mod element;
pub mod snapshot;

pub use element::{Element, Tag, tag, text};
pub use snapshot::{Rendered, Snapshot};
