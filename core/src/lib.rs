//! Core component algebra for `cascade`.
//!
//! A [`Component`] is a pure function from [`Props`] to a host [`Node`]. The
//! props carry a property map and a continuation, the component that
//! renders next, inside the current one. Every combinator in this crate
//! takes components and returns a component:
//!
//! - [`id`] and [`nil`], the identity leaves of nesting and flattening,
//! - [`comp2`] / [`comp`], parent→child→grandchild nesting,
//! - [`with_props`], [`bypass`] and [`forward`], which reshape the
//!   properties a layer sees and passes on,
//! - [`before`] / [`after`], which splice content next to a continuation,
//! - [`concat2`] / [`concat`], which flatten components into siblings.
//!
//! Rendering is an ordinary synchronous call. Nothing is cached and nothing
//! is mutated, so the same component can be rendered from many threads.
//!
//! # Example
//!
//! ```
//! use cascade_core::{Component, Props, comp, props, with_props};
//!
//! let greet = Component::new(|props: Props<String>| {
//!     format!("hello {}", props.get::<&str>("name").copied().unwrap_or("?"))
//! });
//! let app = comp([with_props(props! { "name" => "world" }), greet]);
//!
//! assert_eq!(app.invoke(Props::empty()), "hello world");
//! ```

#![no_std]

extern crate alloc;

#[macro_use]
mod macros;
pub mod component;
pub mod compose;
pub mod error;
pub mod node;
pub mod primitive;
pub mod props;
pub mod scope;
pub mod sibling;
pub mod value;

pub use component::{Component, invoke};
pub use compose::{comp, comp2};
pub use error::PropError;
pub use node::{Key, Keyed, Node};
pub use primitive::{id, nil};
pub use props::{PropKey, PropMap, Props, merge};
pub use scope::{bypass, forward, with_props};
pub use sibling::{after, before, concat, concat2};
pub use value::Value;
