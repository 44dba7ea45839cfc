#![doc = include_str!("../README.md")]
#![allow(clippy::multiple_crate_versions)]

#[doc(inline)]
pub use cascade_core::*;

pub mod debug;
pub mod ext;
#[doc(inline)]
pub use ext::ComponentExt;

pub use cascade_tree as tree;

pub mod prelude {
    //! A collection of commonly used items for easy importing.
    //!
    //! Brings in the combinators, the component and props types, the
    //! construction macros, [`ComponentExt`](crate::ComponentExt) and the
    //! reference tree host.
    //!
    //! ```rust
    //! use cascade::prelude::*;
    //!
    //! let app: Component<Element> = comp![with_props(props! { "n" => 1 }), id()];
    //! assert!(app.render(PropMap::new()).snapshot().roots().is_empty());
    //! ```
    pub use super::*;
    pub use super::tree::{Element, Rendered, Snapshot, Tag, tag, text};
}

pub use tracing as log;
