//! The element tree produced by components rendered against this host.

use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec::Vec;

use cascade_core::{Key, Keyed, Node};

/// A node of the reference render tree.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Element {
    /// Renders nothing.
    #[default]
    Empty,
    /// A text leaf.
    Text(String),
    /// A named element with children, such as `div`.
    Tag(Tag),
    /// Keyed siblings with no wrapper of their own.
    Fragment(Vec<Keyed<Element>>),
}

impl Element {
    /// Groups `children` into a fragment with positional keys.
    pub fn fragment(children: impl IntoIterator<Item = impl Into<Self>>) -> Self {
        Self::Fragment(
            children
                .into_iter()
                .enumerate()
                .map(|(index, child)| Keyed::new(Key::index(index), child.into()))
                .collect(),
        )
    }

    /// Returns `true` for [`Element::Empty`].
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// The top-level siblings of this element once fragments are flattened.
    ///
    /// Each sibling is keyed by the path of fragment keys leading to it, so
    /// keys are distinct and stay the same across renders of the same
    /// component. Empty renders are dropped and a bare root gets key `"0"`.
    #[must_use]
    pub fn flatten(&self) -> Vec<Keyed<Self>> {
        let mut out = Vec::new();
        self.flatten_under(None, &mut out);
        out
    }

    fn flatten_under(&self, prefix: Option<&Key>, out: &mut Vec<Keyed<Self>>) {
        match self {
            Self::Empty => {}
            Self::Fragment(items) => {
                for item in items {
                    let key = prefix.map_or_else(|| item.key.clone(), |p| p.join(&item.key));
                    item.node.flatten_under(Some(&key), out);
                }
            }
            leaf => out.push(Keyed::new(
                prefix.cloned().unwrap_or_else(|| Key::index(0)),
                leaf.clone(),
            )),
        }
    }
}

impl Node for Element {
    fn empty() -> Self {
        Self::Empty
    }

    fn group(children: Vec<Keyed<Self>>) -> Self {
        Self::Fragment(children)
    }
}

impl From<String> for Element {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for Element {
    fn from(value: &str) -> Self {
        Self::Text(value.into())
    }
}

impl From<Tag> for Element {
    fn from(value: Tag) -> Self {
        Self::Tag(value)
    }
}

/// A named element and its children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    name: Cow<'static, str>,
    children: Vec<Element>,
}

impl Tag {
    /// Creates an element named `name` with no children.
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    /// Appends a child.
    #[must_use]
    pub fn child(mut self, child: impl Into<Element>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Appends several children.
    #[must_use]
    pub fn children(mut self, children: impl IntoIterator<Item = impl Into<Element>>) -> Self {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    /// The element name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The children in order.
    #[must_use]
    pub fn child_nodes(&self) -> &[Element] {
        &self.children
    }
}

/// Creates a text leaf.
pub fn text(content: impl Into<String>) -> Element {
    Element::Text(content.into())
}

/// Starts a named element, such as `tag("div")`.
pub fn tag(name: impl Into<Cow<'static, str>>) -> Tag {
    Tag::new(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn group_keeps_keys_and_order() {
        let grouped = Element::group(vec![
            Keyed::new(Key::LEFT, text("a")),
            Keyed::new(Key::RIGHT, text("b")),
        ]);
        let Element::Fragment(items) = grouped else {
            panic!("group should produce a fragment");
        };
        assert_eq!(items[0].key, Key::LEFT);
        assert_eq!(items[1].node, text("b"));
    }

    #[test]
    fn flatten_joins_key_paths() {
        let tree = Element::group(vec![
            Keyed::new(
                Key::LEFT,
                Element::group(vec![
                    Keyed::new(Key::LEFT, Element::Empty),
                    Keyed::new(Key::RIGHT, text("x")),
                ]),
            ),
            Keyed::new(Key::RIGHT, tag("div").child("y").into()),
        ]);
        let flat = tree.flatten();
        let keys: Vec<&str> = flat.iter().map(|item| item.key.as_str()).collect();
        assert_eq!(keys, ["l.r", "r"]);
        assert_eq!(flat[0].node, text("x"));
    }

    #[test]
    fn flatten_of_leaf_and_empty() {
        assert_eq!(text("a").flatten(), [Keyed::new(Key::index(0), text("a"))]);
        assert!(Element::Empty.flatten().is_empty());
    }

    #[test]
    fn fragment_uses_positional_keys() {
        let Element::Fragment(items) = Element::fragment(["a", "b"]) else {
            panic!("expected a fragment");
        };
        assert_eq!(items[1].key.as_str(), "1");
    }
}
