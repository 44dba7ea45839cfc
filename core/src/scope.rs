//! Combinators that rewrite the properties flowing down a chain.

use crate::component::Component;
use crate::compose::comp2;
use crate::node::Node;
use crate::props::{PropMap, Props, merge};

/// Renders the continuation with `extra` merged over the inherited
/// properties. Keys in `extra` win on conflict. Renders nothing of its own.
#[must_use]
pub fn with_props<N: Node>(extra: PropMap) -> Component<N> {
    Component::named("withProps", move |props: Props<N>| {
        let (children, rest) = props.split();
        children.invoke(Props::new(merge(&rest, &extra)))
    })
}

/// Renders `inner` detached from the inherited properties.
///
/// `inner` receives an empty map. Whatever it passes to its continuation is
/// merged with the inherited properties before reaching the continuation,
/// and the inherited properties win on conflicting keys.
#[must_use]
pub fn bypass<N: Node>(inner: Component<N>) -> Component<N> {
    Component::named("bypass", move |props: Props<N>| {
        let (children, rest) = props.split();
        let restore = comp2(with_props(rest), children);
        inner.invoke(Props::new(PropMap::new()).with_children(restore))
    })
}

/// Like [`bypass`], but `inner` sees the inherited properties directly.
///
/// The inherited properties are also merged, with priority, into whatever
/// `inner` passes to its continuation.
#[must_use]
pub fn forward<N: Node>(inner: Component<N>) -> Component<N> {
    Component::named("forward", move |props: Props<N>| {
        let (children, rest) = props.split();
        let restore = comp2(with_props(rest.clone()), children);
        inner.invoke(Props::new(rest).with_children(restore))
    })
}
