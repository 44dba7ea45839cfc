//! The two leaves of the algebra.

use crate::component::Component;
use crate::node::Node;
use crate::props::Props;

/// The identity leaf.
///
/// Renders its continuation with every other inherited property. The
/// continuation is given no continuation of its own. `id()` is a two-sided
/// identity for [`comp2`](crate::comp2).
#[must_use]
pub fn id<N: Node>() -> Component<N> {
    Component::named("Id", |props: Props<N>| {
        let (children, rest) = props.split();
        children.invoke(Props::new(rest))
    })
}

/// The empty leaf.
///
/// Renders nothing and never touches its continuation, truncating the
/// pipeline. `nil()` is a two-sided identity for [`concat2`](crate::concat2).
#[must_use]
pub fn nil<N: Node>() -> Component<N> {
    Component::named("Nil", |_: Props<N>| N::empty())
}
