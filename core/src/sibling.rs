//! Sibling placement and flattening.

use alloc::vec;
use alloc::vec::Vec;

use crate::component::Component;
use crate::compose::comp2;
use crate::node::{Key, Keyed, Node};
use crate::primitive::nil;
use crate::props::Props;
use crate::scope::forward;

/// Renders `content` as a sibling right after the continuation.
///
/// `content` receives the inherited properties and no continuation. The
/// continuation renders first, with no properties.
#[must_use]
pub fn before<N: Node>(content: Component<N>) -> Component<N> {
    Component::named("before", move |props: Props<N>| {
        let (children, rest) = props.split();
        N::group(vec![
            Keyed::new(Key::LEFT, children.invoke(Props::empty())),
            Keyed::new(Key::RIGHT, content.invoke(Props::new(rest))),
        ])
    })
}

/// Renders `content` as a sibling right before the continuation.
///
/// `content` receives the inherited properties and no continuation. The
/// continuation renders second, with no properties.
#[must_use]
pub fn after<N: Node>(content: Component<N>) -> Component<N> {
    Component::named("after", move |props: Props<N>| {
        let (children, rest) = props.split();
        N::group(vec![
            Keyed::new(Key::LEFT, content.invoke(Props::new(rest))),
            Keyed::new(Key::RIGHT, children.invoke(Props::empty())),
        ])
    })
}

/// Renders `first` and then `second` as flat siblings, both with the
/// inherited properties. `second` receives the original continuation.
#[must_use]
pub fn concat2<N: Node>(first: Component<N>, second: Component<N>) -> Component<N> {
    comp2(forward(after(first)), second)
}

/// Renders every component as a flat, ordered sequence of siblings, each
/// with the same inherited properties. An empty sequence yields [`nil`].
///
/// Observably the same as folding [`concat2`] from [`nil`]: only the last
/// component receives the original continuation, the others get none. The
/// siblings form a single group keyed by position, so rendering depth does
/// not grow with their number.
#[must_use]
pub fn concat<N, I>(components: I) -> Component<N>
where
    N: Node,
    I: IntoIterator<Item = Component<N>>,
{
    let components: Vec<Component<N>> = components.into_iter().collect();
    if components.is_empty() {
        return nil();
    }
    Component::named("concat", move |props: Props<N>| {
        let (children, rest) = props.split();
        let last = components.len() - 1;
        N::group(
            components
                .iter()
                .enumerate()
                .map(|(index, component)| {
                    let props = Props::new(rest.clone());
                    let props = if index == last {
                        props.with_children(children.clone())
                    } else {
                        props
                    };
                    Keyed::new(Key::index(index), component.invoke(props))
                })
                .collect(),
        )
    })
}
