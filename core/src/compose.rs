//! Sequential nesting.

use crate::component::Component;
use crate::node::Node;
use crate::primitive::id;
use crate::props::Props;

/// Nests `inner` inside `outer`.
///
/// `outer` renders first with the inherited properties. Whenever it invokes
/// its continuation, `inner` renders in that spot with the properties
/// `outer` chose, and `inner` in turn receives the original continuation.
/// How often `outer` renders its continuation, and with what, is up to
/// `outer`.
#[must_use]
pub fn comp2<N: Node>(outer: Component<N>, inner: Component<N>) -> Component<N> {
    Component::named("comp", move |props: Props<N>| {
        let (tail, rest) = props.split();
        let inner = inner.clone();
        let next = Component::new(move |passed: Props<N>| {
            inner.invoke(Props {
                values: passed.values,
                children: tail.clone(),
            })
        });
        outer.invoke(Props {
            values: rest,
            children: next,
        })
    })
}

/// Nests each component inside the previous one, left to right.
///
/// `comp([a, b, c])` renders `a` outermost and `c` innermost. An empty
/// sequence yields [`id`].
#[must_use]
pub fn comp<N, I>(components: I) -> Component<N>
where
    N: Node,
    I: IntoIterator<Item = Component<N>>,
{
    components.into_iter().fold(id(), comp2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PropMap, nil};
    use alloc::format;
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    type Lines = Vec<String>;

    /// Emits `label` and then renders its continuation with `depth + 1`.
    fn layer(label: &'static str) -> Component<Lines> {
        Component::new(move |props: Props<Lines>| {
            let depth = props.get::<u32>("depth").copied().unwrap_or(0);
            let mut out = vec![format!("{label}@{depth}")];
            out.extend(
                props
                    .children
                    .invoke(Props::new(PropMap::new().with("depth", depth + 1))),
            );
            out
        })
    }

    #[test]
    fn chain_renders_outer_to_inner() {
        let chain = comp([layer("a"), layer("b"), layer("c")]);
        assert_eq!(chain.invoke(Props::empty()), ["a@0", "b@1", "c@2"]);
    }

    #[test]
    fn tail_stays_reachable() {
        let tail = Component::new(|props: Props<Lines>| {
            vec![format!("tail@{}", props.get::<u32>("depth").copied().unwrap_or(0))]
        });
        let chain = comp([layer("a"), layer("b")]);
        let rendered = chain.invoke(Props::empty().with_children(tail));
        assert_eq!(rendered, ["a@0", "b@1", "tail@2"]);
    }

    #[test]
    fn outer_decides_how_often_inner_renders() {
        let twice = Component::new(|props: Props<Lines>| {
            let mut out = props.children.invoke(Props::empty());
            out.extend(props.children.invoke(Props::empty()));
            out
        });
        let never = Component::new(|_: Props<Lines>| vec![String::from("never")]);
        let leaf = Component::new(|_: Props<Lines>| vec![String::from("leaf")]);

        assert_eq!(comp2(twice, leaf.clone()).invoke(Props::empty()), ["leaf", "leaf"]);
        assert_eq!(comp2(never, leaf).invoke(Props::empty()), ["never"]);
    }

    #[test]
    fn empty_chain_is_identity() {
        let leaf = Component::new(|_: Props<Lines>| vec![String::from("leaf")]);
        assert_eq!(comp([]).invoke(Props::empty().with_children(leaf)), ["leaf"]);
        assert!(comp([nil::<Lines>()]).invoke(Props::empty()).is_empty());
    }
}
