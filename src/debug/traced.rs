use std::borrow::Cow;

use cascade_core::{Component, Node, Props};

/// Wraps `inner` so every render runs inside a `trace`-level span.
///
/// The span is named `component` and records `name` and the number of
/// inherited properties. A `trace!` event lists the property keys. The
/// rendered output is exactly what `inner` renders.
#[must_use]
pub fn traced<N: Node>(name: impl Into<Cow<'static, str>>, inner: Component<N>) -> Component<N> {
    let name = name.into();
    Component::named(name.clone(), move |props: Props<N>| {
        let span = tracing::trace_span!("component", name = %name, props = props.values.len());
        let _entered = span.enter();
        tracing::trace!(keys = ?props.values.keys().collect::<Vec<_>>(), "render");
        inner.invoke(props)
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use cascade_core::{PropMap, comp, with_props};
    use cascade_tree::{Element, text};
    use tracing::span::{Attributes, Id};
    use tracing::Subscriber;
    use tracing_subscriber::layer::{Context, Layer};
    use tracing_subscriber::prelude::*;

    use super::*;

    struct CountSpans(Arc<AtomicUsize>);

    impl<S: Subscriber> Layer<S> for CountSpans {
        fn on_new_span(&self, _attrs: &Attributes<'_>, _id: &Id, _ctx: Context<'_, S>) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn label() -> Component<Element> {
        Component::new(|props: Props<Element>| {
            text(format!("n={}", props.get::<i32>("n").copied().unwrap_or(0)))
        })
    }

    #[test]
    fn output_is_unchanged() {
        let plain = comp([with_props(PropMap::new().with("n", 3_i32)), label()]);
        let wrapped = comp([
            with_props(PropMap::new().with("n", 3_i32)),
            traced("label", label()),
        ]);
        assert_eq!(
            plain.invoke(Props::empty()).snapshot(),
            wrapped.invoke(Props::empty()).snapshot()
        );
    }

    #[test]
    fn one_span_per_render() {
        let count = Arc::new(AtomicUsize::new(0));
        let subscriber = tracing_subscriber::registry().with(CountSpans(Arc::clone(&count)));
        let component = traced("label", label());

        tracing::subscriber::with_default(subscriber, || {
            component.invoke(Props::empty());
            component.invoke(Props::empty());
        });
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn carries_name() {
        assert_eq!(traced("label", label()).name(), Some("label"));
    }
}
