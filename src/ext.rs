//! Fluent methods for building component chains.
//!
//! Every method is a thin alias for one of the free combinators, so
//! `header.then(body)` and `comp2(header, body)` build the same component.

use std::borrow::Cow;

use cascade_core::{Component, Node, PropMap, Props};

/// Extension trait for components, adding the combinators as methods.
pub trait ComponentExt<N: Node>: Into<Component<N>> + Sized {
    /// Nests `inner` inside `self`, see [`comp2`](cascade_core::comp2).
    fn then(self, inner: impl Into<Component<N>>) -> Component<N> {
        cascade_core::comp2(self.into(), inner.into())
    }

    /// Renders `self` with `extra` merged over the inherited properties.
    fn with_props(self, extra: PropMap) -> Component<N> {
        cascade_core::comp2(cascade_core::with_props(extra), self.into())
    }

    /// Isolates `self` from inherited properties, see [`bypass`](cascade_core::bypass).
    fn bypassed(self) -> Component<N> {
        cascade_core::bypass(self.into())
    }

    /// Shows `self` the inherited properties and reasserts them for what
    /// follows, see [`forward`](cascade_core::forward).
    fn forwarded(self) -> Component<N> {
        cascade_core::forward(self.into())
    }

    /// Places `self` as a sibling before the continuation, see
    /// [`after`](cascade_core::after).
    fn leading(self) -> Component<N> {
        cascade_core::after(self.into())
    }

    /// Places `self` as a sibling after the continuation, see
    /// [`before`](cascade_core::before).
    fn trailing(self) -> Component<N> {
        cascade_core::before(self.into())
    }

    /// Renders `next` as a flat sibling after `self`, see
    /// [`concat2`](cascade_core::concat2).
    fn alongside(self, next: impl Into<Component<N>>) -> Component<N> {
        cascade_core::concat2(self.into(), next.into())
    }

    /// Wraps `self` in a tracing span, see [`traced`](crate::debug::traced).
    fn traced(self, name: impl Into<Cow<'static, str>>) -> Component<N> {
        crate::debug::traced(name, self.into())
    }

    /// Renders `self` with `values` and no continuation.
    fn render(self, values: PropMap) -> N {
        self.into().invoke(Props::new(values))
    }
}

impl<N: Node> ComponentExt<N> for Component<N> {}
