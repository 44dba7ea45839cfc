//! The component type every combinator is closed over.

use alloc::borrow::Cow;
use alloc::sync::Arc;
use core::fmt::Debug;

use crate::props::Props;

type RenderFn<N> = dyn Fn(Props<N>) -> N + Send + Sync;

/// A pure function from [`Props`] to a rendered node.
///
/// Components are immutable once created. Cloning one shares the same
/// function, so a component can be captured by any number of combinators
/// and rendered from any number of threads at once.
pub struct Component<N> {
    render: Arc<RenderFn<N>>,
    name: Option<Cow<'static, str>>,
}

impl<N> Component<N> {
    /// Creates a component from a render function.
    pub fn new<F>(render: F) -> Self
    where
        F: Fn(Props<N>) -> N + Send + Sync + 'static,
    {
        Self {
            render: Arc::new(render),
            name: None,
        }
    }

    /// Creates a component that reports `name` in its `Debug` output.
    pub fn named<F>(name: impl Into<Cow<'static, str>>, render: F) -> Self
    where
        F: Fn(Props<N>) -> N + Send + Sync + 'static,
    {
        Self {
            render: Arc::new(render),
            name: Some(name.into()),
        }
    }

    /// Renders the component with `props`.
    pub fn invoke(&self, props: Props<N>) -> N {
        (self.render)(props)
    }

    /// The display name, if one was given.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns `true` if both components share the same render function.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.render, &other.render)
    }
}

/// Renders `component` with `props`.
pub fn invoke<N>(component: &Component<N>, props: Props<N>) -> N {
    component.invoke(props)
}

impl<N> Clone for Component<N> {
    fn clone(&self) -> Self {
        Self {
            render: Arc::clone(&self.render),
            name: self.name.clone(),
        }
    }
}

impl<N> Debug for Component<N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match &self.name {
            Some(name) => write!(f, "Component({name})"),
            None => f.write_str("Component"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PropMap;
    use alloc::format;
    use alloc::string::String;

    fn greeting() -> Component<String> {
        Component::named("Greeting", |props: Props<String>| {
            let name = props.get::<&str>("name").copied().unwrap_or("nobody");
            format!("hello {name}")
        })
    }

    #[test]
    fn invoke_calls_render_function() {
        let props = Props::new(PropMap::new().with("name", "water"));
        assert_eq!(invoke(&greeting(), props), "hello water");
        assert_eq!(greeting().invoke(Props::empty()), "hello nobody");
    }

    #[test]
    fn clone_shares_render_function() {
        let component = greeting();
        let copy = component.clone();
        assert!(component.ptr_eq(&copy));
        assert!(!component.ptr_eq(&greeting()));
    }

    #[test]
    fn debug_uses_name() {
        assert_eq!(format!("{:?}", greeting()), "Component(Greeting)");
        let anonymous = Component::new(|_: Props<String>| String::new());
        assert_eq!(format!("{anonymous:?}"), "Component");
    }
}
