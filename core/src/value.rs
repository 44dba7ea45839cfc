//! Type-erased property values.

use alloc::sync::Arc;
use core::any::{Any, type_name};
use core::fmt::Debug;

/// An immutable, type-erased property value.
///
/// Cloning a `Value` shares the underlying allocation, so property maps can be
/// copied between layers without copying the values they hold.
#[derive(Clone)]
pub struct Value {
    inner: Arc<dyn Any + Send + Sync>,
    type_name: &'static str,
}

impl Value {
    /// Wraps `value` so it can be stored in a [`PropMap`](crate::PropMap).
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self {
            inner: Arc::new(value),
            type_name: type_name::<T>(),
        }
    }

    /// Returns a reference to the stored value if it has type `T`.
    #[must_use]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }

    /// Returns `true` if the stored value has type `T`.
    #[must_use]
    pub fn is<T: Any>(&self) -> bool {
        self.inner.is::<T>()
    }

    /// The type name of the stored value.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Returns `true` if both values share the same allocation.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Debug for Value {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Value({})", self.type_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::string::String;

    #[test]
    fn downcasts_to_stored_type() {
        let value = Value::new(42_i32);
        assert_eq!(value.downcast_ref::<i32>(), Some(&42));
        assert!(value.downcast_ref::<i64>().is_none());
        assert!(value.is::<i32>());
    }

    #[test]
    fn clones_share_allocation() {
        let value = Value::new(String::from("shared"));
        let copy = value.clone();
        assert!(value.ptr_eq(&copy));
        assert!(!value.ptr_eq(&Value::new(String::from("shared"))));
    }

    #[test]
    fn debug_prints_type_name() {
        assert_eq!(format!("{:?}", Value::new(1_u8)), "Value(u8)");
    }
}
