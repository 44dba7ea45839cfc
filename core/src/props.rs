//! Property maps and the props record a component receives.
//!
//! A [`PropMap`] is an open map from string keys to type-erased [`Value`]s.
//! Components are generic over the shape of their properties, so the map is
//! never a closed struct. [`Props`] pairs a map with the continuation the
//! component may render inside itself; the continuation is a typed field
//! rather than a reserved key.

use alloc::borrow::Cow;
use alloc::collections::BTreeMap;
use alloc::collections::btree_map;
use core::any::{Any, type_name};
use core::fmt::Debug;

use crate::component::Component;
use crate::error::PropError;
use crate::node::Node;
use crate::primitive::nil;
use crate::value::Value;

/// Key type of a [`PropMap`].
pub type PropKey = Cow<'static, str>;

/// An unordered mapping from string keys to property values.
///
/// Iteration follows key order, which keeps `Debug` output deterministic.
#[derive(Clone, Default)]
pub struct PropMap {
    entries: BTreeMap<PropKey, Value>,
}

impl PropMap {
    /// Creates an empty map.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Inserts `value` under `key`, returning the updated map.
    #[must_use]
    pub fn with<T: Any + Send + Sync>(mut self, key: impl Into<PropKey>, value: T) -> Self {
        self.insert(key, value);
        self
    }

    /// Inserts `value` under `key`, returning the previous value if any.
    pub fn insert<T: Any + Send + Sync>(
        &mut self,
        key: impl Into<PropKey>,
        value: T,
    ) -> Option<Value> {
        self.insert_value(key, Value::new(value))
    }

    /// Inserts an already erased value.
    pub fn insert_value(&mut self, key: impl Into<PropKey>, value: Value) -> Option<Value> {
        self.entries.insert(key.into(), value)
    }

    /// Removes the value stored under `key`.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.remove(key)
    }

    /// Returns the value under `key` if it exists and has type `T`.
    #[must_use]
    pub fn get<T: Any>(&self, key: &str) -> Option<&T> {
        self.entries.get(key).and_then(Value::downcast_ref)
    }

    /// Returns the value under `key` as `T`.
    ///
    /// # Errors
    ///
    /// Returns [`PropError::Missing`] when nothing is stored under `key` and
    /// [`PropError::TypeMismatch`] when the stored value is not a `T`.
    pub fn try_get<T: Any>(&self, key: &str) -> Result<&T, PropError> {
        let value = self.entries.get(key).ok_or_else(|| PropError::Missing {
            key: Cow::Owned(key.into()),
        })?;
        value
            .downcast_ref::<T>()
            .ok_or_else(|| PropError::TypeMismatch {
                key: Cow::Owned(key.into()),
                expected: type_name::<T>(),
                found: value.type_name(),
            })
    }

    /// Returns the erased value under `key`.
    #[must_use]
    pub fn value(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Returns `true` if a value is stored under `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Iterates over the keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|key| &**key)
    }

    /// Iterates over `(key, value)` pairs in key order.
    pub fn iter(&self) -> btree_map::Iter<'_, PropKey, Value> {
        self.entries.iter()
    }

    /// Number of stored properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the map holds no properties.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Combines `self` with `overrides`. On conflicting keys the value from
    /// `overrides` wins.
    #[must_use]
    pub fn merge(&self, overrides: &Self) -> Self {
        let mut merged = self.clone();
        merged.extend(overrides.iter().map(|(k, v)| (k.clone(), v.clone())));
        merged
    }
}

/// Combines two property maps; `overrides` wins on conflicting keys.
#[must_use]
pub fn merge(base: &PropMap, overrides: &PropMap) -> PropMap {
    base.merge(overrides)
}

impl Debug for PropMap {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_map().entries(self.entries.iter()).finish()
    }
}

impl<K: Into<PropKey>> FromIterator<(K, Value)> for PropMap {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K: Into<PropKey>> Extend<(K, Value)> for PropMap {
    fn extend<I: IntoIterator<Item = (K, Value)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.entries.insert(key.into(), value);
        }
    }
}

impl<'a> IntoIterator for &'a PropMap {
    type Item = (&'a PropKey, &'a Value);
    type IntoIter = btree_map::Iter<'a, PropKey, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// The record passed to a component: its properties plus the continuation
/// to render inside it.
pub struct Props<N> {
    /// Inherited properties.
    pub values: PropMap,
    /// What renders next, inside this component.
    pub children: Component<N>,
}

impl<N: Node> Props<N> {
    /// Creates props with no continuation. The continuation defaults to
    /// [`nil`], which renders nothing.
    #[must_use]
    pub fn new(values: PropMap) -> Self {
        Self {
            values,
            children: nil(),
        }
    }

    /// Creates props with no properties and no continuation.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(PropMap::new())
    }
}

impl<N> Props<N> {
    /// Replaces the continuation.
    #[must_use]
    pub fn with_children(mut self, children: Component<N>) -> Self {
        self.children = children;
        self
    }

    /// Separates the continuation from the remaining properties.
    #[must_use]
    pub fn split(self) -> (Component<N>, PropMap) {
        (self.children, self.values)
    }

    /// Shorthand for [`PropMap::get`] on the properties.
    #[must_use]
    pub fn get<T: Any>(&self, key: &str) -> Option<&T> {
        self.values.get(key)
    }

    /// Shorthand for [`PropMap::try_get`] on the properties.
    ///
    /// # Errors
    ///
    /// See [`PropMap::try_get`].
    pub fn try_get<T: Any>(&self, key: &str) -> Result<&T, PropError> {
        self.values.try_get(key)
    }
}

impl<N> Clone for Props<N> {
    fn clone(&self) -> Self {
        Self {
            values: self.values.clone(),
            children: self.children.clone(),
        }
    }
}

impl<N> Debug for Props<N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Props")
            .field("values", &self.values)
            .field("children", &self.children)
            .finish()
    }
}

impl<N: Node> From<PropMap> for Props<N> {
    fn from(values: PropMap) -> Self {
        Self::new(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;
    use alloc::vec::Vec;

    fn sample() -> PropMap {
        PropMap::new().with("a", 0_i32).with("c", 3_i32)
    }

    #[test]
    fn merge_override_wins() {
        let base = sample();
        let overrides = PropMap::new().with("a", 1_i32).with("b", 2_i32);
        let merged = merge(&base, &overrides);

        assert_eq!(merged.get::<i32>("a"), Some(&1));
        assert_eq!(merged.get::<i32>("b"), Some(&2));
        assert_eq!(merged.get::<i32>("c"), Some(&3));
        assert_eq!(merged.len(), 3);
        // inputs are untouched
        assert_eq!(base.get::<i32>("a"), Some(&0));
    }

    #[test]
    fn merge_with_empty_is_identity() {
        let base = sample();
        let merged = base.merge(&PropMap::new());
        assert_eq!(merged.keys().collect::<Vec<_>>(), ["a", "c"]);
        let merged = PropMap::new().merge(&base);
        assert_eq!(merged.keys().collect::<Vec<_>>(), ["a", "c"]);
    }

    #[test]
    fn try_get_reports_missing_and_mismatch() {
        let map = sample();
        assert_eq!(map.try_get::<i32>("c"), Ok(&3));
        assert_eq!(
            map.try_get::<i32>("zzz"),
            Err(PropError::Missing { key: "zzz".into() })
        );
        let err = map.try_get::<String>("a").unwrap_err();
        assert!(matches!(
            err,
            PropError::TypeMismatch { expected, found: "i32", .. } if expected == type_name::<String>()
        ));
    }

    #[test]
    fn insert_replaces_and_returns_previous() {
        let mut map = sample();
        let previous = map.insert("a", 10_i32);
        assert_eq!(previous.and_then(|v| v.downcast_ref::<i32>().copied()), Some(0));
        assert_eq!(map.get::<i32>("a"), Some(&10));
        assert!(map.remove("a").is_some());
        assert!(!map.contains_key("a"));
    }

    #[test]
    fn value_exposes_the_erased_entry() {
        let map = sample();
        assert_eq!(map.value("a").map(Value::type_name), Some("i32"));
        assert_eq!(map.value("a").and_then(Value::downcast_ref::<i32>), Some(&0));
        assert!(map.value("zzz").is_none());
    }

    #[test]
    fn props_split_separates_children() {
        let props: Props<Vec<i32>> = Props::new(sample());
        let (children, rest) = props.split();
        assert!(children.invoke(Props::empty()).is_empty());
        assert_eq!(rest.len(), 2);
    }

    #[test]
    fn collects_from_iterator() {
        let map: PropMap = [("x", Value::new(1_u8)), ("y", Value::new(2_u8))]
            .into_iter()
            .collect();
        assert_eq!(map.get::<u8>("y"), Some(&2));
    }
}
