//! Errors raised when reading properties.

use alloc::borrow::Cow;

/// Error returned by [`PropMap::try_get`](crate::PropMap::try_get).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PropError {
    /// No value is stored under the key.
    #[error("missing property `{key}`")]
    Missing {
        /// The key that was looked up.
        key: Cow<'static, str>,
    },
    /// A value is stored under the key, but with a different type.
    #[error("property `{key}` holds `{found}`, expected `{expected}`")]
    TypeMismatch {
        /// The key that was looked up.
        key: Cow<'static, str>,
        /// The requested type.
        expected: &'static str,
        /// The type actually stored.
        found: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_missing_display() {
        let error = PropError::Missing { key: "foo".into() };
        assert_eq!(error.to_string(), "missing property `foo`");
    }

    #[test]
    fn test_mismatch_display() {
        let error = PropError::TypeMismatch {
            key: "foo".into(),
            expected: "i32",
            found: "alloc::string::String",
        };
        assert_eq!(
            error.to_string(),
            "property `foo` holds `alloc::string::String`, expected `i32`"
        );
    }
}
