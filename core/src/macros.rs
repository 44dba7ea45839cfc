/// Builds a [`PropMap`](crate::PropMap) from `key => value` pairs.
///
/// ```
/// use cascade_core::props;
///
/// let map = props! { "foo" => 100, "label" => "hi" };
/// assert_eq!(map.get::<i32>("foo"), Some(&100));
/// assert_eq!(map.get::<&str>("label"), Some(&"hi"));
/// assert!(props!().is_empty());
/// ```
#[macro_export]
macro_rules! props {
    () => {
        $crate::PropMap::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        $crate::PropMap::new()$(.with($key, $value))+
    };
}

/// Nests components left to right, see [`comp`](crate::comp).
///
/// `comp![]` is [`id`](crate::id).
#[macro_export]
macro_rules! comp {
    () => {
        $crate::id()
    };
    ($($component:expr),+ $(,)?) => {
        $crate::comp([$($component),+])
    };
}

/// Renders components as flat siblings, see [`concat`](crate::concat).
///
/// `siblings![]` is [`nil`](crate::nil).
#[macro_export]
macro_rules! siblings {
    () => {
        $crate::nil()
    };
    ($($component:expr),+ $(,)?) => {
        $crate::concat([$($component),+])
    };
}
