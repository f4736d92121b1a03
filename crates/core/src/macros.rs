//! Macros for building props maps inline.

/// Build a [`Props`](crate::Props) map from `"name" => value` pairs.
///
/// Values go through `Into<PropValue>`, so strings, numbers, booleans, and
/// prebuilt [`PropValue`](crate::PropValue)s all work. Duplicate names keep
/// the last write.
///
/// # Examples
/// ```
/// use weft_core::{props, PropValue};
///
/// let props = props! {
///     "className" => "container",
///     "title" => "greeting",
///     "onClick" => PropValue::handler(|_ctx| {}),
/// };
/// assert_eq!(props.len(), 3);
/// ```
#[macro_export]
macro_rules! props {
    () => {
        $crate::Props::new()
    };
    ($($name:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::Props::new();
        $(
            map.insert(
                ::std::string::String::from($name),
                $crate::PropValue::from($value),
            );
        )+
        map
    }};
}
