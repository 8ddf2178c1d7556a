//! Values produced by filter accessors.

use std::fmt::Display;

/// The runtime value of a filterable field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    /// A scalar value, rendered with the single-value operator.
    Single(String),
    /// A collection of values, rendered with the collection operator when
    /// more than one non-empty element remains.
    Collection(Vec<String>),
}

impl FilterValue {
    /// Build a scalar value from anything displayable.
    pub fn single(value: impl Display) -> Self {
        Self::Single(value.to_string())
    }

    /// Build a collection value from displayable elements.
    pub fn collection<I>(values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Display,
    {
        Self::Collection(values.into_iter().map(|v| v.to_string()).collect())
    }
}

/// Conversion from a request field into an optional [`FilterValue`].
///
/// `None` means the field is absent and no filter is emitted for it.
pub trait ToFilterValue {
    /// Convert the field into a filter value.
    fn to_filter_value(&self) -> Option<FilterValue>;
}

impl ToFilterValue for str {
    fn to_filter_value(&self) -> Option<FilterValue> {
        Some(FilterValue::Single(self.to_string()))
    }
}

impl ToFilterValue for String {
    fn to_filter_value(&self) -> Option<FilterValue> {
        self.as_str().to_filter_value()
    }
}

macro_rules! scalar_filter_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ToFilterValue for $ty {
                fn to_filter_value(&self) -> Option<FilterValue> {
                    Some(FilterValue::single(self))
                }
            }
        )*
    };
}

scalar_filter_value!(bool, u16, u32, u64, i32, i64);

impl<T: Display> ToFilterValue for [T] {
    fn to_filter_value(&self) -> Option<FilterValue> {
        Some(FilterValue::collection(self))
    }
}

impl<T: Display> ToFilterValue for Vec<T> {
    fn to_filter_value(&self) -> Option<FilterValue> {
        self.as_slice().to_filter_value()
    }
}

impl<T: ToFilterValue> ToFilterValue for Option<T> {
    fn to_filter_value(&self) -> Option<FilterValue> {
        self.as_ref().and_then(ToFilterValue::to_filter_value)
    }
}

impl<T: ToFilterValue + ?Sized> ToFilterValue for &T {
    fn to_filter_value(&self) -> Option<FilterValue> {
        (**self).to_filter_value()
    }
}
