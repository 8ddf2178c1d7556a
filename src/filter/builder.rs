//! Projection of a request's filter fields onto outgoing query parameters.

use url::Url;

use crate::error::Result;
use crate::filter::descriptor::FilterDescriptor;
use crate::filter::value::FilterValue;

/// The query parameter name Cloud Foundry v2 uses for filters.
pub const FILTER_PARAMETER: &str = "q";

/// Reads the value of one filterable field from a request.
pub type FilterAccessor<T> = fn(&T) -> Result<Option<FilterValue>>;

/// One entry of a request's filter table.
pub struct FilterParameter<T> {
    name: &'static str,
    descriptor: FilterDescriptor,
    accessor: FilterAccessor<T>,
}

impl<T> FilterParameter<T> {
    /// Declare a filterable field.
    ///
    /// `name` identifies the accessor and decides emission order; it does not
    /// appear in the query.
    pub fn new(
        name: &'static str,
        descriptor: FilterDescriptor,
        accessor: FilterAccessor<T>,
    ) -> Self {
        Self {
            name,
            descriptor,
            accessor,
        }
    }

    /// The accessor name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The descriptor attached to this accessor.
    pub fn descriptor(&self) -> &FilterDescriptor {
        &self.descriptor
    }
}

impl<T> std::fmt::Debug for FilterParameter<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterParameter")
            .field("name", &self.name)
            .field("descriptor", &self.descriptor)
            .finish_non_exhaustive()
    }
}

/// A request type whose fields can be expressed as Cloud Foundry filters.
///
/// Implementors list every filterable accessor once. The table order is not
/// significant: [`augment`] sorts entries by accessor name before use.
///
/// # Example
///
/// ```
/// use cfapi::{augment, FilterDescriptor, FilterParameter, FilterParameters, ToFilterValue};
///
/// struct ListApplications {
///     names: Vec<String>,
/// }
///
/// impl FilterParameters for ListApplications {
///     fn filter_parameters() -> Vec<FilterParameter<Self>> {
///         vec![FilterParameter::new(
///             "names",
///             FilterDescriptor::new("name"),
///             |r: &Self| Ok(r.names.to_filter_value()),
///         )]
///     }
/// }
///
/// let mut query: Vec<(String, String)> = Vec::new();
/// let request = ListApplications { names: vec!["web".into(), "worker".into()] };
/// augment(&mut query, &request).unwrap();
/// assert_eq!(query, vec![("q".to_string(), "name IN web,worker".to_string())]);
/// ```
pub trait FilterParameters: Sized {
    /// The filter table for this type.
    fn filter_parameters() -> Vec<FilterParameter<Self>>;
}

/// A collector for outgoing query parameters.
pub trait QueryTarget {
    /// Append one `key=value` pair; repeated keys are kept.
    fn append_query(&mut self, key: &str, value: &str);
}

impl QueryTarget for Url {
    fn append_query(&mut self, key: &str, value: &str) {
        self.query_pairs_mut().append_pair(key, value);
    }
}

impl QueryTarget for Vec<(String, String)> {
    fn append_query(&mut self, key: &str, value: &str) {
        self.push((key.to_string(), value.to_string()));
    }
}

/// Append a `q` parameter to `target` for every filter field of `instance`.
///
/// Fields are visited in ascending accessor-name order. Absent values and
/// values that render empty are skipped. A collection with a single remaining
/// element is emitted with the single-value operator; larger collections are
/// comma-joined and emitted with the collection operator.
///
/// # Errors
///
/// Returns the first accessor error. Parameters appended for accessors
/// visited before the failing one remain in `target`.
pub fn augment<Q, T>(target: &mut Q, instance: &T) -> Result<()>
where
    Q: QueryTarget + ?Sized,
    T: FilterParameters,
{
    let mut parameters = T::filter_parameters();
    parameters.sort_by_key(FilterParameter::name);

    for parameter in &parameters {
        let Some(value) = (parameter.accessor)(instance)? else {
            continue;
        };

        if let Some(filter) = render(&parameter.descriptor, value) {
            tracing::trace!(accessor = parameter.name, %filter, "appending filter");
            target.append_query(FILTER_PARAMETER, &filter);
        }
    }

    Ok(())
}

/// Strip leading and trailing ASCII control characters and spaces
/// (every char up to and including `' '`).
fn trim_value(value: &str) -> &str {
    value.trim_matches(|c: char| c <= ' ')
}

fn render(descriptor: &FilterDescriptor, value: FilterValue) -> Option<String> {
    match value {
        FilterValue::Single(value) => {
            let value = trim_value(&value);
            (!value.is_empty()).then(|| descriptor.render_single(value))
        }
        FilterValue::Collection(values) => {
            let values: Vec<&str> = values
                .iter()
                .map(|v| trim_value(v))
                .filter(|v| !v.is_empty())
                .collect();

            match values.as_slice() {
                [] => None,
                [single] => Some(descriptor.render_single(single)),
                many => Some(descriptor.render_collection(&many.join(","))),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CloudFoundryError;
    use crate::filter::{FilterOperation, ToFilterValue};

    #[derive(Default)]
    struct Request {
        alpha: Option<String>,
        bravo: Vec<String>,
        charlie: Option<u32>,
    }

    impl FilterParameters for Request {
        fn filter_parameters() -> Vec<FilterParameter<Self>> {
            vec![
                FilterParameter::new(
                    "charlie",
                    FilterDescriptor::new("test-charlie")
                        .with_operation(FilterOperation::GreaterThanOrEqualTo),
                    |r: &Self| Ok(r.charlie.to_filter_value()),
                ),
                FilterParameter::new("bravo", FilterDescriptor::new("test-bravo"), |r: &Self| {
                    Ok(r.bravo.to_filter_value())
                }),
                FilterParameter::new("alpha", FilterDescriptor::new("test-alpha"), |r: &Self| {
                    Ok(r.alpha.to_filter_value())
                }),
            ]
        }
    }

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn filters(query: &[(String, String)]) -> Vec<&str> {
        query
            .iter()
            .inspect(|(k, _)| assert_eq!(k, FILTER_PARAMETER))
            .map(|(_, v)| v.as_str())
            .collect()
    }

    #[test]
    fn test_render_single_trims() {
        let descriptor = FilterDescriptor::new("name");
        assert_eq!(
            render(&descriptor, FilterValue::Single("  test-value  ".to_string())),
            Some("name:test-value".to_string())
        );
    }

    #[test]
    fn test_render_blank_single_is_skipped() {
        let descriptor = FilterDescriptor::new("name");
        assert_eq!(render(&descriptor, FilterValue::Single("   ".to_string())), None);
    }

    #[test]
    fn test_render_strips_control_characters() {
        let descriptor = FilterDescriptor::new("name");
        assert_eq!(render(&descriptor, FilterValue::Single("\u{0}".to_string())), None);
        assert_eq!(
            render(&descriptor, FilterValue::Single("\u{1}a\u{0}".to_string())),
            Some("name:a".to_string())
        );

        let value = FilterValue::Collection(strings(&["\u{0}\u{1f}", "\u{7}b"]));
        assert_eq!(render(&descriptor, value), Some("name:b".to_string()));
    }

    #[test]
    fn test_trim_value_keeps_non_ascii_whitespace() {
        assert_eq!(trim_value("\u{3000}a\u{3000}"), "\u{3000}a\u{3000}");
        assert_eq!(trim_value(" \t\r\n a \u{b}"), "a");
    }

    #[test]
    fn test_render_collection_drops_blank_elements() {
        let descriptor = FilterDescriptor::new("name");
        let value = FilterValue::Collection(strings(&[" a ", "", "  ", "b"]));
        assert_eq!(render(&descriptor, value), Some("name IN a,b".to_string()));

        let value = FilterValue::Collection(strings(&["", " x "]));
        assert_eq!(render(&descriptor, value), Some("name:x".to_string()));
    }

    #[test]
    fn test_augment_orders_by_accessor_name() {
        let request = Request {
            alpha: Some("first".to_string()),
            bravo: strings(&["b1", "b2"]),
            charlie: Some(3),
        };

        let mut query = Vec::new();
        augment(&mut query, &request).unwrap();

        assert_eq!(
            filters(&query),
            vec!["test-alpha:first", "test-bravo IN b1,b2", "test-charlie>=3"]
        );
    }

    #[test]
    fn test_augment_empty_request_appends_nothing() {
        let mut query = Vec::new();
        augment(&mut query, &Request::default()).unwrap();
        assert!(query.is_empty());
    }

    #[test]
    fn test_augment_onto_url() {
        let request = Request {
            bravo: strings(&["x", "y"]),
            ..Default::default()
        };

        let mut url = Url::parse("https://api.example.com/v2/apps").unwrap();
        augment(&mut url, &request).unwrap();

        assert_eq!(url.query(), Some("q=test-bravo+IN+x%2Cy"));
    }

    struct Failing {
        before: Option<String>,
        after: Option<String>,
    }

    impl FilterParameters for Failing {
        fn filter_parameters() -> Vec<FilterParameter<Self>> {
            vec![
                FilterParameter::new("c_after", FilterDescriptor::new("after"), |r: &Self| {
                    Ok(r.after.to_filter_value())
                }),
                FilterParameter::new("b_failing", FilterDescriptor::new("failing"), |_: &Self| {
                    Err(CloudFoundryError::filter_accessor("b_failing", "test-failure"))
                }),
                FilterParameter::new("a_before", FilterDescriptor::new("before"), |r: &Self| {
                    Ok(r.before.to_filter_value())
                }),
            ]
        }
    }

    #[test]
    fn test_augment_fails_fast_and_keeps_prior_appends() {
        let request = Failing {
            before: Some("kept".to_string()),
            after: Some("never".to_string()),
        };

        let mut query = Vec::new();
        let err = augment(&mut query, &request).unwrap_err();

        assert!(matches!(
            err,
            CloudFoundryError::FilterAccessor {
                accessor: "b_failing",
                ..
            }
        ));
        assert_eq!(filters(&query), vec!["before:kept"]);
    }
}
