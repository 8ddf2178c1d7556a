//! Filter descriptors: the field name and comparison operators a filter uses.

use std::fmt;

/// A comparison operator from the Cloud Foundry v2 filter grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterOperation {
    /// `field:value`
    EqualTo,
    /// `field>value`
    GreaterThan,
    /// `field>=value`
    GreaterThanOrEqualTo,
    /// `field<value`
    LessThan,
    /// `field<=value`
    LessThanOrEqualTo,
    /// `field IN a,b,c`
    In,
}

impl FilterOperation {
    /// The symbol placed between field name and value.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::EqualTo => ":",
            Self::GreaterThan => ">",
            Self::GreaterThanOrEqualTo => ">=",
            Self::LessThan => "<",
            Self::LessThanOrEqualTo => "<=",
            Self::In => " IN ",
        }
    }
}

impl fmt::Display for FilterOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Static description of a filterable field.
///
/// A descriptor names the query field and the operators used when the
/// accessor yields a single value or a collection of values. Descriptors are
/// built with `const fn`s so request types can declare them inline:
///
/// ```
/// use cfapi::{FilterDescriptor, FilterOperation};
///
/// const CREATED: FilterDescriptor =
///     FilterDescriptor::new("timestamp").with_operation(FilterOperation::GreaterThanOrEqualTo);
///
/// assert_eq!(CREATED.field(), "timestamp");
/// assert_eq!(CREATED.collection_operation(), FilterOperation::In);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterDescriptor {
    field: &'static str,
    operation: FilterOperation,
    collection_operation: FilterOperation,
}

impl FilterDescriptor {
    /// Describe `field` with the default operators (`EqualTo` / `In`).
    #[must_use]
    pub const fn new(field: &'static str) -> Self {
        Self {
            field,
            operation: FilterOperation::EqualTo,
            collection_operation: FilterOperation::In,
        }
    }

    /// Replace the operator used for single values.
    #[must_use]
    pub const fn with_operation(self, operation: FilterOperation) -> Self {
        Self { operation, ..self }
    }

    /// Replace the operator used for multi-value collections.
    #[must_use]
    pub const fn with_collection_operation(self, collection_operation: FilterOperation) -> Self {
        Self {
            collection_operation,
            ..self
        }
    }

    /// The query field name.
    pub const fn field(&self) -> &'static str {
        self.field
    }

    /// The single-value operator.
    pub const fn operation(&self) -> FilterOperation {
        self.operation
    }

    /// The collection operator.
    pub const fn collection_operation(&self) -> FilterOperation {
        self.collection_operation
    }

    /// Render `field<op>value` using the single-value operator.
    pub(crate) fn render_single(&self, value: &str) -> String {
        format!("{}{}{}", self.field, self.operation, value)
    }

    /// Render `field<op>value` using the collection operator.
    pub(crate) fn render_collection(&self, joined: &str) -> String {
        format!("{}{}{}", self.field, self.collection_operation, joined)
    }
}
