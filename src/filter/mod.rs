//! Cloud Foundry v2 filter queries.
//!
//! List endpoints accept repeated `q` parameters of the form
//! `field<operator>value`. Request types describe their filterable fields by
//! implementing [`FilterParameters`], and [`augment`] turns an instance into
//! query parameters on any [`QueryTarget`].

mod builder;
mod descriptor;
mod value;

pub use builder::{
    augment, FilterAccessor, FilterParameter, FilterParameters, QueryTarget, FILTER_PARAMETER,
};
pub use descriptor::{FilterDescriptor, FilterOperation};
pub use value::{FilterValue, ToFilterValue};
