//! Cloud Foundry v2 model types.

mod organization;
mod resource;
mod space;

pub use organization::*;
pub use resource::{Metadata, OrderDirection, Resource};
pub use space::*;
