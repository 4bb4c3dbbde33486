//! Graph data model: property values and the in-memory store.

mod property;
mod store;

pub use property::{PropertyMap, PropertyValue};
pub use store::{Graph, GraphError, GraphResult};
