//! Filter and paginate queries over the reference store.
//!
//! Queries are parsed from raw [`QueryParams`] so every transport applies the
//! same defaults: unparsable or negative counts fall back silently, empty
//! filter values are ignored, and results keep store order.

mod data_element;
mod engine;
mod page;
mod params;
mod purpose;

pub use data_element::{DATA_ELEMENT_LIMITS, DataElementQuery, DataElementResult};
pub use engine::QueryEngine;
pub use page::{LimitPolicy, Page, PageRequest};
pub use params::QueryParams;
pub use purpose::{PURPOSE_LIMITS, PurposeQuery};
