pub mod common;
pub mod decimal;
pub mod expandable;
pub mod list;
pub mod related;
pub mod subscription;

pub use common::{Address, Currency, Metadata, ShippingDetails, Timestamp};
pub use expandable::{Expandable, Object};
pub use list::{CreatedFilter, List, ListParams, RangeQuery, SearchParams, SearchResult};
