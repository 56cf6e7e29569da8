//! Search module.
//!
//! Filter criteria, sort orders, the listing query and facets.

mod facets;
mod filter;
mod query;

pub use facets::{brand_facet, category_facet, Facet, FacetValue};
pub use filter::{matches_search, FilterCriteria, PriceBracket, ALL, BRACKET_HIGH, BRACKET_LOW};
pub use query::{apply, collation_key, SortOrder};
