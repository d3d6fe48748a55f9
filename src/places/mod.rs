// Nearby-place search module.
// Queries the radius search API around a site's postal code.

pub mod lookup;
pub mod query;
pub mod types;

pub use lookup::lookup_nearby;
pub use types::PlaceResult;
