mod assign;
pub mod builtin;
mod district;

pub use assign::{assign, assign_all, count_by_district, locations_in_district, validate_districts, DistrictCounts};
pub use district::{find, District};
