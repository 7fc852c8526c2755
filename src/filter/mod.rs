mod criteria;
mod engine;

pub use criteria::{Clause, CombineMode, FilterCriteria};
pub use engine::{filter, filter_owned, matches, visible_locations};
