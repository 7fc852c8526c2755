#![doc = "Agricultural field map core: district containment and multi-criteria filtering"]
pub mod district;
mod error;
pub mod filter;
pub mod geom;
pub mod io;
pub mod location;
mod stats;
pub mod style;

#[doc(inline)]
pub use error::{Error, Result};

#[doc(inline)]
pub use geom::{contains, Boundary};

#[doc(inline)]
pub use district::{assign, assign_all, District};

#[doc(inline)]
pub use filter::{filter, CombineMode, FilterCriteria};

#[doc(inline)]
pub use location::{LocationRecord, Npk};

#[doc(inline)]
pub use stats::Summary;

#[doc(inline)]
pub use style::{color_for, Category, Rgb};
