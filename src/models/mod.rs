pub mod country;
pub mod section;
