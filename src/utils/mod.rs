pub mod flags;
pub mod text;
