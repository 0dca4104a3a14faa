pub mod error;
pub mod math;
pub mod panel;
pub mod structure;
pub mod wall;

pub use error::{Result, WallsmithError};
