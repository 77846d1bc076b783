pub mod band;
pub mod catalog;

pub use band::*;
pub use catalog::*;
