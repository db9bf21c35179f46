pub mod appointment;
pub mod enums;
pub mod filters;

pub use appointment::*;
pub use enums::*;
pub use filters::*;
