//! Type definitions

pub mod bus;
pub mod route;
pub mod student;

pub use bus::*;
pub use route::*;
pub use student::*;
