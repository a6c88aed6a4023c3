pub mod appointment;
pub mod common;
pub mod config;
pub mod doctor;
pub mod error;
pub mod filter;
pub mod patient;
pub mod session;

pub use appointment::*;
pub use common::*;
pub use config::*;
pub use doctor::*;
pub use error::*;
pub use filter::*;
pub use patient::*;
pub use session::*;
