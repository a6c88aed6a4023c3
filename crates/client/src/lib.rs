//! Browser-independent core of the hospital portal: session access, REST
//! directories, view models, the header state machine and page controllers.

pub mod card;
pub mod config;
pub mod dashboard;
pub mod directory;
pub mod generation;
pub mod header;
pub mod login;
pub mod modal;
pub mod paths;
pub mod render;
pub mod session;

pub use directory::{
    ApiClient, AppointmentDirectory, AuthDirectory, DoctorDirectory, DoctorQuery,
    PatientDirectory,
};
pub use generation::RequestGeneration;
pub use modal::ModalKind;
pub use session::{MemorySessionStore, SessionStore};
