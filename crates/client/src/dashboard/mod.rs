//! Page controllers. Each one reads inputs, calls a directory, and hands back
//! a view the page renders as-is.

pub mod admin;
pub mod doctor;
pub mod doctor_board;
pub mod patient;

pub use admin::{AddDoctorOutcome, AdminDashboard, ADMIN_LOGIN_REQUIRED};
pub use doctor::{today, AppointmentTable, DoctorDashboard, APPOINTMENTS_ERROR, NO_APPOINTMENTS};
pub use doctor_board::{BoardUpdate, DoctorBoard, DoctorListing, NO_DOCTORS, NO_FILTER_MATCHES};
pub use patient::{
    load_patient_appointments, sign_up, submit_booking, PatientAppointments,
    NO_PATIENT_APPOINTMENTS, PATIENT_APPOINTMENTS_ERROR, PICK_DATE_AND_SLOT,
};
