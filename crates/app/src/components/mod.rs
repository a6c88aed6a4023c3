mod add_doctor_dialog;
mod appointment_table;
mod booking_dialog;
mod doctor_card;
mod doctor_listing;
mod header;
mod login_dialog;
mod signup_dialog;

pub use add_doctor_dialog::AddDoctorDialog;
pub use appointment_table::{AppointmentRows, APPOINTMENT_COLUMNS};
pub use booking_dialog::BookingDialog;
pub use doctor_card::{DoctorCard, DoctorInfo};
pub use doctor_listing::DoctorListingPanel;
pub use header::PortalHeader;
pub use login_dialog::LoginDialog;
pub use signup_dialog::SignupDialog;
