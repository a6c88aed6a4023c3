// Standalone components
pub mod badge;
pub mod button;
pub mod card;
pub mod data_table;
pub mod filter_bar;
pub mod form_select;
pub mod input;
pub mod page_header;

// Primitive-backed overlays
pub mod alert_dialog;
pub mod dialog;
pub mod toast;

pub use alert_dialog::*;
pub use badge::*;
pub use button::*;
pub use card::*;
pub use data_table::*;
pub use dialog::*;
pub use filter_bar::*;
pub use form_select::*;
pub use input::*;
pub use page_header::*;
pub use toast::*;
