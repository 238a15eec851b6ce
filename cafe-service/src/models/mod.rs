pub mod contact;
pub mod menu;
pub mod reservation;
pub mod status_check;
pub mod timestamp;

pub use contact::ContactMessage;
pub use menu::{Menu, MenuCategory, MenuItem};
pub use reservation::{Reservation, DEFAULT_RESERVATION_STATUS};
pub use status_check::StatusCheck;
