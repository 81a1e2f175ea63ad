pub mod admin;
pub mod toast;
