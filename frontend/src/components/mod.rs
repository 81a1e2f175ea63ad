pub mod guard;
pub mod layout;
pub mod toast;
