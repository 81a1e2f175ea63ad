pub mod add_doctor;
pub mod doctors_list;
pub mod login;
