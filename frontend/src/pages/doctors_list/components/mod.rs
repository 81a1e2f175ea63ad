pub mod doctor_card;
