pub mod fields;
pub mod image_picker;
