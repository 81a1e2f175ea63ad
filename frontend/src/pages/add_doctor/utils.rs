use crate::api::{AddDoctorPayload, ApiError, DoctorAddress, ImageUpload, Speciality};

pub const MISSING_IMAGE_MESSAGE: &str = "Please select an image";
pub const MAX_EXPERIENCE_YEARS: u8 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Name,
    Email,
    Password,
    Experience,
    Fees,
    Speciality,
    Education,
    Address1,
    Address2,
    About,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DoctorDraft {
    pub name: String,
    pub email: String,
    pub password: String,
    pub experience: String,
    pub fees: String,
    pub speciality: Speciality,
    pub education: String,
    pub address1: String,
    pub address2: String,
    pub about: String,
    pub image: Option<ImageUpload>,
}

impl Default for DoctorDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            password: String::new(),
            experience: "1".to_string(),
            fees: String::new(),
            speciality: Speciality::default(),
            education: String::new(),
            address1: String::new(),
            address2: String::new(),
            about: String::new(),
            image: None,
        }
    }
}

impl DoctorDraft {
    /// Merges one input value into the draft. Values are taken as typed; an
    /// unrecognised speciality leaves the current one in place.
    pub fn set_field(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::Name => self.name = value,
            DraftField::Email => self.email = value,
            DraftField::Password => self.password = value,
            DraftField::Experience => self.experience = value,
            DraftField::Fees => self.fees = value,
            DraftField::Speciality => {
                if let Ok(speciality) = value.parse() {
                    self.speciality = speciality;
                }
            }
            DraftField::Education => self.education = value,
            DraftField::Address1 => self.address1 = value,
            DraftField::Address2 => self.address2 = value,
            DraftField::About => self.about = value,
        }
    }

    pub fn field_value(&self, field: DraftField) -> String {
        match field {
            DraftField::Name => self.name.clone(),
            DraftField::Email => self.email.clone(),
            DraftField::Password => self.password.clone(),
            DraftField::Experience => self.experience.clone(),
            DraftField::Fees => self.fees.clone(),
            DraftField::Speciality => self.speciality.as_str().to_string(),
            DraftField::Education => self.education.clone(),
            DraftField::Address1 => self.address1.clone(),
            DraftField::Address2 => self.address2.clone(),
            DraftField::About => self.about.clone(),
        }
    }

    pub fn set_image(&mut self, image: ImageUpload) {
        self.image = Some(image);
    }

    pub fn clear_image(&mut self) {
        self.image = None;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// The only explicit check; the other fields are `required` in the markup.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.image.is_none() {
            return Err(ApiError::validation(MISSING_IMAGE_MESSAGE));
        }
        Ok(())
    }

    pub fn to_payload(&self) -> Result<AddDoctorPayload, ApiError> {
        let image = self
            .image
            .clone()
            .ok_or_else(|| ApiError::validation(MISSING_IMAGE_MESSAGE))?;
        Ok(AddDoctorPayload {
            image,
            name: self.name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            experience: self.experience.clone(),
            fees: fees_wire_value(&self.fees),
            about: self.about.clone(),
            speciality: self.speciality,
            degree: self.education.clone(),
            address: DoctorAddress {
                line1: self.address1.clone(),
                line2: self.address2.clone(),
            },
        })
    }
}

/// Encodes the fee input the way a numeric coercion would: blank is `0`,
/// integral values drop their fraction, magnitudes of `1e21` and above or
/// below `1e-6` use exponent form (`1e+21`, `1e-7`), garbage is `NaN`.
/// Hex and other non-decimal literals are treated as garbage.
pub fn fees_wire_value(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return "0".to_string();
    }
    let unsigned = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
    if unsigned == "Infinity" {
        return if trimmed.starts_with('-') { "-Infinity" } else { "Infinity" }.to_string();
    }
    // Rust also accepts `inf` and `nan`; a numeric coercion does not.
    if unsigned
        .chars()
        .any(|c| c.is_ascii_alphabetic() && !matches!(c, 'e' | 'E'))
    {
        return "NaN".to_string();
    }
    match trimmed.parse::<f64>() {
        Ok(value) => number_to_string(value),
        Err(_) => "NaN".to_string(),
    }
}

fn number_to_string(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    let magnitude = value.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        let formatted = format!("{:e}", value);
        return match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => formatted,
        };
    }
    format!("{}", value)
}

/// `(value, label)` pairs for the experience select.
pub fn experience_options() -> Vec<(String, String)> {
    (1..=MAX_EXPERIENCE_YEARS)
        .map(|years| {
            let label = if years == 1 {
                "1 Year".to_string()
            } else {
                format!("{} Years", years)
            };
            (years.to_string(), label)
        })
        .collect()
}
