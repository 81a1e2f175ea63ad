use leptos::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Doctor {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub image: String,
    pub speciality: String,
    #[serde(default)]
    pub available: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Speciality {
    #[default]
    #[serde(rename = "General physician")]
    GeneralPhysician,
    #[serde(rename = "Gynecologist")]
    Gynecologist,
    #[serde(rename = "Dermatologist")]
    Dermatologist,
    #[serde(rename = "Pediatricians")]
    Pediatricians,
    #[serde(rename = "Neurologist")]
    Neurologist,
    #[serde(rename = "Gastroenterologist")]
    Gastroenterologist,
}

impl Speciality {
    pub const ALL: [Speciality; 6] = [
        Speciality::GeneralPhysician,
        Speciality::Gynecologist,
        Speciality::Dermatologist,
        Speciality::Pediatricians,
        Speciality::Neurologist,
        Speciality::Gastroenterologist,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Speciality::GeneralPhysician => "General physician",
            Speciality::Gynecologist => "Gynecologist",
            Speciality::Dermatologist => "Dermatologist",
            Speciality::Pediatricians => "Pediatricians",
            Speciality::Neurologist => "Neurologist",
            Speciality::Gastroenterologist => "Gastroenterologist",
        }
    }
}

impl fmt::Display for Speciality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Speciality {
    type Err = ApiError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Speciality::ALL
            .iter()
            .copied()
            .find(|speciality| speciality.as_str() == value)
            .ok_or_else(|| ApiError::validation(format!("Unknown speciality: {}", value)))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DoctorAddress {
    pub line1: String,
    pub line2: String,
}

/// A file picked for upload, already read into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub file_name: String,
    pub mime_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// Field values of an add-doctor submission, as they go on the wire.
#[derive(Debug, Clone, PartialEq)]
pub struct AddDoctorPayload {
    pub image: ImageUpload,
    pub name: String,
    pub email: String,
    pub password: String,
    pub experience: String,
    pub fees: String,
    pub about: String,
    pub speciality: Speciality,
    pub degree: String,
    pub address: DoctorAddress,
}

impl AddDoctorPayload {
    /// Text parts in the order the backend expects them. The fee key is
    /// `fess`; the backend reads that name.
    pub fn text_fields(&self) -> Result<Vec<(&'static str, String)>, ApiError> {
        let address = serde_json::to_string(&self.address)
            .map_err(|e| ApiError::unknown(format!("Failed to encode address: {}", e)))?;
        Ok(vec![
            ("name", self.name.clone()),
            ("email", self.email.clone()),
            ("password", self.password.clone()),
            ("experience", self.experience.clone()),
            ("fess", self.fees.clone()),
            ("about", self.about.clone()),
            ("speciality", self.speciality.as_str().to_string()),
            ("degree", self.degree.clone()),
            ("address", address),
        ])
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminLoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeAvailabilityRequest {
    #[serde(rename = "docId")]
    pub doc_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MessageResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DoctorListResponse {
    pub success: bool,
    #[serde(default)]
    pub doctors: Vec<Doctor>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AdminLoginResponse {
    pub success: bool,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl ApiError {
    fn with_code(msg: impl Into<String>, code: &str) -> Self {
        Self {
            error: msg.into(),
            code: code.to_string(),
            details: None,
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "VALIDATION_ERROR")
    }

    /// The backend answered with `success: false`.
    pub fn rejected(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "REJECTED")
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "REQUEST_FAILED")
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "UNKNOWN")
    }

    pub fn cancelled() -> Self {
        Self::with_code("Request cancelled", "CANCELLED")
    }

    pub fn is_cancelled(&self) -> bool {
        self.code == "CANCELLED"
    }
}
