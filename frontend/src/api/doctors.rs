use reqwest::multipart::{Form, Part};
use serde_json::json;

use super::{
    client::{ensure_success, ApiClient},
    types::{
        AddDoctorPayload, ApiError, ChangeAvailabilityRequest, Doctor, DoctorListResponse,
        ImageUpload, MessageResponse,
    },
};

impl ApiClient {
    pub async fn admin_add_doctor(
        &self,
        token: &str,
        payload: AddDoctorPayload,
    ) -> Result<String, ApiError> {
        let headers = Self::session_headers(token)?;
        let form = build_add_doctor_form(payload)?;
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .post(format!("{}/api/admin/add-doctor", base_url))
                    .headers(headers)
                    .multipart(form),
            )
            .await?;
        let body: MessageResponse = Self::read_envelope(response).await?;
        let message = ensure_success(body.success, body.message, "Failed to add doctor")?;
        Ok(message.unwrap_or_else(|| "Doctor added".to_string()))
    }

    pub async fn admin_all_doctors(&self, token: &str) -> Result<Vec<Doctor>, ApiError> {
        let headers = Self::session_headers(token)?;
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .post(format!("{}/api/admin/all-doctors", base_url))
                    .headers(headers)
                    .json(&json!({})),
            )
            .await?;
        let body: DoctorListResponse = Self::read_envelope(response).await?;
        ensure_success(body.success, body.message, "Failed to load doctors")?;
        Ok(body.doctors)
    }

    pub async fn admin_change_availability(
        &self,
        token: &str,
        doc_id: &str,
    ) -> Result<String, ApiError> {
        let headers = Self::session_headers(token)?;
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .post(format!("{}/api/admin/change-availability", base_url))
                    .headers(headers)
                    .json(&ChangeAvailabilityRequest {
                        doc_id: doc_id.to_string(),
                    }),
            )
            .await?;
        let body: MessageResponse = Self::read_envelope(response).await?;
        let message = ensure_success(body.success, body.message, "Failed to change availability")?;
        Ok(message.unwrap_or_else(|| "Availability changed".to_string()))
    }
}

fn image_part(image: ImageUpload) -> Result<Part, ApiError> {
    let part = Part::bytes(image.bytes).file_name(image.file_name);
    match image.mime_type.filter(|mime| !mime.is_empty()) {
        Some(mime) => part
            .mime_str(&mime)
            .map_err(|e| ApiError::validation(format!("Invalid image type: {}", e))),
        None => Ok(part),
    }
}

pub(crate) fn build_add_doctor_form(payload: AddDoctorPayload) -> Result<Form, ApiError> {
    let fields = payload.text_fields()?;
    let mut form = Form::new().part("image", image_part(payload.image)?);
    for (key, value) in fields {
        form = form.text(key, value);
    }
    Ok(form)
}
