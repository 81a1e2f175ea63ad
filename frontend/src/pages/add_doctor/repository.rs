use crate::api::{AddDoctorPayload, ApiClient, ApiError};
use std::rc::Rc;

#[derive(Clone)]
pub struct AddDoctorRepository {
    client: Rc<ApiClient>,
}

impl Default for AddDoctorRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl AddDoctorRepository {
    pub fn new() -> Self {
        Self::new_with_client(Rc::new(ApiClient::new()))
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn add_doctor(
        &self,
        token: &str,
        payload: AddDoctorPayload,
    ) -> Result<String, ApiError> {
        self.client.admin_add_doctor(token, payload).await
    }
}
