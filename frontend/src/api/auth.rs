use super::{
    client::{ensure_success, ApiClient},
    types::{AdminLoginRequest, AdminLoginResponse, ApiError},
};

impl ApiClient {
    /// Exchanges admin credentials for a session token.
    pub async fn admin_login(&self, request: &AdminLoginRequest) -> Result<String, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .post(format!("{}/api/admin/login", base_url))
                    .json(request),
            )
            .await?;
        let body: AdminLoginResponse = Self::read_envelope(response).await?;
        ensure_success(body.success, body.message, "Invalid credentials")?;
        body.token
            .filter(|token| !token.is_empty())
            .ok_or_else(|| ApiError::unknown("Login succeeded without a token"))
    }
}
