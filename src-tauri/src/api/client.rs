//! HTTP client for the CareFlow REST backend.
//!
//! Thin JSON-over-HTTP plumbing: every method maps a backend endpoint to a
//! typed request/response pair and folds HTTP failures into
//! `CareFlowError::Api` carrying the backend's `detail` message when one
//! is present.

use reqwest::{Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;
use url::Url;

use crate::error::CareFlowError;

use super::types::{
    ApiErrorBody, AuthResponse, Company, CompanyPayload, LoginCredentials, ModuleInfo,
    PasswordReset, User, UserCreate, UserUpdate,
};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api/v1";

#[derive(Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base: Url,
}

impl ApiClient {
    pub fn new(http: reqwest::Client, base_url: &str) -> Result<Self, CareFlowError> {
        let mut normalized = base_url.trim_end_matches('/').to_string();
        normalized.push('/');
        let base = Url::parse(&normalized)
            .map_err(|e| CareFlowError::Config(format!("invalid API base URL '{}': {}", base_url, e)))?;
        Ok(Self { http, base })
    }

    fn endpoint(&self, path: &str) -> Result<Url, CareFlowError> {
        self.base
            .join(path.trim_start_matches('/'))
            .map_err(|e| CareFlowError::Config(format!("invalid API path '{}': {}", path, e)))
    }

    fn request(
        &self,
        method: Method,
        url: Url,
        token: Option<&str>,
    ) -> RequestBuilder {
        let mut builder = self.http.request(method, url);
        if let Some(token) = token {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, CareFlowError> {
        let response = builder
            .send()
            .await
            .map_err(|e| CareFlowError::Api(format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(error_for_status(status, response).await);
        }

        response
            .json::<T>()
            .await
            .map_err(|e| CareFlowError::Api(format!("malformed response body: {}", e)))
    }

    async fn send_unit(&self, builder: RequestBuilder) -> Result<(), CareFlowError> {
        let response = builder
            .send()
            .await
            .map_err(|e| CareFlowError::Api(format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(error_for_status(status, response).await);
        }
        Ok(())
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, token: &str) -> Result<T, CareFlowError> {
        debug!("GET {}", path);
        let url = self.endpoint(path)?;
        self.send(self.request(Method::GET, url, Some(token))).await
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        token: Option<&str>,
        body: &B,
    ) -> Result<T, CareFlowError> {
        debug!("POST {}", path);
        let url = self.endpoint(path)?;
        self.send(self.request(Method::POST, url, token).json(body))
            .await
    }

    // -- Auth --

    pub async fn login(&self, credentials: &LoginCredentials) -> Result<AuthResponse, CareFlowError> {
        self.post_json("auth/login", None, credentials).await
    }

    pub async fn logout(&self, token: &str) -> Result<(), CareFlowError> {
        let url = self.endpoint("auth/logout")?;
        self.send_unit(self.request(Method::POST, url, Some(token)))
            .await
    }

    pub async fn current_user(&self, token: &str) -> Result<User, CareFlowError> {
        self.get("auth/me", token).await
    }

    /// Self-service profile update against `PUT auth/me`.
    pub async fn update_me(&self, token: &str, update: &UserUpdate) -> Result<User, CareFlowError> {
        debug!("PUT auth/me");
        let url = self.endpoint("auth/me")?;
        self.send(self.request(Method::PUT, url, Some(token)).json(update))
            .await
    }

    // -- User administration --

    pub async fn list_users(&self, token: &str) -> Result<Vec<User>, CareFlowError> {
        self.get("admin/users", token).await
    }

    pub async fn create_user(&self, token: &str, user: &UserCreate) -> Result<User, CareFlowError> {
        self.post_json("admin/users", Some(token), user).await
    }

    pub async fn update_user(
        &self,
        token: &str,
        user_id: u32,
        update: &UserUpdate,
    ) -> Result<User, CareFlowError> {
        debug!("PUT admin/users/{}", user_id);
        let url = self.endpoint(&format!("admin/users/{}", user_id))?;
        self.send(self.request(Method::PUT, url, Some(token)).json(update))
            .await
    }

    pub async fn delete_user(&self, token: &str, user_id: u32) -> Result<(), CareFlowError> {
        debug!("DELETE admin/users/{}", user_id);
        let url = self.endpoint(&format!("admin/users/{}", user_id))?;
        self.send_unit(self.request(Method::DELETE, url, Some(token)))
            .await
    }

    pub async fn set_user_active(
        &self,
        token: &str,
        user_id: u32,
        active: bool,
    ) -> Result<(), CareFlowError> {
        let action = if active { "activate" } else { "deactivate" };
        let url = self.endpoint(&format!("admin/users/{}/{}", user_id, action))?;
        self.send_unit(self.request(Method::POST, url, Some(token)))
            .await
    }

    pub async fn set_user_admin(
        &self,
        token: &str,
        user_id: u32,
        admin: bool,
    ) -> Result<(), CareFlowError> {
        let action = if admin { "promote" } else { "demote" };
        let url = self.endpoint(&format!("admin/users/{}/{}", user_id, action))?;
        self.send_unit(self.request(Method::POST, url, Some(token)))
            .await
    }

    pub async fn reset_user_password(
        &self,
        token: &str,
        user_id: u32,
    ) -> Result<PasswordReset, CareFlowError> {
        let url = self.endpoint(&format!("admin/users/{}/reset-password", user_id))?;
        self.send(self.request(Method::POST, url, Some(token))).await
    }

    // -- Companies --

    pub async fn list_companies(&self, token: &str) -> Result<Vec<Company>, CareFlowError> {
        self.get("empresas/", token).await
    }

    pub async fn create_company(
        &self,
        token: &str,
        company: &CompanyPayload,
    ) -> Result<Company, CareFlowError> {
        self.post_json("empresas/", Some(token), company).await
    }

    pub async fn update_company(
        &self,
        token: &str,
        company_id: u32,
        company: &CompanyPayload,
    ) -> Result<Company, CareFlowError> {
        debug!("PUT empresas/{}", company_id);
        let url = self.endpoint(&format!("empresas/{}", company_id))?;
        self.send(self.request(Method::PUT, url, Some(token)).json(company))
            .await
    }

    pub async fn deactivate_company(&self, token: &str, company_id: u32) -> Result<(), CareFlowError> {
        debug!("DELETE empresas/{}", company_id);
        let url = self.endpoint(&format!("empresas/{}", company_id))?;
        self.send_unit(self.request(Method::DELETE, url, Some(token)))
            .await
    }

    // -- Modules --

    pub async fn list_modules(&self, token: &str) -> Result<Vec<ModuleInfo>, CareFlowError> {
        self.get("modulos/", token).await
    }
}

async fn error_for_status(status: StatusCode, response: reqwest::Response) -> CareFlowError {
    let detail = response
        .json::<ApiErrorBody>()
        .await
        .map(|body| body.detail)
        .unwrap_or_else(|_| status.to_string());

    match status {
        StatusCode::UNAUTHORIZED => CareFlowError::Auth(detail),
        _ => CareFlowError::Api(detail),
    }
}
