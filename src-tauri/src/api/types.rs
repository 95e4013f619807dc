//! Wire types for the CareFlow REST backend.
//!
//! The backend is an external collaborator; these structs mirror its JSON
//! shapes. Field renames map the backend's Portuguese wire names onto the
//! names the rest of the codebase uses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Comum,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub email: String,
    pub full_name: String,
    pub role: Role,
    pub is_active: bool,
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "empresas", default)]
    pub companies: Vec<Company>,
    #[serde(rename = "modulos", default)]
    pub modules: Vec<ModuleInfo>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Module-level access check. Admins pass unconditionally; everyone
    /// else needs the module slug among their granted modules.
    pub fn has_module(&self, slug: &str) -> bool {
        self.is_admin() || self.modules.iter().any(|m| m.slug == slug)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub id: u32,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "razao_social")]
    pub legal_name: String,
    pub cnpj: String,
    pub email: String,
    #[serde(rename = "telefone")]
    pub phone: String,
    #[serde(rename = "endereco")]
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleInfo {
    pub id: u32,
    #[serde(rename = "nome")]
    pub name: String,
    pub slug: String,
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "ordem")]
    pub order: u32,
    pub is_admin_only: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
    pub user: User,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserCreate {
    pub email: String,
    pub full_name: String,
    pub password: String,
    pub role: Role,
}

/// Partial update; only the set fields are sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

impl UserUpdate {
    /// Restrict an update to the fields a user may change on their own
    /// profile. Self-promotion is stripped here as well as server-side.
    pub fn for_self(mut self) -> Self {
        self.role = None;
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyPayload {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "razao_social")]
    pub legal_name: String,
    pub cnpj: String,
    pub email: String,
    #[serde(rename = "telefone")]
    pub phone: String,
    #[serde(rename = "endereco")]
    pub address: String,
}

/// Admin-triggered password reset; the backend generates the new password.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PasswordReset {
    pub new_password: String,
}

/// Error body shape the backend uses for 4xx/5xx responses.
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub detail: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_deserializes_backend_shape() {
        let json = r#"{
            "id": 3,
            "email": "ana@clinic.com",
            "full_name": "Ana Souza",
            "role": "admin",
            "is_active": true,
            "created_at": "2025-03-01T12:00:00Z",
            "empresas": [{
                "id": 1,
                "nome": "Clinica Bela",
                "razao_social": "Bela Estetica LTDA",
                "cnpj": "12.345.678/0001-90",
                "email": "contato@bela.com",
                "telefone": "+55 11 99999-0000",
                "endereco": "Rua das Flores, 10"
            }],
            "modulos": []
        }"#;

        let user: User = serde_json::from_str(json).unwrap();
        assert!(user.is_admin());
        assert_eq!(user.companies.len(), 1);
        assert_eq!(user.companies[0].name, "Clinica Bela");
    }

    #[test]
    fn test_user_update_skips_unset_fields() {
        let update = UserUpdate {
            full_name: Some("New Name".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&update).unwrap();
        assert_eq!(json, r#"{"full_name":"New Name"}"#);
    }

    #[test]
    fn test_self_update_cannot_change_role() {
        let update = UserUpdate {
            full_name: Some("Ana S. Lima".to_string()),
            password: Some("n3w-secret".to_string()),
            role: Some(Role::Admin),
            ..Default::default()
        }
        .for_self();

        assert!(update.role.is_none());
        let json = serde_json::to_string(&update).unwrap();
        assert!(!json.contains("role"));
        assert!(json.contains("full_name"));
    }

    #[test]
    fn test_module_gating_checks_granted_slugs() {
        let module = ModuleInfo {
            id: 1,
            name: "Portfólio".to_string(),
            slug: "portfolio".to_string(),
            description: String::new(),
            order: 1,
            is_admin_only: false,
        };
        let user = User {
            id: 2,
            email: "ana@clinic.com".to_string(),
            full_name: "Ana Souza".to_string(),
            role: Role::Comum,
            is_active: true,
            created_at: None,
            companies: vec![],
            modules: vec![module],
        };

        assert!(user.has_module("portfolio"));
        assert!(!user.has_module("calculator"));
    }

    #[test]
    fn test_module_gating_admins_bypass() {
        let admin = User {
            id: 1,
            email: "root@clinic.com".to_string(),
            full_name: "Root".to_string(),
            role: Role::Admin,
            is_active: true,
            created_at: None,
            companies: vec![],
            modules: vec![],
        };

        assert!(admin.has_module("portfolio"));
    }

    #[test]
    fn test_role_wire_values() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), r#""admin""#);
        assert_eq!(serde_json::to_string(&Role::Comum).unwrap(), r#""comum""#);
    }
}
