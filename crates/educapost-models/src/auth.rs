//! Login and session payloads.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use educapost_auth::Role;

use crate::validation::{string_field, trimmed_field};

pub const CREDENTIALS_REQUIRED: &str = "email and password are required";
pub const ROLE_INVALID: &str = "role must be 'teacher' or 'student'";

/// Body of `POST /auth/login`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginRequest {
    pub email: Option<Value>,
    pub password: Option<Value>,
    pub role: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl LoginRequest {
    /// Email is trimmed and lowercased to match stored addresses.
    pub fn validate(&self) -> Result<Credentials, Vec<String>> {
        let mut errors = Vec::new();

        let email = trimmed_field(self.email.as_ref()).to_lowercase();
        let password = string_field(self.password.as_ref());
        if email.is_empty() || password.is_empty() {
            errors.push(CREDENTIALS_REQUIRED.to_string());
        }

        let role = match self.role.as_ref() {
            Some(Value::String(raw)) => Role::parse(raw),
            _ => None,
        };

        match role {
            Some(role) if errors.is_empty() => Ok(Credentials {
                email,
                password,
                role,
            }),
            Some(_) => Err(errors),
            None => {
                errors.push(ROLE_INVALID.to_string());
                Err(errors)
            }
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub role: Role,
    pub id: i32,
    pub name: String,
    pub email: String,
}

/// Body of `GET /auth/me`.
#[derive(Debug, Clone, Serialize)]
pub struct MeResponse {
    pub role: Role,
    pub id: i32,
    pub name: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(body: Value) -> LoginRequest {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_valid_login() {
        let credentials = request(json!({
            "email": " Professor@EducaPost.dev ",
            "password": "senha123",
            "role": "teacher"
        }))
        .validate()
        .unwrap();
        assert_eq!(credentials.email, "professor@educapost.dev");
        assert_eq!(credentials.role, Role::Teacher);
    }

    #[test]
    fn test_missing_credentials() {
        let errors = request(json!({ "email": "a@b.co", "role": "student" }))
            .validate()
            .unwrap_err();
        assert_eq!(errors, vec![CREDENTIALS_REQUIRED]);
    }

    #[test]
    fn test_bad_role() {
        let errors = request(json!({ "email": "a@b.co", "password": "x", "role": "admin" }))
            .validate()
            .unwrap_err();
        assert_eq!(errors, vec![ROLE_INVALID]);

        let errors = request(json!({ "email": "a@b.co", "password": "x", "role": "Teacher" }))
            .validate()
            .unwrap_err();
        assert_eq!(errors, vec![ROLE_INVALID]);
    }

    #[test]
    fn test_empty_body_reports_both() {
        let errors = LoginRequest::default().validate().unwrap_err();
        assert_eq!(errors, vec![CREDENTIALS_REQUIRED, ROLE_INVALID]);
    }

    #[test]
    fn test_login_response_shape() {
        let response = LoginResponse {
            token: "t".to_string(),
            role: Role::Student,
            id: 2,
            name: "Aluno".to_string(),
            email: "aluno@educapost.dev".to_string(),
        };
        assert_eq!(
            serde_json::to_value(response).unwrap(),
            json!({
                "token": "t",
                "role": "student",
                "id": 2,
                "name": "Aluno",
                "email": "aluno@educapost.dev"
            })
        );
    }
}
