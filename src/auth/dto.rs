use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::repo_types::{Account, Role};

/// Request body for `POST /api/signup`.
///
/// Every field is optional at the wire level so that missing or empty values
/// surface as domain errors rather than JSON rejections.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub role: Option<String>,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub license_number: Option<String>,
    pub vehicle_number: Option<String>,
    pub contact_number: Option<String>,
    pub address: Option<String>,
}

/// Request body for `POST /api/login`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub role: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Public part of an account returned to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicAccount {
    pub id: Uuid,
    pub role: Role,
    pub email: String,
    pub full_name: String,
}

impl From<&Account> for PublicAccount {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id,
            role: account.role,
            email: account.email.clone(),
            full_name: account.full_name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signup_request_reads_camel_case() {
        let req: SignupRequest = serde_json::from_str(
            r#"{"role":"driver","fullName":"Bo","email":"bo@x.io","password":"secret123",
                "licenseNumber":"L","vehicleNumber":"V","contactNumber":"C","address":"A"}"#,
        )
        .unwrap();
        assert_eq!(req.full_name.as_deref(), Some("Bo"));
        assert_eq!(req.license_number.as_deref(), Some("L"));
        assert_eq!(req.address.as_deref(), Some("A"));
    }

    #[test]
    fn public_account_has_exactly_four_fields() {
        let view = PublicAccount {
            id: Uuid::new_v4(),
            role: Role::Driver,
            email: "bo@x.io".into(),
            full_name: "Bo".into(),
        };
        let value = serde_json::to_value(&view).unwrap();
        let obj = value.as_object().unwrap();
        let mut keys: Vec<_> = obj.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, ["email", "fullName", "id", "role"]);
        assert_eq!(obj["role"], "driver");
    }
}
