use serde::Serialize;
use std::{fmt, str::FromStr};
use time::OffsetDateTime;
use uuid::Uuid;

/// Who an account belongs to. Fixed at signup.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Passenger,
    Driver,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Passenger => "passenger",
            Role::Driver => "driver",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "passenger" => Ok(Role::Passenger),
            "driver" => Ok(Role::Driver),
            _ => Err(()),
        }
    }
}

/// Extra details every driver has to supply.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DriverProfile {
    pub license_number: String,
    pub vehicle_number: String,
    pub contact_number: String,
    pub address: String,
}

/// Account record held by the store.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: Uuid,
    pub role: Role,
    pub full_name: String,
    pub email: String,                // lookup key, as submitted
    #[serde(skip_serializing)]
    pub password_hash: String,        // Argon2 PHC string, not exposed in JSON
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    pub driver_profile: Option<DriverProfile>,
}

/// Role-specific part of a new account.
#[derive(Debug, Clone)]
pub enum NewRole {
    Passenger,
    Driver(DriverProfile),
}

impl Account {
    /// Build a fresh account. The driver profile rides on the role so a
    /// passenger can never carry one.
    pub fn new(role: NewRole, full_name: String, email: String, password_hash: String) -> Self {
        let (role, driver_profile) = match role {
            NewRole::Passenger => (Role::Passenger, None),
            NewRole::Driver(profile) => (Role::Driver, Some(profile)),
        };
        Self {
            id: Uuid::new_v4(),
            role,
            full_name,
            email,
            password_hash,
            created_at: OffsetDateTime::now_utc(),
            driver_profile,
        }
    }
}
