use std::sync::Arc;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, info, warn};

use crate::{
    auth::{
        dto::{LoginRequest, PublicAccount, SignupRequest},
        password::{hash_password_blocking, verify_password_blocking},
        repo::{AccountStore, InsertOutcome},
        repo_types::{Account, DriverProfile, NewRole, Role},
    },
    error::AppError,
};

pub(crate) const MIN_PASSWORD_LEN: usize = 8;

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

/// Length is counted in UTF-16 code units, the way browser clients count it.
pub(crate) fn is_valid_password(password: &str) -> bool {
    password.encode_utf16().count() >= MIN_PASSWORD_LEN
}

fn parse_role(role: Option<&str>) -> Option<Role> {
    role.and_then(|r| r.parse().ok())
}

/// The value as submitted, or `None` when missing or empty.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Signup and login over an injected [`AccountStore`].
#[derive(Clone)]
pub struct AccountRegistry {
    store: Arc<dyn AccountStore>,
}

impl AccountRegistry {
    pub fn new(store: Arc<dyn AccountStore>) -> Self {
        Self { store }
    }

    /// Create a new account.
    ///
    /// Checks run in a fixed order: role, then name/email/password shape,
    /// then email uniqueness, then driver details. Nothing is written until
    /// all of them pass.
    pub async fn register(&self, req: SignupRequest) -> Result<PublicAccount, AppError> {
        let role = parse_role(req.role.as_deref()).ok_or_else(|| {
            warn!(role = ?req.role, "signup with invalid role");
            AppError::InvalidRole
        })?;

        let email = req.email.unwrap_or_default();
        let password = req.password.unwrap_or_default();
        let full_name = match non_empty(req.full_name) {
            Some(name) if is_valid_email(&email) && is_valid_password(&password) => name,
            _ => {
                warn!(email = %email, "signup with invalid input");
                return Err(AppError::InvalidInput);
            }
        };

        if self.store.find_by_email(&email).await?.is_some() {
            warn!(email = %email, "email already registered");
            return Err(AppError::EmailTaken);
        }

        let new_role = match role {
            Role::Passenger => NewRole::Passenger,
            Role::Driver => {
                let profile = match (
                    non_empty(req.license_number),
                    non_empty(req.vehicle_number),
                    non_empty(req.contact_number),
                    non_empty(req.address),
                ) {
                    (Some(license_number), Some(vehicle_number), Some(contact_number), Some(address)) => {
                        DriverProfile {
                            license_number,
                            vehicle_number,
                            contact_number,
                            address,
                        }
                    }
                    _ => {
                        warn!(email = %email, "driver signup without full driver details");
                        return Err(AppError::MissingDriverDetails);
                    }
                };
                NewRole::Driver(profile)
            }
        };

        let hash = hash_password_blocking(password).await?;
        let account = Account::new(new_role, full_name, email, hash);
        let view = PublicAccount::from(&account);

        match self.store.insert_new(account).await? {
            InsertOutcome::Inserted => {
                info!(account_id = %view.id, email = %view.email, role = %view.role, "account registered");
                Ok(view)
            }
            InsertOutcome::AlreadyExists => {
                // Lost a race with a concurrent signup for the same email.
                warn!(email = %view.email, "email registered concurrently");
                Err(AppError::EmailTaken)
            }
        }
    }

    /// Check credentials for a role. Unknown email, wrong role and wrong
    /// password all fail the same way.
    pub async fn authenticate(&self, req: LoginRequest) -> Result<PublicAccount, AppError> {
        let role = parse_role(req.role.as_deref());
        let email = req.email.unwrap_or_default();
        let password = req.password.unwrap_or_default();

        let Some(role) = role.filter(|_| is_valid_email(&email) && is_valid_password(&password))
        else {
            warn!(email = %email, "login with malformed credentials");
            return Err(AppError::InvalidCredentialsFormat);
        };

        let account = match self.store.find_by_email(&email).await? {
            Some(acc) if acc.role == role => acc,
            Some(acc) => {
                debug!(account_id = %acc.id, requested = %role, "login role mismatch");
                warn!(email = %email, "login invalid credentials");
                return Err(AppError::InvalidCredentials);
            }
            None => {
                warn!(email = %email, "login unknown email");
                return Err(AppError::InvalidCredentials);
            }
        };

        if !verify_password_blocking(password, account.password_hash.clone()).await? {
            warn!(email = %email, account_id = %account.id, "login invalid password");
            return Err(AppError::InvalidCredentials);
        }

        info!(account_id = %account.id, email = %account.email, "account logged in");
        Ok(PublicAccount::from(&account))
    }
}
