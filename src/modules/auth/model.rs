use std::sync::Arc;

use facultydir_session::AuthenticatedPrincipal;
use serde::Deserialize;
use validator::Validate;

/// A directory account: the source of the role stored on the session
/// principal at login time.
#[derive(Debug, Clone)]
pub struct DirectoryAccount {
    pub username: String,
    pub display_name: String,
    pub role_name: String,
}

impl DirectoryAccount {
    /// The principal stored in the session, built exactly once per login.
    pub fn to_principal(&self) -> AuthenticatedPrincipal {
        AuthenticatedPrincipal {
            username: self.username.clone(),
            display_name: self.display_name.clone(),
            role_name: self.role_name.clone(),
        }
    }
}

/// In-memory account collection shared across requests.
#[derive(Debug, Clone)]
pub struct AccountRegistry {
    accounts: Arc<Vec<DirectoryAccount>>,
}

impl AccountRegistry {
    pub fn new(accounts: Vec<DirectoryAccount>) -> Self {
        Self {
            accounts: Arc::new(accounts),
        }
    }

    /// The accounts the application boots with.
    pub fn seeded() -> Self {
        fn account(username: &str, display_name: &str, role_name: &str) -> DirectoryAccount {
            DirectoryAccount {
                username: username.to_string(),
                display_name: display_name.to_string(),
                role_name: role_name.to_string(),
            }
        }

        Self::new(vec![
            account("amara.okafor", "Amara Okafor", "admin"),
            account("liam.ferris", "Liam Ferris", "user"),
            account("noor.haddad", "Noor Haddad", "editor"),
        ])
    }

    /// Exact-match lookup by username.
    pub fn find(&self, username: &str) -> Option<&DirectoryAccount> {
        self.accounts.iter().find(|a| a.username == username)
    }
}

/// Login form body.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "username is required"))]
    pub username: String,
}
