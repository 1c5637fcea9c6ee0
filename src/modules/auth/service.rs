use facultydir_session::AuthenticatedPrincipal;
use tracing::info;

use super::model::AccountRegistry;

pub struct AuthService;

impl AuthService {
    /// Resolve a directory account to the principal stored in the session.
    ///
    /// Credential verification belongs to the external identity provider;
    /// this application only maps a known account to its role.
    pub fn authenticate(
        accounts: &AccountRegistry,
        username: &str,
    ) -> Option<AuthenticatedPrincipal> {
        let account = accounts.find(username)?;

        info!(username = %account.username, role = %account.role_name, "Login");

        Some(account.to_principal())
    }
}
