//! Middleware for session-backed authentication and authorization.
//!
//! # Modules
//!
//! - [`auth`]: the login gate and the `CurrentUser` extractor
//! - [`role`]: role checks for protected routes
//!
//! # Request flow
//!
//! 1. The session middleware (from `facultydir-session`) resolves or creates
//!    the session and attaches it to the request
//! 2. `require_login` admits the request if the session carries a principal,
//!    redirecting to `/login` otherwise
//! 3. `require_admin` (and friends) additionally check the principal's role,
//!    queueing a flash message and redirecting on failure
//! 4. The handler executes; gate redirects never reach it

pub mod auth;
pub mod role;
