//! # facultydir
//!
//! A server-rendered faculty directory with session-based authentication
//! and role-based authorization.
//!
//! ## Overview
//!
//! The application serves the faculty list and detail pages behind a login
//! gate, an admin dashboard behind a role gate, and a login/logout flow
//! that establishes the session principal. Authorization outcomes are
//! communicated across redirects with one-shot flash messages.
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── config/           # Deployment configuration (environment, bind address)
//! ├── middleware/       # Authentication and authorization gates
//! ├── modules/          # Feature modules
//! │   ├── auth/        # Login page, login, logout
//! │   ├── faculty/     # Faculty list and detail pages
//! │   └── admin/       # Admin dashboard (role-gated)
//! └── utils/           # Shared utilities (errors)
//! ```
//!
//! Each feature module follows a consistent structure:
//!
//! - `mod.rs`: Module exports
//! - `controller.rs`: HTTP handlers (routes)
//! - `service.rs`: Business logic
//! - `model.rs`: Data models and DTOs
//! - `router.rs`: Axum router configuration
//!
//! Session state lives in the [`facultydir_session`] crate: the store
//! interface (Redis-backed or in-memory), the session record with its
//! flash mapping, and the middleware that attaches and persists sessions.
//!
//! ## Request flow
//!
//! Every request passes the logging middleware and the session middleware;
//! protected routes then pass `require_login` (redirects anonymous requests
//! to `/login`) or `require_admin` (redirects non-admins with a flash
//! message). Handlers render HTML through [`view`], which drains the flash
//! queue into the page.
//!
//! ## Security considerations
//!
//! - Session tokens are opaque CSPRNG values; all session data is server-side
//! - The session cookie is `HttpOnly` and `Secure` outside development
//! - Roles are flat strings compared exactly; there is no hierarchy
//! - Malformed session state denies access instead of erroring

pub mod config;
pub mod logging;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod utils;
pub mod validator;
pub mod view;

// Re-export the session crate for convenience
pub use facultydir_session;
