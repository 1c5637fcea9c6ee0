pub mod admin;
pub mod auth;
pub mod faculty;

pub use self::auth::model::LoginRequest;
pub use self::faculty::model::FacultyMember;
