pub mod auth;
pub mod demo;
pub mod users;

pub use self::auth::model::LoginRequest;
pub use self::users::model::User;
