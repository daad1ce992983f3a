pub mod auth_token;
pub mod credentials;
pub mod role;
pub mod user_id;

pub use auth_token::AuthToken;
pub use credentials::Credentials;
pub use role::Role;
pub use user_id::UserId;
