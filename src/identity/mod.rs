pub mod jwt;
pub mod provider;

pub use jwt::JwtIdentityProvider;
pub use provider::{Identity, IdentityProvider, Session};
