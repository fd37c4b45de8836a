pub mod auth;
pub mod chat;
pub mod resources;
pub mod taxes;
