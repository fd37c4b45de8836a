pub mod auth;
pub mod chat;
pub mod clients;
pub mod documents;
pub mod invoices;
pub mod taxes;
