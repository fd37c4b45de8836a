// src/lib.rs

// Declaración de los módulos del servicio
pub mod common;
pub mod config;
pub mod db;
pub mod docs;
pub mod handlers;
pub mod identity;
pub mod middleware;
pub mod models;
pub mod services;
