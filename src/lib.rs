pub mod auth;
pub mod config;
pub mod db;
pub mod domain;
pub mod dto;
pub mod models;
pub mod pagination;
pub mod repository;
pub mod routes;
pub mod schema;
pub mod services;

/// Image reference assigned to products until a picture is uploaded.
pub const DEFAULT_PRODUCT_IMAGE: &str = "default.png";
