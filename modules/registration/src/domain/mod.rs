pub mod controller;
pub mod draft;
pub mod error;
pub mod models;
pub mod repo;
pub mod sanitizer;
