// Library for tests to access modules

pub mod artifact_repo;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod series;
pub mod version;
