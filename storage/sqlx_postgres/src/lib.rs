pub mod configuration;
pub mod contacts;
pub mod migrations;
pub mod repository;
