pub mod config;
pub mod content;
pub mod handler;
pub mod sitemap;
