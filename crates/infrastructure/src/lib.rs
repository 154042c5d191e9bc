pub mod audit;
pub mod database;
pub mod models;
pub mod repositories;
pub mod resources;
pub mod scraper;
