pub mod database;
pub mod logger;

pub use database::DatabaseManager;
