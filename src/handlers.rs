pub mod auth;
pub mod brands;
pub mod claims;
pub mod dashboard;
