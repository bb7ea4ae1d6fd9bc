pub mod auth;
pub mod claim_service;
pub mod notification;
