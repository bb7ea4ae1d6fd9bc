pub mod brand_repo;
pub use brand_repo::BrandRepository;
pub mod claim_repo;
pub use claim_repo::ClaimRepository;
pub mod user_repo;
pub use user_repo::UserRepository;
