//! # alumnet-db
//!
//! Database layer implementing the repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for all repository traits
//! defined in `alumnet-core`. It handles:
//!
//! - Connection pool management
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - Repository implementations
//!
//! Counter maintenance (reaction/vote/comment tallies cached on the parent
//! rows) happens inside the repository transactions: the child-row write and
//! the clamped counter update always commit together.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use alumnet_db::pool::{create_pool, DatabaseConfig};
//! use alumnet_db::PgPostRepository;
//! use alumnet_core::traits::PostRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env();
//!     let pool = create_pool(&config).await?;
//!     let post_repo = PgPostRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, DatabaseConfig, PgPool};
pub use repositories::{
    PgCommentRepository, PgInvitationRepository, PgPostRepository, PgProfileRepository,
    PgProposalRepository, PgReactionRepository, PgReportAttachmentRepository,
    PgReportDetailRepository, PgReportRepository, PgReportStageRepository,
    PgReportTypeRepository, PgVoteRepository,
};
