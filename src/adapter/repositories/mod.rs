//! Repository Implementations
//!
//! Domain層のRepositoryトレイトの実装

pub mod json_profile_repository;
