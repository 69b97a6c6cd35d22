//! # user-rank
//!
//! A small in-memory user registry that ranks users by age.
//!
//! ## Features
//!
//! - **Builder**: create user records and append them to a collection
//! - **Ranker**: stable insertion sort by numeric age, then rank from the oldest
//! - **Query**: filter and sort a registry with JSON filters and sort expressions
//! - **Remote source**: fetch a user list over HTTP with an injected client
//!
//! ## Quick Start
//!
//! ```rust
//! use user_rank::prelude::*;
//!
//! let mut users = Vec::new();
//! add_user(create_user("John", "Doe", "21"), &mut users);
//! add_user(create_user("Pierre", "Martin", "10"), &mut users);
//! add_user(create_user("Paul", "Martin", "45"), &mut users);
//! add_user(create_user("Jack", "Martin", "4"), &mut users);
//!
//! // Ranking sorts `users` in place
//! let pierre = create_user("Pierre", "Martin", "10");
//! assert_eq!(rank_user(&pierre, &mut users), 3);
//! assert_eq!(users[0].name, "Jack");
//!
//! assert_eq!(rank_user(&create_user("Nobody", "Else", "1"), &mut users), -1);
//! ```

pub mod config;
pub mod core;
pub mod sources;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        ConfigError, QueryableStore, RANK_NOT_FOUND, RegistryError, RegistryResult, RemoteError,
        User, UserRegistry, UserSource, UsersResponse, add_user, age_of, create_user, find_rank,
        insertion_sort_by, rank_user, rank_user_in, sort_users,
    };

    // === Sources ===
    #[cfg(feature = "remote")]
    pub use crate::sources::HttpUserSource;
    pub use crate::sources::StaticUserSource;

    // === Config ===
    pub use crate::config::{RegistryConfig, RemoteConfig};

    // === External dependencies ===
    pub use async_trait::async_trait;
    pub use serde::{Deserialize, Serialize};
}
