//! Core module containing the user record, ranking and service traits

pub mod error;
pub mod rank;
pub mod registry;
pub mod service;
pub mod store;
pub mod user;

pub use error::{ConfigError, RegistryError, RegistryResult, RemoteError};
pub use rank::{RANK_NOT_FOUND, find_rank, insertion_sort_by, rank_user, rank_user_in, sort_users};
pub use registry::UserRegistry;
pub use service::{UserSource, UsersResponse};
pub use store::QueryableStore;
pub use user::{User, add_user, age_of, create_user};
