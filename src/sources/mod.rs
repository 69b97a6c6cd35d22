//! User source implementations

#[cfg(feature = "remote")]
pub mod http;
pub mod in_memory;

#[cfg(feature = "remote")]
pub use http::HttpUserSource;
pub use in_memory::StaticUserSource;
