//! Bearer token acquisition.

mod token_provider;

pub use token_provider::{HttpTokenProvider, StaticTokenProvider};
