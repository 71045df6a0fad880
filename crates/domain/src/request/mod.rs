//! Request types

mod method;
mod spec;

pub use method::HttpMethod;
pub use spec::{Header, JSON_CONTENT_TYPE, PreparedRequest, RequestDefaults, RequestSpec};
