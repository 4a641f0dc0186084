//! Data models module
//!
//! Defines credentials, operation inputs and provider response records

pub mod credentials;
pub mod requests;
pub mod responses;

pub use credentials::{Credentials, RequestContext};
pub use requests::*;
pub use responses::*;
