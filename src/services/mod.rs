//! Service layer module
//!
//! Contains validation, the endpoint table, request building, the HTTP
//! executor and the client facade

pub mod client;
pub mod endpoints;
pub mod request;
pub mod transport;
pub mod validation;

pub use client::AndromedaClient;
pub use endpoints::{Endpoint, Operation};
pub use request::ApiRequest;
pub use transport::{Executor, RawResponse, ReqwestTransport, Transport, API_KEY_HEADER};
