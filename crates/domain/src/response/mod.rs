//! HTTP response domain types

mod decoded;
mod raw;

pub use decoded::{ApiResponse, Signature};
pub use raw::RawResponse;
