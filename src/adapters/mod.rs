//! Production and mock implementations of the crate's trait seams.

mod encrypted_store;
pub mod mock;
mod reqwest_http;

pub use encrypted_store::EncryptedFileStore;
pub use reqwest_http::ReqwestHttpClient;
