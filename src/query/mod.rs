pub mod executor;
pub mod response;
pub mod transport;
pub mod types;

pub use executor::{lookup, query};
pub use transport::{HttpTransport, StatusTransport, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT};
pub use types::{QueryResult, ServerAddress, ServerStatus};
