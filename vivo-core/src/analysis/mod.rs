//! Analysis service client
//!
//! - traits.rs: the `AnalysisClient` seam used by the session
//! - client.rs: HTTP implementation over reqwest
//! - types.rs: request/response bodies and `AnalysisError`

mod client;
mod traits;
mod types;

pub use client::{HttpAnalysisClient, build_url};
pub use traits::AnalysisClient;
pub use types::{AnalysisError, GENERIC_FAILURE};
