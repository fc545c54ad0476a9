//! HTTP surface for the services page and its inquiry form.

pub mod router;
pub mod service;

pub use router::{services_router, INQUIRY_API_PATH};
pub use service::ServicesSite;
