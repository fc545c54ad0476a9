use std::sync::Arc;

use tracing::info;

use super::payload::SubmissionPayload;

/// Collaborator that receives validated submissions (API client, mailer, log sink).
pub trait SubmitHandler: Send + Sync {
    fn submit(&self, payload: &SubmissionPayload) -> Result<(), SubmitError>;
}

impl<H: SubmitHandler + ?Sized> SubmitHandler for Arc<H> {
    fn submit(&self, payload: &SubmissionPayload) -> Result<(), SubmitError> {
        (**self).submit(payload)
    }
}

/// Submit dispatch error.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("inquiry transport unavailable: {0}")]
    Transport(String),
}

/// Default handler: records the payload in the service log and nothing else.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingSubmitHandler;

impl SubmitHandler for LoggingSubmitHandler {
    fn submit(&self, payload: &SubmissionPayload) -> Result<(), SubmitError> {
        info!(fields = ?payload.fields(), "inquiry received");
        Ok(())
    }
}
