use std::sync::Mutex;

use crate::forms::payload::{FormValues, SubmissionPayload};
use crate::forms::submit::{SubmitError, SubmitHandler};

#[derive(Default)]
pub(super) struct MemoryHandler {
    received: Mutex<Vec<SubmissionPayload>>,
}

impl MemoryHandler {
    pub(super) fn received(&self) -> Vec<SubmissionPayload> {
        self.received.lock().expect("handler mutex poisoned").clone()
    }
}

impl SubmitHandler for MemoryHandler {
    fn submit(&self, payload: &SubmissionPayload) -> Result<(), SubmitError> {
        self.received
            .lock()
            .expect("handler mutex poisoned")
            .push(payload.clone());
        Ok(())
    }
}

pub(super) struct OfflineHandler;

impl SubmitHandler for OfflineHandler {
    fn submit(&self, _payload: &SubmissionPayload) -> Result<(), SubmitError> {
        Err(SubmitError::Transport("mail relay offline".to_string()))
    }
}

pub(super) fn values(pairs: &[(&str, &str)]) -> FormValues {
    pairs
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
}

pub(super) fn valid_inquiry() -> FormValues {
    values(&[
        ("name", "Ana"),
        ("email", "ana@example.com"),
        ("inquiryType", "Web Development"),
        ("message", "Hi"),
    ])
}

pub(super) fn blank_inquiry() -> FormValues {
    values(&[
        ("name", ""),
        ("email", "bad"),
        ("inquiryType", ""),
        ("message", ""),
    ])
}
