use std::sync::Arc;

use crate::forms::{FormOutcome, FormValues, SubmitError, SubmitHandler};
use crate::page::{FormView, ServicesPage};

/// Page plus the injected submit collaborator, shared by every request.
pub struct ServicesSite<H> {
    page: ServicesPage,
    handler: Arc<H>,
}

impl<H> ServicesSite<H>
where
    H: SubmitHandler + 'static,
{
    pub fn new(page: ServicesPage, handler: Arc<H>) -> Self {
        Self { page, handler }
    }

    pub fn page(&self) -> &ServicesPage {
        &self.page
    }

    pub fn render(&self, view: &FormView) -> String {
        self.page.render(view)
    }

    pub fn submit(&self, values: &FormValues) -> Result<FormOutcome, SubmitError> {
        self.page.form().submit(values, self.handler.as_ref())
    }
}
