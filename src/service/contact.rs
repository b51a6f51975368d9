use super::Service;
use crate::contact::ContactSubmission;
use crate::opts::Credentials;
use crate::task::{AsyncTask, AsyncTaskHandle, SendContact, SendOutcome};

/// Owns the single in-flight delivery. Dropping the service after the
/// outcome has been drained is how the one-at-a-time guarantee is kept.
pub struct ContactService {
    send_handle: AsyncTaskHandle<SendOutcome>,
}

impl ContactService {
    pub fn new(credentials: Credentials, submission: ContactSubmission) -> ContactService {
        let task = SendContact::new(credentials, submission);
        let send_handle = task.connect();

        ContactService { send_handle }
    }
}

#[derive(Debug)]
pub enum Update {
    Outcome(SendOutcome),
}

impl Service for ContactService {
    type Update = Update;

    fn updates(&self) -> Vec<Self::Update> {
        self.send_handle
            .response()
            .try_iter()
            .map(Update::Outcome)
            .collect()
    }
}
