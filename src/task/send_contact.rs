use async_std::sync::Arc;
use futures::future::BoxFuture;
use tracing::{debug, error, info};

use super::*;
use crate::contact::ContactSubmission;
use crate::opts::Credentials;
use api::model::TemplateParams;

/// Result of one delivery attempt. There is never a second one; a failure
/// is surfaced to the user, who may resubmit the retained form.
#[derive(Debug, Clone, PartialEq)]
pub enum SendOutcome {
    Delivered,
    Failed(String),
}

/// Delivers a consultation request through the email provider
pub struct SendContact {
    credentials: Credentials,
    submission: ContactSubmission,
}

impl SendContact {
    pub fn new(credentials: Credentials, submission: ContactSubmission) -> SendContact {
        SendContact {
            credentials,
            submission,
        }
    }
}

impl AsyncTask for SendContact {
    type Input = (Credentials, ContactSubmission);
    type Response = SendOutcome;

    fn input(&self) -> Self::Input {
        (self.credentials.clone(), self.submission.clone())
    }

    fn task<'a>(input: Arc<Self::Input>) -> BoxFuture<'a, Option<Self::Response>> {
        Box::pin(async move {
            let (credentials, submission) = input.as_ref();

            let params = TemplateParams {
                from_name: submission.name.clone(),
                from_email: submission.email.clone(),
                message: submission.message.clone(),
                to_email: credentials.to_email.clone(),
            };

            debug!(from = %submission.email, "submitting consultation request");

            match crate::CLIENT
                .send_email(
                    &credentials.service_id,
                    &credentials.template_id,
                    &params,
                    &credentials.public_key,
                )
                .await
            {
                Ok(()) => {
                    info!(from = %submission.email, "consultation request delivered");

                    Some(SendOutcome::Delivered)
                }
                Err(e) => {
                    error!("consultation request failed: {:#}", e);

                    Some(SendOutcome::Failed(e.to_string()))
                }
            }
        })
    }
}
