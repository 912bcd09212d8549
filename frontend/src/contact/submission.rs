use std::rc::Rc;
use futures::future::{FutureExt, LocalBoxFuture};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use log::info;
use thiserror::Error;

use crate::contact::payload::FormPayload;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SubmitError {
    #[error("Could not reach the server: {0}")]
    Network(String),
    #[error("The server rejected the request ({0})")]
    Rejected(u16),
}

impl From<gloo_net::Error> for SubmitError {
    fn from(e: gloo_net::Error) -> Self {
        SubmitError::Network(e.to_string())
    }
}

/// Hands a serialized form to whatever delivers leads.
pub trait Submitter {
    fn submit(&self, payload: FormPayload) -> LocalBoxFuture<'static, Result<(), SubmitError>>;
}

/// Stand-in used until a lead endpoint exists: waits a fixed delay and always succeeds.
pub struct SimulatedSubmitter {
    pub delay_ms: u32,
}

impl Submitter for SimulatedSubmitter {
    fn submit(&self, payload: FormPayload) -> LocalBoxFuture<'static, Result<(), SubmitError>> {
        let delay_ms = self.delay_ms;
        async move {
            info!("Simulating submission of {} fields", payload.len());
            TimeoutFuture::new(delay_ms).await;
            Ok(())
        }
        .boxed_local()
    }
}

/// POSTs the payload as JSON.
pub struct HttpSubmitter {
    pub url: String,
}

impl Submitter for HttpSubmitter {
    fn submit(&self, payload: FormPayload) -> LocalBoxFuture<'static, Result<(), SubmitError>> {
        let url = self.url.clone();
        async move {
            let response = Request::post(&url).json(&payload)?.send().await?;
            if response.ok() {
                Ok(())
            } else {
                Err(SubmitError::Rejected(response.status()))
            }
        }
        .boxed_local()
    }
}

/// Shared submitter that can sit in component properties.
#[derive(Clone)]
pub struct SubmitterHandle(Rc<dyn Submitter>);

impl SubmitterHandle {
    pub fn new(submitter: impl Submitter + 'static) -> Self {
        Self(Rc::new(submitter))
    }

    pub fn submit(&self, payload: FormPayload) -> LocalBoxFuture<'static, Result<(), SubmitError>> {
        self.0.submit(payload)
    }
}

impl PartialEq for SubmitterHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
