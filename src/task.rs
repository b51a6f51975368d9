use async_std::sync::Arc;
use async_std::task;
use crossbeam_channel::{unbounded, Receiver};
use futures::future::BoxFuture;
use task::JoinHandle;

pub use self::send_contact::{SendContact, SendOutcome};
use crate::DATA_RECEIVED;

mod send_contact;

/// Trait to define a type that spawns an Async Task to complete background
/// work.
///
/// The task executes exactly once; whatever it resolves to is handed back
/// over the response channel and a redraw is requested.
pub trait AsyncTask: 'static {
    type Input: Send + Sync;
    type Response: Send;

    /// Input data needed for the `task`
    fn input(&self) -> Self::Input;

    /// Defines the async task that will get executed and return `Response`
    fn task<'a>(input: Arc<Self::Input>) -> BoxFuture<'a, Option<Self::Response>>;

    /// Runs the task on the async runtime and returns a handle to query the
    /// response from
    fn connect(&self) -> AsyncTaskHandle<Self::Response> {
        let (response_sender, response_receiver) = unbounded::<Self::Response>();
        let data_received = DATA_RECEIVED.0.clone();

        let input = Arc::new(self.input());

        let handle = task::spawn(async move {
            if let Some(response) = <Self as AsyncTask>::task(input).await {
                let _ = response_sender.send(response);
                let _ = data_received.try_send(());
            }
        });

        AsyncTaskHandle {
            response: response_receiver,
            handle: Some(handle),
        }
    }
}

pub struct AsyncTaskHandle<R> {
    response: Receiver<R>,
    handle: Option<JoinHandle<()>>,
}

impl<R> AsyncTaskHandle<R> {
    pub fn response(&self) -> &Receiver<R> {
        &self.response
    }
}

impl<R> Drop for AsyncTaskHandle<R> {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            task::spawn(async { handle.cancel().await });
        }
    }
}
