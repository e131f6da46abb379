use std::sync::mpsc::Sender;
use std::thread;

use crate::domain::RemoteEvent;

use super::ApiClient;

/// Runs API requests on worker threads and reports settlements over a
/// channel, keeping the UI thread free to render and take input.
///
/// Every dispatched request eventually produces exactly one
/// [`RemoteEvent`] on the channel; nothing is raised to the caller.
pub struct RequestDispatcher {
    client: ApiClient,
    tx: Sender<RemoteEvent>,
}

impl RequestDispatcher {
    pub fn new(client: ApiClient, tx: Sender<RemoteEvent>) -> Self {
        Self { client, tx }
    }

    /// Fetches the greeting of the day in the background.
    pub fn spawn_hello_fetch(&self) {
        let client = self.client.clone();
        let tx = self.tx.clone();
        thread::spawn(move || {
            let result = client.fetch_greeting_of_the_day();
            if let Err(ref err) = result {
                log::error!("Error fetching data: {}", err);
            }
            // The receiver is gone during teardown; nothing left to notify
            let _ = tx.send(RemoteEvent::HelloSettled(result));
        });
    }

    /// Fetches a personalized greeting for `name` in the background.
    pub fn spawn_greeting_fetch(&self, name: &str) {
        let client = self.client.clone();
        let tx = self.tx.clone();
        let name = name.to_string();
        thread::spawn(move || {
            let result = client.fetch_personal_greeting(&name);
            if let Err(ref err) = result {
                log::error!("Error fetching greeting: {}", err);
            }
            let _ = tx.send(RemoteEvent::GreetingSettled(result));
        });
    }
}
