//! Application state management for the terminal greeting client.
//!
//! This module contains the main application state and mode management
//! for the terminal user interface.

use crate::domain::{ApiResult, GreetingOfTheDay, PersonalGreeting, RemoteEvent};

/// Represents the current mode of the application.
///
/// The application can be in different modes that determine how user input
/// is interpreted and what UI elements are displayed.
#[derive(Debug)]
pub enum AppMode {
    /// Normal mode - shortcuts available, `q` quits
    Normal,
    /// Name entry mode - user is typing into the name field
    EditingName,
    /// Help screen is displayed
    Help,
}

/// Main application state driving the terminal UI.
///
/// Holds everything needed to render the UI: the greeting-of-the-day
/// status, the structured payload behind it, the user-entered name, the
/// personalized greeting, and whether a greeting request is in flight.
/// Each field is written only by its owning operation below; the
/// rendering surface reads the latest committed state every frame.
///
/// # Examples
///
/// ```
/// use tgreet::application::App;
///
/// let app = App::default();
/// assert_eq!(app.status_message, "Loading...");
/// assert!(app.api_payload.is_none());
/// assert!(!app.is_loading);
/// ```
#[derive(Debug)]
pub struct App {
    /// Status line for the greeting-of-the-day card
    pub status_message: String,
    /// Full `/api/hello` payload once the initial fetch resolves
    pub api_payload: Option<GreetingOfTheDay>,
    /// Current name input buffer
    pub name_input: String,
    /// Personalized greeting from the last settled request
    pub greeting_result: String,
    /// Whether a greeting request is currently in flight
    pub is_loading: bool,
    /// Current application mode
    pub mode: AppMode,
    /// Cursor position within the name input buffer (byte offset)
    pub cursor_position: usize,
}

impl Default for App {
    fn default() -> Self {
        Self {
            status_message: "Loading...".to_string(),
            api_payload: None,
            name_input: String::new(),
            greeting_result: String::new(),
            is_loading: false,
            mode: AppMode::Normal,
            cursor_position: 0,
        }
    }
}

impl App {
    /// Switches to name entry mode.
    ///
    /// Keeps whatever was typed previously and positions the cursor at
    /// the end of the buffer.
    pub fn start_name_entry(&mut self) {
        self.mode = AppMode::EditingName;
        self.cursor_position = self.name_input.len();
    }

    /// Leaves name entry mode without submitting.
    ///
    /// The typed name is kept so the user can pick up where they left off.
    pub fn cancel_name_entry(&mut self) {
        self.mode = AppMode::Normal;
    }

    /// Begins a greeting submission for the current name input.
    ///
    /// If the trimmed input is empty this is a no-op: no request may be
    /// issued and no state changes. Otherwise the in-flight flag is set
    /// and the raw (untrimmed) name is returned for the caller to fetch.
    ///
    /// # Returns
    ///
    /// The name to request a greeting for, or `None` when the input is
    /// blank
    ///
    /// # Examples
    ///
    /// ```
    /// use tgreet::application::App;
    ///
    /// let mut app = App::default();
    /// assert_eq!(app.start_greeting_request(), None);
    ///
    /// app.name_input = "Ada".to_string();
    /// assert_eq!(app.start_greeting_request(), Some("Ada".to_string()));
    /// assert!(app.is_loading);
    /// ```
    pub fn start_greeting_request(&mut self) -> Option<String> {
        if self.name_input.trim().is_empty() {
            return None;
        }

        self.is_loading = true;
        Some(self.name_input.clone())
    }

    /// Processes the settlement of the initial `/api/hello` fetch.
    ///
    /// On success the status message takes the server-provided message
    /// and the full payload is kept for the detail lines. On failure the
    /// status message becomes a fixed fallback string and the payload is
    /// left untouched.
    ///
    /// # Arguments
    ///
    /// * `result` - Outcome of the hello fetch (payload or error)
    pub fn set_hello_result(&mut self, result: ApiResult<GreetingOfTheDay>) {
        match result {
            Ok(payload) => {
                self.status_message = payload.message.clone();
                self.api_payload = Some(payload);
            }
            Err(_) => {
                self.status_message = "Error connecting to API".to_string();
            }
        }
    }

    /// Processes the settlement of a `/api/greet/{name}` fetch.
    ///
    /// On success the greeting takes the server-provided message; on
    /// failure it becomes a fixed fallback string. The in-flight flag is
    /// cleared unconditionally, whatever the outcome.
    ///
    /// # Arguments
    ///
    /// * `result` - Outcome of the greeting fetch (payload or error)
    pub fn set_greeting_result(&mut self, result: ApiResult<PersonalGreeting>) {
        match result {
            Ok(payload) => {
                self.greeting_result = payload.message;
            }
            Err(_) => {
                self.greeting_result = "Error fetching greeting".to_string();
            }
        }

        self.is_loading = false;
    }

    /// Routes a request settlement to the matching state update.
    pub fn apply_remote_event(&mut self, event: RemoteEvent) {
        match event {
            RemoteEvent::HelloSettled(result) => self.set_hello_result(result),
            RemoteEvent::GreetingSettled(result) => self.set_greeting_result(result),
        }
    }
}
