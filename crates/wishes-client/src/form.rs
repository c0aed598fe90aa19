//! Wishes form state.
//!
//! State sits behind a mutex so the UI can read `is_submitting` while a
//! submit is awaiting the transport. The lock is never held across an
//! await point.

use std::sync::{Mutex, MutexGuard, PoisonError};

use mockable::Clock;
use tracing::{info, warn};

use crate::error::SubmitRefusal;
use crate::notice::Notice;
use crate::transport::{WishPayload, WishTransport};

#[derive(Debug, Default)]
struct FormState {
    name: String,
    message: String,
    submitting: bool,
}

/// Name and message fields plus the in-flight flag.
#[derive(Debug, Default)]
pub struct WishesForm {
    state: Mutex<FormState>,
    email: Option<String>,
}

/// Clears `submitting` when the submit settles or is cancelled.
struct InFlight<'a> {
    form: &'a WishesForm,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.form.lock().submitting = false;
    }
}

impl WishesForm {
    /// Empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a contact address sent with every wish.
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    fn lock(&self) -> MutexGuard<'_, FormState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replace the name field.
    pub fn set_name(&self, name: impl Into<String>) {
        self.lock().name = name.into();
    }

    /// Replace the message field.
    pub fn set_message(&self, message: impl Into<String>) {
        self.lock().message = message.into();
    }

    /// Current name field.
    #[must_use]
    pub fn name(&self) -> String {
        self.lock().name.clone()
    }

    /// Current message field.
    #[must_use]
    pub fn message(&self) -> String {
        self.lock().message.clone()
    }

    /// Whether a submit is awaiting the transport. The submit control is
    /// disabled while this holds.
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.lock().submitting
    }

    fn begin<'a>(
        &'a self,
        clock: &dyn Clock,
    ) -> Result<(InFlight<'a>, WishPayload), SubmitRefusal> {
        let mut state = self.lock();
        if state.submitting {
            return Err(SubmitRefusal::InFlight);
        }
        if state.name.trim().is_empty() {
            return Err(SubmitRefusal::MissingName);
        }
        if state.message.trim().is_empty() {
            return Err(SubmitRefusal::MissingMessage);
        }
        state.submitting = true;
        let payload = WishPayload {
            name: state.name.clone(),
            message: state.message.clone(),
            email: self.email.clone(),
            timestamp: clock.utc(),
        };
        Ok((InFlight { form: self }, payload))
    }

    /// Post the current fields once through `transport`.
    ///
    /// Fields are cleared only when the transport succeeds; `submitting` is
    /// cleared however the call settles. Failures are not retried.
    ///
    /// # Errors
    ///
    /// Returns a [`SubmitRefusal`] without touching the network when a
    /// submit is already in flight or a field is blank.
    pub async fn submit<T>(&self, transport: &T, clock: &dyn Clock) -> Result<Notice, SubmitRefusal>
    where
        T: WishTransport + ?Sized,
    {
        let (in_flight, payload) = self.begin(clock)?;
        let outcome = transport.post_wish(&payload).await;
        let notice = match outcome {
            Ok(()) => {
                let mut state = self.lock();
                state.name.clear();
                state.message.clear();
                info!("wish submitted");
                Notice::thank_you()
            }
            Err(error) => {
                warn!(%error, "wish submission failed");
                Notice::failure()
            }
        };
        drop(in_flight);
        Ok(notice)
    }
}
