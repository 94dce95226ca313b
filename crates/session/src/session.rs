//! The session store.
//!
//! Owns the single record slot, the loading flag, and the per-field
//! intake errors behind the [`SessionState`] machine. All mutation goes
//! through `submit` / `regenerate` / `reset`; the lock is never held
//! across an await, and the `Loading` state is what rejects a second
//! call while one is outstanding.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use bizpulse_insight::{validate, BusinessRecord, Field, FieldErrors};
use tracing::{debug, error, info, warn};

use crate::error::{Result, SessionError};
use crate::provider::InsightProvider;
use crate::state::SessionState;

#[derive(Debug)]
struct SessionInner {
    state: SessionState,
    record: Option<BusinessRecord>,
    field_errors: FieldErrors,
    last_failure: Option<String>,
}

/// One dashboard session: intake, a single displayed record, and the
/// provider boundary.
pub struct Session {
    provider: Arc<dyn InsightProvider>,
    inner: Mutex<SessionInner>,
}

impl Session {
    /// Creates a session over the given provider.
    pub fn new(provider: Arc<dyn InsightProvider>) -> Self {
        Self {
            provider,
            inner: Mutex::new(SessionInner {
                state: SessionState::Intake,
                record: None,
                field_errors: FieldErrors::default(),
                last_failure: None,
            }),
        }
    }

    /// Validates the intake fields and fetches a fresh record.
    ///
    /// The returned record has replaced the slot wholesale and the
    /// session is in `Display`.
    ///
    /// # Errors
    /// - [`SessionError::RequestInFlight`] while another call is
    ///   outstanding.
    /// - [`SessionError::Validation`] when a field is empty; the
    ///   per-field reasons are also retained on the session for inline
    ///   display.
    /// - [`SessionError::Provider`] when the backend fails; the failure
    ///   is surfaced via [`Session::last_failure`] and the session
    ///   falls back to the state matching its record slot.
    pub async fn submit(&self, name: &str, location: &str) -> Result<BusinessRecord> {
        let profile = {
            let mut inner = self.lock_inner();
            if inner.state.is_loading() {
                warn!("submission rejected, request already in flight");
                return Err(SessionError::request_in_flight("submit"));
            }

            match validate(name, location) {
                Ok(profile) => {
                    inner.field_errors = FieldErrors::default();
                    Self::transition(&mut inner, SessionState::Loading)?;
                    profile
                }
                Err(errors) => {
                    warn!(%errors, "intake validation failed");
                    inner.field_errors = errors.clone();
                    return Err(SessionError::Validation(errors));
                }
            }
        };

        info!(
            name = %profile.name,
            location = %profile.location,
            provider = self.provider.name(),
            "fetching business insights"
        );

        let outcome = self.provider.fetch_insights(&profile).await;

        let mut inner = self.lock_inner();
        match outcome {
            Ok(record) => {
                Self::transition(&mut inner, SessionState::Display)?;
                inner.last_failure = None;
                inner.record = Some(record.clone());
                info!(headline = %record.headline, "insights ready");
                Ok(record)
            }
            Err(e) => {
                error!(error = %e, "insight fetch failed");
                inner.last_failure = Some(e.to_string());
                // A previous record survives a failed resubmission.
                let fallback = if inner.record.is_some() {
                    SessionState::Display
                } else {
                    SessionState::Intake
                };
                Self::transition(&mut inner, fallback)?;
                Err(e)
            }
        }
    }

    /// Re-derives only the headline of the displayed record.
    ///
    /// Valid only from `Display`; everything except `headline` is
    /// carried over unchanged.
    ///
    /// # Errors
    /// - [`SessionError::RequestInFlight`] while another call is
    ///   outstanding.
    /// - [`SessionError::NoRecord`] when nothing is on display.
    /// - [`SessionError::Provider`] when the backend fails; the old
    ///   record stays on display.
    pub async fn regenerate(&self) -> Result<BusinessRecord> {
        let current = {
            let mut inner = self.lock_inner();
            if inner.state.is_loading() {
                warn!("regeneration rejected, request already in flight");
                return Err(SessionError::request_in_flight("regenerate"));
            }
            let Some(record) = inner.record.clone() else {
                return Err(SessionError::NoRecord);
            };
            Self::transition(&mut inner, SessionState::Loading)?;
            record
        };

        info!(
            name = %current.name,
            provider = self.provider.name(),
            "regenerating headline"
        );

        let outcome = self.provider.refresh_headline(&current).await;

        let mut inner = self.lock_inner();
        Self::transition(&mut inner, SessionState::Display)?;
        match outcome {
            Ok(updated) => {
                inner.last_failure = None;
                inner.record = Some(updated.clone());
                info!(headline = %updated.headline, "headline regenerated");
                Ok(updated)
            }
            Err(e) => {
                error!(error = %e, "headline regeneration failed");
                inner.last_failure = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// The external "New Analysis" action: destroys the record and
    /// returns to intake.
    ///
    /// # Errors
    /// Returns [`SessionError::RequestInFlight`] while a call is
    /// outstanding; an in-flight delay has no cancellation.
    pub fn reset(&self) -> Result<()> {
        let mut inner = self.lock_inner();
        if inner.state.is_loading() {
            return Err(SessionError::request_in_flight("reset"));
        }

        debug!(from = %inner.state, "session reset");
        inner.record = None;
        inner.field_errors = FieldErrors::default();
        inner.last_failure = None;
        // Display -> Intake per the lifecycle; from Intake this only
        // clears stale field errors.
        inner.state = SessionState::Intake;
        Ok(())
    }

    /// Drops the inline error for one field the moment it is edited.
    pub fn clear_field_error(&self, field: Field) {
        self.lock_inner().field_errors.clear(field);
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SessionState {
        self.lock_inner().state
    }

    /// True exactly while a synthesis or regeneration call is
    /// outstanding; the view layer gates inputs and buttons on it.
    pub fn is_loading(&self) -> bool {
        self.state().is_loading()
    }

    /// The displayed record, if any.
    pub fn record(&self) -> Option<BusinessRecord> {
        self.lock_inner().record.clone()
    }

    /// Per-field intake errors from the last submission attempt.
    pub fn field_errors(&self) -> FieldErrors {
        self.lock_inner().field_errors.clone()
    }

    /// The surfaced message of the last provider failure, if any.
    pub fn last_failure(&self) -> Option<String> {
        self.lock_inner().last_failure.clone()
    }

    fn transition(inner: &mut SessionInner, to: SessionState) -> Result<()> {
        let from = inner.state;
        if !from.can_transition_to(to) {
            return Err(SessionError::invalid_transition(
                from.to_string(),
                to.to_string(),
            ));
        }
        inner.state = to;
        debug!(%from, %to, "session state transitioned");
        Ok(())
    }

    fn lock_inner(&self) -> MutexGuard<'_, SessionInner> {
        // Mutation never panics while holding the lock; recover the
        // guard anyway rather than poisoning the whole session.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
