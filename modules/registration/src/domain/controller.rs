//! Form state controller.
//!
//! Owns the draft, the visible view and the status line of one session, and
//! is the only place where the view changes.

use std::sync::Arc;

use super::draft::{Field, FormDraft};
use super::error::{SubmitError, ValidationErrors};
use super::models::Registration;
use super::repo::RegistrationRepository;

pub const SUCCESS_MESSAGE: &str = "Registration completed successfully!";
pub const STORAGE_FAILURE_MESSAGE: &str = "Registration failed: the record could not be saved";

/// Which of the two screens is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    Form,
    Success,
}

/// Outcome of the last action, as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Idle,
    Rejected(ValidationErrors),
    StoreFailed,
    Registered { id: i64 },
}

impl Status {
    /// Text for the message region, if any.
    #[must_use]
    pub fn text(&self) -> Option<String> {
        match self {
            Status::Idle => None,
            Status::Rejected(errors) => Some(errors.to_string()),
            Status::StoreFailed => Some(STORAGE_FAILURE_MESSAGE.to_owned()),
            Status::Registered { .. } => Some(SUCCESS_MESSAGE.to_owned()),
        }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, Status::Rejected(_) | Status::StoreFailed)
    }
}

/// Everything a renderer needs to draw the current screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSnapshot {
    pub view: ViewState,
    pub draft: FormDraft,
    pub clear_enabled: bool,
    pub status: Status,
}

pub struct FormController<R: RegistrationRepository> {
    repo: Arc<R>,
    draft: FormDraft,
    view: ViewState,
    status: Status,
}

impl<R: RegistrationRepository> FormController<R> {
    #[must_use]
    pub fn new(repo: Arc<R>) -> Self {
        Self {
            repo,
            draft: FormDraft::default(),
            view: ViewState::Form,
            status: Status::Idle,
        }
    }

    #[must_use]
    pub fn view(&self) -> ViewState {
        self.view
    }

    #[must_use]
    pub fn draft(&self) -> &FormDraft {
        &self.draft
    }

    #[must_use]
    pub fn status(&self) -> &Status {
        &self.status
    }

    /// The clear action is enabled iff the draft differs from the defaults.
    #[must_use]
    pub fn is_clear_enabled(&self) -> bool {
        self.draft.is_dirty()
    }

    #[must_use]
    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            view: self.view,
            draft: self.draft.clone(),
            clear_enabled: self.is_clear_enabled(),
            status: self.status.clone(),
        }
    }

    /// Sanitizes and stores an edit, returning the value the field now shows.
    /// Edits are ignored while the success screen is up.
    pub fn on_field_changed(&mut self, field: Field, raw: &str) -> &str {
        if self.view == ViewState::Success {
            tracing::debug!(field = field.label(), "edit ignored: form is hidden");
            return self.draft.value(field);
        }
        let cleaned = self.draft.apply(field, raw);
        tracing::trace!(field = field.label(), len = cleaned.len(), "field updated");
        cleaned
    }

    /// Validates the draft and appends it to the store.
    ///
    /// The draft is left untouched either way.
    ///
    /// # Errors
    /// - [`SubmitError::Validation`] with every failed constraint; the view
    ///   stays on the form.
    /// - [`SubmitError::Storage`] when the append fails; the view stays on
    ///   the form.
    /// - [`SubmitError::FormHidden`] when called on the success screen.
    pub async fn on_submit(&mut self) -> Result<Registration, SubmitError> {
        if self.view == ViewState::Success {
            tracing::debug!("submit ignored: form is hidden");
            return Err(SubmitError::FormHidden);
        }

        let record = match self.draft.to_record() {
            Ok(record) => record,
            Err(errors) => {
                tracing::debug!(failed = errors.len(), "registration rejected");
                self.status = Status::Rejected(errors.clone());
                return Err(SubmitError::Validation(errors));
            }
        };

        match self.repo.append(&record).await {
            Ok(registration) => {
                tracing::info!(
                    id = registration.id(),
                    shop = %registration.record().shop(),
                    "registration stored"
                );
                self.status = Status::Registered {
                    id: registration.id(),
                };
                self.view = ViewState::Success;
                Ok(registration)
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to store registration");
                self.status = Status::StoreFailed;
                Err(SubmitError::Storage(e))
            }
        }
    }

    /// Resets every field to its default; the clear action becomes disabled.
    pub fn on_clear(&mut self) {
        if self.view == ViewState::Success {
            tracing::debug!("clear ignored: form is hidden");
            return;
        }
        self.draft.reset();
        self.status = Status::Idle;
    }

    /// Returns from the success screen to the form. Field values are kept,
    /// so submitting again stores another row.
    pub fn on_back(&mut self) {
        if self.view == ViewState::Success {
            self.view = ViewState::Form;
            self.status = Status::Idle;
        }
    }
}
