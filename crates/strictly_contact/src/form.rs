//! The contact form controller.

use std::time::Duration;

use strictly_timers::{Scheduler, TimerId};
use tracing::{debug, info, instrument, warn};

use crate::field::{FIELD_COUNT, FieldId, FieldState};
use crate::phone::PhoneFormat;
use crate::rules::FieldRules;
use crate::submission::Submission;

/// Timer events owned by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormTimer {
    /// Hide the submission confirmation popup.
    HidePopup,
}

/// Delays used by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormTimings {
    /// How long the confirmation popup stays visible.
    pub popup: Duration,
}

impl Default for FormTimings {
    fn default() -> Self {
        Self {
            popup: Duration::from_millis(2500),
        }
    }
}

/// Transient confirmation popup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Popup {
    visible: bool,
    hide_timer: Option<TimerId>,
}

impl Popup {
    /// Whether the popup is on screen.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Shows the popup and (re)arms its hide timer.
    fn show<S>(&mut self, scheduler: &mut S, delay: Duration)
    where
        S: Scheduler<FormTimer> + ?Sized,
    {
        if let Some(previous) = self.hide_timer.take() {
            scheduler.cancel(previous);
        }
        self.visible = true;
        self.hide_timer = Some(scheduler.schedule_once(delay, FormTimer::HidePopup));
    }

    fn hide(&mut self) {
        self.visible = false;
        self.hide_timer = None;
    }
}

/// Contact form: raw inputs, per-field validation state and the submit gate.
///
/// Submission is enabled only while every field is valid.
#[derive(Debug, Clone)]
pub struct ContactForm {
    inputs: [String; FIELD_COUNT],
    fields: [FieldState; FIELD_COUNT],
    submit_enabled: bool,
    phone: PhoneFormat,
    timings: FormTimings,
    summary: Option<Submission>,
    popup: Popup,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new(PhoneFormat::default(), FormTimings::default())
    }
}

impl ContactForm {
    /// Creates an empty form. Nothing is validated until the first event.
    #[instrument]
    pub fn new(phone: PhoneFormat, timings: FormTimings) -> Self {
        Self {
            inputs: Default::default(),
            fields: Default::default(),
            submit_enabled: false,
            phone,
            timings,
            summary: None,
            popup: Popup::default(),
        }
    }

    /// Raw text currently in the input, as the user sees it.
    pub fn raw(&self, id: FieldId) -> &str {
        &self.inputs[id.index()]
    }

    /// Validation state of a field.
    pub fn field(&self, id: FieldId) -> &FieldState {
        &self.fields[id.index()]
    }

    /// Whether the submit affordance is enabled.
    pub fn submit_enabled(&self) -> bool {
        self.submit_enabled
    }

    /// Summary of the last successful submission.
    pub fn summary(&self) -> Option<&Submission> {
        self.summary.as_ref()
    }

    /// Confirmation popup state.
    pub fn popup(&self) -> &Popup {
        &self.popup
    }

    /// Phone layout used for the phone field.
    pub fn phone_format(&self) -> &PhoneFormat {
        &self.phone
    }

    /// Input-change event: stores the new text and re-validates.
    ///
    /// Text for the phone field is reformatted before it is stored.
    #[instrument(skip(self))]
    pub fn input(&mut self, id: FieldId, raw: &str) {
        let text = if id == FieldId::Phone {
            self.phone.format(raw)
        } else {
            raw.to_string()
        };
        self.inputs[id.index()] = text;
        self.validate_field(id);
        self.validate_all();
    }

    /// Removes the last character of a field, or the last digit of the phone.
    #[instrument(skip(self))]
    pub fn backspace(&mut self, id: FieldId) {
        let mut text = self.inputs[id.index()].clone();
        if id == FieldId::Phone {
            text = self.phone.erase_last_digit(&text);
        } else {
            text.pop();
        }
        self.input(id, &text);
    }

    /// Validates one field, updating its state. Returns its validity.
    #[instrument(skip(self))]
    pub fn validate_field(&mut self, id: FieldId) -> bool {
        let value = self.inputs[id.index()].trim().to_string();
        let state = match FieldRules::check(id, &value) {
            Ok(()) => FieldState::passed(value),
            Err(error) => {
                debug!(field = %id, %error, "Field invalid");
                FieldState::failed(value, error.to_string())
            }
        };
        let valid = state.is_valid();
        self.fields[id.index()] = state;
        valid
    }

    /// Validates every field and updates the submit gate.
    #[instrument(skip(self))]
    pub fn validate_all(&mut self) -> bool {
        let mut ok = true;
        for id in FieldId::ALL {
            if !self.validate_field(id) {
                ok = false;
            }
        }
        if ok != self.submit_enabled {
            debug!(enabled = ok, "Submit gate changed");
        }
        self.submit_enabled = ok;
        ok
    }

    /// Submit trigger.
    ///
    /// Re-validates; when invalid nothing happens beyond the inline errors.
    /// When valid, the summary is replaced and the popup is shown until its
    /// hide timer fires.
    #[instrument(skip(self, scheduler))]
    pub fn submit<S>(&mut self, scheduler: &mut S) -> Option<&Submission>
    where
        S: Scheduler<FormTimer> + ?Sized,
    {
        if !self.validate_all() {
            debug!("Submit rejected, form invalid");
            return None;
        }

        let Some(submission) = Submission::collect(&self.fields) else {
            warn!("Valid form produced no submission");
            return None;
        };

        match serde_json::to_string(&submission) {
            Ok(json) => info!(submission = %json, "Form submitted"),
            Err(e) => warn!(error = %e, "Could not serialize submission"),
        }

        self.popup.show(scheduler, self.timings.popup);
        self.summary = Some(submission);
        self.summary.as_ref()
    }

    /// Delivers a timer event scheduled by this form.
    #[instrument(skip(self))]
    pub fn handle_timer(&mut self, event: FormTimer) {
        match event {
            FormTimer::HidePopup => {
                debug!("Hiding popup");
                self.popup.hide();
            }
        }
    }
}
