//! Contact form validation.
//!
//! The form tracks eight inputs. Every input event re-validates the touched
//! field and then the whole form, so the submit gate is always in sync with
//! what the user sees.
//!
//! # Architecture
//!
//! - **Fields**: [`FieldId`] names each input, [`FieldState`] holds its
//!   trimmed value, validity and inline message
//! - **Rules**: per-field checks that produce a [`FieldError`]
//! - **Phone**: [`PhoneFormat`] rewrites whatever was typed into
//!   `+370 6XX XXXXX` form
//! - **Form**: [`ContactForm`] owns the state and gates submission
//! - **Submission**: [`Submission`] collects the values and the rating mean
//!
//! # Example
//!
//! ```
//! use strictly_contact::{ContactForm, FieldId, FormTimer};
//! use strictly_timers::TimerQueue;
//!
//! let mut form = ContactForm::default();
//! let mut timers = TimerQueue::<FormTimer>::new();
//!
//! form.input(FieldId::FirstName, "Jonas");
//! assert!(form.field(FieldId::FirstName).is_valid());
//! assert!(!form.submit_enabled());
//! assert!(form.submit(&mut timers).is_none());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod field;
mod form;
mod phone;
mod rules;
mod submission;

pub use field::{FIELD_COUNT, FieldId, FieldKind, FieldState};
pub use form::{ContactForm, FormTimer, FormTimings, Popup};
pub use phone::PhoneFormat;
pub use rules::{ACCENTED_LETTERS, EmailShape, FieldError, FieldRules, LettersOnly, NotEmpty, RatingRange};
pub use submission::Submission;
