//! Tests for submission, the summary block and the confirmation popup.

use std::time::Duration;

use strictly_contact::{ContactForm, FieldId, FormTimer, FormTimings, PhoneFormat};
use strictly_timers::TimerQueue;

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

fn fill(form: &mut ContactForm, ratings: [&str; 3]) {
    form.input(FieldId::FirstName, "Ona");
    form.input(FieldId::LastName, "Šimkienė");
    form.input(FieldId::Email, "ona@example.lt");
    form.input(FieldId::Phone, "061234567");
    form.input(FieldId::Address, " Laisvės al. 10, Kaunas ");
    form.input(FieldId::Rating1, ratings[0]);
    form.input(FieldId::Rating2, ratings[1]);
    form.input(FieldId::Rating3, ratings[2]);
}

fn elapse(form: &mut ContactForm, timers: &mut TimerQueue<FormTimer>, by: Duration) {
    timers.advance_with(by, |_, event| form.handle_timer(event));
}

#[test]
fn test_invalid_submit_has_no_effect() {
    let mut form = ContactForm::default();
    let mut timers = TimerQueue::new();
    form.input(FieldId::FirstName, "Ona");

    assert!(form.submit(&mut timers).is_none());
    assert!(form.summary().is_none());
    assert!(!form.popup().is_visible());
    assert_eq!(timers.pending(), 0);
}

#[test]
fn test_submit_collects_trimmed_values_and_average() {
    let mut form = ContactForm::default();
    let mut timers = TimerQueue::new();
    fill(&mut form, ["7", "8", "5"]);

    let submission = form.submit(&mut timers).expect("Form should submit").clone();

    assert_eq!(submission.value(FieldId::Address), "Laisvės al. 10, Kaunas");
    assert_eq!(submission.value(FieldId::Phone), "+370 612 34567");
    assert_eq!(*submission.average(), 6.7);
    assert_eq!(submission.average_display(), "6.7");

    let lines = submission.summary_lines();
    assert_eq!(lines.len(), 7);
    assert_eq!(lines[5], "Ratings: 7, 8, 5");
    assert_eq!(lines[6], "Ona Šimkienė: 6.7");
}

#[test]
fn test_fractional_ratings_average() {
    let mut form = ContactForm::default();
    let mut timers = TimerQueue::new();
    fill(&mut form, ["5.5", "10", "1"]);

    let submission = form.submit(&mut timers).expect("Form should submit");
    assert_eq!(submission.average_display(), "5.5");
}

#[test]
fn test_popup_hides_after_delay() {
    let mut form = ContactForm::default();
    let mut timers = TimerQueue::new();
    fill(&mut form, ["1", "2", "3"]);

    form.submit(&mut timers).expect("Form should submit");
    assert!(form.popup().is_visible());

    elapse(&mut form, &mut timers, ms(2499));
    assert!(form.popup().is_visible());

    elapse(&mut form, &mut timers, ms(1));
    assert!(!form.popup().is_visible());
    assert!(form.summary().is_some(), "Summary stays after the popup hides");
}

#[test]
fn test_form_stays_editable_while_popup_visible() {
    let mut form = ContactForm::default();
    let mut timers = TimerQueue::new();
    fill(&mut form, ["1", "2", "3"]);
    form.submit(&mut timers).expect("Form should submit");

    form.input(FieldId::Rating1, "9");
    assert!(form.popup().is_visible());
    assert!(form.submit_enabled());
}

#[test]
fn test_resubmit_restarts_popup_timer() {
    let mut form = ContactForm::default();
    let mut timers = TimerQueue::new();
    fill(&mut form, ["1", "2", "3"]);

    form.submit(&mut timers).expect("First submit");
    elapse(&mut form, &mut timers, ms(2000));
    form.submit(&mut timers).expect("Second submit");
    assert_eq!(timers.pending(), 1);

    elapse(&mut form, &mut timers, ms(1000));
    assert!(form.popup().is_visible(), "First hide timer was replaced");

    elapse(&mut form, &mut timers, ms(1500));
    assert!(!form.popup().is_visible());
}

#[test]
fn test_custom_popup_delay() {
    let timings = FormTimings { popup: ms(100) };
    let mut form = ContactForm::new(PhoneFormat::default(), timings);
    let mut timers = TimerQueue::new();
    fill(&mut form, ["4", "4", "4"]);

    form.submit(&mut timers).expect("Form should submit");
    elapse(&mut form, &mut timers, ms(100));
    assert!(!form.popup().is_visible());
}
