//! Timer scheduling for event-driven components.
//!
//! Components never sleep or spawn. They ask a [`Scheduler`] for one-shot or
//! repeating timers and receive the timer's event back when it comes due.
//! [`TimerQueue`] implements the scheduler over a virtual clock:
//!
//! - **Tests** advance the clock by hand and observe exactly which events fire.
//! - **Hosts** advance it by real elapsed time between input polls.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use strictly_timers::{Scheduler, TimerQueue};
//!
//! let mut queue = TimerQueue::new();
//! queue.schedule_once(Duration::from_millis(500), "hide");
//!
//! assert!(queue.advance(Duration::from_millis(499)).is_empty());
//! assert_eq!(queue.advance(Duration::from_millis(1)), vec!["hide"]);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod queue;

pub use queue::{Scheduler, TimerId, TimerQueue};
