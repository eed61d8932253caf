//! Console-side logic for the hospital admin server.
//!
//! This crate carries the pieces a front end needs between the keyboard and
//! the network: scheduling-constraint validation for appointment time windows
//! ([`schedule`]), form state with a submission gate ([`forms`]), conjunctive
//! search/date-range filtering over rendered table rows ([`filter`], [`rows`]),
//! and a table view that re-fetches instead of reloading ([`view`]).
//!
//! # Example
//!
//! ```
//! use hospital_console_rs::filter::{FilterQuery, RowRecord};
//!
//! let mut rows = vec![
//!     RowRecord::new(1, vec!["Alice".into(), "Cardiology".into()]),
//!     RowRecord::new(2, vec!["Bob".into(), "Neurology".into()]),
//! ];
//!
//! let query = FilterQuery::text("cardio");
//! query.apply(&mut rows);
//!
//! assert!(rows[0].visible);
//! assert!(!rows[1].visible);
//! ```

pub mod filter;
pub mod forms;
pub mod rows;
pub mod schedule;
pub mod view;

pub use filter::{FilterQuery, RowRecord};
pub use forms::{AppointmentForm, Field, FieldError, PersonFields, SubmitError};
pub use schedule::{derive_end_time, is_valid_date, parse_input, ScheduleError, TimeRange};
pub use view::TableView;
