//! Output formatting utilities for the hosp CLI.
//!
//! - [`table`] - list rendering over a [`TableView`](hospital_console_rs::view::TableView)
//! - [`details`] - show/mutation output per entity
//! - [`helpers`] - truncation and datetime formatting

mod details;
pub mod helpers;
mod table;

pub use details::{
    render_appointment, render_department, render_doctor, render_nurse, render_patient,
    render_status,
};
pub use table::render_table;
