//! Entity endpoint methods on [`HospitalClient`](crate::client::HospitalClient).
//!
//! One submodule per entity family, mirroring the server's route groups:
//! `/add_<entity>`, `/edit_<entity>/{id}`, `/delete_<entity>/{id}`,
//! `/get_<entity>/{id}` and the list routes.

mod appointments;
mod departments;
mod doctors;
mod nurses;
mod patients;
