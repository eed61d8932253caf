//! Form state and the submission gate.
//!
//! Each form owns its state explicitly; there is no module-level modal handle
//! to initialize on a lifecycle event. Validation runs inside the submit path
//! and suppresses the network call entirely when any field fails, surfacing
//! exactly one message per failing field so all of them can show at once.

use chrono::{Local, NaiveDateTime};
use hospital_api_rs::client::HospitalClient;
use hospital_api_rs::models::{Appointment, StatusResponse};

use crate::schedule::{derive_end_time, is_valid_date_at, parse_input};

/// Display format for `datetime-local` style form values.
const FORM_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Fields subject to client-side validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    FromTime,
    ToTime,
    Phone,
    Zipcode,
    Email,
}

impl Field {
    /// Name of the field as the user knows it.
    pub fn label(&self) -> &'static str {
        match self {
            Field::FromTime => "from time",
            Field::ToTime => "to time",
            Field::Phone => "phone",
            Field::Zipcode => "zipcode",
            Field::Email => "email",
        }
    }
}

/// One user-visible validation message, tied to the field it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

impl FieldError {
    fn new(field: Field, message: &str) -> Self {
        Self {
            field,
            message: message.to_string(),
        }
    }
}

/// Error of a gated submission.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// Validation failed; no request was made.
    #[error("{} field(s) failed validation", .0.len())]
    Invalid(Vec<FieldError>),

    /// The request was made and failed (server rejection or transport).
    #[error(transparent)]
    Api(#[from] hospital_api_rs::error::Error),
}

/// State of the appointment create/edit form.
///
/// The time fields hold the raw input text; they are parsed only at
/// validation time so malformed input survives for the user to correct.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppointmentForm {
    pub patient_id: i64,
    pub doctor_id: i64,
    pub notes: String,
    from_time: String,
    to_time: String,
}

impl AppointmentForm {
    pub fn new(patient_id: i64, doctor_id: i64) -> Self {
        Self {
            patient_id,
            doctor_id,
            ..Self::default()
        }
    }

    pub fn from_time(&self) -> &str {
        &self.from_time
    }

    pub fn to_time(&self) -> &str {
        &self.to_time
    }

    /// Sets the start time and derives the end time from it.
    ///
    /// Whenever the new start parses, the end field is overwritten with
    /// start plus 30 minutes, discarding whatever was there. Last write wins;
    /// an unparseable start leaves the end field untouched.
    pub fn set_start_time(&mut self, value: &str) {
        self.from_time = value.to_string();
        if let Some(start) = parse_input(value) {
            self.to_time = derive_end_time(start).format(FORM_DATETIME_FORMAT).to_string();
        }
    }

    /// Sets the end time directly, replacing any derived value.
    pub fn set_end_time(&mut self, value: &str) {
        self.to_time = value.to_string();
    }

    /// Checks both time fields independently against "now".
    ///
    /// Each failing field yields exactly one message; both can fail together.
    /// There is no cross-field `to > from` check here; the server owns that.
    pub fn validate(&self) -> Vec<FieldError> {
        self.validate_at(Local::now().naive_local())
    }

    /// Pure form of [`Self::validate`] with an explicit evaluation instant.
    pub fn validate_at(&self, now: NaiveDateTime) -> Vec<FieldError> {
        let mut errors = Vec::new();
        if !is_valid_date_at(&self.from_time, now) {
            errors.push(FieldError::new(
                Field::FromTime,
                "Enter a valid future from time!",
            ));
        }
        if !is_valid_date_at(&self.to_time, now) {
            errors.push(FieldError::new(
                Field::ToTime,
                "Enter a valid future to time!",
            ));
        }
        errors
    }

    /// Submits the form as a new appointment.
    ///
    /// The network call is issued only when validation passes; otherwise the
    /// field errors come back and nothing is sent.
    pub async fn submit(&self, client: &HospitalClient) -> Result<StatusResponse, SubmitError> {
        let appointment = self.gate()?;
        Ok(client.add_appointment(&appointment).await?)
    }

    /// Submits the form as an edit of an existing appointment.
    pub async fn submit_edit(
        &self,
        id: i64,
        client: &HospitalClient,
    ) -> Result<StatusResponse, SubmitError> {
        let appointment = self.gate()?;
        Ok(client.edit_appointment(id, &appointment).await?)
    }

    /// The submission gate: validate, then build the request payload.
    fn gate(&self) -> Result<Appointment, SubmitError> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(SubmitError::Invalid(errors));
        }
        // Both fields passed is_valid_date, so they parse.
        let (Some(from_time), Some(to_time)) =
            (parse_input(&self.from_time), parse_input(&self.to_time))
        else {
            return Err(SubmitError::Invalid(self.validate()));
        };
        Ok(Appointment {
            id: None,
            doctor_id: self.doctor_id,
            patient_id: self.patient_id,
            from_time,
            to_time,
            notes: self.notes.clone(),
        })
    }
}

/// Validated contact fields shared by doctor, nurse and patient forms.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonFields {
    pub phone: String,
    pub zipcode: String,
    pub email: String,
}

impl PersonFields {
    /// Checks phone, zipcode and email independently.
    ///
    /// Empty values fail with the same message as malformed ones.
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        if !is_all_digits(&self.phone) {
            errors.push(FieldError::new(Field::Phone, "Enter a valid phone number!"));
        }
        if !is_all_digits(&self.zipcode) {
            errors.push(FieldError::new(Field::Zipcode, "Enter a valid zipcode!"));
        }
        if !is_valid_email(&self.email) {
            errors.push(FieldError::new(Field::Email, "Enter a valid email!"));
        }
        errors
    }
}

fn is_all_digits(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_digit())
}

/// Structural email check: local part, `@`, dotted domain, alphabetic TLD of
/// at least two characters.
fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty()
        || !local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "._%+-".contains(c))
    {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    if host.is_empty()
        || !host
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
    {
        return false;
    }
    tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic())
}
