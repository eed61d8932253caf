//! Appointment commands.
//!
//! Scheduling goes through [`AppointmentForm`], so the client-side gate
//! applies: a past or malformed time blocks the request entirely, with one
//! message per failing field.

use chrono::NaiveDate;

use hospital_api_rs::client::HospitalClient;
use hospital_console_rs::forms::AppointmentForm;
use hospital_console_rs::view::{EntityKind, TableView};

use super::nurses::resolve_doctor;
use super::{confirm, CommandContext, Result};
use crate::cli::AppointmentCommands;
use crate::output;
use crate::resolve::resolve_ref;

/// Form-side datetime format (`datetime-local`).
const FORM_FMT: &str = "%Y-%m-%dT%H:%M";

/// Executes an appointment subcommand.
pub async fn execute(
    ctx: &CommandContext,
    client: &HospitalClient,
    command: &AppointmentCommands,
) -> Result<()> {
    match command {
        AppointmentCommands::List { search, from, to } => {
            list(ctx, client, search.as_deref(), *from, *to).await
        }
        AppointmentCommands::Show { id } => show(ctx, client, *id).await,
        AppointmentCommands::Add {
            patient,
            doctor,
            start,
            end,
            notes,
        } => add(ctx, client, patient, doctor, start, end.as_deref(), notes).await,
        AppointmentCommands::Edit {
            id,
            patient,
            doctor,
            start,
            end,
            notes,
        } => {
            edit(
                ctx,
                client,
                *id,
                patient.as_deref(),
                doctor.as_deref(),
                start.as_deref(),
                end.as_deref(),
                notes.as_deref(),
            )
            .await
        }
        AppointmentCommands::Delete { id, yes } => delete(ctx, client, *id, *yes).await,
    }
}

async fn list(
    ctx: &CommandContext,
    client: &HospitalClient,
    search: Option<&str>,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> Result<()> {
    let mut view = TableView::load(EntityKind::Appointments, client).await?;
    if let Some(text) = search {
        view.set_search(text);
    }
    view.set_from(from);
    view.set_to(to);
    output::render_table(ctx, &view);
    Ok(())
}

async fn show(ctx: &CommandContext, client: &HospitalClient, id: i64) -> Result<()> {
    let detail = client.get_appointment(id).await?;
    output::render_appointment(ctx, &detail);
    Ok(())
}

async fn add(
    ctx: &CommandContext,
    client: &HospitalClient,
    patient: &str,
    doctor: &str,
    start: &str,
    end: Option<&str>,
    notes: &str,
) -> Result<()> {
    let patient_refs = client.patient_refs().await?;
    let patient_id = resolve_ref("patient", patient, &patient_refs)?;
    let doctor_id = resolve_doctor(client, doctor).await?;

    let mut form = AppointmentForm::new(patient_id, doctor_id);
    form.set_start_time(start);
    if let Some(end) = end {
        form.set_end_time(end);
    }
    form.notes = notes.to_string();

    let status = form.submit(client).await?;
    output::render_status(ctx, "Scheduled", "appointment", &status);
    rerender(ctx, client).await
}

#[allow(clippy::too_many_arguments)]
async fn edit(
    ctx: &CommandContext,
    client: &HospitalClient,
    id: i64,
    patient: Option<&str>,
    doctor: Option<&str>,
    start: Option<&str>,
    end: Option<&str>,
    notes: Option<&str>,
) -> Result<()> {
    let detail = client.get_appointment(id).await?;
    let current = &detail.appointment;

    let patient_id = match patient {
        Some(patient) => resolve_ref("patient", patient, &detail.patients)?,
        None => current.patient_id,
    };
    let doctor_id = match doctor {
        Some(doctor) => resolve_ref("doctor", doctor, &detail.doctors)?,
        None => current.doctor_id,
    };

    let mut form = AppointmentForm::new(patient_id, doctor_id);
    // Seed the form from the stored window, then apply overrides in order:
    // a new start re-derives the end, an explicit end wins last.
    form.set_start_time(&current.from_time.format(FORM_FMT).to_string());
    form.set_end_time(&current.to_time.format(FORM_FMT).to_string());
    if let Some(start) = start {
        form.set_start_time(start);
    }
    if let Some(end) = end {
        form.set_end_time(end);
    }
    form.notes = notes.unwrap_or(&current.notes).to_string();

    let status = form.submit_edit(id, client).await?;
    output::render_status(ctx, "Updated", "appointment", &status);
    rerender(ctx, client).await
}

async fn delete(ctx: &CommandContext, client: &HospitalClient, id: i64, yes: bool) -> Result<()> {
    if !confirm(ctx, "Are you sure you want to delete this appointment?", yes)? {
        return Ok(());
    }
    let status = client.delete_appointment(id).await?;
    output::render_status(ctx, "Deleted", "appointment", &status);
    rerender(ctx, client).await
}

async fn rerender(ctx: &CommandContext, client: &HospitalClient) -> Result<()> {
    if ctx.json_output || ctx.quiet {
        return Ok(());
    }
    let view = TableView::load(EntityKind::Appointments, client).await?;
    output::render_table(ctx, &view);
    Ok(())
}
