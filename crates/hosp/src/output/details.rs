//! Detail and confirmation output for show/add/edit/delete commands.

use owo_colors::OwoColorize;

use hospital_api_rs::models::{
    AppointmentDetail, Department, Doctor, NurseDetail, Patient, StatusResponse,
};

use crate::commands::CommandContext;

use super::helpers::format_window;

/// Prints the outcome of a mutation.
///
/// In JSON mode the raw status envelope is emitted; otherwise a single
/// confirmation line (suppressed by --quiet).
pub fn render_status(ctx: &CommandContext, action: &str, resource: &str, status: &StatusResponse) {
    if ctx.json_output {
        match serde_json::to_string_pretty(status) {
            Ok(json) => println!("{json}"),
            Err(e) => eprintln!("Error: {e}"),
        }
        return;
    }
    if ctx.quiet {
        return;
    }
    match status.id {
        Some(id) => println!("{action} {resource} {id}"),
        None => println!("{action} {resource}"),
    }
}

fn field(ctx: &CommandContext, label: &str, value: &str) {
    if ctx.use_colors {
        println!("{:<12} {}", label.dimmed(), value);
    } else {
        println!("{label:<12} {value}");
    }
}

/// Prints one doctor record.
pub fn render_doctor(ctx: &CommandContext, id: i64, doctor: &Doctor) {
    if ctx.json_output {
        let mut value = serde_json::to_value(doctor).unwrap_or_default();
        value["id"] = serde_json::json!(id);
        println!("{}", serde_json::to_string_pretty(&value).unwrap_or_default());
        return;
    }
    field(ctx, "ID", &id.to_string());
    field(ctx, "Name", &doctor.name);
    field(ctx, "Phone", &doctor.phone);
    field(ctx, "Email", &doctor.email);
    field(ctx, "Department", &doctor.department_id.to_string());
    field(ctx, "Category", &doctor.category);
    field(ctx, "Experience", &format!("{} yrs", doctor.experience));
    field(ctx, "Degree", &doctor.degree);
    field(ctx, "Address", &doctor.address.formatted());
}

/// Prints one patient record.
pub fn render_patient(ctx: &CommandContext, id: i64, patient: &Patient) {
    if ctx.json_output {
        let mut value = serde_json::to_value(patient).unwrap_or_default();
        value["id"] = serde_json::json!(id);
        println!("{}", serde_json::to_string_pretty(&value).unwrap_or_default());
        return;
    }
    field(ctx, "ID", &id.to_string());
    field(ctx, "Name", &patient.name);
    field(ctx, "Phone", &patient.phone);
    field(ctx, "Email", &patient.email);
    field(ctx, "Address", &patient.address.formatted());
}

/// Prints one nurse record with the supervising doctor's name resolved.
pub fn render_nurse(ctx: &CommandContext, id: i64, detail: &NurseDetail) {
    if ctx.json_output {
        let mut value = serde_json::to_value(detail).unwrap_or_default();
        value["nurse"]["id"] = serde_json::json!(id);
        println!("{}", serde_json::to_string_pretty(&value).unwrap_or_default());
        return;
    }
    let nurse = &detail.nurse;
    let doctor_name = detail
        .doctors
        .iter()
        .find(|d| d.id == nurse.doctor_id)
        .map(|d| d.name.as_str())
        .unwrap_or("(unknown)");
    field(ctx, "ID", &id.to_string());
    field(ctx, "Name", &nurse.name);
    field(ctx, "Phone", &nurse.phone);
    field(ctx, "Email", &nurse.email);
    field(ctx, "Doctor", doctor_name);
    field(ctx, "Address", &nurse.address.formatted());
}

/// Prints one department record.
pub fn render_department(ctx: &CommandContext, id: i64, department: &Department) {
    if ctx.json_output {
        let mut value = serde_json::to_value(department).unwrap_or_default();
        value["id"] = serde_json::json!(id);
        println!("{}", serde_json::to_string_pretty(&value).unwrap_or_default());
        return;
    }
    field(ctx, "ID", &id.to_string());
    field(ctx, "Name", &department.name);
}

/// Prints one appointment with patient/doctor names resolved from the refs.
pub fn render_appointment(ctx: &CommandContext, detail: &AppointmentDetail) {
    if ctx.json_output {
        println!(
            "{}",
            serde_json::to_string_pretty(detail).unwrap_or_default()
        );
        return;
    }
    let appointment = &detail.appointment;
    let patient = detail
        .patients
        .iter()
        .find(|p| p.id == appointment.patient_id)
        .map(|p| p.name.as_str())
        .unwrap_or("(unknown)");
    let doctor = detail
        .doctors
        .iter()
        .find(|d| d.id == appointment.doctor_id)
        .map(|d| d.name.as_str())
        .unwrap_or("(unknown)");
    if let Some(id) = appointment.id {
        field(ctx, "ID", &id.to_string());
    }
    field(ctx, "Patient", patient);
    field(ctx, "Doctor", doctor);
    field(
        ctx,
        "When",
        &format_window(appointment.from_time, appointment.to_time),
    );
    if !appointment.notes.is_empty() {
        field(ctx, "Notes", &appointment.notes);
    }
}
