//! Patient commands.

use hospital_api_rs::client::HospitalClient;
use hospital_api_rs::models::{Address, Patient};
use hospital_console_rs::forms::PersonFields;
use hospital_console_rs::view::{EntityKind, TableView};

use super::doctors::{apply, apply_address};
use super::{confirm, CommandContext, CommandError, Result};
use crate::cli::PatientCommands;
use crate::output;

/// Executes a patient subcommand.
pub async fn execute(
    ctx: &CommandContext,
    client: &HospitalClient,
    command: &PatientCommands,
) -> Result<()> {
    match command {
        PatientCommands::List { search } => list(ctx, client, search.as_deref()).await,
        PatientCommands::Show { id } => show(ctx, client, *id).await,
        PatientCommands::Add {
            name,
            phone,
            email,
            address,
        } => {
            let patient = Patient {
                id: None,
                name: name.clone(),
                phone: phone.clone(),
                email: email.clone(),
                address: Address {
                    street: address.street.clone(),
                    county: address.county.clone(),
                    city: address.city.clone(),
                    state: address.state.clone(),
                    country: address.country.clone(),
                    zipcode: address.zipcode.clone(),
                },
            };
            add(ctx, client, patient).await
        }
        PatientCommands::Edit {
            id,
            name,
            phone,
            email,
            address,
        } => {
            let mut patient = client.get_patient(*id).await?;
            apply(&mut patient.name, name);
            apply(&mut patient.phone, phone);
            apply(&mut patient.email, email);
            apply_address(&mut patient.address, address);

            validate(&patient)?;
            let status = client.edit_patient(*id, &patient).await?;
            output::render_status(ctx, "Updated", "patient", &status);
            rerender(ctx, client).await
        }
        PatientCommands::Delete { id, yes } => delete(ctx, client, *id, *yes).await,
    }
}

async fn list(ctx: &CommandContext, client: &HospitalClient, search: Option<&str>) -> Result<()> {
    let mut view = TableView::load(EntityKind::Patients, client).await?;
    if let Some(text) = search {
        view.set_search(text);
    }
    output::render_table(ctx, &view);
    Ok(())
}

async fn show(ctx: &CommandContext, client: &HospitalClient, id: i64) -> Result<()> {
    let patient = client.get_patient(id).await?;
    output::render_patient(ctx, id, &patient);
    Ok(())
}

fn validate(patient: &Patient) -> Result<()> {
    let fields = PersonFields {
        phone: patient.phone.clone(),
        zipcode: patient.address.zipcode.clone(),
        email: patient.email.clone(),
    };
    let errors = fields.validate();
    if errors.is_empty() {
        Ok(())
    } else {
        Err(CommandError::Validation(errors))
    }
}

async fn add(ctx: &CommandContext, client: &HospitalClient, patient: Patient) -> Result<()> {
    validate(&patient)?;
    let status = client.add_patient(&patient).await?;
    output::render_status(ctx, "Added", "patient", &status);
    rerender(ctx, client).await
}

async fn delete(ctx: &CommandContext, client: &HospitalClient, id: i64, yes: bool) -> Result<()> {
    if !confirm(ctx, "Are you sure you want to delete this patient?", yes)? {
        return Ok(());
    }
    let status = client.delete_patient(id).await?;
    output::render_status(ctx, "Deleted", "patient", &status);
    rerender(ctx, client).await
}

async fn rerender(ctx: &CommandContext, client: &HospitalClient) -> Result<()> {
    if ctx.json_output || ctx.quiet {
        return Ok(());
    }
    let view = TableView::load(EntityKind::Patients, client).await?;
    output::render_table(ctx, &view);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patient_validation_checks_contact_fields() {
        let patient = Patient {
            id: None,
            name: "Alice".to_string(),
            phone: "not-a-phone".to_string(),
            email: "alice@example.test".to_string(),
            address: Address {
                zipcode: "11201".to_string(),
                ..Address::default()
            },
        };
        let err = validate(&patient).unwrap_err();
        assert!(err.to_string().contains("phone"));
    }
}
