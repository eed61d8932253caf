//! Nurse commands.
//!
//! Nurses carry a supervising doctor, resolved from a name or id the same
//! way appointment participants are.

use hospital_api_rs::client::HospitalClient;
use hospital_api_rs::models::{Address, NameRef, Nurse};
use hospital_console_rs::forms::PersonFields;
use hospital_console_rs::view::{EntityKind, TableView};

use super::doctors::{apply, apply_address};
use super::{confirm, CommandContext, CommandError, Result};
use crate::cli::NurseCommands;
use crate::output;
use crate::resolve::resolve_ref;

/// Executes a nurse subcommand.
pub async fn execute(
    ctx: &CommandContext,
    client: &HospitalClient,
    command: &NurseCommands,
) -> Result<()> {
    match command {
        NurseCommands::List { search } => list(ctx, client, search.as_deref()).await,
        NurseCommands::Show { id } => show(ctx, client, *id).await,
        NurseCommands::Add {
            name,
            phone,
            email,
            doctor,
            address,
        } => {
            let doctor_id = resolve_doctor(client, doctor).await?;
            let nurse = Nurse {
                id: None,
                name: name.clone(),
                phone: phone.clone(),
                email: email.clone(),
                doctor_id,
                address: Address {
                    street: address.street.clone(),
                    county: address.county.clone(),
                    city: address.city.clone(),
                    state: address.state.clone(),
                    country: address.country.clone(),
                    zipcode: address.zipcode.clone(),
                },
            };
            add(ctx, client, nurse).await
        }
        NurseCommands::Edit {
            id,
            name,
            phone,
            email,
            doctor,
            address,
        } => {
            let mut nurse = client.get_nurse(*id).await?.nurse;
            apply(&mut nurse.name, name);
            apply(&mut nurse.phone, phone);
            apply(&mut nurse.email, email);
            if let Some(doctor) = doctor {
                nurse.doctor_id = resolve_doctor(client, doctor).await?;
            }
            apply_address(&mut nurse.address, address);

            validate(&nurse)?;
            let status = client.edit_nurse(*id, &nurse).await?;
            output::render_status(ctx, "Updated", "nurse", &status);
            rerender(ctx, client).await
        }
        NurseCommands::Delete { id, yes } => delete(ctx, client, *id, *yes).await,
    }
}

async fn list(ctx: &CommandContext, client: &HospitalClient, search: Option<&str>) -> Result<()> {
    let mut view = TableView::load(EntityKind::Nurses, client).await?;
    if let Some(text) = search {
        view.set_search(text);
    }
    output::render_table(ctx, &view);
    Ok(())
}

async fn show(ctx: &CommandContext, client: &HospitalClient, id: i64) -> Result<()> {
    let detail = client.get_nurse(id).await?;
    output::render_nurse(ctx, id, &detail);
    Ok(())
}

fn validate(nurse: &Nurse) -> Result<()> {
    let fields = PersonFields {
        phone: nurse.phone.clone(),
        zipcode: nurse.address.zipcode.clone(),
        email: nurse.email.clone(),
    };
    let errors = fields.validate();
    if errors.is_empty() {
        Ok(())
    } else {
        Err(CommandError::Validation(errors))
    }
}

async fn add(ctx: &CommandContext, client: &HospitalClient, nurse: Nurse) -> Result<()> {
    validate(&nurse)?;
    let status = client.add_nurse(&nurse).await?;
    output::render_status(ctx, "Added", "nurse", &status);
    rerender(ctx, client).await
}

async fn delete(ctx: &CommandContext, client: &HospitalClient, id: i64, yes: bool) -> Result<()> {
    if !confirm(ctx, "Are you sure you want to delete this nurse?", yes)? {
        return Ok(());
    }
    let status = client.delete_nurse(id).await?;
    output::render_status(ctx, "Deleted", "nurse", &status);
    rerender(ctx, client).await
}

async fn rerender(ctx: &CommandContext, client: &HospitalClient) -> Result<()> {
    if ctx.json_output || ctx.quiet {
        return Ok(());
    }
    let view = TableView::load(EntityKind::Nurses, client).await?;
    output::render_table(ctx, &view);
    Ok(())
}

/// Resolves a `--doctor` flag value against the doctor list.
pub(crate) async fn resolve_doctor(client: &HospitalClient, query: &str) -> Result<i64> {
    // A numeric value needs no fetch.
    if let Ok(id) = query.parse::<i64>() {
        return Ok(id);
    }
    let doctors = client.list_doctors().await?;
    let refs: Vec<NameRef> = doctors
        .iter()
        .map(|d| NameRef {
            id: d.id.unwrap_or_default(),
            name: d.name.clone(),
        })
        .collect();
    resolve_ref("doctor", query, &refs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nurse_validation_flags_bad_zipcode() {
        let nurse = Nurse {
            id: None,
            name: "Joy".to_string(),
            phone: "5557777".to_string(),
            email: "joy@hospital.test".to_string(),
            doctor_id: 1,
            address: Address {
                zipcode: "ABC".to_string(),
                ..Address::default()
            },
        };
        let err = validate(&nurse).unwrap_err();
        assert!(matches!(err, CommandError::Validation(ref v) if v.len() == 1));
    }
}
