//! Doctor commands.

use std::collections::HashSet;

use hospital_api_rs::client::HospitalClient;
use hospital_api_rs::models::{Address, Doctor, DOCTOR_CATEGORIES};
use hospital_console_rs::forms::PersonFields;
use hospital_console_rs::rows::build_rows;
use hospital_console_rs::view::{EntityKind, TableView};

use super::{confirm, CommandContext, CommandError, Result};
use crate::cli::{AddressEditArgs, DoctorCommands};
use crate::output;

/// Executes a doctor subcommand.
pub async fn execute(
    ctx: &CommandContext,
    client: &HospitalClient,
    command: &DoctorCommands,
) -> Result<()> {
    match command {
        DoctorCommands::List { search, department } => {
            list(ctx, client, search.as_deref(), *department).await
        }
        DoctorCommands::Show { id } => show(ctx, client, *id).await,
        DoctorCommands::Add {
            name,
            phone,
            email,
            department,
            category,
            experience,
            degree,
            address,
        } => {
            let doctor = Doctor {
                id: None,
                name: name.clone(),
                phone: phone.clone(),
                email: email.clone(),
                department_id: *department,
                category: category.clone(),
                experience: *experience,
                degree: degree.clone(),
                address: Address {
                    street: address.street.clone(),
                    county: address.county.clone(),
                    city: address.city.clone(),
                    state: address.state.clone(),
                    country: address.country.clone(),
                    zipcode: address.zipcode.clone(),
                },
            };
            add(ctx, client, doctor).await
        }
        DoctorCommands::Edit {
            id,
            name,
            phone,
            email,
            department,
            category,
            experience,
            degree,
            address,
        } => {
            edit(
                ctx, client, *id, name, phone, email, department, category, experience, degree,
                address,
            )
            .await
        }
        DoctorCommands::Delete { id, yes } => delete(ctx, client, *id, *yes).await,
    }
}

async fn list(
    ctx: &CommandContext,
    client: &HospitalClient,
    search: Option<&str>,
    department: Option<i64>,
) -> Result<()> {
    let mut view = match department {
        Some(department_id) => {
            // Membership comes from the server; the full records fill the rows.
            let members = client.doctor_refs_by_department(department_id).await?;
            let ids: HashSet<i64> = members.iter().map(|r| r.id).collect();
            let doctors: Vec<Doctor> = client
                .list_doctors()
                .await?
                .into_iter()
                .filter(|d| d.id.is_some_and(|id| ids.contains(&id)))
                .collect();
            TableView::from_rows(EntityKind::Doctors, build_rows(&doctors))
        }
        None => TableView::load(EntityKind::Doctors, client).await?,
    };
    if let Some(text) = search {
        view.set_search(text);
    }
    output::render_table(ctx, &view);
    Ok(())
}

async fn show(ctx: &CommandContext, client: &HospitalClient, id: i64) -> Result<()> {
    let doctor = client.get_doctor(id).await?;
    output::render_doctor(ctx, id, &doctor);
    Ok(())
}

/// Validates the doctor's contact fields and category before any request.
fn validate(doctor: &Doctor) -> Result<()> {
    let fields = PersonFields {
        phone: doctor.phone.clone(),
        zipcode: doctor.address.zipcode.clone(),
        email: doctor.email.clone(),
    };
    let errors = fields.validate();
    if !errors.is_empty() {
        return Err(CommandError::Validation(errors));
    }
    if !DOCTOR_CATEGORIES.contains(&doctor.category.as_str()) {
        return Err(CommandError::Lookup(format!(
            "unknown category '{}' (expected one of: {})",
            doctor.category,
            DOCTOR_CATEGORIES.join(", ")
        )));
    }
    Ok(())
}

async fn add(ctx: &CommandContext, client: &HospitalClient, doctor: Doctor) -> Result<()> {
    validate(&doctor)?;
    let status = client.add_doctor(&doctor).await?;
    output::render_status(ctx, "Added", "doctor", &status);
    rerender(ctx, client).await
}

#[allow(clippy::too_many_arguments)]
async fn edit(
    ctx: &CommandContext,
    client: &HospitalClient,
    id: i64,
    name: &Option<String>,
    phone: &Option<String>,
    email: &Option<String>,
    department: &Option<i64>,
    category: &Option<String>,
    experience: &Option<i32>,
    degree: &Option<String>,
    address: &AddressEditArgs,
) -> Result<()> {
    let mut doctor = client.get_doctor(id).await?;
    apply(&mut doctor.name, name);
    apply(&mut doctor.phone, phone);
    apply(&mut doctor.email, email);
    if let Some(department_id) = department {
        doctor.department_id = *department_id;
    }
    apply(&mut doctor.category, category);
    if let Some(experience) = experience {
        doctor.experience = *experience;
    }
    apply(&mut doctor.degree, degree);
    apply_address(&mut doctor.address, address);

    validate(&doctor)?;
    let status = client.edit_doctor(id, &doctor).await?;
    output::render_status(ctx, "Updated", "doctor", &status);
    rerender(ctx, client).await
}

async fn delete(ctx: &CommandContext, client: &HospitalClient, id: i64, yes: bool) -> Result<()> {
    if !confirm(ctx, "Are you sure you want to delete this doctor?", yes)? {
        return Ok(());
    }
    let status = client.delete_doctor(id).await?;
    output::render_status(ctx, "Deleted", "doctor", &status);
    rerender(ctx, client).await
}

/// Re-fetches and renders the collection after a mutation.
async fn rerender(ctx: &CommandContext, client: &HospitalClient) -> Result<()> {
    if ctx.json_output || ctx.quiet {
        return Ok(());
    }
    let view = TableView::load(EntityKind::Doctors, client).await?;
    output::render_table(ctx, &view);
    Ok(())
}

pub(crate) fn apply(target: &mut String, value: &Option<String>) {
    if let Some(value) = value {
        *target = value.clone();
    }
}

pub(crate) fn apply_address(address: &mut Address, args: &AddressEditArgs) {
    apply(&mut address.street, &args.street);
    apply(&mut address.county, &args.county);
    apply(&mut address.city, &args.city);
    apply(&mut address.state, &args.state);
    apply(&mut address.country, &args.country);
    apply(&mut address.zipcode, &args.zipcode);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_doctor() -> Doctor {
        Doctor {
            id: None,
            name: "Dr. Grey".to_string(),
            phone: "5551234".to_string(),
            email: "grey@hospital.test".to_string(),
            department_id: 1,
            category: "Surgery".to_string(),
            experience: 8,
            degree: "MD".to_string(),
            address: Address {
                zipcode: "98101".to_string(),
                ..Address::default()
            },
        }
    }

    #[test]
    fn well_formed_doctor_passes_validation() {
        assert!(validate(&valid_doctor()).is_ok());
    }

    #[test]
    fn bad_phone_is_a_validation_error() {
        let mut doctor = valid_doctor();
        doctor.phone = "555-1234".to_string();
        assert!(matches!(
            validate(&doctor),
            Err(CommandError::Validation(_))
        ));
    }

    #[test]
    fn unknown_category_is_rejected() {
        let mut doctor = valid_doctor();
        doctor.category = "Telepathy".to_string();
        let err = validate(&doctor).unwrap_err();
        assert!(err.to_string().contains("Telepathy"));
    }

    #[test]
    fn apply_overrides_only_set_values() {
        let mut name = "old".to_string();
        apply(&mut name, &None);
        assert_eq!(name, "old");
        apply(&mut name, &Some("new".to_string()));
        assert_eq!(name, "new");
    }
}
