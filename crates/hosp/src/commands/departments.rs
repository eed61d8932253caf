//! Department commands.

use hospital_api_rs::client::HospitalClient;
use hospital_api_rs::models::Department;
use hospital_console_rs::view::{EntityKind, TableView};

use super::{confirm, CommandContext, Result};
use crate::cli::DepartmentCommands;
use crate::output;

/// Executes a department subcommand.
pub async fn execute(
    ctx: &CommandContext,
    client: &HospitalClient,
    command: &DepartmentCommands,
) -> Result<()> {
    match command {
        DepartmentCommands::List { search } => {
            let mut view = TableView::load(EntityKind::Departments, client).await?;
            if let Some(text) = search {
                view.set_search(text);
            }
            output::render_table(ctx, &view);
            Ok(())
        }
        DepartmentCommands::Show { id } => {
            let department = client.get_department(*id).await?;
            output::render_department(ctx, *id, &department);
            Ok(())
        }
        DepartmentCommands::Add { name } => {
            let department = Department {
                id: None,
                name: name.clone(),
            };
            let status = client.add_department(&department).await?;
            output::render_status(ctx, "Added", "department", &status);
            rerender(ctx, client).await
        }
        DepartmentCommands::Edit { id, name } => {
            let department = Department {
                id: None,
                name: name.clone(),
            };
            let status = client.edit_department(*id, &department).await?;
            output::render_status(ctx, "Updated", "department", &status);
            rerender(ctx, client).await
        }
        DepartmentCommands::Delete { id, yes } => {
            if !confirm(ctx, "Are you sure you want to delete this department?", *yes)? {
                return Ok(());
            }
            let status = client.delete_department(*id).await?;
            output::render_status(ctx, "Deleted", "department", &status);
            rerender(ctx, client).await
        }
    }
}

async fn rerender(ctx: &CommandContext, client: &HospitalClient) -> Result<()> {
    if ctx.json_output || ctx.quiet {
        return Ok(());
    }
    let view = TableView::load(EntityKind::Departments, client).await?;
    output::render_table(ctx, &view);
    Ok(())
}
