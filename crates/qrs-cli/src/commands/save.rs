use anyhow::{Context, bail};
use qrs_config::QrsConfig;
use qrs_core::{Contact, SheetId};
use qrs_sheets::{ContactSync, spawn_save, wait_for_save};
use serde::Serialize;

use crate::cli::SaveArgs;
use crate::output::output;

#[derive(Serialize)]
struct SaveResponse {
    sheet: String,
    saved: bool,
}

/// Handle `qrs save`.
pub async fn handle(args: &SaveArgs, config: &QrsConfig) -> anyhow::Result<()> {
    let sheet = resolve_sheet(args, config)?;
    config
        .smartsheet
        .require_token()
        .context("set QRSHEET_SMARTSHEET__TOKEN or smartsheet.token in .qrsheet/config.toml")?;

    let contact = contact_from_args(args);
    contact.validate()?;

    let sync = ContactSync::from_config(config)?;
    let saved = wait_for_save(spawn_save(sync, sheet.clone(), contact)).await?;

    output(&SaveResponse {
        sheet: sheet.to_string(),
        saved,
    })?;
    if !saved {
        bail!("failed to save contact to sheet {sheet} (run with --verbose for details)");
    }
    Ok(())
}

fn resolve_sheet(args: &SaveArgs, config: &QrsConfig) -> anyhow::Result<SheetId> {
    match &args.sheet {
        Some(raw) => SheetId::parse(raw).context("invalid --sheet"),
        None => config
            .smartsheet
            .sheet()
            .context("set QRSHEET_SMARTSHEET__SHEET_ID, smartsheet.sheet_id, or pass --sheet"),
    }
}

fn contact_from_args(args: &SaveArgs) -> Contact {
    Contact {
        name: args.name.clone(),
        email: args.email.clone(),
        organization: args.org.clone(),
        title: args.title.clone(),
        raw_code: args.raw.clone(),
    }
}
