use crate::app::edit::{patch_for_field, patch_from_file};
use crate::app::status::{render_report, render_status};
use crate::cli::commands::{Cli, Commands};
use anyhow::anyhow;
use initiative_wizard::config::WizardConfig;
use initiative_wizard::draft::{DraftStore, FileStorage};
use initiative_wizard::error::Result;
use initiative_wizard::ui::style as ui;
use initiative_wizard::wizard::{Navigator, StepDefinition, StepNumber, validate_form};
use std::sync::Arc;
use tracing::debug;

pub fn dispatch(cli: Cli, mut config: WizardConfig) -> Result<()> {
    if let Some(key) = cli.draft_key {
        config = config.with_draft_key(key)?;
    }

    let storage_dir = config.resolved_storage_dir();
    debug!(dir = %storage_dir.display(), key = %config.draft_key, "opening draft");
    let mut store = DraftStore::open_create(Arc::new(FileStorage::new(storage_dir)), &config.draft_key);

    match cli.command {
        Commands::Status => println!("{}", render_status(&store)),
        Commands::Next => next(&mut store)?,
        Commands::Prev => {
            if Navigator::new(&mut store).go_to_previous_step() {
                print_position(&store);
            } else {
                println!("{}", ui::dim("Already on the first step"));
            }
        }
        Commands::Goto { step } => {
            Navigator::new(&mut store).go_to_step(step);
            print_position(&store);
        }
        Commands::Set { field, value } => {
            store.update_form_data(patch_for_field(field, &value)?);
            println!("{} {} updated", ui::success("✓"), field.label());
        }
        Commands::Import { path } => {
            let patch = patch_from_file(&path)?;
            if patch.is_empty() {
                return Err(anyhow!("{} holds no form values", path.display()).into());
            }
            store.update_form_data(patch);
            println!("{} Imported {}", ui::success("✓"), ui::value(path.display()));
        }
        Commands::Check => check(&store)?,
        Commands::Discard => {
            store.force_reset();
            println!("{} Draft discarded", ui::success("✓"));
        }
    }

    Ok(())
}

fn next(store: &mut DraftStore) -> Result<()> {
    let from = store.current_step();
    if Navigator::new(store).go_to_next_step() {
        print_position(store);
        return Ok(());
    }
    if from.is_last() {
        println!("{} Review step completed", ui::success("✓"));
        return Ok(());
    }

    let calculator = store.calculator();
    let missing: Vec<&str> = StepDefinition::for_step(from, store.mode())
        .required
        .iter()
        .filter(|field| !calculator.is_field_complete(**field))
        .map(|field| field.label())
        .collect();
    Err(anyhow!(
        "Step {from} ({}) is missing: {}",
        from.label(),
        missing.join(", ")
    )
    .into())
}

fn check(store: &DraftStore) -> Result<()> {
    let report = validate_form(store.form(), store.mode());
    println!("{}", render_report(&report));
    match report.first_failing_step(store.mode()) {
        Some(step) => Err(anyhow!("{}", report.describe_step(step)).into()),
        None => Ok(()),
    }
}

fn print_position(store: &DraftStore) {
    let step = store.current_step();
    println!(
        "{} Step {}/{} {}",
        ui::accent("›"),
        step,
        StepNumber::LAST,
        ui::header(step.label())
    );
}
