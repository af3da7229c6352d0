//! `pantry` subcommands.

use super::context::CommandContext;
use crate::client::PantryClient;
use crate::forms::PantryItemForm;
use crate::model::PantryItem;
use crate::output::OutputTarget;
use crate::pantry::{InMemoryPantry, PantryPage, PantrySource};
use crate::reports::{to_delimited_text, to_json, ReportFormat, EXPORT_MIME_TYPE};
use crate::view::{category_breakdown, ViewParameters};
use anyhow::{bail, Context, Result};
use chrono::Utc;
use indexmap::IndexMap;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Where and how to write a command's result.
#[derive(Debug, Clone, Default)]
pub struct OutputArgs {
    pub format: Option<ReportFormat>,
    pub file: Option<PathBuf>,
}

/// Open the item source: a snapshot file when given, the REST service otherwise.
fn open_source(ctx: &CommandContext, input: Option<&Path>) -> Result<Box<dyn PantrySource>> {
    Ok(match input {
        Some(path) => Box::new(InMemoryPantry::from_snapshot(path)?),
        None => Box::new(PantryClient::new(ctx.api()?)),
    })
}

fn load_page(
    ctx: &CommandContext,
    input: Option<&Path>,
    params: ViewParameters,
) -> Result<PantryPage<Box<dyn PantrySource>>> {
    let mut page = PantryPage::new(open_source(ctx, input)?).with_params(params);
    let count = page.reload()?;
    tracing::debug!("{count} items from {}", page.source().name());
    Ok(page)
}

fn render_items(
    ctx: &CommandContext,
    items: &[PantryItem],
    output: OutputArgs,
) -> Result<()> {
    let target = ctx.output_target(output.file);
    let content = match ctx.format(output.format, &target) {
        ReportFormat::Json => to_json(items)?,
        ReportFormat::Csv => to_delimited_text(items),
        _ => ctx.reporter(&target).items(items, Utc::now()),
    };
    ctx.emit(&content, &target)
}

/// Filtered and sorted item list.
pub fn run_pantry_list(
    ctx: &CommandContext,
    input: Option<PathBuf>,
    params: ViewParameters,
    output: OutputArgs,
) -> Result<()> {
    let page = load_page(ctx, input.as_deref(), params)?;
    let view = page.view(Utc::now());
    render_items(ctx, &view.filtered_items, output)
}

/// The few items expiring within the next two weeks. With `server`, the
/// service's own expiring list is shown instead.
pub fn run_pantry_expiring(
    ctx: &CommandContext,
    input: Option<PathBuf>,
    server: bool,
    output: OutputArgs,
) -> Result<()> {
    if server {
        if input.is_some() {
            bail!("--server reads from the service and cannot be combined with --input");
        }
        let items = PantryClient::new(ctx.api()?).server_expiring_items()?;
        return render_items(ctx, &items, output);
    }
    let page = load_page(ctx, input.as_deref(), ViewParameters::default())?;
    let view = page.view(Utc::now());
    render_items(ctx, &view.expiring_items, output)
}

/// A single item by id.
pub fn run_pantry_show(
    ctx: &CommandContext,
    input: Option<PathBuf>,
    id: i64,
    output: OutputArgs,
) -> Result<()> {
    let item = match input {
        Some(path) => InMemoryPantry::from_snapshot(&path)?
            .list_items()?
            .into_iter()
            .find(|item| item.id == Some(id))
            .with_context(|| format!("no item {id} in {}", path.display()))?,
        None => PantryClient::new(ctx.api()?).get_item(id)?,
    };

    let target = ctx.output_target(output.file);
    let content = match ctx.format(output.format, &target) {
        ReportFormat::Json => to_json(&item)?,
        ReportFormat::Csv => to_delimited_text(std::slice::from_ref(&item)),
        _ => ctx
            .reporter(&target)
            .items(std::slice::from_ref(&item), Utc::now()),
    };
    ctx.emit(&content, &target)
}

#[derive(Serialize)]
struct StatsReport {
    #[serde(flatten)]
    counts: crate::view::PantryCounts,
    breakdown: IndexMap<String, usize>,
}

/// Header counts and per-category breakdown.
pub fn run_pantry_stats(
    ctx: &CommandContext,
    input: Option<PathBuf>,
    output: OutputArgs,
) -> Result<()> {
    let page = load_page(ctx, input.as_deref(), ViewParameters::default())?;
    let counts = page.view(Utc::now()).counts;
    let breakdown = category_breakdown(page.items());

    let target = ctx.output_target(output.file);
    let content = match ctx.format(output.format, &target) {
        ReportFormat::Json => to_json(&StatsReport {
            counts,
            breakdown: breakdown
                .iter()
                .map(|(category, n)| (category.to_string(), *n))
                .collect(),
        })?,
        ReportFormat::Csv => bail!("stats have no CSV form; use table or json"),
        _ => ctx.reporter(&target).stats(&counts, &breakdown),
    };
    ctx.emit(&content, &target)
}

/// Write the full item list as CSV to a file.
pub fn run_pantry_export(
    ctx: &CommandContext,
    input: Option<PathBuf>,
    output_file: Option<PathBuf>,
) -> Result<()> {
    let page = load_page(ctx, input.as_deref(), ViewParameters::default())?;
    let path = output_file
        .or_else(|| ctx.config.output.file.clone())
        .unwrap_or_else(|| PathBuf::from(&ctx.config.pantry.export_file_name));
    ctx.emit(&page.export(), &OutputTarget::File(path.clone()))?;
    ctx.status(&format!(
        "Exported {} items to {} ({EXPORT_MIME_TYPE})",
        page.items().len(),
        path.display()
    ));
    Ok(())
}

/// Create (`id` = None) or update an item.
pub fn run_pantry_save(
    ctx: &CommandContext,
    input: Option<PathBuf>,
    form: &PantryItemForm,
    id: Option<i64>,
) -> Result<()> {
    let saved = match input {
        Some(path) => {
            let mut page = PantryPage::new(InMemoryPantry::from_snapshot(&path)?);
            let saved = page.save(form, id)?;
            page.source().save_snapshot(&path)?;
            saved
        }
        None => PantryPage::new(PantryClient::new(ctx.api()?)).save(form, id)?,
    };
    let verb = if id.is_some() { "Updated" } else { "Added" };
    ctx.status(&format!(
        "{verb} {} ({} {}, expires {})",
        saved.name, saved.quantity, saved.unit, saved.expiry_date
    ));
    Ok(())
}

/// Remove an item by id.
pub fn run_pantry_remove(ctx: &CommandContext, input: Option<PathBuf>, id: i64) -> Result<()> {
    match input {
        Some(path) => {
            let mut page = PantryPage::new(InMemoryPantry::from_snapshot(&path)?);
            page.remove(id)?;
            page.source()
                .save_snapshot(&path)
                .with_context(|| format!("failed to update {}", path.display()))?;
        }
        None => PantryPage::new(PantryClient::new(ctx.api()?)).remove(id)?,
    }
    ctx.status(&format!("Removed item {id}"));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::SortKey;
    use tempfile::TempDir;

    const SNAPSHOT: &str = r#"[
        {"id":1,"name":"Rice","quantity":5,"unit":"kg","expiryDate":"2099-01-01"},
        {"id":2,"name":"Milk","quantity":1,"unit":"l","expiryDate":"2099-01-02"}
    ]"#;

    fn setup() -> (TempDir, PathBuf, CommandContext) {
        let dir = TempDir::new().unwrap();
        let snapshot = dir.path().join("pantry.json");
        std::fs::write(&snapshot, SNAPSHOT).unwrap();
        (dir, snapshot, CommandContext::new(Default::default(), true))
    }

    #[test]
    fn test_list_writes_csv() {
        let (dir, snapshot, ctx) = setup();
        let out = dir.path().join("list.csv");
        run_pantry_list(
            &ctx,
            Some(snapshot),
            ViewParameters::default().sorted_by(SortKey::Name),
            OutputArgs {
                format: Some(ReportFormat::Csv),
                file: Some(out.clone()),
            },
        )
        .unwrap();

        let written = std::fs::read_to_string(out).unwrap();
        let rows: Vec<&str> = written.lines().collect();
        assert_eq!(rows.len(), 3);
        assert!(rows[1].starts_with("\"Milk\""));
        assert!(rows[2].starts_with("\"Rice\""));
    }

    #[test]
    fn test_stats_as_json() {
        let (dir, snapshot, ctx) = setup();
        let out = dir.path().join("stats.json");
        run_pantry_stats(
            &ctx,
            Some(snapshot),
            OutputArgs {
                format: Some(ReportFormat::Json),
                file: Some(out.clone()),
            },
        )
        .unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(out).unwrap()).unwrap();
        assert_eq!(json["total"], 2);
        assert_eq!(json["lowStock"], 1);
        assert_eq!(json["breakdown"]["Dairy"], 1);
        assert_eq!(json["breakdown"]["Grains"], 1);
    }

    #[test]
    fn test_show_finds_item_in_snapshot() {
        let (dir, snapshot, ctx) = setup();
        let out = dir.path().join("item.json");
        let json_output = || OutputArgs {
            format: Some(ReportFormat::Json),
            file: Some(out.clone()),
        };
        run_pantry_show(&ctx, Some(snapshot.clone()), 2, json_output()).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(json["name"], "Milk");
        assert_eq!(json["expiryDate"], "2099-01-02");

        let err = run_pantry_show(&ctx, Some(snapshot), 9, json_output()).unwrap_err();
        assert!(err.to_string().contains("no item 9"), "{err}");
    }

    #[test]
    fn test_server_expiring_rejects_snapshot() {
        let (_dir, snapshot, ctx) = setup();
        let err = run_pantry_expiring(&ctx, Some(snapshot), true, OutputArgs::default()).unwrap_err();
        assert!(err.to_string().contains("--server"), "{err}");
    }

    #[test]
    fn test_export_to_file() {
        let (dir, snapshot, ctx) = setup();
        let out = dir.path().join("export.csv");
        run_pantry_export(&ctx, Some(snapshot), Some(out.clone())).unwrap();
        let written = std::fs::read_to_string(out).unwrap();
        assert!(written.starts_with("Name,Quantity,Unit,Expiry Date,Added Date"));
    }

    #[test]
    fn test_save_and_remove_update_snapshot() {
        let (_dir, snapshot, ctx) = setup();
        let form = PantryItemForm {
            name: "Butter".into(),
            quantity: 0.5,
            unit: "kg".into(),
            expiry_date: "2099-03-01".into(),
        };
        run_pantry_save(&ctx, Some(snapshot.clone()), &form, None).unwrap();
        let items = InMemoryPantry::from_snapshot(&snapshot).unwrap().list_items().unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[2].id, Some(3));

        run_pantry_remove(&ctx, Some(snapshot.clone()), 1).unwrap();
        let items = InMemoryPantry::from_snapshot(&snapshot).unwrap().list_items().unwrap();
        let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Milk", "Butter"]);
    }

    #[test]
    fn test_invalid_form_is_rejected() {
        let (_dir, snapshot, ctx) = setup();
        let form = PantryItemForm {
            name: "Butter".into(),
            quantity: 0.0,
            ..PantryItemForm::default()
        };
        assert!(run_pantry_save(&ctx, Some(snapshot), &form, None).is_err());
    }
}
