//! `recipes` subcommands.

use super::context::CommandContext;
use super::pantry::OutputArgs;
use crate::client::{RecipeClient, RecipeScope};
use crate::forms::RecipeForm;
use crate::model::Recipe;
use crate::reports::{to_json, ReportFormat};
use crate::view::{filter_recipes, Pagination, RecipeQuery, RecipeStats};
use anyhow::{bail, Context, Result};
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RecipePage<'a> {
    pagination: Pagination,
    total_pages: usize,
    stats: RecipeStats,
    recipes: &'a [Recipe],
}

/// Browse recipes: all when logged in, public ones otherwise.
pub fn run_recipes_list(
    ctx: &CommandContext,
    query: &RecipeQuery,
    mine: bool,
    page: usize,
    output: OutputArgs,
) -> Result<()> {
    let client = RecipeClient::new(ctx.api()?);
    let scope = if mine {
        RecipeScope::Mine
    } else {
        client.default_scope()
    };
    let recipes = client.list(scope)?;
    tracing::debug!("{} recipes for {scope:?}", recipes.len());

    let filtered = filter_recipes(&recipes, query);
    let mut pagination = Pagination::new(filtered.len(), ctx.config.recipes.page_size);
    pagination.go_to(page);

    let target = ctx.output_target(output.file);
    let content = match ctx.format(output.format, &target) {
        ReportFormat::Json => to_json(&RecipePage {
            pagination,
            total_pages: pagination.total_pages(),
            stats: RecipeStats::compute(&filtered),
            recipes: pagination.slice(&filtered),
        })?,
        ReportFormat::Csv => bail!("recipes have no CSV form; use table or json"),
        _ => ctx.reporter(&target).recipes(&filtered, &pagination),
    };
    ctx.emit(&content, &target)
}

/// One recipe in full.
pub fn run_recipes_show(ctx: &CommandContext, id: i64, output: OutputArgs) -> Result<()> {
    let recipe = RecipeClient::new(ctx.api()?).get(id)?;
    let target = ctx.output_target(output.file);
    let content = match ctx.format(output.format, &target) {
        ReportFormat::Json => to_json(&recipe)?,
        ReportFormat::Csv => bail!("recipes have no CSV form; use table or json"),
        _ => ctx.reporter(&target).recipe_detail(&recipe),
    };
    ctx.emit(&content, &target)
}

/// Recipes the service matches against the current pantry.
pub fn run_recipes_suggested(
    ctx: &CommandContext,
    use_it_up: bool,
    output: OutputArgs,
) -> Result<()> {
    let client = RecipeClient::new(ctx.api()?);
    let recipes = if use_it_up {
        client.use_it_up()?
    } else {
        client.suggestions()?
    };
    let pagination = Pagination::new(recipes.len(), recipes.len().max(1));

    let target = ctx.output_target(output.file);
    let content = match ctx.format(output.format, &target) {
        ReportFormat::Json => to_json(&recipes)?,
        ReportFormat::Csv => bail!("recipes have no CSV form; use table or json"),
        _ => ctx.reporter(&target).recipes(&recipes, &pagination),
    };
    ctx.emit(&content, &target)
}

/// Read a recipe form from a YAML (or JSON) file.
pub fn load_recipe_form(path: &Path) -> Result<RecipeForm> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_yaml::from_str(&content).with_context(|| format!("invalid recipe in {}", path.display()))
}

/// Create a recipe, or replace recipe `id`, from a form file.
pub fn run_recipes_save(ctx: &CommandContext, file: &Path, id: Option<i64>) -> Result<()> {
    let request = load_recipe_form(file)?.validate()?;
    let client = RecipeClient::new(ctx.api()?);
    let saved = match id {
        Some(id) => client.update(id, &request)?,
        None => client.create(&request)?,
    };
    let verb = if id.is_some() { "Updated" } else { "Created" };
    ctx.status(&format!(
        "{verb} recipe {} ({})",
        saved.id.or(id).map_or_else(|| "-".to_string(), |id| id.to_string()),
        saved.title
    ));
    Ok(())
}

pub fn run_recipes_delete(ctx: &CommandContext, id: i64) -> Result<()> {
    RecipeClient::new(ctx.api()?).delete(id)?;
    ctx.status(&format!("Deleted recipe {id}"));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_recipe_form() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "title: Toast\ndescription: Crisp\ningredients:\n  - {{name: bread, quantity: 2, unit: slices}}\ninstructions: [Toast it]"
        )
        .unwrap();
        let form = load_recipe_form(file.path()).unwrap();
        assert_eq!(form.title, "Toast");
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_load_recipe_form_rejects_garbage() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "title: [unclosed").unwrap();
        let err = load_recipe_form(file.path()).unwrap_err();
        assert!(err.to_string().contains("invalid recipe"));
    }
}
