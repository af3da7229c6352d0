//! `chef` subcommands: AI suggestions collected on a local board.

use super::context::CommandContext;
use super::pantry::OutputArgs;
use crate::client::{AiChefClient, RecipeClient};
use crate::model::{ConfidenceFilter, RecipeGenerationRequest, RecipeGenerationResponse};
use crate::reports::{to_json, ReportFormat};
use crate::view::SuggestionBoard;
use anyhow::{bail, Context, Result};
use std::path::PathBuf;

/// What to ask the AI chef for.
#[derive(Debug, Clone)]
pub enum ChefRequest {
    Quick {
        meal_type: Option<String>,
        max_time: Option<u32>,
    },
    UseItUp,
    Generate(RecipeGenerationRequest),
}

fn board_path(ctx: &CommandContext) -> Result<PathBuf> {
    ctx.config
        .session
        .suggestions_path()
        .context("no config directory to keep suggestions in")
}

fn show_board(
    ctx: &CommandContext,
    board: &SuggestionBoard,
    output: OutputArgs,
) -> Result<()> {
    let target = ctx.output_target(output.file);
    let content = match ctx.format(output.format, &target) {
        ReportFormat::Json => to_json(&board.filtered())?,
        ReportFormat::Csv => bail!("suggestions have no CSV form; use table or json"),
        _ => ctx
            .reporter(&target)
            .suggestions(&board.filtered(), board.stats().as_ref()),
    };
    ctx.emit(&content, &target)
}

/// Ask for new suggestions, prepend them to the board and show it.
pub fn run_chef(
    ctx: &CommandContext,
    request: ChefRequest,
    filter: ConfidenceFilter,
    output: OutputArgs,
) -> Result<()> {
    let api = ctx.api()?;
    let user_id = api.session().user_id();
    let chef = AiChefClient::new(api);
    let response: RecipeGenerationResponse = match request {
        ChefRequest::Quick {
            meal_type,
            max_time,
        } => chef.quick_suggestions(meal_type.as_deref(), max_time)?,
        ChefRequest::UseItUp => chef.use_it_up()?,
        ChefRequest::Generate(mut request) => {
            if !user_id.is_empty() {
                request.user_id = Some(user_id);
            }
            chef.generate(&request)?
        }
    };
    ctx.status(&format!("Received {} suggestions", response.suggestions.len()));

    let path = board_path(ctx)?;
    let mut board = SuggestionBoard::load(&path)?;
    board.add(response.suggestions);
    board.save(&path)?;
    board.set_filter(filter);
    show_board(ctx, &board, output)
}

/// Show the saved board.
pub fn run_chef_history(
    ctx: &CommandContext,
    filter: ConfidenceFilter,
    output: OutputArgs,
) -> Result<()> {
    let mut board = SuggestionBoard::load(&board_path(ctx)?)?;
    board.set_filter(filter);
    show_board(ctx, &board, output)
}

pub fn run_chef_clear(ctx: &CommandContext) -> Result<()> {
    let path = board_path(ctx)?;
    let mut board = SuggestionBoard::load(&path)?;
    let count = board.recipes.len();
    board.clear();
    board.save(&path)?;
    ctx.status(&format!("Cleared {count} suggestions"));
    Ok(())
}

/// Save suggestion `number` (1-based, as listed under `filter`) as a recipe.
pub fn run_chef_save(ctx: &CommandContext, number: usize, filter: ConfidenceFilter) -> Result<()> {
    let mut board = SuggestionBoard::load(&board_path(ctx)?)?;
    board.set_filter(filter);
    let filtered = board.filtered();
    let Some(suggestion) = number.checked_sub(1).and_then(|i| filtered.get(i)) else {
        bail!(
            "no suggestion #{number}; the board lists {} suggestions",
            filtered.len()
        );
    };

    let api = ctx.api()?;
    let request = suggestion.to_create_request(&api.session().user_id());
    let saved = RecipeClient::new(api).create(&request)?;
    ctx.status(&format!(
        "Saved '{}' as recipe {}",
        saved.title,
        saved.id.map_or_else(|| "-".to_string(), |id| id.to_string())
    ));
    Ok(())
}
