//! pantry-tools: pantry inventory, recipes and AI chef from the command line.

#![allow(clippy::needless_pass_by_value)]

use anyhow::{Context, Result};
use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use pantry_tools::{
    cli::{self, ChefRequest, CommandContext, OutputArgs},
    config::{self, AppConfig, ConfigPreset, Validatable},
    forms::PantryItemForm,
    model::{ConfidenceFilter, Difficulty, RecipeGenerationRequest, RegisterRequest},
    reports::ReportFormat,
    view::{CategoryFilter, RecipeQuery, SortKey},
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "pantry-tools")]
#[command(version)]
#[command(about = "Pantry inventory, recipes and AI chef for the recipe platform", long_about = None)]
#[command(after_help = "EXAMPLES:
    # Items expiring in the next two weeks
    pantry-tools pantry expiring

    # Work offline against a saved item list
    pantry-tools pantry list --input pantry.json --sort expiry -o table

    # Export the pantry for a spreadsheet
    pantry-tools pantry export -O my-pantry.csv

    # High-confidence ideas that use up what is about to expire
    pantry-tools chef use-it-up --confidence high")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// API gateway base URL
    #[arg(long, global = true, env = "PANTRY_TOOLS_API_URL")]
    api_url: Option<String>,

    /// Bearer token to use instead of the saved session
    #[arg(long, global = true, env = "PANTRY_TOOLS_TOKEN", hide_env_values = true)]
    token: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Output selection shared by the listing commands.
#[derive(Args)]
struct OutputOpts {
    /// Output format (auto: table on a terminal, json otherwise)
    #[arg(short, long)]
    output: Option<ReportFormat>,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,
}

impl From<OutputOpts> for OutputArgs {
    fn from(opts: OutputOpts) -> Self {
        Self {
            format: opts.output,
            file: opts.output_file,
        }
    }
}

/// Item source: a JSON snapshot instead of the pantry service.
#[derive(Args)]
struct InputOpts {
    /// Read (and for changes, rewrite) a saved item list instead of calling the API
    #[arg(long)]
    input: Option<PathBuf>,
}

#[derive(Args)]
struct ItemFields {
    #[arg(long)]
    name: String,

    #[arg(long)]
    quantity: f64,

    #[arg(long)]
    unit: String,

    /// Expiry date, YYYY-MM-DD
    #[arg(long)]
    expiry: String,
}

impl ItemFields {
    fn into_form(self) -> PantryItemForm {
        PantryItemForm {
            name: self.name,
            quantity: self.quantity,
            unit: self.unit,
            ..PantryItemForm::default()
        }
        .with_expiry(&self.expiry)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Pantry inventory
    Pantry {
        #[command(subcommand)]
        action: PantryAction,
    },

    /// Browse recipes
    Recipes {
        #[command(subcommand)]
        action: RecipesAction,
    },

    /// AI chef suggestions
    Chef {
        #[command(subcommand)]
        action: ChefAction,
    },

    /// Log in and save the session
    Login {
        #[arg(long)]
        username: String,

        #[arg(long, env = "PANTRY_TOOLS_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Forget the saved session
    Logout,

    /// Create an account
    Register {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long, env = "PANTRY_TOOLS_PASSWORD", hide_env_values = true)]
        password: String,
        #[arg(long, default_value = "")]
        first_name: String,
        #[arg(long, default_value = "")]
        last_name: String,
    },

    /// Rate a password the way the registration form does
    PasswordStrength { password: String },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Generate JSON Schema for the config file format
    ConfigSchema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Inspect or create the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum PantryAction {
    /// List items with search, category filter and sort
    List {
        /// Case-insensitive substring of the item name
        #[arg(short, long)]
        search: Option<String>,

        /// `all` or a category (Dairy, Meat, Vegetables, Fruits, Grains, Spices, Other)
        #[arg(short, long)]
        category: Option<CategoryFilter>,

        #[arg(long, value_enum)]
        sort: Option<SortKey>,

        #[command(flatten)]
        input: InputOpts,

        #[command(flatten)]
        output: OutputOpts,
    },

    /// Items expiring within 14 days, soonest first (at most 5)
    Expiring {
        /// Show the service's own expiring list
        #[arg(long)]
        server: bool,

        #[command(flatten)]
        input: InputOpts,

        #[command(flatten)]
        output: OutputOpts,
    },

    /// A single item
    Show {
        id: i64,

        #[command(flatten)]
        input: InputOpts,

        #[command(flatten)]
        output: OutputOpts,
    },

    /// Counts and category breakdown
    Stats {
        #[command(flatten)]
        input: InputOpts,

        #[command(flatten)]
        output: OutputOpts,
    },

    /// Export every item as CSV
    Export {
        #[command(flatten)]
        input: InputOpts,

        /// Defaults to `pantry.export_file_name` (my-pantry.csv)
        #[arg(short = 'O', long)]
        output_file: Option<PathBuf>,
    },

    /// Add an item
    Add {
        #[command(flatten)]
        fields: ItemFields,

        #[command(flatten)]
        input: InputOpts,
    },

    /// Replace an item's fields
    Update {
        id: i64,

        #[command(flatten)]
        fields: ItemFields,

        #[command(flatten)]
        input: InputOpts,
    },

    /// Remove an item
    Remove {
        id: i64,

        #[command(flatten)]
        input: InputOpts,
    },
}

#[derive(Subcommand)]
enum RecipesAction {
    /// One page of recipes
    List {
        /// Matches title or description
        #[arg(short, long, default_value = "")]
        search: String,

        #[arg(short, long)]
        difficulty: Option<Difficulty>,

        /// Only recipes you created
        #[arg(long)]
        mine: bool,

        #[arg(short, long, default_value_t = 1)]
        page: usize,

        #[command(flatten)]
        output: OutputOpts,
    },

    /// A single recipe
    Show {
        id: i64,

        #[command(flatten)]
        output: OutputOpts,
    },

    /// Recipes matched against your pantry
    Suggested {
        /// Prefer recipes that use items close to expiry
        #[arg(long)]
        use_it_up: bool,

        #[command(flatten)]
        output: OutputOpts,
    },

    /// Create a recipe from a YAML or JSON form file
    Create {
        file: PathBuf,
    },

    /// Replace a recipe from a form file
    Update {
        id: i64,
        file: PathBuf,
    },

    /// Delete one of your recipes
    Delete {
        id: i64,
    },
}

#[derive(Args)]
struct ConfidenceOpts {
    /// all, high, medium or low
    #[arg(long, default_value = "all")]
    confidence: ConfidenceFilter,
}

#[derive(Subcommand)]
enum ChefAction {
    /// Quick ideas from what is in the pantry
    Quick {
        #[arg(long)]
        meal_type: Option<String>,

        /// Maximum preparation time in minutes
        #[arg(long)]
        max_time: Option<u32>,

        #[command(flatten)]
        confidence: ConfidenceOpts,

        #[command(flatten)]
        output: OutputOpts,
    },

    /// Ideas built around items close to expiry
    UseItUp {
        #[command(flatten)]
        confidence: ConfidenceOpts,

        #[command(flatten)]
        output: OutputOpts,
    },

    /// Custom generation
    Generate {
        #[arg(long)]
        meal_type: Option<String>,

        #[arg(long)]
        max_time: Option<u32>,

        #[arg(long)]
        servings: Option<u32>,

        #[arg(long)]
        difficulty: Option<Difficulty>,

        #[command(flatten)]
        confidence: ConfidenceOpts,

        #[command(flatten)]
        output: OutputOpts,
    },

    /// Show saved suggestions
    History {
        #[command(flatten)]
        confidence: ConfidenceOpts,

        #[command(flatten)]
        output: OutputOpts,
    },

    /// Save a listed suggestion as one of your recipes
    Save {
        /// Row number from `chef history` with the same --confidence
        number: usize,

        #[command(flatten)]
        confidence: ConfidenceOpts,
    },

    /// Forget saved suggestions
    Clear,
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .pantry-tools.yaml in the current directory
    Init {
        /// Write a preset's values instead of the commented example (default, scripting)
        #[arg(long)]
        preset: Option<String>,
    },
}

/// File config with the global flags layered on top.
fn load_config(cli: &Cli) -> AppConfig {
    let mut overrides = AppConfig::builder().no_color(cli.no_color);
    if let Some(url) = &cli.api_url {
        overrides = overrides.api_url(url.clone());
    }
    let (config, loaded_from) =
        AppConfig::from_file_with_overrides(cli.config.as_deref(), &overrides.build());
    if let Some(path) = loaded_from {
        tracing::debug!("Loaded config from {}", path.display());
    }
    for error in config.validate() {
        tracing::warn!("Invalid configuration: {error}");
    }
    config
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    let config = load_config(&cli);
    let ctx = CommandContext::new(config, cli.quiet).with_token(cli.token.clone());

    match cli.command {
        Commands::Pantry { action } => match action {
            PantryAction::List {
                search,
                category,
                sort,
                input,
                output,
            } => {
                let mut params = ctx.config.pantry.view_parameters();
                if let Some(search) = search {
                    params = params.searching(search);
                }
                if let Some(category) = category {
                    params = params.in_category(category);
                }
                if let Some(sort) = sort {
                    params = params.sorted_by(sort);
                }
                cli::run_pantry_list(&ctx, input.input, params, output.into())
            }
            PantryAction::Expiring {
                server,
                input,
                output,
            } => cli::run_pantry_expiring(&ctx, input.input, server, output.into()),
            PantryAction::Show { id, input, output } => {
                cli::run_pantry_show(&ctx, input.input, id, output.into())
            }
            PantryAction::Stats { input, output } => {
                cli::run_pantry_stats(&ctx, input.input, output.into())
            }
            PantryAction::Export { input, output_file } => {
                cli::run_pantry_export(&ctx, input.input, output_file)
            }
            PantryAction::Add { fields, input } => {
                cli::run_pantry_save(&ctx, input.input, &fields.into_form(), None)
            }
            PantryAction::Update { id, fields, input } => {
                cli::run_pantry_save(&ctx, input.input, &fields.into_form(), Some(id))
            }
            PantryAction::Remove { id, input } => cli::run_pantry_remove(&ctx, input.input, id),
        },

        Commands::Recipes { action } => match action {
            RecipesAction::List {
                search,
                difficulty,
                mine,
                page,
                output,
            } => {
                let query = RecipeQuery { search, difficulty };
                cli::run_recipes_list(&ctx, &query, mine, page, output.into())
            }
            RecipesAction::Show { id, output } => cli::run_recipes_show(&ctx, id, output.into()),
            RecipesAction::Suggested { use_it_up, output } => {
                cli::run_recipes_suggested(&ctx, use_it_up, output.into())
            }
            RecipesAction::Create { file } => cli::run_recipes_save(&ctx, &file, None),
            RecipesAction::Update { id, file } => cli::run_recipes_save(&ctx, &file, Some(id)),
            RecipesAction::Delete { id } => cli::run_recipes_delete(&ctx, id),
        },

        Commands::Chef { action } => match action {
            ChefAction::Quick {
                meal_type,
                max_time,
                confidence,
                output,
            } => cli::run_chef(
                &ctx,
                ChefRequest::Quick {
                    meal_type,
                    max_time,
                },
                confidence.confidence,
                output.into(),
            ),
            ChefAction::UseItUp { confidence, output } => cli::run_chef(
                &ctx,
                ChefRequest::UseItUp,
                confidence.confidence,
                output.into(),
            ),
            ChefAction::Generate {
                meal_type,
                max_time,
                servings,
                difficulty,
                confidence,
                output,
            } => {
                let mut request = RecipeGenerationRequest {
                    meal_type,
                    max_preparation_time: max_time,
                    servings,
                    ..RecipeGenerationRequest::default()
                };
                if let Some(difficulty) = difficulty {
                    request = request.with_difficulty(difficulty);
                }
                cli::run_chef(
                    &ctx,
                    ChefRequest::Generate(request),
                    confidence.confidence,
                    output.into(),
                )
            }
            ChefAction::History { confidence, output } => {
                cli::run_chef_history(&ctx, confidence.confidence, output.into())
            }
            ChefAction::Save { number, confidence } => {
                cli::run_chef_save(&ctx, number, confidence.confidence)
            }
            ChefAction::Clear => cli::run_chef_clear(&ctx),
        },

        Commands::Login { username, password } => cli::run_login(&ctx, username, password),

        Commands::Logout => cli::run_logout(&ctx),

        Commands::Register {
            username,
            email,
            password,
            first_name,
            last_name,
        } => cli::run_register(
            &ctx,
            &RegisterRequest {
                username,
                email,
                password,
                first_name,
                last_name,
            },
        ),

        Commands::PasswordStrength { password } => {
            println!("{}", cli::password_report(&password));
            Ok(())
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "pantry-tools", &mut io::stdout());
            Ok(())
        }

        Commands::ConfigSchema { output } => {
            let schema = config::generate_json_schema();
            match output {
                Some(path) => {
                    std::fs::write(&path, &schema)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => {
                    println!("{schema}");
                }
            }
            Ok(())
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let (config, loaded_from) = config::load_or_default(cli.config.as_deref());
                if let Some(path) = &loaded_from {
                    eprintln!("# Loaded from: {}", path.display());
                } else {
                    eprintln!("# No config file found; showing defaults");
                }
                let yaml = serde_yaml::to_string(&config).context("failed to serialize config")?;
                print!("{yaml}");
                Ok(())
            }
            ConfigAction::Path => {
                let search_paths: [Option<String>; 3] = [
                    std::env::current_dir()
                        .ok()
                        .map(|p| p.display().to_string()),
                    dirs::config_dir()
                        .map(|p| p.join(config::CONFIG_DIR_NAME).display().to_string()),
                    dirs::home_dir().map(|p| p.display().to_string()),
                ];
                eprintln!("Config file search paths (in order):");
                for path in search_paths.into_iter().flatten() {
                    eprintln!("  {path}");
                }
                eprintln!();
                match config::discover_config_file(cli.config.as_deref()) {
                    Some(path) => eprintln!("Active config file: {}", path.display()),
                    None => eprintln!("No config file found."),
                }
                Ok(())
            }
            ConfigAction::Init { preset } => {
                let target = std::env::current_dir()
                    .context("cannot determine current directory")?
                    .join(".pantry-tools.yaml");
                if target.exists() {
                    anyhow::bail!(
                        "{} already exists. Remove it first to re-initialize.",
                        target.display()
                    );
                }
                let content = match preset.as_deref() {
                    None => config::generate_full_example_config(),
                    Some(name) => {
                        let preset = ConfigPreset::from_name(name).with_context(|| {
                            let known: Vec<&str> =
                                ConfigPreset::all().iter().map(ConfigPreset::name).collect();
                            format!("unknown preset '{name}' (expected one of: {})", known.join(", "))
                        })?;
                        config::generate_preset_config(preset)
                    }
                };
                std::fs::write(&target, content)
                    .with_context(|| format!("failed to write {}", target.display()))?;
                eprintln!("Created {}", target.display());
                Ok(())
            }
        },
    }
}
