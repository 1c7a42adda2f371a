use clap::{Parser, Subcommand};
use flavourfind::prelude::*;
use flavourfind::store::open_backend;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;
use tracing_subscriber::EnvFilter;

type Book = RecipeBook<Arc<dyn KeyValueStore>>;

/// Find recipes by the ingredients you have, browse by cuisine, and keep a saved list
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Directory where saved recipes are stored
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Recipe dataset JSON to use instead of the bundled one
    #[arg(long, global = true)]
    dataset: Option<PathBuf>,

    /// Keep saved recipes in memory only
    #[arg(long, global = true)]
    ephemeral: bool,

    /// Run in interactive mode to be prompted for inputs
    #[arg(short = 'i', long, help = "Run in interactive 'human' mode")]
    human: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Find recipes containing every comma-separated ingredient
    Search { ingredients: String },
    /// Find recipes whose name contains the query
    Name { query: String },
    /// List cuisine labels
    Cuisines,
    /// List recipes, optionally restricted to one cuisine
    Browse {
        #[arg(short = 'k', long, default_value = ALL_CUISINES)]
        cuisine: String,
    },
    /// Show the full details of a catalog recipe
    Show { name: String },
    /// Save a catalog recipe by name
    Save { name: String },
    /// List saved recipes, or show one in detail
    Saved {
        /// Position in the saved list to show in detail
        #[arg(long)]
        show: Option<usize>,
    },
    /// Remove the saved recipe at a position
    Remove { position: usize },
    /// Remove every saved recipe
    Clear,
    /// List the configured contact links
    Contact,
    /// Open a link in the default handler
    Open { url: String },
    /// Write a binary snapshot of the current catalog
    Snapshot { output: PathBuf },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref())
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to load config: {}", e)));
    if let Some(dir) = cli.data_dir.clone() {
        config.data_dir = Some(dir);
    }
    if let Some(dataset) = cli.dataset.clone() {
        config.dataset_path = Some(dataset);
    }
    config.ephemeral |= cli.ephemeral;

    init_logging(&config.log_level);

    let catalog = config
        .load_catalog()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to load recipes: {}", e)));
    let data_dir = config.resolved_data_dir();
    debug!("Using data directory '{}'", data_dir.display());

    let backend = open_backend(config.backend_choice(), &data_dir);
    let store = SavedRecipeStore::with_key(backend, config.storage_key.clone());
    let book = RecipeBook::new(catalog, store).with_search_delay(config.search_delay());

    if cli.human {
        run_interactive(&book).await;
        return;
    }

    match cli.command {
        Some(command) => run_command(&book, &config, command).await,
        None => exit_with_error("No command given. Run with --help for usage, or -i for interactive mode."),
    }
}

fn init_logging(default_level: &str) {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();
}

async fn run_command(book: &Book, config: &AppConfig, command: Command) {
    match command {
        Command::Search { ingredients } => {
            let outcome = book.search_ingredients(&ingredients).await;
            print_outcome(&outcome, "Enter ingredients separated by commas.");
        }
        Command::Name { query } => {
            let outcome = book.search_name(&query);
            print_outcome(&outcome, "Enter part of a recipe name.");
        }
        Command::Cuisines => {
            for label in book.cuisines().labels() {
                println!("{} ({})", label, book.cuisines().count(label));
            }
        }
        Command::Browse { cuisine } => {
            let recipes = book.browse(&CuisineSelector::from(cuisine.as_str()));
            if recipes.is_empty() {
                println!("No recipes found 😔");
            }
            for recipe in recipes {
                println!("{}\n", DetailFormatter::search_card(recipe));
            }
        }
        Command::Show { name } => {
            let recipe = find_recipe(book, &name);
            print!("{}", DetailFormatter::render(recipe));
        }
        Command::Save { name } => {
            let recipe = find_recipe(book, &name);
            match book.save(recipe).await {
                SaveOutcome::Saved => println!("Recipe has been saved! ✅"),
                SaveOutcome::NotSaved { reason } => {
                    exit_with_error(&format!("Recipe was not saved: {}", reason))
                }
            }
        }
        Command::Saved { show: None } => print_saved(&book.saved().await),
        Command::Saved {
            show: Some(position),
        } => {
            let saved = book.saved().await;
            match saved.recipes().get(position) {
                Some(recipe) => print!("{}", DetailFormatter::render(recipe)),
                None => exit_with_error(&format!(
                    "No saved recipe at position {} ({} saved)",
                    position,
                    saved.len()
                )),
            }
        }
        Command::Remove { position } => match book.remove_saved(position).await {
            Ok(RemoveOutcome::Removed { recipe, remaining }) => {
                println!("Removed '{}'", recipe.name);
                print_saved(&remaining);
            }
            Ok(RemoveOutcome::NotRemoved { reason }) => {
                exit_with_error(&format!("Recipe was not removed: {}", reason))
            }
            Err(e) => exit_with_error(&e.to_string()),
        },
        Command::Clear => {
            if !book.clear_saved().await {
                exit_with_error("Failed to clear saved recipes");
            }
            println!("Saved recipes cleared.");
        }
        Command::Contact => {
            if config.contact_links.is_empty() {
                println!("No contact links configured.");
            }
            for link in &config.contact_links {
                println!("{}: {}", link.label, link.url.trim());
            }
        }
        Command::Open { url } => {
            if !open_link(&SystemLinkOpener, &url) {
                eprintln!("Could not open '{}'", url.trim());
            }
        }
        Command::Snapshot { output } => {
            let snapshot = book.catalog().snapshot();
            snapshot
                .save(&output)
                .unwrap_or_else(|e| exit_with_error(&e.to_string()));
            println!(
                "Wrote {} recipes to '{}'",
                snapshot.len(),
                output.display()
            );
        }
    }
}

/// Runs the CLI in an interactive, human-friendly mode with prompts.
async fn run_interactive(book: &Book) {
    println!("--- FlavourFind Interactive Mode ---");
    println!("Leave the ingredient prompt empty to quit.");

    loop {
        let query = prompt_for_input("\nEnter ingredients separated by commas", None);
        if query.is_empty() {
            break;
        }

        let outcome = book.search_ingredients(&query).await;
        let recipes = outcome.recipes();
        if recipes.is_empty() {
            println!("No recipes found 😔");
            continue;
        }
        for (i, recipe) in recipes.iter().enumerate() {
            println!("  {}: {}", i + 1, DetailFormatter::search_card(recipe));
        }

        let choice = prompt_for_input("Show and save which result? (number)", Some(""));
        let Some(recipe) = choice
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| recipes.get(i))
        else {
            continue;
        };

        println!("\n{}", DetailFormatter::render(recipe));
        let save = prompt_for_input("Save this recipe? (y/n)", Some("n"));
        if save.eq_ignore_ascii_case("y") {
            match book.save(recipe).await {
                SaveOutcome::Saved => println!("Recipe has been saved! ✅"),
                SaveOutcome::NotSaved { reason } => println!("Recipe was not saved: {}", reason),
            }
        }
    }
}

fn print_outcome(outcome: &SearchOutcome<'_>, hint: &str) {
    match outcome {
        SearchOutcome::NotSearched => println!("{}", hint),
        SearchOutcome::NoResults => println!("No recipes found 😔"),
        SearchOutcome::Found(recipes) => {
            for recipe in recipes {
                println!("{}\n", DetailFormatter::search_card(recipe));
            }
        }
    }
}

fn print_saved(saved: &SavedState) {
    match saved {
        SavedState::NothingSaved => println!("No recipes saved yet! 😔"),
        SavedState::Recipes(recipes) => {
            for (position, recipe) in recipes.iter().enumerate() {
                println!("[{}] {}\n", position, DetailFormatter::saved_card(recipe));
            }
        }
    }
}

fn find_recipe<'a>(book: &'a Book, name: &str) -> &'a Recipe {
    book.catalog()
        .find_by_name(name)
        .unwrap_or_else(|| exit_with_error(&format!("No recipe named '{}'", name)))
}

/// A helper function to prompt the user and read a line of input.
fn prompt_for_input(prompt_text: &str, default: Option<&str>) -> String {
    let mut line = String::new();
    let default_prompt = default
        .filter(|d| !d.is_empty())
        .map_or("".to_string(), |d| format!(" [default: {}]", d));

    print!("> {}{}: ", prompt_text, default_prompt);
    if let Err(e) = io::stdout().flush() {
        exit_with_error(&format!("Failed to write prompt: {}", e));
    }

    if let Err(e) = io::stdin().read_line(&mut line) {
        exit_with_error(&format!("Failed to read line: {}", e));
    }
    let trimmed = line.trim().to_string();

    if trimmed.is_empty() {
        default.unwrap_or("").to_string()
    } else {
        trimmed
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
