use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use inventory_core::{NewItem, Outcome, validate_amount, validate_new_item};
use inventory_sqlite::InventoryStore;
use serde_json::json;
use tracing_subscriber::EnvFilter;

mod config;
mod output;

use config::{FileConfig, Settings};
use output::{OutputFormat, format_items, format_value};

#[derive(Debug, Parser)]
#[command(name = "inventory")]
#[command(about = "Single-table inventory management backed by SQLite")]
struct Cli {
    /// Database file path.
    #[arg(long, global = true, env = "INVENTORY_DB")]
    db: Option<PathBuf>,
    /// YAML config file providing defaults for --db and --format.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Output format (default: table).
    #[arg(long, global = true)]
    format: Option<OutputFormat>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Register a new item.
    Add(AddArgs),
    /// List every item.
    List,
    /// List items whose name contains a term (case-sensitive).
    Search(SearchArgs),
    /// Set the stock quantity of an item.
    Update(UpdateArgs),
    /// Delete an item.
    Delete(DeleteArgs),
    /// Create the inventory table if it does not exist.
    Init,
    /// Show table status and item count.
    Status,
}

#[derive(Debug, Args)]
struct AddArgs {
    /// Item name.
    #[arg(long)]
    name: String,
    /// Initial stock quantity.
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    quantity: i64,
    /// Unit price.
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    price: i64,
}

#[derive(Debug, Args)]
struct SearchArgs {
    /// Substring to look for; empty matches everything.
    #[arg(default_value = "", allow_hyphen_values = true)]
    term: String,
}

#[derive(Debug, Args)]
struct UpdateArgs {
    /// Item id.
    #[arg(long)]
    id: i64,
    /// New stock quantity.
    #[arg(long, allow_negative_numbers = true)]
    quantity: i64,
}

#[derive(Debug, Args)]
struct DeleteArgs {
    /// Item id.
    #[arg(long)]
    id: i64,
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

/// Logs go to stderr so stdout carries only command output.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn run(cli: Cli) -> Result<(), String> {
    let file = cli.config.as_ref().map(FileConfig::load).transpose()?;
    let settings = Settings::resolve(cli.db, cli.format, file);
    tracing::debug!(database = %settings.database.display(), format = ?settings.format, "resolved settings");

    match cli.command {
        Command::Add(args) => run_add(&settings, args),
        Command::List => run_list(&settings),
        Command::Search(args) => run_search(&settings, args),
        Command::Update(args) => run_update(&settings, args),
        Command::Delete(args) => run_delete(&settings, args),
        Command::Init => run_init(&settings),
        Command::Status => run_status(&settings),
    }
}

fn open_store(settings: &Settings) -> Result<InventoryStore, String> {
    InventoryStore::open(&settings.database).map_err(|e| e.to_string())
}

fn run_add(settings: &Settings, args: AddArgs) -> Result<(), String> {
    let item = NewItem::new(args.name, args.quantity, args.price);
    validate_new_item(&item).map_err(|e| e.to_string())?;

    let store = open_store(settings)?;
    let id = store.create(&item).map_err(|e| e.to_string())?;

    match settings.format {
        OutputFormat::Table => println!("Created item {id} ({}).", item.name),
        format => print!("{}", format_value(&json!({ "id": id }), format)?),
    }
    Ok(())
}

fn run_list(settings: &Settings) -> Result<(), String> {
    let store = open_store(settings)?;
    let items = store.list_all().map_err(|e| e.to_string())?;

    if items.is_empty() && settings.format == OutputFormat::Table {
        println!("No items in inventory.");
        return Ok(());
    }
    print!("{}", format_items(&items, settings.format)?);
    Ok(())
}

fn run_search(settings: &Settings, args: SearchArgs) -> Result<(), String> {
    let store = open_store(settings)?;
    let items = store
        .search_by_name(&args.term)
        .map_err(|e| e.to_string())?;

    if items.is_empty() && settings.format == OutputFormat::Table {
        println!("No items match '{}'.", args.term);
        return Ok(());
    }
    print!("{}", format_items(&items, settings.format)?);
    Ok(())
}

fn run_update(settings: &Settings, args: UpdateArgs) -> Result<(), String> {
    validate_amount(args.quantity).map_err(|e| e.to_string())?;

    let store = open_store(settings)?;
    let outcome = store
        .update_quantity(args.id, args.quantity)
        .map_err(|e| e.to_string())?;
    report_outcome(settings, args.id, outcome, || {
        format!("Updated item {} quantity to {}.", args.id, args.quantity)
    })
}

fn run_delete(settings: &Settings, args: DeleteArgs) -> Result<(), String> {
    let store = open_store(settings)?;
    let outcome = store.delete_by_id(args.id).map_err(|e| e.to_string())?;
    report_outcome(settings, args.id, outcome, || format!("Deleted item {}.", args.id))
}

fn run_init(settings: &Settings) -> Result<(), String> {
    let store = open_store(settings)?;
    println!("Inventory table ready in '{}'.", store.path().display());
    Ok(())
}

fn run_status(settings: &Settings) -> Result<(), String> {
    let store = open_store(settings)?;
    let status = store.status().map_err(|e| e.to_string())?;

    match settings.format {
        OutputFormat::Table => {
            println!("Inventory Status:");
            println!("  Database: {}", store.path().display());
            println!(
                "  Table exists: {}",
                if status.table_exists { "yes" } else { "no" }
            );
            println!("  Item count: {}", status.item_count);
            match status.last_assigned_id {
                Some(id) => println!("  Last assigned id: {id}"),
                None => println!("  Last assigned id: none"),
            }
        }
        format => {
            let value = json!({
                "database": store.path().display().to_string(),
                "table_exists": status.table_exists,
                "item_count": status.item_count,
                "last_assigned_id": status.last_assigned_id,
            });
            print!("{}", format_value(&value, format)?);
        }
    }
    Ok(())
}

/// Prints the success message, or turns `NotFound` into a command failure.
fn report_outcome(
    settings: &Settings,
    id: i64,
    outcome: Outcome,
    message: impl FnOnce() -> String,
) -> Result<(), String> {
    if outcome.is_not_found() {
        return Err(format!("item {id} does not exist"));
    }
    match settings.format {
        OutputFormat::Table => println!("{}", message()),
        format => print!(
            "{}",
            format_value(&json!({ "id": id, "outcome": outcome }), format)?
        ),
    }
    Ok(())
}
