use anyhow::{Context, Result};
use argus::ingest::{self, Inventory};
use argus::models::Product;
use clap::{Args, Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::time::Instant;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

/// Width at which long description text wraps in the terminal.
const WRAP_WIDTH: usize = 100;

#[derive(Parser)]
#[command(name = "argus")]
#[command(about = "Query a product inventory CSV through a hash table and category index")]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a dataset and answer queries interactively
    Repl(ReplArgs),
    /// Look up a single product by its unique id
    Find(FindArgs),
    /// List the products belonging to one category
    List(ListArgs),
}

#[derive(Args)]
struct ReplArgs {
    /// Path to the inventory CSV file
    #[arg(short, long)]
    input: String,
}

#[derive(Args)]
struct FindArgs {
    /// Path to the inventory CSV file
    #[arg(short, long)]
    input: String,

    /// Unique id of the product to look up
    id: String,

    /// Print the product as JSON instead of the formatted report
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct ListArgs {
    /// Path to the inventory CSV file
    #[arg(short, long)]
    input: String,

    /// Category name, matched exactly
    category: String,
}

fn load(input: &str) -> Result<Inventory> {
    let start = Instant::now();
    let inventory = ingest::load_csv(input)?;
    info!(
        duration_secs = start.elapsed().as_secs_f64(),
        "Ingestion complete"
    );
    Ok(inventory)
}

fn run_repl(args: ReplArgs) -> Result<()> {
    let inventory = load(&args.input)?;

    println!();
    println!("=== Inventory loaded ===");
    println!("Products:        {}", inventory.table.len());
    println!("Categories:      {}", inventory.categories.len());
    println!("Records read:    {}", inventory.stats.records_read);
    println!("Skipped (no id): {}", inventory.stats.skipped_missing_id);
    println!();
    println!("Enter :help for commands, :quit to exit.");

    let stdin = io::stdin();
    print_prompt()?;
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read command")?;
        let line = line.trim();
        if line == ":quit" {
            break;
        }
        eval_command(&inventory, line);
        print_prompt()?;
    }
    Ok(())
}

fn print_prompt() -> Result<()> {
    print!("> ");
    io::stdout().flush().context("Failed to flush stdout")
}

fn eval_command(inventory: &Inventory, line: &str) {
    let (command, arg) = match line.split_once(' ') {
        Some((c, a)) => (c, a.trim()),
        None => (line, ""),
    };
    match command {
        ":help" => print_help(),
        "find" => match inventory.find(arg) {
            Some(product) if !arg.is_empty() => print_product(product),
            _ => println!("Inventory not found"),
        },
        "list" => print_category(inventory, arg),
        "" => {}
        _ => println!("Command not supported. Enter :help for the command list"),
    }
}

fn print_help() {
    println!("Supported commands:");
    println!("  find <id>         Print full details of the product with that unique id");
    println!("  list <category>   Print id and name of every product in the category");
    println!("  :help             Show this help");
    println!("  :quit             Exit");
}

fn print_category(inventory: &Inventory, category: &str) {
    let Some(ids) = inventory.lookup_category(category) else {
        println!("Invalid Category");
        return;
    };
    // Ids are back-references; resolve each through the table.
    for id in ids {
        if let Some(product) = inventory.find(id) {
            println!("{} - {}", id, product.product_name);
        }
    }
}

fn print_product(p: &Product) {
    println!("Uniq Id: {}", p.uniq_id);
    println!("Product Name: {}", p.product_name);
    println!("Brand Name: {}", p.brand_name);
    println!("Category: {}", p.category);
    println!("List Price: {}", p.list_price);
    println!("Selling Price: {}", p.selling_price);
    println!("Quantity: {}", p.quantity);
    if !p.asin.is_empty() {
        println!("Asin: {}", p.asin);
    }
    if !p.model_number.is_empty() {
        println!("Model Number: {}", p.model_number);
    }
    print!("Product Description:");
    if p.product_description.is_empty() {
        println!();
    } else {
        println!();
        for line in wrap_text(&p.product_description, WRAP_WIDTH) {
            println!("    {line}");
        }
    }
    if !p.stock.is_empty() {
        println!("Stock: {}", p.stock);
    }
}

/// Greedy word wrap for long free-text fields.
fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut cur = String::new();
    for word in text.split_whitespace() {
        if !cur.is_empty() && cur.len() + 1 + word.len() > width {
            lines.push(std::mem::take(&mut cur));
        }
        if !cur.is_empty() {
            cur.push(' ');
        }
        cur.push_str(word);
    }
    if !cur.is_empty() {
        lines.push(cur);
    }
    lines
}

fn run_find(args: FindArgs) -> Result<()> {
    let inventory = load(&args.input)?;
    match inventory.find(&args.id) {
        Some(product) => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(product)?);
            } else {
                print_product(product);
            }
            Ok(())
        }
        None => anyhow::bail!("Inventory not found: {}", args.id),
    }
}

fn run_list(args: ListArgs) -> Result<()> {
    let inventory = load(&args.input)?;
    match inventory.lookup_category(&args.category) {
        Some(_) => {
            print_category(&inventory, &args.category);
            Ok(())
        }
        None => anyhow::bail!("Invalid Category: {}", args.category),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");

    let result = match cli.command {
        Commands::Repl(args) => run_repl(args),
        Commands::Find(args) => run_find(args),
        Commands::List(args) => run_list(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Error: {:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
