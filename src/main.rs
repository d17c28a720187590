//! Command-line front end for the order desk.
//!
//! Every invocation starts the store over the configured backend, runs one
//! command against it and shuts it down again, so state carries over between
//! invocations only with the file backend.

use clap::{Args, Parser, Subcommand, ValueEnum};
use order_desk::clients::{ActorClient, OrderClient};
use order_desk::config::{AppConfig, StorageConfig};
use order_desk::lifecycle::{setup_tracing, OrderSystem};
use order_desk::model::{Order, OrderDraft, OrderId};
use order_desk::views::OrderViews;
use std::path::PathBuf;

/// Command-line arguments for the order desk.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Directory for the file backend (overrides the configuration)
    #[arg(short, long, global = true, env = "ORDER_DESK_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Log level used when RUST_LOG is unset (trace, debug, info, warn, error)
    #[arg(short, long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Place a new order
    Create(DraftArgs),
    /// List orders
    List {
        #[arg(long, value_enum, default_value_t = View::All)]
        view: View,
    },
    /// Show a single order
    Show { id: OrderId },
    /// Change the text fields of an order; omitted fields keep their value
    Update {
        id: OrderId,
        #[command(flatten)]
        edits: DraftArgs,
    },
    /// Mark an order as completed
    Complete { id: OrderId },
    /// Mark an order as cancelled
    Cancel { id: OrderId },
    /// Remove an order
    Delete { id: OrderId },
    /// Remove every completed order
    Purge,
}

#[derive(Args, Debug)]
struct DraftArgs {
    /// Kind of food
    #[arg(long)]
    food: Option<String>,
    #[arg(long)]
    quantity: Option<String>,
    /// Pickup date and time
    #[arg(long)]
    pickup: Option<String>,
    /// Customer name
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    phone: Option<String>,
    #[arg(long)]
    address: Option<String>,
}

impl DraftArgs {
    /// Overlays the given flags onto `base`.
    fn apply_to(self, mut base: OrderDraft) -> OrderDraft {
        let fields = [
            (self.food, &mut base.kind_of_food),
            (self.quantity, &mut base.quantity),
            (self.pickup, &mut base.pickup_date_time),
            (self.name, &mut base.personal_info),
            (self.phone, &mut base.phone_number),
            (self.address, &mut base.address),
        ];
        for (value, field) in fields {
            if let Some(value) = value {
                *field = value;
            }
        }
        base
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum View {
    All,
    Pending,
    Cancelled,
    Completed,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    setup_tracing(&cli.log_level);

    let mut config = match &cli.config {
        Some(path) => AppConfig::from_file(path).await?,
        None => AppConfig::default(),
    };
    if let Some(path) = cli.data_dir {
        config.storage = StorageConfig::File { path };
    }

    let system = OrderSystem::from_config(&config)?;
    let outcome = run(cli.command, &system.order_client).await;
    system.shutdown().await?;
    outcome
}

async fn run(command: Command, client: &OrderClient) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Command::Create(args) => {
            let id = client.create_order(args.apply_to(OrderDraft::default())).await?;
            println!("created order {id}");
        }
        Command::List { view } => {
            let orders = client.orders().await?;
            let views = OrderViews::new(&orders);
            let shown = match view {
                View::All => views.all(),
                View::Pending => views.pending(),
                View::Cancelled => views.cancelled(),
                View::Completed => views.completed_display(),
            };
            if shown.is_empty() {
                println!("no orders");
            }
            for order in shown {
                println!("{}", summary(order));
            }
        }
        Command::Show { id } => match client.get(id).await? {
            Some(order) => println!("{}", summary(&order)),
            None => println!("order {id} not found"),
        },
        Command::Update { id, edits } => {
            let Some(current) = client.select_order(Some(id)).await? else {
                println!("order {id} not found");
                return Ok(());
            };
            if let Some(order) = client.update_order(edits.apply_to(current)).await? {
                println!("{}", summary(&order));
            }
        }
        Command::Complete { id } => report(id, "completed", client.mark_completed(id).await?),
        Command::Cancel { id } => report(id, "cancelled", client.mark_cancelled(id).await?),
        Command::Delete { id } => report(id, "deleted", client.delete_order(id).await?),
        Command::Purge => {
            let removed = client.delete_completed_orders().await?;
            println!("removed {removed} completed order(s)");
        }
    }
    Ok(())
}

fn report(id: OrderId, verb: &str, found: bool) {
    if found {
        println!("order {id} {verb}");
    } else {
        println!("order {id} not found");
    }
}

fn summary(order: &Order) -> String {
    format!(
        "{} [{}] {} x{} at {} for {} ({}, {})",
        order.id,
        order.status(),
        order.kind_of_food,
        order.quantity,
        order.pickup_date_time,
        order.personal_info,
        order.phone_number,
        order.address,
    )
}
