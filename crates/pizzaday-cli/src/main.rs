//! Pizza Day CLI
//!
//! Terminal front end for the fundraiser backend: the order page and the
//! manager page as subcommands, sharing a durable profile file for the
//! anonymous identifier and the selected party date.

use anyhow::Result;
use chrono::Local;
use clap::{Parser, Subcommand};
use pizzaday_client::viewmodel::{OrderForm, OrderViewModel};
use pizzaday_client::{ApiClient, ClientConfig, FileSessionStore, ManagerClient, OrderClient};
use pizzaday_proto::PizzaType;

#[derive(Parser)]
#[command(name = "pizzaday")]
#[command(about = "School pizza-day fundraiser client")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Backend base URL, overrides the config file
    #[arg(long, env = "PIZZADAY_URL")]
    base_url: Option<String>,

    /// Path to the TOML config file
    #[arg(long, env = "PIZZADAY_CONFIG", default_value = "pizzaday.toml")]
    config: String,

    /// Path to the profile file holding the identifier and saved date
    #[arg(long, env = "PIZZADAY_PROFILE", default_value = "pizzaday_profile.json")]
    profile: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch and show the selected date's summary and your own orders
    Show {
        /// Party date (YYYY-MM-DD); defaults to the saved date
        #[arg(long)]
        date: Option<String>,
    },
    /// Submit an order for a date
    Submit {
        /// Party date (YYYY-MM-DD); defaults to the saved date
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        student: String,
        #[arg(long, default_value = "")]
        cheese: String,
        #[arg(long, default_value = "")]
        salami: String,
        #[arg(long, default_value = "")]
        veggie: String,
        #[arg(long, default_value = "")]
        donair: String,
        #[arg(long, default_value = "")]
        zaatar: String,
        #[arg(long, default_value = "")]
        juice_boxes: String,
        #[arg(long, default_value = "")]
        volunteer: String,
    },
    /// Manager view
    Manager {
        #[command(subcommand)]
        command: ManagerCommands,
    },
    /// Check backend reachability
    Health,
}

#[derive(Subcommand)]
enum ManagerCommands {
    /// Dump the complete order collection
    Orders,
    /// Add a menu item
    AddMenu {
        #[arg(long)]
        name: String,
        /// Item type, e.g. "pizza" or "snack"
        #[arg(long = "type")]
        kind: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn,pizzaday_client=info".to_string()),
        )
        .init();

    let cli = Cli::parse();

    let mut config = ClientConfig::load(&cli.config);
    if let Some(base_url) = &cli.base_url {
        config = config.with_base_url(base_url);
    }
    let api = ApiClient::new(&config)?;

    match cli.command {
        Commands::Show { date } => show(&cli.profile, api, date).await,
        Commands::Submit {
            date,
            student,
            cheese,
            salami,
            veggie,
            donair,
            zaatar,
            juice_boxes,
            volunteer,
        } => {
            let mut form = OrderForm {
                student_name: student,
                juice_boxes,
                parent_volunteer: volunteer,
                ..Default::default()
            };
            *form.slice_input_mut(PizzaType::Cheese) = cheese;
            *form.slice_input_mut(PizzaType::Salami) = salami;
            *form.slice_input_mut(PizzaType::Veggie) = veggie;
            *form.slice_input_mut(PizzaType::Donair) = donair;
            *form.slice_input_mut(PizzaType::Zaatar) = zaatar;
            submit(&cli.profile, api, date, form).await
        }
        Commands::Manager { command } => match command {
            ManagerCommands::Orders => {
                let mut manager = ManagerClient::new(api);
                println!("{}", manager.load_orders().await?);
                Ok(())
            }
            ManagerCommands::AddMenu { name, kind } => {
                let mut manager = ManagerClient::new(api);
                println!("{}", manager.add_menu_item(&name, &kind).await?);
                Ok(())
            }
        },
        Commands::Health => {
            if api.health().await {
                println!("Backend is healthy");
                Ok(())
            } else {
                anyhow::bail!("Backend is unreachable")
            }
        }
    }
}

fn open_client(profile: &str, api: ApiClient) -> Result<OrderClient<FileSessionStore>> {
    let store = FileSessionStore::open(profile)?;
    Ok(OrderClient::new(store, api)?)
}

async fn show(profile: &str, api: ApiClient, date: Option<String>) -> Result<()> {
    let mut client = open_client(profile, api)?;
    let today = Local::now().date_naive();

    let selected = match date {
        Some(input) => client.change_date(&input, today).await?,
        None => client.load().await?,
    };

    match selected {
        Some(date) => println!("Pizza party date: {date}"),
        None => {
            print_errors(client.vm());
            anyhow::bail!("No valid party date selected. Pass --date YYYY-MM-DD.");
        }
    }

    print_order_page(client.vm());
    Ok(())
}

async fn submit(
    profile: &str,
    api: ApiClient,
    date: Option<String>,
    mut form: OrderForm,
) -> Result<()> {
    let mut client = open_client(profile, api)?;
    let today = Local::now().date_naive();

    let selected = match date {
        Some(input) => client.change_date(&input, today).await?,
        None => client.load().await?,
    };
    let Some(date) = selected else {
        print_errors(client.vm());
        anyhow::bail!("No valid party date selected. Pass --date YYYY-MM-DD.");
    };

    client.submit(date, &mut form).await?;

    if let Some(status) = &client.vm().status {
        println!("{status}");
    }
    print_order_page(client.vm());
    Ok(())
}

fn print_errors(vm: &OrderViewModel) {
    if let Some(error) = &vm.date_error {
        eprintln!("{error}");
    }
}

fn print_order_page(vm: &OrderViewModel) {
    print_errors(vm);

    if let Some(summary) = &vm.summary {
        println!("\nPizzas Needed:");
        for line in summary.lines() {
            println!("  {line}");
        }
    }

    if !vm.my_orders.is_empty() {
        println!("\nYour Orders:");
        for order in &vm.my_orders {
            println!("  Student: {}", order.student_name);
            println!("  Pizza Slices: {}", order.pizza_slices);
            println!("  Juice Boxes: {}", order.juice_boxes);
            println!("  Parent Volunteer: {}", order.parent_volunteer);
            println!();
        }
    }
}
