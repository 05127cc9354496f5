use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use comfy_table::{Cell, Table};
use tracing_subscriber::EnvFilter;

use quotebot_dashboard::format::{currency, percent};
use quotebot_dashboard::models::{DashboardMetrics, Quote, RevenuePoint, ServiceCount, VolumePoint};
use quotebot_dashboard::{Dashboard, InsightState, Page, Result, TimeRange, View};

#[derive(Parser)]
#[command(name = "quotebot-dashboard", version, about = "Roofing quote dashboard")]
struct Cli {
    /// Trailing window: 7d, 30d or 90d
    #[arg(long, global = true, default_value = "30d")]
    range: TimeRange,

    /// Seed for the generated mock dataset
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Number of mock quotes to generate
    #[arg(long, global = true)]
    count: Option<usize>,

    /// Load quotes from a JSON (or .json.gz) file instead of generating them
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Settings file (defaults to the platform config directory)
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    /// Print the page as JSON instead of tables
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Stat cards, revenue trend, service mix and recent quotes
    Dashboard,
    /// All quotes in the selected range
    Quotes {
        /// Filter by quote id or customer name
        #[arg(long)]
        search: Option<String>,
    },
    /// Client roster across the full history
    Clients,
    /// Revenue, service and volume series
    Analytics,
    /// Business settings
    Settings,
    /// Alerts derived from the quote history
    Notifications,
    /// Ask the generative service for three observations
    Insights,
}

fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut builder = Dashboard::builder().time_range(cli.range);
    if let Some(path) = &cli.data {
        builder = builder.data_file(path);
    } else {
        if let Some(count) = cli.count {
            builder = builder.mock_count(count);
        }
        if let Some(seed) = cli.seed {
            builder = builder.mock_seed(seed);
        }
    }
    if let Some(path) = &cli.settings {
        builder = builder.settings_file(path);
    }
    let mut dashboard = builder.build()?;
    tracing::debug!("{}", dashboard);

    let (view, search) = match cli.command.unwrap_or(Commands::Dashboard) {
        Commands::Insights => return print_insights(&mut dashboard, cli.json),
        Commands::Dashboard => (View::Dashboard, None),
        Commands::Quotes { search } => (View::Quotes, search),
        Commands::Clients => (View::Clients, None),
        Commands::Analytics => (View::Analytics, None),
        Commands::Settings => (View::Settings, None),
        Commands::Notifications => (View::Notifications, None),
    };
    dashboard.navigate(view);

    let mut page = dashboard.page();
    if let (Page::Quotes { quotes }, Some(term)) = (&mut page, search.as_deref()) {
        *quotes = dashboard.search_quotes(term);
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&page)?);
        return Ok(());
    }

    println!("{}", view.title());
    if view.shows_time_filter() {
        println!("{} | {}", view.subtitle(), dashboard.time_range().label());
    } else {
        println!("{}", view.subtitle());
    }
    println!();
    print_page(&page);
    Ok(())
}

fn print_page(page: &Page) {
    match page {
        Page::Dashboard {
            metrics,
            revenue_trend,
            service_distribution,
            recent_quotes,
            volume,
        } => {
            print_metrics(metrics);
            print_revenue(revenue_trend);
            print_services(service_distribution);
            println!("Recent Quotes");
            print_quotes(recent_quotes);
            println!("Quote Volume: {} quotes generated in selected period", metrics.total_quotes);
            print_volume(volume);
        }
        Page::Quotes { quotes } => print_quotes(quotes),
        Page::Clients { stats, clients } => {
            let mut cards = Table::new();
            cards.set_header(vec!["Total Clients", "New This Month", "Avg Lifetime Value"]);
            cards.add_row(vec![
                stats.total_clients.to_string(),
                stats.new_this_month.to_string(),
                currency(stats.average_lifetime_value),
            ]);
            println!("{cards}");

            let mut table = Table::new();
            table.set_header(vec!["Client Name", "Location", "Total Value", "Quotes", "Last Active"]);
            for client in clients {
                table.add_row(vec![
                    Cell::new(&client.name),
                    Cell::new(&client.address),
                    Cell::new(currency(client.total_spent)),
                    Cell::new(client.quotes_count),
                    Cell::new(client.last_active),
                ]);
            }
            println!("{table}");
        }
        Page::Analytics {
            revenue_trend,
            service_distribution,
            volume,
        } => {
            print_revenue(revenue_trend);
            print_services(service_distribution);
            print_volume(volume);
        }
        Page::Settings { settings } => {
            let mut table = Table::new();
            table.set_header(vec!["Setting", "Value"]);
            table.add_row(vec!["Company Name".to_string(), settings.company_name.clone()]);
            table.add_row(vec!["Service Phone".to_string(), settings.service_phone.clone()]);
            table.add_row(vec!["Service Areas".to_string(), settings.service_areas.join(", ")]);
            table.add_row(vec![
                "Manual Approval Threshold".to_string(),
                currency(settings.approval_threshold),
            ]);
            table.add_row(vec![
                "Auto-Send Quotes".to_string(),
                if settings.auto_send_enabled {
                    format!("on, under {}", currency(settings.auto_send_limit))
                } else {
                    "off".to_string()
                },
            ]);
            table.add_row(vec!["Model".to_string(), settings.model.clone()]);
            println!("{table}");
        }
        Page::Notifications { notifications } => {
            if notifications.is_empty() {
                println!("No notifications.");
                return;
            }
            let mut table = Table::new();
            table.set_header(vec!["Date", "Severity", "Title", "Details"]);
            for n in notifications {
                table.add_row(vec![
                    n.date.to_string(),
                    format!("{:?}", n.severity),
                    n.title.clone(),
                    n.description.clone(),
                ]);
            }
            println!("{table}");
        }
    }
}

fn print_metrics(metrics: &DashboardMetrics) {
    let mut table = Table::new();
    table.set_header(vec![
        "Total Revenue (Est)",
        "Quotes Generated",
        "Avg Quote Value",
        "Acceptance Rate",
    ]);
    table.add_row(vec![
        currency(metrics.total_revenue),
        metrics.total_quotes.to_string(),
        currency(metrics.average_quote_value.floor()),
        percent(metrics.acceptance_rate),
    ]);
    println!("{table}");
}

fn print_revenue(points: &[RevenuePoint]) {
    println!("Revenue Trend");
    if points.is_empty() {
        println!("No quotes found for this period.\n");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec!["Day", "Revenue", "Quotes"]);
    for p in points {
        table.add_row(vec![p.label.clone(), currency(p.revenue), p.count.to_string()]);
    }
    println!("{table}");
}

fn print_services(counts: &[ServiceCount]) {
    println!("Service Distribution");
    if counts.is_empty() {
        println!("No quotes found for this period.\n");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec!["Service", "Quotes"]);
    for c in counts {
        table.add_row(vec![c.service_type.to_string(), c.count.to_string()]);
    }
    println!("{table}");
}

fn print_volume(points: &[VolumePoint]) {
    if points.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec!["Day", "Quotes"]);
    for p in points {
        table.add_row(vec![p.label.clone(), p.count.to_string()]);
    }
    println!("{table}");
}

fn print_quotes(quotes: &[Quote]) {
    if quotes.is_empty() {
        println!("No quotes found for this period.\n");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec!["Customer", "Address", "Service", "Date", "Amount", "Status"]);
    for q in quotes {
        table.add_row(vec![
            Cell::new(&q.customer_name),
            Cell::new(&q.address),
            Cell::new(q.service_type),
            Cell::new(q.date),
            Cell::new(currency(q.quote_amount)),
            Cell::new(q.status),
        ]);
    }
    println!("{table}");
}

fn print_insights(dashboard: &mut Dashboard, json: bool) -> Result<()> {
    eprintln!("Analyzing quote patterns...");
    let state = dashboard.open_insights().clone();

    if json {
        println!("{}", serde_json::to_string_pretty(&state)?);
        return Ok(());
    }

    match &state {
        InsightState::Ready(report) => {
            println!("Here is your business performance summary:");
            let items = report.observations();
            if items.is_empty() {
                println!("{}", report.display_markup());
            }
            for item in items {
                println!("  - {item}");
            }
            println!();
            println!("AI generated insights may vary. Verify important financial data.");
        }
        other => {
            if let Some(text) = other.display_text() {
                println!("{text}");
            }
        }
    }
    Ok(())
}
