use admin_dashboard::{
    ORDERS, Order, SortDirection, SortKey, filter_orders, sort_orders,
    utils::format_amount,
};
use anyhow::{Context, Result};
use clap::Parser;
use tabled::{Table, Tabled, settings::Style};

/// Print the fixed orders list, optionally searched and sorted.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct ReportArgs {
    /// Case-insensitive match on user, product or order id
    #[arg(long)]
    search: Option<String>,

    /// Column to sort by (id, user, product, date, amount, status)
    #[arg(long)]
    sort: Option<String>,

    /// Sort descending instead of ascending
    #[arg(long, default_value_t = false)]
    desc: bool,

    /// Emit JSON instead of a table
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Tabled)]
struct OrderRow {
    #[tabled(rename = "Order ID")]
    id: &'static str,
    #[tabled(rename = "User")]
    user: &'static str,
    #[tabled(rename = "Product")]
    product: &'static str,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Status")]
    status: String,
}

impl From<&Order> for OrderRow {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id,
            user: order.user,
            product: order.product,
            date: order.date.format("%Y-%m-%d").to_string(),
            amount: format_amount(order.amount),
            status: order.status.to_string(),
        }
    }
}

/// Filters the fixed list by `--search`, then sorts by `--sort` when given.
fn build_view(args: &ReportArgs) -> Result<Vec<Order>> {
    let mut view: Vec<Order> = match args.search.as_deref() {
        Some(term) => filter_orders(&ORDERS, term),
        None => ORDERS.to_vec(),
    };
    log::info!("{} of {} orders match", view.len(), ORDERS.len());

    if let Some(tag) = args.sort.as_deref() {
        let key = SortKey::parse(tag).context("Invalid --sort column")?;
        let direction = if args.desc {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        view = sort_orders(&view, key, direction);
    }
    Ok(view)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = ReportArgs::parse();

    let view = build_view(&args)?;

    if args.json {
        let out = serde_json::to_string_pretty(&view).context("Failed to serialize orders")?;
        println!("{}", out);
        return Ok(());
    }

    if view.is_empty() {
        println!("No orders found");
        return Ok(());
    }

    let rows: Vec<OrderRow> = view.iter().map(OrderRow::from).collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);

    Ok(())
}
