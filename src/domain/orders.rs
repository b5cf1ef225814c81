use std::{cmp::Ordering, collections::HashSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

use crate::error::{DashboardError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, AsRefStr)]
pub enum OrderStatus {
    Completed,
    Pending,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Order {
    pub id: &'static str,
    pub user: &'static str,
    pub product: &'static str,
    pub date: NaiveDate,
    pub amount: f64,
    pub status: OrderStatus,
}

const fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(d) => d,
        None => panic!("invalid order date"),
    }
}

/// The fixed recent-orders list.
pub const ORDERS: [Order; 6] = [
    Order {
        id: "#1001",
        user: "Mark Wilson",
        product: "Nike Air Jordan",
        date: date(2023, 10, 25),
        amount: 120.00,
        status: OrderStatus::Completed,
    },
    Order {
        id: "#1002",
        user: "Sarah Doe",
        product: "PlayStation 5",
        date: date(2023, 10, 26),
        amount: 499.00,
        status: OrderStatus::Pending,
    },
    Order {
        id: "#1003",
        user: "John Smith",
        product: "iPhone 15 Case",
        date: date(2023, 10, 27),
        amount: 25.00,
        status: OrderStatus::Completed,
    },
    Order {
        id: "#1004",
        user: "Emily Davis",
        product: "Mechanical Keyboard",
        date: date(2023, 10, 28),
        amount: 85.00,
        status: OrderStatus::Cancelled,
    },
    Order {
        id: "#1005",
        user: "Michael Brown",
        product: "Monitor Stand",
        date: date(2023, 10, 29),
        amount: 40.00,
        status: OrderStatus::Completed,
    },
    Order {
        id: "#1006",
        user: "Jessica Lee",
        product: "USB-C Cable",
        date: date(2023, 10, 30),
        amount: 12.00,
        status: OrderStatus::Pending,
    },
];

/// Column a table header sorts by. Parses from the header's sort tag (`"amount"`, ...).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum SortKey {
    Id,
    User,
    Product,
    Date,
    Amount,
    Status,
}

impl SortKey {
    pub fn parse(tag: &str) -> Result<Self> {
        tag.parse()
            .map_err(|_| DashboardError::UnknownSortKey(tag.to_owned()))
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Id => "Order ID",
            Self::User => "Customer",
            Self::Product => "Product",
            Self::Date => "Date",
            Self::Amount => "Amount",
            Self::Status => "Status",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggle(&self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Header indicator state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortIndicator {
    Neutral,
    Up,
    Down,
}

/// Case-insensitive ordering first, lowercase before uppercase on ties.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}

fn compare_by(key: SortKey, a: &Order, b: &Order) -> Ordering {
    match key {
        SortKey::Id => locale_cmp(a.id, b.id),
        SortKey::User => locale_cmp(a.user, b.user),
        SortKey::Product => locale_cmp(a.product, b.product),
        SortKey::Date => a.date.cmp(&b.date),
        SortKey::Amount => a.amount.total_cmp(&b.amount),
        SortKey::Status => locale_cmp(a.status.as_ref(), b.status.as_ref()),
    }
}

/// Orders whose user, product or id contains `term`, ignoring case. Source order is kept.
pub fn filter_orders(orders: &[Order], term: &str) -> Vec<Order> {
    let term = term.to_lowercase();
    orders
        .iter()
        .filter(|o| {
            o.user.to_lowercase().contains(&term)
                || o.product.to_lowercase().contains(&term)
                || o.id.to_lowercase().contains(&term)
        })
        .copied()
        .collect()
}

/// Sorted copy of `orders`; the input is left untouched.
pub fn sort_orders(orders: &[Order], key: SortKey, direction: SortDirection) -> Vec<Order> {
    let mut sorted = orders.to_vec();
    match direction {
        SortDirection::Ascending => sorted.sort_by(|a, b| compare_by(key, a, b)),
        SortDirection::Descending => sorted.sort_by(|a, b| compare_by(key, b, a)),
    }
    sorted
}

/// Per-header sort memory.
///
/// Every header keeps its own ascending flag across clicks on other headers;
/// only the indicators of the other headers are reset.
#[derive(Debug, Clone, Default)]
pub struct SortState {
    ascending: HashSet<SortKey>,
    active: Option<(SortKey, SortDirection)>,
}

impl SortState {
    /// Registers a header click and returns the direction to sort in.
    pub fn click(&mut self, key: SortKey) -> SortDirection {
        let was_ascending = !self.ascending.insert(key);
        let direction = if was_ascending {
            self.ascending.remove(&key);
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        self.active = Some((key, direction));
        direction
    }

    pub fn indicator(&self, key: SortKey) -> SortIndicator {
        match self.active {
            Some((k, SortDirection::Ascending)) if k == key => SortIndicator::Up,
            Some((k, SortDirection::Descending)) if k == key => SortIndicator::Down,
            _ => SortIndicator::Neutral,
        }
    }
}

/// Displayed rows of the orders table plus the inputs that produced them.
///
/// Search and sort each start from the fixed list, so the most recent action
/// alone decides the view.
#[derive(Debug, Clone)]
pub struct OrdersTable {
    source: &'static [Order],
    rows: Vec<Order>,
    pub search: String,
    sort: SortState,
}

impl Default for OrdersTable {
    fn default() -> Self {
        Self::new(&ORDERS)
    }
}

impl OrdersTable {
    pub fn new(source: &'static [Order]) -> Self {
        Self {
            source,
            rows: source.to_vec(),
            search: String::new(),
            sort: SortState::default(),
        }
    }

    pub fn rows(&self) -> &[Order] {
        &self.rows
    }

    pub fn sort_state(&self) -> &SortState {
        &self.sort
    }

    /// Re-filters the fixed list with the current search text.
    pub fn apply_search(&mut self) {
        self.rows = filter_orders(self.source, &self.search);
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
        self.apply_search();
    }

    pub fn click_header(&mut self, key: SortKey) -> SortDirection {
        let direction = self.sort.click(key);
        self.rows = sort_orders(self.source, key, direction);
        direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amounts(rows: &[Order]) -> Vec<f64> {
        rows.iter().map(|o| o.amount).collect()
    }

    #[test]
    fn test_search_by_user() {
        let found = filter_orders(&ORDERS, "sarah");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].user, "Sarah Doe");
    }

    #[test]
    fn test_search_by_product_and_id() {
        assert_eq!(filter_orders(&ORDERS, "KEYBOARD")[0].id, "#1004");
        assert_eq!(filter_orders(&ORDERS, "#1006")[0].user, "Jessica Lee");
        assert_eq!(filter_orders(&ORDERS, "").len(), 6);
        assert!(filter_orders(&ORDERS, "zzz").is_empty());
    }

    #[test]
    fn test_search_does_not_match_status() {
        assert!(filter_orders(&ORDERS, "cancelled").is_empty());
    }

    #[test]
    fn test_sort_amount() {
        let asc = sort_orders(&ORDERS, SortKey::Amount, SortDirection::Ascending);
        assert_eq!(amounts(&asc), vec![12.0, 25.0, 40.0, 85.0, 120.0, 499.0]);
        let desc = sort_orders(&ORDERS, SortKey::Amount, SortDirection::Descending);
        let mut reversed = amounts(&asc);
        reversed.reverse();
        assert_eq!(amounts(&desc), reversed);
    }

    #[test]
    fn test_sort_text_columns() {
        let by_user = sort_orders(&ORDERS, SortKey::User, SortDirection::Ascending);
        let users: Vec<_> = by_user.iter().map(|o| o.user).collect();
        assert_eq!(
            users,
            vec![
                "Emily Davis",
                "Jessica Lee",
                "John Smith",
                "Mark Wilson",
                "Michael Brown",
                "Sarah Doe"
            ]
        );
        let by_product = sort_orders(&ORDERS, SortKey::Product, SortDirection::Ascending);
        assert_eq!(by_product[0].product, "iPhone 15 Case");
    }

    #[test]
    fn test_sort_date_descending() {
        let rows = sort_orders(&ORDERS, SortKey::Date, SortDirection::Descending);
        assert_eq!(rows[0].id, "#1006");
        assert_eq!(rows[5].id, "#1001");
    }

    #[test]
    fn test_sort_leaves_source_untouched() {
        let _ = sort_orders(&ORDERS, SortKey::Amount, SortDirection::Descending);
        assert_eq!(ORDERS[0].id, "#1001");
    }

    #[test]
    fn test_locale_cmp() {
        assert_eq!(locale_cmp("apple", "Banana"), Ordering::Less);
        assert_eq!(locale_cmp("a", "A"), Ordering::Less);
        assert_eq!(locale_cmp("same", "same"), Ordering::Equal);
    }

    #[test]
    fn test_sort_key_parse() {
        assert_eq!(SortKey::parse("amount"), Ok(SortKey::Amount));
        assert_eq!(SortKey::parse("user"), Ok(SortKey::User));
        assert!(matches!(
            SortKey::parse("price"),
            Err(DashboardError::UnknownSortKey(_))
        ));
    }

    #[test]
    fn test_header_clicks_toggle() {
        let mut sort = SortState::default();
        assert_eq!(sort.click(SortKey::Amount), SortDirection::Ascending);
        assert_eq!(sort.indicator(SortKey::Amount), SortIndicator::Up);
        assert_eq!(sort.click(SortKey::Amount), SortDirection::Descending);
        assert_eq!(sort.indicator(SortKey::Amount), SortIndicator::Down);
        assert_eq!(sort.click(SortKey::Amount), SortDirection::Ascending);
    }

    #[test]
    fn test_other_headers_reset_indicator_but_keep_flag() {
        let mut sort = SortState::default();
        sort.click(SortKey::Amount);
        assert_eq!(sort.click(SortKey::User), SortDirection::Ascending);
        assert_eq!(sort.indicator(SortKey::Amount), SortIndicator::Neutral);
        assert_eq!(sort.indicator(SortKey::User), SortIndicator::Up);
        // Amount still remembers its ascending flag.
        assert_eq!(sort.click(SortKey::Amount), SortDirection::Descending);
    }

    #[test]
    fn test_search_and_sort_do_not_compose() {
        let mut table = OrdersTable::default();
        table.set_search("sarah");
        assert_eq!(table.rows().len(), 1);

        table.click_header(SortKey::Amount);
        assert_eq!(table.rows().len(), 6);
        assert_eq!(table.search, "sarah");

        table.apply_search();
        assert_eq!(table.rows().len(), 1);
    }
}
