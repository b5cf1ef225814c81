use std::sync::LazyLock;

pub const ICON_MENU: &str = "☰";
pub const ICON_COLLAPSE: &str = "⏴";
pub const ICON_EXPAND: &str = "⏵";
pub const ICON_MOON: &str = "🌙";
pub const ICON_SUN: &str = "☀";
pub const ICON_BELL: &str = "🔔";
pub const ICON_DOT: &str = "●";
pub const ICON_CLOCK: &str = "🕓";
pub const ICON_SEARCH: &str = "🔍";

// Trend arrows
pub const ICON_TREND_UP: &str = "⬆";
pub const ICON_TREND_DOWN: &str = "⬇";
pub const ICON_TREND_FLAT: &str = "➖";

// Sort arrows
pub const ICON_SORT: &str = "↕";
pub const ICON_SORT_ASC: &str = "↑";
pub const ICON_SORT_DESC: &str = "↓";

// KPI cards
pub const ICON_REVENUE: &str = "💰";
pub const ICON_ORDERS: &str = "🛒";
pub const ICON_USERS: &str = "👥";
pub const ICON_CONVERSION: &str = "📈";

pub struct UiText {
    pub app_title: String,
    pub brand: String,

    // --- Sidebar ---
    pub nav_items: &'static [(&'static str, &'static str)],
    pub hover_sidebar_toggle: String,

    // --- Header ---
    pub header_title: String,
    pub hover_theme_switch: String,
    pub hover_notifications: String,
    pub hover_mobile_menu: String,

    // --- KPI cards ---
    pub kpi_revenue: String,
    pub kpi_orders: String,
    pub kpi_users: String,
    pub kpi_conversion: String,
    pub kpi_waiting: String,

    // --- Chart ---
    pub chart_title: String,
    pub chart_loading: String,

    // --- Orders ---
    pub orders_title: String,
    pub orders_search_hint: String,
    pub orders_empty: String,

    // --- Activity ---
    pub activity_title: String,

    // --- Notifications ---
    pub notifications_title: String,
}

pub static UI_TEXT: LazyLock<UiText> = LazyLock::new(|| UiText {
    app_title: "Admin Dashboard".to_string(),
    brand: "AdminPanel".to_string(),

    nav_items: &[
        ("🏠", "Dashboard"),
        ("📦", "Products"),
        ("🛒", "Orders"),
        ("👥", "Customers"),
        ("📊", "Analytics"),
        ("⚙", "Settings"),
    ],

    hover_sidebar_toggle: "Collapse / expand sidebar".to_string(),

    header_title: "Dashboard Overview".to_string(),
    hover_theme_switch: "Switch light / dark theme".to_string(),
    hover_notifications: "Stock alerts".to_string(),
    hover_mobile_menu: "Open menu".to_string(),

    kpi_revenue: ICON_REVENUE.to_string() + " Total Revenue",
    kpi_orders: ICON_ORDERS.to_string() + " Total Orders",
    kpi_users: ICON_USERS.to_string() + " Active Users",
    kpi_conversion: ICON_CONVERSION.to_string() + " Conversion Rate",
    kpi_waiting: "—".to_string(),

    chart_title: "Revenue Analytics".to_string(),
    chart_loading: "Preparing chart...".to_string(),

    orders_title: "Recent Orders".to_string(),
    orders_search_hint: ICON_SEARCH.to_string() + " Search orders...",
    orders_empty: "No matching orders".to_string(),

    activity_title: "Recent Activity".to_string(),

    notifications_title: "Notifications".to_string(),
});
