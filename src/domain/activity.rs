/// One entry of the recent-activity feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityItem {
    pub message: &'static str,
    pub minutes_ago: i64,
}

pub const ACTIVITY: [ActivityItem; 5] = [
    ActivityItem {
        message: "Order #1001 was placed",
        minutes_ago: 5,
    },
    ActivityItem {
        message: "User Sarah Doe registered",
        minutes_ago: 15,
    },
    ActivityItem {
        message: "Server maintenance completed",
        minutes_ago: 60,
    },
    ActivityItem {
        message: "New product added: iPhone 15",
        minutes_ago: 120,
    },
    ActivityItem {
        message: "Weekly report generated",
        minutes_ago: 300,
    },
];

impl ActivityItem {
    pub fn time_label(&self) -> String {
        format_relative(chrono::TimeDelta::minutes(self.minutes_ago))
    }
}

/// Short relative-time label: `5 min ago`, `1 hr ago`, `2 hrs ago`, `3 days ago`.
pub fn format_relative(elapsed: chrono::TimeDelta) -> String {
    let minutes = elapsed.num_minutes();
    if minutes < 60 {
        return format!("{} min ago", minutes);
    }
    let hours = elapsed.num_hours();
    if hours < 24 {
        let unit = if hours == 1 { "hr" } else { "hrs" };
        return format!("{} {} ago", hours, unit);
    }
    let days = elapsed.num_days();
    let unit = if days == 1 { "day" } else { "days" };
    format!("{} {} ago", days, unit)
}
