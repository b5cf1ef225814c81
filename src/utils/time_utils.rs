use std::time::Duration;

/// Monotonic instant that also works on wasm32 (where `std::time::Instant` panics).
pub type AppInstant = web_time::Instant;

/// Time left until `deadline`, zero once it has passed.
pub fn remaining_until(deadline: AppInstant, now: AppInstant) -> Duration {
    deadline.saturating_duration_since(now)
}
