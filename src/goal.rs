/// Whether a star count sits in the approach window worth telling anyone
/// about: at or above 99.75% of the goal, and not past it.
///
/// Exactly at the goal is worthy; one star past it is not. Overshoot stays
/// silent on purpose.
pub fn is_notification_worthy(current: u64, goal: u64) -> bool {
    // Integer arithmetic keeps the 99.75% boundary exact for any goal.
    let above_threshold = (current as u128) * 10_000 >= (goal as u128) * 9_975;
    above_threshold && current <= goal
}

/// Human-readable progress line for the current count.
///
/// Total over any pair of inputs: overshoot yields a negative remaining
/// count, which still formats (as a plural) rather than panicking.
pub fn format_message(current: u64, goal: u64) -> String {
    if current == goal {
        return format!("YOU REACHED {} STARS", goal);
    }

    let remaining = goal as i64 - current as i64;
    let noun = if remaining == 1 { "star" } else { "stars" };
    format!("{} more {} to go!", remaining, noun)
}

/// The per-tick decision: notify only when the count is in the worthy window
/// and has actually changed since the previous tick.
pub fn should_notify(prev: u64, current: u64, goal: u64) -> bool {
    is_notification_worthy(current, goal) && prev != current
}
