//! Logging utilities
//!
//! Thin helpers over the `log` facade. Nothing is printed unless the host
//! installs a logger (the browser client uses `console_log`).

#![allow(unused)]

const TARGET: &str = "clipshift";

/// Log an info message
#[inline]
pub fn info(msg: &str) {
    ::log::info!(target: TARGET, "{}", msg);
}

/// Log a warning message
#[inline]
pub fn warn(msg: &str) {
    ::log::warn!(target: TARGET, "{}", msg);
}

/// Log an error message
#[inline]
pub fn error(msg: &str) {
    ::log::error!(target: TARGET, "{}", msg);
}

/// Log a debug message with a label
#[inline]
pub fn debug(label: &str, msg: &str) {
    ::log::debug!(target: TARGET, "[{}] {}", label, msg);
}

/// Log combat state summary
#[inline]
pub fn state_summary(
    phase: &str,
    mana: i32,
    max_mana: i32,
    hand_count: usize,
    enemy_hp: i32,
    track: &str,
) {
    ::log::debug!(
        target: TARGET,
        "[state] phase={} mana={}/{} hand={} enemy_hp={} track={}",
        phase,
        mana,
        max_mana,
        hand_count,
        enemy_hp,
        track
    );
}

/// Log an action being performed
#[inline]
pub fn action(name: &str, details: &str) {
    ::log::info!(target: TARGET, "[action] {}: {}", name, details);
}

/// Log action result
#[inline]
pub fn result(success: bool, msg: &str) {
    if success {
        ::log::info!(target: TARGET, "[ok] {}", msg);
    } else {
        ::log::warn!(target: TARGET, "[rejected] {}", msg);
    }
}
