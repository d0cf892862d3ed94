// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use iced::{time, Subscription};
use std::time::Duration;

/// Interval between ticks while auto-hide timers are pending.
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Creates a periodic tick subscription for toast auto-hide.
///
/// Idle when no timer is pending so the window does not wake needlessly.
pub fn create_tick_subscription(has_pending_timers: bool) -> Subscription<Message> {
    if has_pending_timers {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
