/// Idle-callback timeout for navigation on most browsers.
pub const IDLE_TIMEOUT_MS: u32 = 300;
/// Safari schedules idle work late; give layout more room.
pub const SAFARI_IDLE_TIMEOUT_MS: u32 = 600;

/// Safari detection from a user-agent string. Chromium and Android builds also
/// advertise "Safari" and are excluded.
pub fn is_safari(user_agent: &str) -> bool {
    let ua = user_agent.to_ascii_lowercase();
    match ua.find("safari") {
        Some(at) => {
            let before = &ua[..at];
            !before.contains("chrome") && !before.contains("android")
        }
        None => false,
    }
}

pub fn idle_timeout_ms(safari: bool) -> u32 {
    if safari {
        SAFARI_IDLE_TIMEOUT_MS
    } else {
        IDLE_TIMEOUT_MS
    }
}
