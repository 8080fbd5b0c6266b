//! Display formatting for read endpoints.
//!
//! Simple value mapping only; the leaderboard and profile endpoints render
//! money the way the legacy web frontend expects (`$1,234,567.00`) and map
//! game-server ports to mode names.

/// Format an integer money amount as US-style currency.
pub fn format_money(amount: i64) -> String {
    let negative = amount < 0;
    let digits = amount.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 5);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if negative {
        format!("-${}.00", grouped)
    } else {
        format!("${}.00", grouped)
    }
}

/// Human-readable mode name for a game-server listen port.
pub fn mode_name(server_port: i32) -> &'static str {
    match server_port {
        8370 => "Avatar On",
        8371 => "Avatar Off",
        8372 => "Jewel War",
        _ => "Unknown",
    }
}
