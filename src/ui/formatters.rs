use chrono::{DateTime, Local};

/// Format a flow rate (L/min)
pub fn format_flow(lpm: f64) -> String {
    format!("{:.1} L/min", lpm)
}

/// Format a pressure value (Bar)
pub fn format_pressure(bar: f64) -> String {
    format!("{:.1} Bar", bar)
}

/// Format a percentage without decimals
pub fn format_percent(percent: f64) -> String {
    format!("{:.0}%", percent)
}

/// Format a pH reading
pub fn format_ph(ph: f64) -> String {
    format!("{:.1}", ph)
}

/// Format a turbidity reading (NTU)
pub fn format_turbidity(ntu: f64) -> String {
    format!("{:.1} NTU", ntu)
}

/// Format a salinity reading (g/L)
pub fn format_salinity(grams_per_liter: f64) -> String {
    format!("{:.2} g/L", grams_per_liter)
}

/// Format a wall-clock timestamp (HH:MM:SS)
pub fn format_clock(time: DateTime<Local>) -> String {
    time.format("%H:%M:%S").to_string()
}
