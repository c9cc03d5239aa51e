/// Format seconds as `mm:ss`.
///
/// Minutes are unbounded (no hour rollover) and fractional seconds are
/// floored. Zero, negative and non-finite input renders `00:00`.
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds <= 0.0 {
        return "00:00".to_string();
    }
    let total = seconds.floor() as u64;
    format!("{:02}:{:02}", total / 60, total % 60)
}
