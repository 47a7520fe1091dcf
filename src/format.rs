/// Renders a result with six decimals, then drops trailing zeros and a
/// dangling decimal point: `10.0` -> `"10"`, `1.0 / 3.0` -> `"0.333333"`.
pub fn format_number(value: f64) -> String {
    let mut rendered = format!("{:.6}", value);
    if rendered.contains('.') {
        let trimmed = rendered.trim_end_matches('0').trim_end_matches('.').len();
        rendered.truncate(trimmed);
    }
    rendered
}
