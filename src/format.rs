//! Display formatting shared by the prompt builder and the terminal front end.

use chrono::NaiveDate;

/// Short day label such as `"Jan 5"`.
pub fn day_label(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

/// Whole-dollar amount with thousands separators, e.g. `$12,345`.
///
/// Fractional cents are truncated toward zero.
pub fn currency(amount: f64) -> String {
    let whole = amount.trunc() as i64;
    let sign = if whole < 0 { "-" } else { "" };
    format!("{}${}", sign, group_thousands(whole.unsigned_abs()))
}

/// Whole-number percentage, truncated: `66.67` becomes `"66%"`.
pub fn percent(rate: f64) -> String {
    format!("{}%", rate.trunc() as i64)
}

fn group_thousands(mut value: u64) -> String {
    let mut groups: Vec<String> = Vec::new();
    loop {
        let rest = value / 1000;
        if rest == 0 {
            groups.push(format!("{}", value % 1000));
            break;
        }
        groups.push(format!("{:03}", value % 1000));
        value = rest;
    }
    groups.reverse();
    groups.join(",")
}
