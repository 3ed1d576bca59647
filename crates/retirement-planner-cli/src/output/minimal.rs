use serde_json::Value;

use super::{format_value, result_of};

/// Print just the headline figure of the output.
///
/// Plans report the surplus (negative means shortfall); sensitivity runs
/// report the base case value.
pub fn print_minimal(value: &Value) {
    let result_obj = result_of(value);

    let priority_keys = [
        "annual_surplus_or_shortfall",
        "total_retirement_savings",
        "base_case_value",
    ];

    if let Value::Object(map) = result_obj {
        for key in &priority_keys {
            if let Some(val) = map.get(*key) {
                if !val.is_null() {
                    println!("{}", format_value(val));
                    return;
                }
            }
        }

        if let Some((key, val)) = map.iter().next() {
            println!("{}: {}", key, format_value(val));
            return;
        }
    }

    if let Value::Array(rows) = result_obj {
        // Projection: final balance
        if let Some(balance) = rows.last().and_then(|row| row.get("savings_balance")) {
            println!("{}", format_value(balance));
            return;
        }
    }

    println!("{}", format_value(result_obj));
}
