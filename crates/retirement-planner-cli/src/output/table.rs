use serde_json::{Map, Value};
use tabled::{builder::Builder, Table};

use super::{format_value, result_of};

/// Format output as tables using the tabled crate.
///
/// Scalar result fields go in a Field/Value table; the projection,
/// recommendations and sensitivity matrix get tables of their own.
pub fn print_table(value: &Value) {
    match result_of(value) {
        Value::Object(result) => {
            print_scalar_fields(result);
            if let Some(Value::Object(income)) = result.get("retirement_income") {
                println!("\nRetirement income:");
                print_scalar_fields(income);
            }
            if let Some(Value::Object(changes)) = result.get("recommended_changes") {
                println!("\nRecommended changes:");
                print_scalar_fields(changes);
            }
            if let Some(Value::Array(rows)) = result.get("projection") {
                println!("\nProjection:");
                print_array_table(rows);
            }
            if result.contains_key("matrix") {
                println!();
                print_matrix(result);
            }
        }
        Value::Array(rows) => print_array_table(rows),
        other => println!("{}", format_value(other)),
    }

    if let Value::Object(envelope) = value {
        print_envelope_notes(envelope);
    }
}

fn print_scalar_fields(map: &Map<String, Value>) {
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    for (key, val) in map {
        if val.is_object() || val.is_array() {
            continue;
        }
        let shown = if val.is_null() {
            "never".to_string()
        } else {
            format_value(val)
        };
        builder.push_record([key.as_str(), shown.as_str()]);
    }
    println!("{}", Table::from(builder));
}

fn print_array_table(arr: &[Value]) {
    if arr.is_empty() {
        println!("(empty)");
        return;
    }

    if let Some(Value::Object(first)) = arr.first() {
        let headers: Vec<String> = first.keys().cloned().collect();
        let mut builder = Builder::default();
        builder.push_record(headers.iter().map(String::as_str));

        for item in arr {
            if let Value::Object(map) = item {
                let row: Vec<String> = headers
                    .iter()
                    .map(|h| map.get(h.as_str()).map(format_value).unwrap_or_default())
                    .collect();
                builder.push_record(row);
            }
        }

        println!("{}", Table::from(builder));
    } else {
        for item in arr {
            println!("{}", format_value(item));
        }
    }
}

/// Sensitivity grid: variable_1 down the side, variable_2 across the top.
fn print_matrix(result: &Map<String, Value>) {
    let empty = Vec::new();
    let v1_values = result
        .get("variable_1_values")
        .and_then(Value::as_array)
        .unwrap_or(&empty);
    let v2_values = result
        .get("variable_2_values")
        .and_then(Value::as_array)
        .unwrap_or(&empty);
    let matrix = result.get("matrix").and_then(Value::as_array).unwrap_or(&empty);
    let v1_name = result
        .get("variable_1_name")
        .map(format_value)
        .unwrap_or_default();
    let metric = result
        .get("output_metric")
        .map(format_value)
        .unwrap_or_default();

    let mut header = vec![v1_name];
    if v2_values.is_empty() {
        header.push(metric);
    } else {
        header.extend(v2_values.iter().map(format_value));
    }

    let mut builder = Builder::default();
    builder.push_record(header);
    for (v1, row) in v1_values.iter().zip(matrix) {
        let mut record = vec![format_value(v1)];
        if let Value::Array(cells) = row {
            record.extend(cells.iter().map(format_value));
        }
        builder.push_record(record);
    }
    println!("{}", Table::from(builder));
}

fn print_envelope_notes(envelope: &Map<String, Value>) {
    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings {
                if let Value::String(s) = w {
                    println!("  - {}", s);
                }
            }
        }
    }

    if let Some(Value::String(meth)) = envelope.get("methodology") {
        println!("\nMethodology: {}", meth);
    }
}
