use serde_json::{Map, Value};
use std::io;

use super::{format_value, result_of};

type StdoutWriter<'a> = csv::Writer<io::StdoutLock<'a>>;

/// Write output as CSV to stdout.
///
/// A plan prints its projection rows, a sensitivity run prints one row per
/// grid point, and anything else falls back to field/value pairs.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    match result_of(value) {
        Value::Object(result) => {
            if let Some(Value::Array(rows)) = result.get("projection") {
                write_array_csv(&mut wtr, rows);
            } else if result.contains_key("matrix") {
                write_matrix_csv(&mut wtr, result);
            } else {
                let _ = wtr.write_record(["field", "value"]);
                for (key, val) in result {
                    let _ = wtr.write_record([key.as_str(), &format_value(val)]);
                }
            }
        }
        Value::Array(arr) => write_array_csv(&mut wtr, arr),
        other => {
            let _ = wtr.write_record([&format_value(other)]);
        }
    }

    let _ = wtr.flush();
}

fn write_array_csv(wtr: &mut StdoutWriter<'_>, arr: &[Value]) {
    let Some(Value::Object(first)) = arr.first() else {
        for item in arr {
            let _ = wtr.write_record([&format_value(item)]);
        }
        return;
    };

    let headers: Vec<&str> = first.keys().map(|k| k.as_str()).collect();
    let _ = wtr.write_record(&headers);

    for item in arr {
        if let Value::Object(map) = item {
            let row: Vec<String> = headers
                .iter()
                .map(|h| map.get(*h).map(format_value).unwrap_or_default())
                .collect();
            let _ = wtr.write_record(&row);
        }
    }
}

/// Long format: variable_1, [variable_2,] metric.
fn write_matrix_csv(wtr: &mut StdoutWriter<'_>, result: &Map<String, Value>) {
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

    let mut header = vec![result
        .get("variable_1_name")
        .map(format_value)
        .unwrap_or_default()];
    if let Some(name) = result.get("variable_2_name") {
        header.push(format_value(name));
    }
    header.push(
        result
            .get("output_metric")
            .map(format_value)
            .unwrap_or_default(),
    );
    let _ = wtr.write_record(&header);

    for (v1, row) in v1_values.iter().zip(matrix) {
        let Value::Array(cells) = row else { continue };
        if v2_values.is_empty() {
            let cell = cells.first().map(format_value).unwrap_or_default();
            let _ = wtr.write_record([format_value(v1), cell]);
        } else {
            for (v2, cell) in v2_values.iter().zip(cells) {
                let _ = wtr.write_record([format_value(v1), format_value(v2), format_value(cell)]);
            }
        }
    }
}
