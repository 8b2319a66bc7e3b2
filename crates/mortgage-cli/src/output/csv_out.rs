use serde_json::Value;
use std::io;

/// Write output as field/value CSV to stdout.
///
/// Values keep full precision; CSV is for feeding other tools, not for
/// reading, so no display rounding happens here.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    match value {
        Value::Object(map) => {
            let _ = wtr.write_record(["field", "value"]);
            if let Some(Value::Object(result)) = map.get("result") {
                write_object_csv(&mut wtr, result, "");
            } else {
                write_object_csv(&mut wtr, map, "");
            }
        }
        _ => {
            let _ = wtr.write_record([&format_csv_value(value)]);
        }
    }

    let _ = wtr.flush();
}

fn write_object_csv(
    wtr: &mut csv::Writer<io::StdoutLock<'_>>,
    map: &serde_json::Map<String, Value>,
    prefix: &str,
) {
    for (key, val) in map {
        let field = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        if let Value::Object(section) = val {
            write_object_csv(wtr, section, &field);
        } else {
            let _ = wtr.write_record([field.as_str(), &format_csv_value(val)]);
        }
    }
}

fn format_csv_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
