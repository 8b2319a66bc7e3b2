use rust_decimal::Decimal;
use serde_json::Value;

/// Print just the key answer value from the output.
///
/// For an estimate that is the monthly installment, rounded the way the
/// form displays it. For a validation result it is the status tag, with
/// the violated fields when invalid.
pub fn print_minimal(value: &Value) {
    // Estimate envelope: result.metrics.monthly_payment
    if let Some(monthly) = value
        .get("result")
        .and_then(|r| r.get("metrics"))
        .and_then(|m| m.get("monthly_payment"))
    {
        println!("{}", format_minimal(monthly));
        return;
    }

    // Validation result: status tag plus offending fields
    if let Some(Value::String(status)) = value.get("status") {
        match value.get("detail") {
            Some(Value::Array(violations)) => {
                let fields: Vec<&str> = violations
                    .iter()
                    .filter_map(|v| v.get("field").and_then(Value::as_str))
                    .collect();
                println!("{}: {}", status, fields.join(", "));
            }
            _ => println!("{}", status),
        }
        return;
    }

    // Fall back to first field
    if let Value::Object(map) = value {
        if let Some((key, val)) = map.iter().next() {
            println!("{}: {}", key, format_minimal(val));
            return;
        }
    }

    println!("{}", format_minimal(value));
}

fn format_minimal(value: &Value) -> String {
    match value {
        Value::String(s) => match s.parse::<Decimal>() {
            Ok(d) => d.round_dp(2).to_string(),
            Err(_) => s.clone(),
        },
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
