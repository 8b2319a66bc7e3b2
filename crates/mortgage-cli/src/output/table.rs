use mortgage_core::types::Currency;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::Value;
use tabled::{builder::Builder, Table};

/// Format output as a table using the tabled crate.
///
/// Monetary figures round to 2 dp and carry the currency prefix; shares
/// render as percentages. Rounding happens here only, never upstream.
pub fn print_table(value: &Value) {
    match value {
        Value::Object(map) => {
            if let Some(result) = map.get("result") {
                print_result_table(result, map);
            } else {
                print_flat_object(value);
            }
        }
        _ => {
            println!("{}", value);
        }
    }
}

fn print_result_table(result: &Value, envelope: &serde_json::Map<String, Value>) {
    if let Value::Object(res_map) = result {
        let symbol = currency_symbol(res_map);
        let symbol = symbol.as_str();
        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);

        for (key, val) in res_map {
            // Nested sections (metrics, breakdown) flatten to dotted rows
            if let Value::Object(section) = val {
                for (inner_key, inner_val) in section {
                    builder.push_record([
                        format!("{key}.{inner_key}"),
                        format_value(inner_key, inner_val, symbol),
                    ]);
                }
            } else {
                builder.push_record([key.as_str(), &format_value(key, val, symbol)]);
            }
        }

        let table = Table::from(builder);
        println!("{}", table);
    } else {
        print_flat_object(&Value::Object(envelope.clone()));
    }

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

fn print_flat_object(value: &Value) {
    if let Value::Object(map) = value {
        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        for (key, val) in map {
            builder.push_record([key.as_str(), &format_value(key, val, "")]);
        }
        let table = Table::from(builder);
        println!("{}", table);
    }
}

/// Currency symbol for the estimate being rendered, if the result carries one.
fn currency_symbol(res_map: &serde_json::Map<String, Value>) -> String {
    res_map
        .get("currency")
        .and_then(|v| serde_json::from_value::<Currency>(v.clone()).ok())
        .map(|c| c.symbol().to_string())
        .unwrap_or_default()
}

fn format_value(key: &str, value: &Value, symbol: &str) -> String {
    match value {
        Value::String(s) => match s.parse::<Decimal>() {
            Ok(d) if key.ends_with("_share") => {
                format!("{}%", (d * dec!(100)).round_dp(1))
            }
            Ok(d) if is_money_field(key) && !symbol.is_empty() => {
                format!("{} {}", symbol, d.round_dp(2))
            }
            Ok(d) => d.round_dp(2).to_string(),
            Err(_) => s.clone(),
        },
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}

fn is_money_field(key: &str) -> bool {
    key.ends_with("_payment") || key.ends_with("_interest")
}
