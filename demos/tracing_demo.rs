//! Demonstrates tracing integration with validators
//!
//! Run with: cargo run --example tracing_demo --features tracing

use runtype::prelude::*;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    tracing::info!("Starting tracing demo");

    let user = object_with_properties([
        ("name", string()),
        ("email", string_matching(&Value::regexp("^[^@]+@[^@]+$", "")).unwrap_or_else(|_| never())),
        ("age", maybe(integer())),
    ]);

    let payloads = [
        serde_json::json!({ "name": "Ada", "email": "ada@example.com", "age": 36 }),
        serde_json::json!({ "name": "Grace", "email": "not an email" }),
        serde_json::json!({ "name": 7 }),
    ];

    for payload in payloads {
        let value = Value::from(payload);
        match assert_type(&value, &user) {
            Ok(()) => tracing::info!("accepted {}", describe(&value)),
            Err(e) => tracing::error!("rejected: {}", e),
        }
    }

    // Usage errors are logged as warnings before they are returned
    if let Err(e) = assert_type_value(&Value::from(1), &Value::from("number")) {
        tracing::error!("usage error: {}", e);
    }

    // Cyclic values fall back to a placeholder rendering
    let cyclic = Object::plain();
    cyclic.set("me", cyclic.clone());
    tracing::info!("cyclic value renders as {}", describe(&runtype::Value::Object(cyclic)));
}
