//! Building validators from primitives and combinators
//!
//! Run with: cargo run --example predicates

use runtype::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let point = tuple(&[number(), number()]);
    let polygon = object_with_only_these_properties([
        ("kind", exact_string("polygon")),
        ("points", array_of(point)),
        ("label", optional(string())),
    ]);
    println!("validator: {}", polygon);

    let square = Value::from(serde_json::json!({
        "kind": "polygon",
        "points": [[0, 0], [0, 1], [1, 1], [1, 0]],
    }));
    assert_type(&square, &polygon)?;
    println!("accepted {}", describe(&square));

    let broken = Value::from(serde_json::json!({
        "kind": "polygon",
        "points": [[0, 0], [0]],
        "color": "red",
    }));
    if let Err(e) = assert_type(&broken, &polygon) {
        println!("{}", e);
    }

    let tags = set_of(string_matching(&Value::regexp("^[a-z]+$", "i"))?);
    let lookup = map_of(string(), union(&[number(), null()]));
    println!("{} / {}", tags, lookup);

    let stats = Value::map([
        (Value::from("hits"), Value::from(12)),
        (Value::from("misses"), Value::Null),
    ]);
    println!("lookup accepts stats: {}", is_of_type(&stats, &lookup));

    let even = number().and(&Validator::new("even", |v: &Value| {
        matches!(v, Value::Number(n) if n % 2.0 == 0.0)
    }));
    println!("{} accepts 4: {}", even, even.check(&Value::from(4)));

    Ok(())
}
