//! Basic usage example for tfconfig-core
//!
//! Run with: cargo run --example basic_usage

use tfconfig_core::condition::{between, regex_literal, return_fields};
use tfconfig_core::{SourcePos, Validation, Variable};

fn main() {
    println!("=== tfconfig Core Basic Usage Example ===\n");

    // Example 1: Extracting text between delimiters
    println!("1. Extracting Text Between Delimiters:");
    let inner = between("lookup(var.tags, \"env\")", "(", ")");
    println!("   Between parentheses: {:?}\n", inner);

    // Example 2: Field patterns of an object validation
    println!("2. Object Field Patterns:");
    let condition = r#"can(regex("^\\{\"name\":\"[a-z]+\"(,)?\"age\":\"[0-9]+\"\\}$", jsonencode(var.person)))"#;
    let literal = regex_literal(condition);
    println!("   Regex literal: {}", literal);
    for (field, pattern) in return_fields(literal, false) {
        println!("   {} => {}", field, pattern);
    }
    println!();

    // Example 3: Nested objects qualify field names
    println!("3. Nested Field Patterns:");
    let nested = r#"\"owner\":\{\"team\":\"[a-z-]+\"(,)?\"email\":\".+@.+\"(,)?\"id\":[0-9]+"#;
    for (field, pattern) in return_fields(nested, false) {
        println!("   {} => {}", field, pattern);
    }
    println!();

    // Example 4: Map variables collapse to a single key
    println!("4. Map Field Patterns:");
    let labels = r#"\"app\":\"[a-z]+\"(,)?\"tier\":\"(web|db)\""#;
    println!("   {:?}\n", return_fields(labels, true));

    // Example 5: A complete variable record
    println!("5. Variable Record:");
    let mut var = Variable::new("person", SourcePos::new("variables.tf", 1));
    var.var_type = "object({ name = string, age = number })".to_string();
    var.validation = Some(Validation::from_condition(
        condition,
        "person must have a lowercase name and numeric age",
        var.is_map(),
    ));

    match serde_json::to_string_pretty(&var) {
        Ok(json) => println!("   JSON:\n{}\n", json),
        Err(e) => println!("   Failed to serialize: {}\n", e),
    }

    println!("=== Example Complete ===");
}
