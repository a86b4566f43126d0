//! Human and JSON rendering for CLI output.

use carquote_core::{ClassificationResult, Coverage, format_confidence, format_premium};
use carquote_vision::Quote;
use serde_json::json;

const NO_ESTIMATE: &str = "no estimate available";

fn print_json(value: &serde_json::Value) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn print_classification(result: &ClassificationResult, as_json: bool) -> anyhow::Result<()> {
    if as_json {
        return print_json(&serde_json::to_value(result)?);
    }
    println!("  {:<14} {}", "Vehicle type", result.label);
    println!("  {:<14} {}", "Confidence", format_confidence(result.score));
    Ok(())
}

pub fn print_quote(quote: &Quote, as_json: bool) -> anyhow::Result<()> {
    if as_json {
        return print_json(&serde_json::to_value(quote)?);
    }
    println!("  {:<14} {}", "Vehicle type", quote.label);
    println!("  {:<14} {}", "Confidence", quote.confidence);
    println!(
        "  {:<14} {}",
        "Premium",
        quote.premium_display.as_deref().unwrap_or(NO_ESTIMATE)
    );
    println!("  {:<14} {}", "Coverage", quote.coverage_title);
    println!("  {:<14} {}", "", quote.coverage_description);
    Ok(())
}

pub fn print_estimate(
    label: Option<&str>,
    amount: Option<u32>,
    as_json: bool,
) -> anyhow::Result<()> {
    if as_json {
        return print_json(&json!({ "label": label, "premium": amount }));
    }
    match amount {
        Some(amount) => println!("{}", format_premium(amount)),
        None => println!("{NO_ESTIMATE}"),
    }
    Ok(())
}

pub fn print_coverages(as_json: bool) -> anyhow::Result<()> {
    if as_json {
        let items: Vec<_> = Coverage::ALL
            .iter()
            .map(|c| json!({ "id": c, "title": c.title(), "description": c.description() }))
            .collect();
        return print_json(&serde_json::Value::Array(items));
    }
    for coverage in Coverage::ALL {
        println!("{:<16} {}", coverage.as_str(), coverage.title());
        println!("{:<16} {}", "", coverage.description());
    }
    Ok(())
}
