//! List rules command implementation.

use a11y_lint_core::RuleId;

/// Runs the list-rules command.
pub fn run() {
    println!("Available rules:\n");
    println!("{:<32} {:<10} Description", "Rule", "Severity");
    println!("{}", "-".repeat(80));

    for rule in RuleId::ALL {
        let severity = rule.severity().to_string();
        println!("{:<32} {severity:<10} {}", rule.as_str(), rule.description());
    }

    println!("\nEvaluators:");
    println!("  markup      .html .htm");
    println!("  component   .tsx .jsx .ts .js");
    println!("  stylesheet  .css");
}
