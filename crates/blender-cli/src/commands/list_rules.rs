//! List rules command implementation.

use blender_rules::{all_rules, structural_list_rules};

/// Runs the list-rules command.
pub fn run() {
    println!("Available rules:\n");
    println!("{:<10} {:<28} Description", "Code", "Name");
    println!("{}", "-".repeat(90));

    for rule in all_rules() {
        println!(
            "{:<10} {:<28} {}",
            rule.code(),
            rule.name(),
            rule.description()
        );
    }
    for rule in structural_list_rules() {
        println!(
            "{:<10} {:<28} {}",
            rule.code(),
            rule.name(),
            rule.description()
        );
    }

    println!("\nPresets:");
    println!("  full          - CB001-CB004 and CB101-CB107 (default)");
    println!("  dependencies  - CB001-CB004, prerequisite and ordering rules");
    println!("  structural    - CB101-CB107, field-level rules");

    println!("\nUse --rules to filter specific rules, e.g.:");
    println!("  blender check Config.json --rules printer-driver,shortcut-icon");
    println!("  blender check Config.json --rules CB001,CB002,CB107");
}
