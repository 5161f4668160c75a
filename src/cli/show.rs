//! Content command implementations: print registry entries to stdout.
//!
//! Unknown template or guide names print the "not found" message to stderr
//! and exit with `EXIT_ERROR`.

use std::process::ExitCode;

use super::{EXIT_ERROR, EXIT_SUCCESS};
use crate::registry::{
    analyze_summary, generate_template, guide_names, guide_resource, structure_guide,
    template_names, Catalog, MemoryBankFile,
};

/// Execute the structure command
pub fn run_structure() -> ExitCode {
    println!("{}", structure_guide());
    ExitCode::from(EXIT_SUCCESS)
}

/// Execute the template command
pub fn run_template(name: &str) -> ExitCode {
    let text = generate_template(name);
    if MemoryBankFile::from_key(name).is_some() {
        println!("{}", text);
        ExitCode::from(EXIT_SUCCESS)
    } else {
        eprintln!("{}", text);
        ExitCode::from(EXIT_ERROR)
    }
}

/// Execute the guide command
pub fn run_guide(section: &str) -> ExitCode {
    let guide = guide_resource(section);
    if guide.is_found() {
        println!("{}", guide.content);
        ExitCode::from(EXIT_SUCCESS)
    } else {
        eprintln!("{}", guide.content);
        ExitCode::from(EXIT_ERROR)
    }
}

/// Execute the analyze command
pub fn run_analyze(summary: &str) -> ExitCode {
    println!("{}", analyze_summary(summary));
    ExitCode::from(EXIT_SUCCESS)
}

/// Execute the list command
pub fn run_list() -> ExitCode {
    println!("Templates:");
    for name in template_names() {
        println!("  {}", name);
    }
    println!();
    println!("Guides:");
    for name in guide_names() {
        println!("  guide://{}", name);
    }
    ExitCode::from(EXIT_SUCCESS)
}
