use std::fs;

use mdcarve_core::heading;

use crate::HeadingsArgs;

pub fn run(args: &HeadingsArgs) {
    let text = match fs::read_to_string(&args.source) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("FAIL mdc headings");
            eprintln!("failed to read {}: {e}", args.source.display());
            std::process::exit(1);
        }
    };

    let headings = heading::parse(&text);
    if headings.is_empty() {
        println!("no headings in {}", args.source.display());
        return;
    }

    for h in headings {
        println!("line {:>4}  {} {}", h.line + 1, "#".repeat(h.depth as usize), h.title);
    }
}
