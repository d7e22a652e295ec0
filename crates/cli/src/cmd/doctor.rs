use std::path::Path;

use mdcarve_core::config::{default_config_path, ConfigLoader, ReplacementPolicy};

pub fn run(config: Option<&Path>) {
    match ConfigLoader::load(config) {
        Ok(rc) => {
            println!("OK   mdc doctor");
            println!("core: mdcarve-core v{}", mdcarve_core::version());
            println!(
                "path: {}",
                config.map_or_else(
                    || default_config_path().display().to_string(),
                    |p| p.display().to_string()
                )
            );
            let replacement = match rc.extract.replacement {
                ReplacementPolicy::Link => "link",
                ReplacementPolicy::Embed => "embed",
                ReplacementPolicy::None => "none",
            };
            println!("replacement_text: {replacement}");
            println!("stay_on_source_file: {}", rc.extract.stay_on_source_file);
            println!("keep_heading: {}", rc.extract.keep_heading);
            println!("link_to_dest_heading: {}", rc.extract.link_to_dest_heading);
            println!("use_heading_as_alias: {}", rc.extract.use_heading_as_alias);
            println!("logging.level: {}", rc.logging.level);
        }
        Err(e) => {
            println!("FAIL mdc doctor");
            println!("{e}");
            if config.is_none() {
                println!("looked for: {}", default_config_path().display());
            }
            std::process::exit(1);
        }
    }
}
