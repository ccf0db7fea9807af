//! Template existence report.
//!
//! Host creation hard-depends on the configured templates, so this command
//! exists to check them ahead of a batch: every template name from the
//! `[hosts]` and `[snmp]` sections is looked up and reported FOUND/NOTFOUND.

use anyhow::Result;

use crate::Context;
use crate::config::Config;
use crate::inventory;
use crate::ui;

pub fn run(ctx: &Context, config: &Config) -> Result<()> {
    let mut names: Vec<String> = Vec::new();
    for name in config.hosts.templates.iter().chain(&config.snmp.templates) {
        if !names.contains(name) {
            names.push(name.clone());
        }
    }

    if names.is_empty() {
        ui::warn("No templates configured");
        return Ok(());
    }

    let client = super::apply::login(config)?;
    let found = inventory::template_map(&client, &names)?;

    ui::header("Templates");
    let mut missing = 0;
    for name in &names {
        match found.get(name) {
            Some(id) => {
                ui::success(&format!("FOUND: {} templateid={}", name, id));
            }
            None => {
                missing += 1;
                ui::error(&format!("NOTFOUND: {}", name));
            }
        }
    }

    if missing > 0 && !ctx.quiet {
        println!();
        ui::dim(&format!(
            "{} of {} configured templates are missing; host batches will abort",
            missing,
            names.len()
        ));
    }

    Ok(())
}
