//! The four provisioning commands.
//!
//! Each one builds its [`RecordKind`] from configuration and pushes a list
//! file through the shared batch runner: login, load, reconcile, report.

use anyhow::{Context as AnyhowContext, Result};
use log::info;
use std::path::Path;

use crate::Context;
use crate::config::Config;
use crate::kinds::{GroupClass, GroupKind, HostKind, RecordKind, SnmpHostKind};
use crate::naming::HostNaming;
use crate::outcome::Summary;
use crate::ui;
use zbxrpc::ZabbixClient;

pub fn hosts(
    ctx: &Context,
    config: &Config,
    file: &Path,
    naming: HostNaming,
    dry_run: bool,
) -> Result<()> {
    let kind = HostKind {
        naming,
        templates: config.hosts.templates.clone(),
        status: config.host_status(),
    };
    execute(ctx, config, &kind, file, dry_run)
}

pub fn snmp_hosts(ctx: &Context, config: &Config, file: &Path, dry_run: bool) -> Result<()> {
    let kind = SnmpHostKind {
        templates: config.snmp.templates.clone(),
        status: config.snmp_status(),
        security: config.snmp.security.clone(),
    };
    execute(ctx, config, &kind, file, dry_run)
}

pub fn host_groups(ctx: &Context, config: &Config, file: &Path, dry_run: bool) -> Result<()> {
    let kind = GroupKind {
        class: GroupClass::Host,
    };
    execute(ctx, config, &kind, file, dry_run)
}

pub fn user_groups(ctx: &Context, config: &Config, file: &Path, dry_run: bool) -> Result<()> {
    let kind = GroupKind {
        class: GroupClass::User,
    };
    execute(ctx, config, &kind, file, dry_run)
}

/// Shared batch flow for every kind.
fn execute<K: RecordKind>(
    ctx: &Context,
    config: &Config,
    kind: &K,
    file: &Path,
    dry_run: bool,
) -> Result<()> {
    // malformed input must fail before any remote call
    let rows = kind.load(file)?;
    if rows.is_empty() {
        ui::warn(&format!("{}: no rows to reconcile", file.display()));
        return Ok(());
    }

    let client = login(config)?;

    ui::header(&format!("Provisioning {}s", kind.label()));
    ui::kv("File", &file.display().to_string());
    ui::kv("Rows", &rows.len().to_string());
    if ctx.verbose > 0 {
        ui::kv("Endpoint", &config.api.url);
    }
    if dry_run {
        ui::warn("Dry run - no changes will be made");
    }
    println!();

    let outcomes = crate::reconcile::run(&client, kind, &rows, dry_run, |outcome| {
        if !ctx.quiet || outcome.is_failure() {
            ui::outcome(outcome);
        }
    })
    .with_context(|| format!("could not start the {} batch", kind.label()))?;

    let summary = Summary::of(&outcomes);
    println!();
    if summary.has_failures() {
        ui::warn(&summary.to_string());
    } else {
        ui::success(&summary.to_string());
    }

    Ok(())
}

/// Authenticate against the configured endpoint.
pub fn login(config: &Config) -> Result<ZabbixClient> {
    let mut client = ZabbixClient::new(config.api.url.clone());
    client
        .login(&config.api.username, &config.api.password)
        .with_context(|| format!("login failed for {} at {}", config.api.username, client.url()))?;
    info!("logged in to {}", client.url());
    Ok(client)
}
