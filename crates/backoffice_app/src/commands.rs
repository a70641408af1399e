use std::fs;
use std::sync::Arc;

use anyhow::{Context, Result};
use backoffice_core::chart::{
    per_day_options, pie_options, theme_options, ChartKind, PerDayData, PieSlice,
};
use backoffice_core::PollTarget;
use backoffice_engine::{
    LabelTable, ModuleCatalog, ReqwestStatusClient, RonModuleStore, StatusPoller,
};
use backoffice_logging::backoffice_info;
use serde::Deserialize;
use serde_json::json;

use crate::config::{CatalogConfig, PollerConfig};
use crate::surface::TerminalSurface;
use crate::{ChartArgs, PollArgs};

fn build_catalog(config: &CatalogConfig) -> Result<ModuleCatalog> {
    let labels = match &config.labels {
        Some(path) => LabelTable::load(path).context("loading module labels")?,
        None => LabelTable::default(),
    };
    Ok(ModuleCatalog::new(
        Box::new(RonModuleStore::new(&config.store)),
        Box::new(labels),
        &config.modules_root,
    ))
}

pub fn list_modules(config: &CatalogConfig) -> Result<()> {
    let catalog = build_catalog(config)?;
    let entries = catalog.list_modules().context("listing installed modules")?;

    println!("{:<24} {:<8} {:<10} DESCRIPTION", "MODULE", "ACTIVE", "VERSION");
    for entry in &entries {
        println!(
            "{:<24} {:<8} {:<10} {}",
            entry.label,
            if entry.active { "yes" } else { "no" },
            entry.version,
            entry.description
        );
    }
    backoffice_info!("Listed {} modules from {:?}", entries.len(), config.store);
    Ok(())
}

pub fn module_exists(config: &CatalogConfig, module: &str) -> Result<()> {
    let catalog = build_catalog(config)?;
    let exists = catalog.module_exists(module);
    println!("{module}: {}", if exists { "installed" } else { "missing" });
    Ok(())
}

pub fn poll(config: &PollerConfig, args: PollArgs) -> Result<()> {
    let settings = config.poll_settings()?;
    let client = ReqwestStatusClient::new(config.status_settings())
        .context("building status client")?;
    let target = PollTarget::from_page_data(args.page.as_deref(), args.identifier.as_deref());

    let runtime = tokio::runtime::Runtime::new().context("starting tokio runtime")?;
    let mut poller = StatusPoller::new(
        settings,
        Arc::new(client),
        TerminalSurface::new(!args.no_long_loader),
    );
    let phase = runtime.block_on(poller.run(target));

    println!("poll finished: {phase:?}");
    if let Some(url) = poller.surface().redirected_to() {
        backoffice_info!("Job finished; browser would now load {}", url);
    }
    Ok(())
}

#[derive(Debug, Deserialize)]
struct ChartInput {
    kind: ChartKind,
    #[serde(default)]
    slices: Vec<PieSlice>,
    #[serde(default)]
    per_day: PerDayData,
}

pub fn chart(args: ChartArgs) -> Result<()> {
    let content = fs::read_to_string(&args.input)
        .with_context(|| format!("reading chart data {:?}", args.input))?;
    let input: ChartInput = serde_json::from_str(&content)
        .with_context(|| format!("parsing chart data {:?}", args.input))?;

    let options = match input.kind {
        ChartKind::Pie => pie_options(&input.slices, args.width),
        kind => per_day_options(kind, &input.per_day, args.width)?,
    };
    let document = json!({
        "container": input.kind.container_id(),
        "theme": theme_options(&[input.kind]),
        "options": options,
    });
    println!("{}", serde_json::to_string_pretty(&document)?);
    Ok(())
}
