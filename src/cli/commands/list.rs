//! List checklist sections and items

use std::path::Path;

use log::debug;
use qa_checklist::adapters::toml;
use qa_checklist::config::AppConfig;
use qa_checklist::core::models::ChecklistDefinition;
use qa_checklist::output::{ListResult, OutputMode};

/// Print the checklist with item ids
pub fn list(definition: Option<&Path>, config: &AppConfig, mode: OutputMode) -> anyhow::Result<()> {
    let definition = load_definition(definition, config)?;
    ListResult::from_definition(&definition).render(mode);
    Ok(())
}

/// Definition named on the command line, else in config, else the built-in one
pub fn load_definition(
    explicit: Option<&Path>,
    config: &AppConfig,
) -> anyhow::Result<ChecklistDefinition> {
    match explicit.or(config.checklist.definition.as_deref()) {
        Some(path) => {
            debug!("Loading checklist definition from {}", path.display());
            toml::load_definition(path)
        },
        None => Ok(ChecklistDefinition::emv()),
    }
}
