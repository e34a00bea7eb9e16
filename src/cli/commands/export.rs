//! Fill in the checklist and export it

use std::fs;
use std::path::PathBuf;

use chrono::Local;
use log::{debug, info};
use qa_checklist::adapters::pdf::PdfWriter;
use qa_checklist::config::{AppConfig, NetworkConfig};
use qa_checklist::core::models::{MetadataField, NetworkAddress};
use qa_checklist::core::services::{self, ExportError, FormState};
use qa_checklist::output::{ExportResult, OutputMode, ValidationReport};

use super::load_definition;
use crate::cli::app::ExportArgs;

/// Apply the command-line edits to a fresh form and export it
pub fn export(args: ExportArgs, config: &AppConfig, mode: OutputMode) -> anyhow::Result<()> {
    let definition = load_definition(args.definition.as_deref(), config)?;
    let mut form = FormState::new(definition);

    // Runs alongside the edits below; only the final address is applied.
    let lookup = AddressTask::start(&config.network, args.offline || args.dry_run)?;

    if let Err(err) = apply_edits(&mut form, &args) {
        lookup.cancel();
        return Err(err);
    }

    let policy_kind = args.policy.unwrap_or(config.validation.policy);
    let policy = policy_kind.policy();
    debug!("Exporting with policy {policy_kind}");

    // A refused export never waits on the address lookup.
    if let Err(failure) = form.check_export(policy.as_ref()) {
        lookup.cancel();
        return refuse(&ExportError::Validation(failure), &form, policy_kind, mode);
    }
    form.set_network_address(lookup.finish());

    let layout = &config.layout;
    let captured_at = Local::now().fixed_offset();

    if args.dry_run {
        let snapshot = match form.prepare_export(policy.as_ref(), captured_at) {
            Ok(snapshot) => snapshot,
            Err(failure) => return refuse(&ExportError::Validation(failure), &form, policy_kind, mode),
        };
        let document = services::render(&snapshot, layout);
        println!("{}", serde_json::to_string_pretty(&document)?);
        return Ok(());
    }

    let writer = PdfWriter::new(layout);
    let outcome = match services::export(&form, policy.as_ref(), layout, &writer, captured_at) {
        Ok(outcome) => outcome,
        Err(err @ ExportError::Validation(_)) => return refuse(&err, &form, policy_kind, mode),
        Err(err) => return Err(err.into()),
    };

    let directory = args
        .output
        .or_else(|| config.output.directory.clone())
        .unwrap_or_else(|| PathBuf::from("."));
    fs::create_dir_all(&directory)?;
    let path = directory.join(&outcome.document.filename);
    fs::write(&path, &outcome.bytes)?;
    info!("Wrote {}", path.display());

    ExportResult::new(
        path.display().to_string(),
        &outcome.document,
        &form.completion(),
        form.metadata().network_address.display_value(),
    )
    .render(mode);
    Ok(())
}

fn apply_edits(form: &mut FormState, args: &ExportArgs) -> anyhow::Result<()> {
    form.set_metadata_field(MetadataField::Operator, &args.operator);
    let optional = [
        (MetadataField::Hardware, &args.hardware),
        (MetadataField::Firmware, &args.firmware),
        (MetadataField::Application, &args.app_version),
    ];
    for (field, value) in optional {
        if let Some(value) = value {
            form.set_metadata_field(field, value);
        }
    }

    if args.all {
        let ids: Vec<_> = form.definition().items().map(|item| item.id).collect();
        for id in ids {
            form.set_checked(id, true)?;
        }
    }
    for id in &args.checks {
        form.set_checked(*id, true)?;
    }
    for (id, note) in &args.notes {
        form.set_note(*id, note)?;
    }
    Ok(())
}

fn refuse(
    err: &ExportError,
    form: &FormState,
    policy: services::PolicyKind,
    mode: OutputMode,
) -> anyhow::Result<()> {
    if let ExportError::Validation(failure) = err {
        ValidationReport::new(failure, form, &policy.to_string()).render(mode);
    }
    anyhow::bail!("Export refused: {err}")
}

/// Public address lookup started before the form is filled in
enum AddressTask {
    Disabled,
    #[cfg(feature = "net")]
    Running {
        runtime: tokio::runtime::Runtime,
        handle: services::LookupHandle,
    },
}

impl AddressTask {
    #[cfg(feature = "net")]
    fn start(network: &NetworkConfig, skip: bool) -> anyhow::Result<Self> {
        use qa_checklist::adapters::http::ReqwestFetcher;

        if skip || !network.enabled {
            return Ok(Self::Disabled);
        }
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()?;
        let fetcher = ReqwestFetcher::new(network.timeout())?;
        let handle = {
            let _guard = runtime.enter();
            network.lookup().spawn(fetcher)
        };
        Ok(Self::Running { runtime, handle })
    }

    #[cfg(not(feature = "net"))]
    #[allow(clippy::unnecessary_wraps)]
    fn start(network: &NetworkConfig, skip: bool) -> anyhow::Result<Self> {
        if network.enabled && !skip {
            debug!("Built without the `net` feature, public address lookup disabled");
        }
        Ok(Self::Disabled)
    }

    /// Abandon the lookup without waiting for it
    fn cancel(self) {
        match self {
            Self::Disabled => {},
            #[cfg(feature = "net")]
            Self::Running { runtime, handle } => {
                handle.cancel();
                runtime.shutdown_background();
                debug!("Public address lookup cancelled");
            },
        }
    }

    fn finish(self) -> NetworkAddress {
        match self {
            Self::Disabled => NetworkAddress::Unresolved,
            #[cfg(feature = "net")]
            Self::Running { runtime, handle } => runtime.block_on(handle.finish()),
        }
    }
}
