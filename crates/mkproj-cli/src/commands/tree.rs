//! `mkproj tree`: print an existing directory in outline notation.

use mkproj_adapters::LocalFilesystem;
use mkproj_core::application::TreeService;
use tracing::instrument;

use crate::{
    cli::{OutputFormat, TreeArgs},
    commands::create::resolve_root,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all, fields(all = args.all))]
pub fn execute(args: TreeArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let include_hidden = args.all || config.tree.include_hidden;
    let root = resolve_root(args.root, &config);
    let service = TreeService::new(Box::new(LocalFilesystem::new()));

    if output.format() == OutputFormat::Json {
        let entries = service.entries(&root, include_hidden)?;
        output.json(&entries)?;
    } else {
        output.data(&service.render(&root, include_hidden)?)?;
    }

    Ok(())
}
