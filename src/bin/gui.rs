use anyhow::Context;
use pythagoras_explorer::logging::{LogConfig, init_logging};
use pythagoras_explorer::{ExplorerConfig, PixelsPresenterFactory, RunGuiCommand};

fn main() -> anyhow::Result<()> {
    init_logging(&LogConfig::default()).context("failed to initialise logging")?;

    let presenter_factory = PixelsPresenterFactory::new();
    let command = RunGuiCommand::new(presenter_factory, ExplorerConfig::default());

    command.execute().context("explorer window failed")?;

    Ok(())
}
