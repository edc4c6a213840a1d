use std::path::Path;

use clap::Parser;
use tinct::run::{generate, render_summary, write_outputs};
use tinct::{logging, Cli, FileConfig, Settings};
use tinct_render::Swatches;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = FileConfig::load(cli.config.as_deref(), Path::new("."))?;
    let settings = Settings::resolve(&cli, config)?;

    println!("Analyzing: {}", settings.source.label());
    let run = generate(&settings)?;

    let swatches = if console::colors_enabled() {
        Swatches::On
    } else {
        Swatches::Off
    };
    print!("{}", run.render_console(swatches));

    let written = write_outputs(&run, &settings)?;
    println!("{}", render_summary(&run, &written));
    Ok(())
}
