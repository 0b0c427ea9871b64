use clap::Parser;
use cvd_simulator::cli::{Cli, Command};
use cvd_simulator::image_pipeline::{
    DeficiencyType, OutputFormat, SimulationConfig, SimulationPipeline, explain_pixel,
};
use cvd_simulator::logger;

use tracing::{error, info};

fn main() {
    logger::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli.command) {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Simulate { input, output, deficiency, compare, timings } => {
            let config = SimulationConfig::builder()
                .deficiency(deficiency)
                .output_format(OutputFormat::from_path(&output)?)
                .side_by_side(compare)
                .build();
            let pipeline = SimulationPipeline::new(config);

            info!("Simulating {}", deficiency);
            info!("Output format: {:?}", pipeline.config().output_format);

            let step_timings = pipeline.convert_file_with_timings(&input, &output)?;
            if timings {
                step_timings.log_summary();
            }
            info!("Wrote {}", output.display());
        }
        Command::Explain { r, g, b, deficiency } => {
            println!("{}", explain_pixel([r, g, b], deficiency));
        }
        Command::Types => {
            for deficiency in DeficiencyType::ALL {
                println!("{:<14} {:<22} {}", deficiency.name(), deficiency.label(), deficiency.description());
            }
        }
    }

    Ok(())
}
