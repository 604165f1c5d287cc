use std::fs;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use aline_rs::entities::Fabric;
use aline_rs::io::ext_repr::{ExtCutInstance, ExtSkirtInstance};
use aline_rs::io::svg::{layout_to_svg, panels_to_svg};
use aline_rs::io::{export, import};
use aline_rs::nesting::FabricNester;
use aline_cli::config::AlineConfig;
use aline_cli::io;
use aline_cli::io::cli::{CalculationMode, Cli};
use aline_cli::io::output::{CutOutput, SkirtOutput};
use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use log::{error, info, warn};

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            AlineConfig::default()
        }
        Some(config_file) => {
            let file = File::open(config_file)?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).context("incorrect config file format")?
        }
    };

    info!("[MAIN] Successfully parsed AlineConfig: {config:?}");

    let input_file_stem = args
        .input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .context("input file has no valid name")?
        .to_owned();

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!(
                "could not create solution folder: {:?}",
                args.solution_folder
            )
        })?;
    }

    let result = match args.mode {
        CalculationMode::Skirt => {
            let ext_instance = io::read_skirt_instance(args.input_file.as_path())?;
            main_skirt(ext_instance, config, &input_file_stem, args.solution_folder)
        }
        CalculationMode::Cut => {
            let ext_instance = io::read_cut_instance(args.input_file.as_path())?;
            main_cut(ext_instance, &input_file_stem, args.solution_folder)
        }
    };

    if let Err(e) = &result {
        error!("[MAIN] {e:#}");
    }
    result
}

fn main_skirt(
    ext_instance: ExtSkirtInstance,
    config: AlineConfig,
    input_stem: &str,
    output_folder: PathBuf,
) -> Result<()> {
    let session = import::import_skirt(&ext_instance)?;
    let panels = session.panels()?;

    let fabric = Fabric::try_new(config.fabric_width, config.cut_allowance)
        .context("invalid fabric in config")?;
    let layout = FabricNester::new(fabric).layout(&panels)?;

    {
        let output = SkirtOutput {
            instance: ext_instance,
            solution: export::export_skirt(&session, &panels, &layout),
            config,
        };

        let solution_path = output_folder.join(format!("sol_{input_stem}.json"));

        io::write_json(&output, Path::new(&solution_path))?;
    }

    {
        let svg_path = output_folder.join(format!("sol_{input_stem}_layout.svg"));
        let svg = layout_to_svg(&layout, config.svg_draw_options);

        io::write_svg(&svg, Path::new(&svg_path))?;
    }

    if config.draw_panel_sheet {
        let svg_path = output_folder.join(format!("sol_{input_stem}_panels.svg"));
        let svg = panels_to_svg(&panels, config.svg_draw_options);

        io::write_svg(&svg, Path::new(&svg_path))?;
    }

    info!(
        "[MAIN] {} panels need {:.2} of fabric {:.2} wide",
        panels.len(),
        layout.required_length,
        fabric.width
    );

    Ok(())
}

fn main_cut(ext_instance: ExtCutInstance, input_stem: &str, output_folder: PathBuf) -> Result<()> {
    let plan = import::import_cut_plan(&ext_instance)?;
    info!("[MAIN] {plan}");

    let output = CutOutput {
        instance: ext_instance,
        solution: export::export_cut_plan(&plan),
    };
    let solution_path = output_folder.join(format!("sol_{input_stem}.json"));

    io::write_json(&output, Path::new(&solution_path))
}
