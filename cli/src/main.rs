use anyhow::{Context, Result};
use bmesh::prelude::ConfigType;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "bmesh")]
#[command(about = "Converts model geometry json to and from Wavefront OBJ")]
struct Cli {
    /// Print conversion statistics
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Export a model json document to an obj file
    #[command(visible_alias = "o")]
    Obj {
        /// Input model json path
        input: PathBuf,
        /// Output obj path
        output: PathBuf,
        /// Group name written to the obj header
        #[arg(long)]
        group: Option<String>,
    },
    /// Import an obj file into a model json document
    Bo {
        /// Input obj path
        input: PathBuf,
        /// Output model json path
        output: PathBuf,
        /// Write indented json
        #[arg(long)]
        pretty: bool,
        /// Material assigned to the imported mesh
        #[arg(long)]
        material: Option<String>,
        /// Identifier of the imported geometry
        #[arg(long)]
        identifier: Option<String>,
        /// Format version of the output document
        #[arg(long)]
        format_version: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level(cli.verbose))).init();

    match cli.command {
        Command::Obj { input, output, group } => {
            let mut cfg = bmesh::export::Config::default();
            if let Some(group) = group {
                cfg.group_name = group;
            }
            convert_model_to_obj(&input, &output, &cfg)
        }
        Command::Bo { input, output, pretty, material, identifier, format_version } => {
            let mut cfg = bmesh::import::Config::default();
            if let Some(material) = material {
                cfg.meta_material = material;
            }
            if let Some(identifier) = identifier {
                cfg.identifier = identifier;
            }
            if let Some(format_version) = format_version {
                cfg.format_version = format_version;
            }
            convert_obj_to_model(&input, &output, pretty, &cfg)
        }
    }
}

fn log_level(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "info" }
}

fn convert_model_to_obj(input_path: &Path, output_path: &Path, cfg: &bmesh::export::Config) -> Result<()> {
    let model = bmesh::io::json::load_model(input_path)
        .with_context(|| format!("Failed to load model from {}", input_path.display()))?;

    bmesh::io::obj::save_obj(&model, output_path, cfg)
        .with_context(|| format!("Failed to export {} to {}", input_path.display(), output_path.display()))?;

    log::info!("Wrote {}", output_path.display());
    Ok(())
}

fn convert_obj_to_model(input_path: &Path, output_path: &Path, pretty: bool, cfg: &bmesh::import::Config) -> Result<()> {
    let model = bmesh::io::obj::load_obj(input_path, cfg)
        .with_context(|| format!("Failed to import OBJ file {}", input_path.display()))?;

    bmesh::io::json::save_model(&model, output_path, pretty)
        .with_context(|| format!("Failed to write model to {}", output_path.display()))?;

    log::info!("Wrote {}", output_path.display());
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversions_are_reported_by_default() {
        let level = log_level(false).parse::<log::LevelFilter>().unwrap();
        assert!(log::Level::Info <= level);
        assert!(log::Level::Debug > level);

        let level = log_level(true).parse::<log::LevelFilter>().unwrap();
        assert!(log::Level::Debug <= level);
    }

    #[test]
    fn subcommands() {
        let cli = Cli::try_parse_from(["bmesh", "o", "model.json", "model.obj", "--group", "creeper"]).unwrap();
        assert!(matches!(cli.command, Command::Obj { group: Some(ref g), .. } if g == "creeper"));

        let cli = Cli::try_parse_from(["bmesh", "-v", "bo", "model.obj", "model.json", "--pretty"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Command::Bo { pretty: true, material: None, .. }));
    }
}
