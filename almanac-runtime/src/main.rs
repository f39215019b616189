use almanac_core::{
    challenge::{Challenge, Solution},
    Almanac, SeedMode,
};
use almanac_structs::core::{ChallengeSettings, OutputData};
use almanac_utils::{compress_obj, dejsonify, jsonify};
use anyhow::{anyhow, Result};
use clap::{arg, Command};
use std::{fs, io::Read, path::PathBuf};
use tracing_subscriber::EnvFilter;

fn cli() -> Command {
    Command::new("almanac-runtime")
        .about("Solves, generates or verifies almanac instances")
        .arg_required_else_help(true)
        .subcommand(
            Command::new("solve")
                .about("Computes the lowest location reachable from the seeds of an almanac")
                .arg(
                    arg!(<INPUT> "Path to an almanac text file, or '-' for stdin")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(--mode [MODE] "How to read the seeds line")
                        .value_parser(["scalar", "range", "both"])
                        .default_value("both"),
                )
                .arg(
                    arg!(--output [OUTPUT_FILE] "If set, the output data will be saved to this file path (default json)")
                        .value_parser(clap::value_parser!(PathBuf)),
                )
                .arg(arg!(--compress "If output file is set, the output data will be compressed as zlib")),
        )
        .subcommand(
            Command::new("generate_instance")
                .about("Prints a generated almanac")
                .arg(
                    arg!(<SETTINGS> "Settings json string or path to json file")
                        .value_parser(clap::value_parser!(String)),
                ),
        )
        .subcommand(
            Command::new("compute_solution")
                .about("Generates an almanac and prints its solution")
                .arg(
                    arg!(<SETTINGS> "Settings json string or path to json file")
                        .value_parser(clap::value_parser!(String)),
                ),
        )
        .subcommand(
            Command::new("verify_solution")
                .about("Verifies a solution by enumerating every seed")
                .arg(
                    arg!(<SETTINGS> "Settings json string or path to json file")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(<SOLUTION> "Solution json string, path to json file, or '-' for stdin")
                        .value_parser(clap::value_parser!(String)),
                ),
        )
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let matches = cli().get_matches();

    if let Err(e) = match matches.subcommand() {
        Some(("solve", sub_m)) => solve(
            sub_m.get_one::<String>("INPUT").unwrap().clone(),
            sub_m.get_one::<String>("mode").unwrap().clone(),
            sub_m.get_one::<PathBuf>("output").cloned(),
            sub_m.get_flag("compress"),
        ),
        Some(("generate_instance", sub_m)) => {
            generate_instance(sub_m.get_one::<String>("SETTINGS").unwrap().clone())
        }
        Some(("compute_solution", sub_m)) => {
            compute_solution(sub_m.get_one::<String>("SETTINGS").unwrap().clone())
        }
        Some(("verify_solution", sub_m)) => verify_solution(
            sub_m.get_one::<String>("SETTINGS").unwrap().clone(),
            sub_m.get_one::<String>("SOLUTION").unwrap().clone(),
        ),
        _ => Err(anyhow!("Invalid subcommand")),
    } {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

pub fn solve(
    input_path: String,
    mode: String,
    output_file: Option<PathBuf>,
    compress: bool,
) -> Result<()> {
    let almanac = Almanac::parse(&read_input(&input_path)?)?;
    let modes = parse_modes(&mode)?;
    tracing::info!(
        "solving {} seeds through {} sections ({})",
        almanac.seeds().len(),
        almanac.sections().len(),
        mode
    );

    let lowest_in = |seed_mode: SeedMode| -> Result<Option<i64>> {
        if modes.contains(&seed_mode) {
            Ok(Some(almanac.lowest(seed_mode)?))
        } else {
            Ok(None)
        }
    };
    let output_data = OutputData {
        num_seeds: almanac.seeds().len(),
        num_sections: almanac.sections().len(),
        scalar_lowest: lowest_in(SeedMode::Scalar)?,
        range_lowest: lowest_in(SeedMode::Range)?,
    };

    if let Some(path) = output_file {
        if compress {
            fs::write(&path, compress_obj(&output_data)?)?;
        } else {
            fs::write(&path, jsonify(&output_data)?)?;
        }
        println!("output_data written to: {:?}", path);
    } else {
        println!("{}", jsonify(&output_data)?);
    }
    Ok(())
}

pub fn generate_instance(settings: String) -> Result<()> {
    let challenge = load_challenge(&settings)?;
    print!("{}", challenge.almanac);
    Ok(())
}

pub fn compute_solution(settings: String) -> Result<()> {
    let challenge = load_challenge(&settings)?;
    let solution = challenge.solve()?;
    println!("{}", jsonify(&solution)?);
    Ok(())
}

pub fn verify_solution(settings: String, solution_path: String) -> Result<()> {
    let challenge = load_challenge(&settings)?;
    let solution = dejsonify::<Solution>(&read_json_arg(&solution_path)?)
        .map_err(|e| anyhow!("Failed to parse solution: {}", e))?;
    challenge
        .verify_solution(&solution)
        .map_err(|e| anyhow!("Invalid solution: {}", e))?;
    println!("Solution is valid");
    Ok(())
}

fn parse_modes(mode: &str) -> Result<Vec<SeedMode>> {
    match mode {
        "both" => Ok(vec![SeedMode::Scalar, SeedMode::Range]),
        _ => Ok(vec![mode.parse::<SeedMode>().map_err(|e| anyhow!(e))?]),
    }
}

fn load_challenge(settings: &str) -> Result<Challenge> {
    let settings = dejsonify::<ChallengeSettings>(&read_json_arg(settings)?)
        .map_err(|e| anyhow!("Failed to parse settings: {}", e))?;
    let seed = settings.calc_seed()?;
    tracing::debug!("generating instance for nonce {}", settings.nonce);
    Challenge::generate_instance(&seed, &settings.difficulty)
}

fn read_input(path: &str) -> Result<String> {
    if path == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| anyhow!("Failed to read input from stdin: {}", e))?;
        Ok(buffer)
    } else {
        fs::read_to_string(path).map_err(|e| anyhow!("Failed to read input file {}: {}", path, e))
    }
}

/// `-` reads stdin, `*.json` reads the file, anything else is the json itself.
fn read_json_arg(arg: &str) -> Result<String> {
    if arg == "-" || arg.ends_with(".json") {
        read_input(arg)
    } else {
        Ok(arg.to_string())
    }
}
