use std::{io, process::ExitCode};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use orbit_formulas::orbit::{
    ensure_gm, format_bindings, orbit_system, parse_binding, parse_insertion_args, run_prompt,
    OrbitError, OrbitSystem,
};

/// Compute the missing parameters of an orbit.
///
/// Without arguments, the parameters are asked for interactively.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Known parameters, as name=value or name:value (e.g. Rp=600000 Ra:GM-kerbin)
    bindings: Vec<String>,

    /// Compute an insertion orbit from HEIGHT, PORTION of the circular period
    /// and an optional GM (defaults to GM-kerbin)
    #[arg(short = 'd', long = "deploy-orbit", num_args = 2..=3)]
    #[arg(value_names = ["HEIGHT", "PORTION", "GM"])]
    #[arg(conflicts_with = "bindings")]
    deploy_orbit: Option<Vec<String>>,

    /// Print the parameters as a JSON object
    #[cfg(feature = "serde")]
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), OrbitError> {
    let mut system = orbit_system()?;

    if let Some(deploy_args) = &args.deploy_orbit {
        system.add(parse_insertion_args(deploy_args.as_slice())?);
    } else if !args.bindings.is_empty() {
        for binding in &args.bindings {
            let (name, value) = parse_binding(binding)?;
            system.set(name, value);
        }
    } else {
        run_prompt(&mut system, io::stdin().lock(), io::stdout())?;
    }

    if ensure_gm(&mut system) {
        tracing::info!("no GM given, assuming Kerbin");
    }

    print_bindings(args, &system)
}

#[cfg(feature = "serde")]
fn print_bindings(args: &Args, system: &OrbitSystem) -> Result<(), OrbitError> {
    if args.json {
        let known: std::collections::BTreeMap<_, _> = system.known_variables().iter().collect();
        let json = serde_json::to_string_pretty(&known).map_err(io::Error::from)?;
        println!("{json}");
    } else {
        println!("{}", format_bindings(system));
    }
    Ok(())
}

#[cfg(not(feature = "serde"))]
fn print_bindings(_: &Args, system: &OrbitSystem) -> Result<(), OrbitError> {
    println!("{}", format_bindings(system));
    Ok(())
}
