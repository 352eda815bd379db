//! # Beamline CLI
//!
//! Solves a beam request from a JSON file (or stdin) and writes the JSON
//! response, standing in for an HTTP front end.
//!
//! Usage:
//!   beam_cli <request.json | -> [options]
//!
//! Options:
//!   --output <path>    Write the response JSON to a file instead of stdout
//!   --summary          Print reactions and peak values before the JSON
//!   --compact          Emit single-line JSON
//!
//! Logging is controlled with RUST_LOG (default: warn).

use std::env;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use beam_core::calculations::{BeamResponse, SupportType};
use beam_core::errors::{CalcError, CalcResult};
use beam_core::file_io::{read_to_string, save_json};
use beam_core::payload::{respond, SolveOutcome, SolveRequest};
use log::{error, info};

#[derive(Debug)]
struct Options {
    input: String,
    output: Option<PathBuf>,
    summary: bool,
    pretty: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().collect();
    let options = match parse_args(&args) {
        Ok(Some(options)) => options,
        Ok(None) => {
            print_usage();
            return ExitCode::SUCCESS;
        }
        Err(message) => {
            eprintln!("Error: {}", message);
            eprintln!();
            print_usage();
            return ExitCode::FAILURE;
        }
    };

    let body = match read_input(&options.input) {
        Ok(body) => body,
        Err(e) => {
            error!("{}", e);
            emit(&SolveOutcome::Failed { error: e.to_string() }, &options);
            return ExitCode::FAILURE;
        }
    };

    let outcome = respond(&body);

    if options.summary {
        if let SolveOutcome::Solved(response) = &outcome {
            let support = SolveRequest::from_json(&body)
                .and_then(|request| request.beam_type().parse::<SupportType>());
            if let Ok(support) = support {
                print_summary(support, response);
            }
        }
    }

    let solved = outcome.is_solved();
    if !emit(&outcome, &options) || !solved {
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

/// Parse command-line arguments; `Ok(None)` means help was requested
fn parse_args(args: &[String]) -> Result<Option<Options>, String> {
    let input = args.get(1).ok_or("missing request path (use - for stdin)")?;
    if input == "--help" || input == "-h" {
        return Ok(None);
    }
    if input.starts_with("--") {
        return Err(format!("expected a request path before options, got {}", input));
    }

    let mut options = Options {
        input: input.clone(),
        output: None,
        summary: false,
        pretty: true,
    };

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--output" => {
                let path = args.get(i + 1).ok_or("--output requires a path")?;
                options.output = Some(PathBuf::from(path));
                i += 1;
            }
            "--summary" => options.summary = true,
            "--compact" => options.pretty = false,
            other => return Err(format!("unknown option: {}", other)),
        }
        i += 1;
    }

    Ok(Some(options))
}

fn read_input(input: &str) -> CalcResult<String> {
    if input == "-" {
        let mut body = String::new();
        io::stdin()
            .read_to_string(&mut body)
            .map_err(|e| CalcError::file_error("read", "<stdin>", e.to_string()))?;
        return Ok(body);
    }
    read_to_string(Path::new(input))
}

/// Write the outcome to the output file or stdout; false if writing failed
fn emit(outcome: &SolveOutcome, options: &Options) -> bool {
    match &options.output {
        Some(path) => match save_json(outcome, path, options.pretty) {
            Ok(()) => {
                info!("response written to {}", path.display());
                true
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                false
            }
        },
        None => {
            let json = if options.pretty {
                serde_json::to_string_pretty(outcome)
            } else {
                serde_json::to_string(outcome)
            };
            match json {
                Ok(json) => {
                    println!("{}", json);
                    true
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    false
                }
            }
        }
    }
}

fn print_summary(support: SupportType, response: &BeamResponse) {
    let r = response.reactions;
    let peaks = response.summary();

    println!("═══════════════════════════════════════");
    println!("  BEAM RESPONSE ({})", support.display_name());
    println!("═══════════════════════════════════════");
    println!();
    println!("Reactions:");
    println!("  RA = {:.3}", r.ra);
    println!("  RB = {:.3}", r.rb);
    println!("  MA = {:.3}", r.ma);
    println!();
    println!("Peaks ({} samples, L = {:.3}):", response.sample_count(), response.x.last().copied().unwrap_or(0.0));
    println!("  V_max = {:.3} at x = {:.3}", peaks.shear.value, peaks.shear.x);
    println!("  M_max = {:.3} at x = {:.3}", peaks.moment.value, peaks.moment.x);
    println!("  w_max = {:.6e} at x = {:.3}", peaks.deflection.value, peaks.deflection.x);
    println!();
}

fn print_usage() {
    println!("Beamline CLI - beam shear, moment and deflection");
    println!();
    println!("Usage:");
    println!("  beam_cli <request.json | -> [--output <path>] [--summary] [--compact]");
    println!();
    println!("Request format:");
    println!("  {{");
    println!("    \"beamType\": \"simply_supported\" | \"cantilever\" | \"fixed_fixed\" | \"overhang\",");
    println!("    \"beam\": {{ \"length\": 4.0, \"E\": 210e9, \"I\": 8e-6 }},");
    println!("    \"loads\": [ {{ \"type\": \"point\", \"P\": 1000.0, \"x\": 2.0 }} ],");
    println!("    \"overhangLength\": 1.0");
    println!("  }}");
}
