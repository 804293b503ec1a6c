//! Command-line surface over the verification pipeline: check a single
//! instance/solution pair, validate a standalone instance, or sweep a whole
//! archive of solutions against an instance database.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use polycover::adapters::archive::{scan_archive, ScanOutcome};
use polycover::adapters::database::InstanceDatabase;
use polycover::adapters::json;
use polycover::verifier::{verify, verify_instance, VerificationResult};

#[derive(Parser)]
#[command(name = "polycover", about = "Exact verifier for minimum convex cover solutions")]
struct Cli {
  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Verify a single solution against its instance.
  Verify { instance: PathBuf, solution: PathBuf },
  /// Validate that an instance document is a well-formed polygonal domain.
  VerifyInstance { instance: PathBuf },
  /// Verify every solution in a ZIP archive against an instance database.
  Batch { instance_db: PathBuf, solutions: PathBuf },
}

fn main() -> ExitCode {
  tracing_subscriber::fmt().with_env_filter(tracing_subscriber::EnvFilter::from_default_env()).init();

  let cli = Cli::parse();
  match run(cli.command) {
    Ok(code) => code,
    Err(err) => {
      tracing::error!(error = %err, "polycover failed");
      eprintln!("error: {err}");
      ExitCode::FAILURE
    }
  }
}

fn run(command: Command) -> Result<ExitCode, Box<dyn std::error::Error>> {
  match command {
    Command::Verify { instance, solution } => {
      let instance_raw = fs::read_to_string(&instance)?;
      let solution_raw = fs::read_to_string(&solution)?;
      let instance_doc = json::parse_instance(&instance_raw)?;
      let solution_doc = json::parse_solution(&solution_raw)?;
      let region = instance_doc.into_region()?;
      let result = verify(&region, &solution_doc.polygons);
      Ok(report(&result))
    }
    Command::VerifyInstance { instance } => {
      let raw = fs::read_to_string(&instance)?;
      let doc = json::parse_instance(&raw)?;
      let result = verify_instance(doc.outer_boundary, doc.holes);
      Ok(report(&result))
    }
    Command::Batch { instance_db, solutions } => {
      let db = if instance_db.is_dir() {
        InstanceDatabase::open_folder(&instance_db)
      } else {
        InstanceDatabase::open_zip(&instance_db)?
      };

      let file = fs::File::open(&solutions)?;
      let outcomes = scan_archive(std::io::BufReader::new(file))?;

      let mut failures = 0usize;
      let mut checked = 0usize;
      for outcome in outcomes {
        match outcome {
          ScanOutcome::Skipped { name, reason } => {
            tracing::warn!(entry = %name, reason = %reason, "skipped archive entry");
          }
          ScanOutcome::Solution(doc) => {
            checked += 1;
            let instance_doc = db.get(&doc.instance_name)?;
            let region = instance_doc.into_region()?;
            let result = verify(&region, &doc.polygons);
            if !result.is_valid() {
              failures += 1;
              println!("{}: {}", doc.instance_name, result.message().unwrap_or("invalid"));
            } else {
              println!("{}: valid", doc.instance_name);
            }
          }
        }
      }
      println!("checked {checked} solutions, {failures} failed");
      Ok(if failures == 0 { ExitCode::SUCCESS } else { ExitCode::FAILURE })
    }
  }
}

fn report(result: &VerificationResult) -> ExitCode {
  match result {
    VerificationResult::Valid => {
      println!("valid");
      ExitCode::SUCCESS
    }
    VerificationResult::Invalid(message) => {
      println!("invalid: {message}");
      ExitCode::FAILURE
    }
  }
}
