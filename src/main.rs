use log::info;
use serde_json::Value;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::process;

use wess_core::first_difference;
use wess_domain::explain_wasm;
use wess_harness::files::{load_samples, read_json_file};
use wess_harness::hashing::{hash_value, to_canonical_json};
use wess_harness::{run_samples, HarnessConfig, HarnessError};

const USAGE: &str = "Uso: wess-check compare <a.json> <b.json> | canonical <f.json> | fingerprint <f.json> \
| check-wasm <respuesta.json>... [--expected <payload.json>] | replay <muestras.jsonl>";

fn usage() -> HarnessError {
    HarnessError::Usage(USAGE.to_string())
}

fn read(path: &str) -> Result<Value, HarnessError> {
    read_json_file(Path::new(path))
}

/// 0 si son equivalentes, 1 si no.
fn compare(a: &str, b: &str) -> Result<i32, HarnessError> {
    match first_difference(&read(a)?, &read(b)?) {
        None => {
            println!("equivalent");
            Ok(0)
        }
        Some(m) => {
            println!("not equivalent: {m}");
            Ok(1)
        }
    }
}

fn check_wasm_files(args: &[String]) -> Result<i32, HarnessError> {
    let mut files: Vec<&str> = Vec::new();
    let mut expected_path: Option<&str> = None;
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--expected" => {
                i += 1;
                expected_path = Some(args.get(i).ok_or_else(usage)?.as_str());
            }
            other => files.push(other),
        }
        i += 1;
    }
    if files.is_empty() {
        return Err(usage());
    }
    let expected = match expected_path {
        Some(p) => read(p)?,
        None => HarnessConfig::from_env()?.expected_value()?,
    };

    let mut failed = 0usize;
    for file in &files {
        let response = read(file)?;
        // Un error del dominio en un archivo no detiene la revisión del resto.
        match explain_wasm(&response, &expected) {
            Ok(None) => println!("{file}: ok"),
            Ok(Some(m)) => {
                failed += 1;
                println!("{file}: mismatch {m}");
            }
            Err(e) => {
                failed += 1;
                println!("{file}: error {e}");
            }
        }
    }
    info!("check-wasm: {} files, {} failed", files.len(), failed);
    Ok(if failed == 0 { 0 } else { 1 })
}

fn replay(path: &str) -> Result<i32, HarnessError> {
    let cfg = HarnessConfig::from_env()?;
    let expected = cfg.expected_value()?;
    let samples = load_samples(BufReader::new(File::open(path)?))?;
    info!("replaying {} samples against {}", samples.len(), cfg.base_url);
    let tally = run_samples(&samples, &expected, &cfg);
    print!("{tally}");
    if let Some(rate) = tally.overall_rate() {
        println!("overall: {:.2}%", rate * 100.0);
    }
    Ok(if tally.all_passed() { 0 } else { 1 })
}

fn run(args: &[String]) -> Result<i32, HarnessError> {
    let Some((cmd, rest)) = args.split_first() else {
        return Err(usage());
    };
    match (cmd.as_str(), rest) {
        ("compare", [a, b]) => compare(a, b),
        ("canonical", [f]) => {
            println!("{}", to_canonical_json(&read(f)?));
            Ok(0)
        }
        ("fingerprint", [f]) => {
            println!("{}", hash_value(&read(f)?));
            Ok(0)
        }
        ("check-wasm", rest) => check_wasm_files(rest),
        ("replay", [f]) => replay(f),
        _ => Err(usage()),
    }
}

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("wess_check=info,wess_harness=info"),
    )
    .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let code = match run(&args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("[wess-check] {e}");
            e.exit_code()
        }
    };
    process::exit(code);
}
