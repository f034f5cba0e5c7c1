/// zkpass Demonstration Driver
///
/// Runs the KZG protocol end to end over the crate's own BLS12-381 stack.
/// The first argument selects a mode:
///
/// - `kzg`: commit/open/verify on a fixed payload plus the swapped-point check
/// - `demo`: two provers with different payloads against one verifier
/// - `auth`: register an identity and log in with the right and a wrong password
///
/// Without an argument all three run. `RUST_LOG` controls log output and
/// `ZKPASS_CONFIG` may point at a JSON protocol configuration.

use std::env;
use std::time::Instant;

use rand::rngs::OsRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use zkpass::{
    CredentialStore, Field, Fr, MetricsCollector, ProtocolConfig, ProtocolMetrics, Prover, Result,
    Srs, Verifier,
};

/// Main entry point for the zkpass demo
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    println!("zkpass: KZG Commitments over BLS12-381");
    println!("======================================");

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            println!("✗ configuration: {}", e);
            std::process::exit(2);
        }
    };

    let args: Vec<String> = env::args().collect();
    let mode = if args.len() > 1 { args[1].as_str() } else { "all" };

    let result = match mode {
        "kzg" => {
            println!("\n=== KZG Protocol Validation ===");
            run_kzg(&config)
        }
        "demo" => {
            println!("\n=== Prover / Verifier Demo ===");
            run_demo(&config)
        }
        "auth" => {
            println!("\n=== Registration and Login ===");
            run_auth(&config)
        }
        _ => {
            println!("\n=== KZG Protocol Validation ===");
            run_kzg(&config)
                .and_then(|_| {
                    println!("\n=== Prover / Verifier Demo ===");
                    run_demo(&config)
                })
                .and_then(|_| {
                    println!("\n=== Registration and Login ===");
                    run_auth(&config)
                })
        }
    };

    if let Err(e) = result {
        println!("✗ {}", e);
        std::process::exit(1);
    }

    println!("\n=== Run Complete ===");
    display_usage_info();
}

fn load_config() -> Result<ProtocolConfig> {
    match env::var("ZKPASS_CONFIG") {
        Ok(path) => {
            info!(%path, "loading configuration");
            ProtocolConfig::from_file(path)
        }
        Err(_) => Ok(ProtocolConfig::default()),
    }
}

/// Commit to 460 bytes of 0xFF, open at x = 1 and verify, then check that the
/// swapped evaluation point is rejected.
fn run_kzg(config: &ProtocolConfig) -> Result<()> {
    let mut collector = MetricsCollector::new("kzg");
    let payload = vec![0xffu8; 460];

    let setup_start = Instant::now();
    let srs = Srs::generate(&mut OsRng, config.srs_length())?;
    let setup_time = setup_start.elapsed();

    let prover = Prover::new(&srs, &payload, config)?;

    let commit_start = Instant::now();
    let commitment = prover.commitment()?;
    let commit_time = commit_start.elapsed();

    let a = Fr::one();
    let y = prover.evaluate(&a);

    let prove_start = Instant::now();
    let proof = prover.witness(&a)?;
    let prove_time = prove_start.elapsed();

    let verify_start = Instant::now();
    let valid = srs.verify(&commitment, &proof, &(a.clone(), y.clone()));
    let verify_time = verify_start.elapsed();

    let mut metrics = ProtocolMetrics::new("kzg", "honest_opening");
    metrics.set_timing(setup_time, commit_time, prove_time, verify_time);
    metrics.set_inputs(srs.len(), payload.len());
    metrics.set_verification(valid, true);
    metrics.commitment_fingerprint = Some(commitment.fingerprint());
    println!("  {} {}: verify = {}", mark(metrics.outcome_matches()), metrics.test_case, valid);
    collector.add_metric(metrics);

    let verify_start = Instant::now();
    let swapped = srs.verify(&commitment, &proof, &(y, a));
    let verify_time = verify_start.elapsed();

    let mut metrics = ProtocolMetrics::new("kzg", "swapped_point");
    metrics.set_timing(setup_time, commit_time, prove_time, verify_time);
    metrics.set_inputs(srs.len(), payload.len());
    metrics.set_verification(swapped, false);
    println!("  {} {}: verify = {}", mark(metrics.outcome_matches()), metrics.test_case, swapped);
    collector.add_metric(metrics);

    collector.print_summary();
    match collector.to_json() {
        Ok(json) => println!("\n{}", json),
        Err(e) => println!("Warning: failed to serialise metrics: {}", e),
    }
    Ok(())
}

/// One verifier, a prover holding the committed payload and one holding a
/// different payload.
fn run_demo(config: &ProtocolConfig) -> Result<()> {
    let srs = Srs::generate(&mut OsRng, config.srs_length())?;
    let honest = Prover::new(&srs, &[0xffu8; 460], config)?;
    let other = Prover::new(&srs, &[0xf0u8; 460], config)?;

    let verifier = Verifier::new(&srs, &mut OsRng, config)?;
    let a = verifier.challenge().clone();
    println!("Challenge: a = {}", a);

    let commitment = honest.commitment()?;
    println!("Commitment: {}", commitment);

    let forged = other.witness(&a)?;
    let accepted = verifier.verify(&commitment, &other.evaluate(&a), &forged);
    println!("  {} other payload: verify = {}", mark(!accepted), accepted);

    let proof = honest.witness(&a)?;
    let accepted = verifier.verify(&commitment, &honest.evaluate(&a), &proof);
    println!("  {} committed payload: verify = {}", mark(accepted), accepted);
    Ok(())
}

fn run_auth(config: &ProtocolConfig) -> Result<()> {
    let srs = Srs::generate(&mut OsRng, config.srs_length())?;
    let mut store = CredentialStore::new();

    let commitment = store.register(&srs, config, "user1", "secure-password")?;
    println!("Registered user1: {}", commitment);

    let verifier = Verifier::new(&srs, &mut OsRng, config)?;
    let challenge = verifier.challenge();

    let ok = store.login(&srs, config, "user1", "secure-password", challenge)?;
    println!("  {} login with registered password: {}", mark(ok), ok);

    let wrong = store.login(&srs, config, "user1", "wrong-password", challenge)?;
    println!("  {} login with wrong password: {}", mark(!wrong), wrong);
    Ok(())
}

fn mark(expected: bool) -> &'static str {
    if expected {
        "✓"
    } else {
        "✗"
    }
}

/// Display usage information and available modes
fn display_usage_info() {
    println!("\nAvailable execution modes:");
    println!("  cargo run kzg     - KZG commit/open/verify validation");
    println!("  cargo run demo    - Prover/verifier demo");
    println!("  cargo run auth    - Registration and login");
    println!("  cargo run         - All of the above");
    println!("\nEnvironment:");
    println!("  RUST_LOG=debug    - Protocol-level logging");
    println!("  ZKPASS_CONFIG=... - JSON protocol configuration");
}
