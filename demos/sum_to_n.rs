//! Runs the three triangular-sum implementations over the sample inputs and logs
//! whether they agree.
//!
//! Run from repo root: `cargo run --example sum_to_n`

use resource_service::triangular::{verify, SAMPLE_INPUTS};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("sum_to_n=info".parse()?))
        .init();

    let checks = verify(&SAMPLE_INPUTS);
    for check in &checks {
        let result = if check.agrees() { "PASS" } else { "FAIL" };
        tracing::info!(
            n = check.n,
            sum_to_n_a = check.a,
            sum_to_n_b = check.b,
            sum_to_n_c = check.c,
            result,
            "sum_to_n"
        );
    }

    let failed = checks.iter().filter(|c| !c.agrees()).count();
    if failed > 0 {
        return Err(format!("{} of {} inputs disagree", failed, checks.len()).into());
    }
    tracing::info!(inputs = checks.len(), "all implementations agree");
    Ok(())
}
