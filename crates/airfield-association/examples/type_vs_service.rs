//! Compare every pair of airport types in the sample dataset

use airfield_association::test_association;
use airfield_core::test_data::TestAirports;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Airport Type vs Scheduled Service ===\n");

    let dataset = TestAirports::new_england();
    let types = dataset.type_domain();

    for (i, var1) in types.iter().enumerate() {
        for var2 in types.iter().skip(i + 1) {
            match test_association(&dataset, var1, var2) {
                Ok(result) => {
                    println!("{}", result.question());
                    println!("  Chi-Square Statistic: {:.4}", result.chi2);
                    println!("  P-Value: {}", result.p_value);
                    println!("  {}\n", result.headline());
                }
                Err(e) => println!("{var1} vs {var2}: skipped ({e})\n"),
            }
        }
    }

    Ok(())
}
