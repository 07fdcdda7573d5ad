//! A command-line demonstration driver for banded-matrix arithmetic.
//!
//! The binary generates two reproducible random tridiagonal operands,
//! computes their sum, difference, and product, renders every matrix in
//! dense form, and cross-checks the banded product against a plain O(n³)
//! dense reference before reporting success. Entries are small integers
//! stored as `f64`, so all arithmetic is exact and the cross-check can
//! demand exact agreement.

use anyhow::{Result, anyhow, ensure};
use bandmat::{Tridiagonal, ops};
use clap::Parser;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Command-line interface for the demonstration driver.
#[derive(Parser, Debug)]
#[clap(
    name = "bandops",
    about = "Adds, subtracts, and multiplies random tridiagonal matrices in compact storage."
)]
struct BandOpsArgs {
    /// Dimension of the generated matrices.
    #[clap(long, default_value_t = 8)]
    dim: usize,
    /// Seed for the random operand generator, for reproducible runs.
    #[clap(long, default_value_t = 42)]
    seed: u64,
}

/// Generates a tridiagonal matrix with integer-valued entries in [-9, 9].
fn random_tridiagonal(n: usize, rng: &mut StdRng) -> Result<Tridiagonal<f64>> {
    let mut entry = |_| f64::from(rng.random_range(-9..=9));
    let main: Vec<f64> = (0..n).map(&mut entry).collect();
    let upper: Vec<f64> = (0..n - 1).map(&mut entry).collect();
    let lower: Vec<f64> = (0..n - 1).map(&mut entry).collect();
    Ok(Tridiagonal::from_diagonals(main, upper, lower)?)
}

/// Computes one entry of the product by the dense definition,
/// `R[row][col] = Σ_k A[row][k]·B[k][col]`, reading through `get` so that
/// off-band factors contribute their implicit zeros.
fn dense_product_entry(a: &Tridiagonal<f64>, b: &Tridiagonal<f64>, row: usize, col: usize) -> f64 {
    (0..a.dim()).map(|k| a.get(row, k) * b.get(k, col)).sum()
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logger: {}", e))?;

    let args = BandOpsArgs::parse();
    ensure!(args.dim >= 1, "--dim must be at least 1, got {}", args.dim);

    log::info!(
        "Generating two {n}x{n} tridiagonal operands (seed {seed})",
        n = args.dim,
        seed = args.seed
    );
    let mut rng = StdRng::seed_from_u64(args.seed);
    let a = random_tridiagonal(args.dim, &mut rng)?;
    let b = random_tridiagonal(args.dim, &mut rng)?;

    println!("A =\n{a}");
    println!("B =\n{b}");

    let sum = ops::add_tridiagonal(&a, &b)?;
    println!("A + B =\n{sum}");

    let difference = ops::sub_tridiagonal(&a, &b)?;
    println!("A - B =\n{difference}");

    let product = ops::multiply_tridiagonal(&a, &b)?;
    println!("A * B =\n{product}");

    // Cross-check the banded product against the dense definition. The
    // operands are integer-valued, so agreement must be exact.
    log::info!("Verifying the banded product against a dense reference...");
    for row in 0..args.dim {
        for col in 0..args.dim {
            let expected = dense_product_entry(&a, &b, row, col);
            let actual = product.get(row, col);
            ensure!(
                expected == actual,
                "product mismatch at ({row}, {col}): dense reference {expected}, banded {actual}"
            );
        }
    }
    log::info!("Banded product matches the dense reference on all entries.");

    Ok(())
}
