//! Integration test suite to verify the mathematical correctness of the
//! banded-matrix operations.
//!
//! # Test Methodology
//!
//! The core principle of this suite is to validate the compact banded
//! arithmetic against ground truth that is either analytical or computed on
//! an independent dense representation. The methodology consists of the
//! following steps:
//!
//! 1.  **Construct a Test Problem:** Operands are either hand-written
//!     fixtures whose products can be verified by hand, or reproducibly
//!     random matrices with small integer-valued `f64` entries. Integer
//!     values keep every sum and product exactly representable, so algebraic
//!     identities can be asserted with equality rather than tolerances.
//! 2.  **Compute the Ground Truth:** For multiplication, both operands are
//!     expanded into dense [`faer::Mat`] matrices through the total read
//!     interface, and multiplied with `faer`'s dense kernel, which knows
//!     nothing about the band structure.
//! 3.  **Compare:** The banded result, expanded the same way, must agree
//!     with the dense reference; the norm of the difference is asserted
//!     against a tolerance that only absorbs the dense kernel's summation
//!     order, not any genuine discrepancy.
//!
//! Algebraic identities (round-trip, commutativity, identity element) are
//! asserted directly on the banded representations via value equality.

use anyhow::{Result, ensure};
use bandmat::{BandedMatrix, Pentadiagonal, Tridiagonal, ops};
use faer::Mat;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Tolerance for the dense cross-validation. The entries are integer-valued,
/// so any difference beyond floating-point noise indicates a real defect.
const DENSE_TOLERANCE: f64 = 1e-12;

/// Expands a banded matrix into a dense matrix through the total read
/// interface, implicit zeros included.
fn to_dense<M: BandedMatrix<f64>>(matrix: &M) -> Mat<f64> {
    Mat::from_fn(matrix.dim(), matrix.dim(), |row, col| matrix.get(row, col))
}

/// Generates a tridiagonal matrix with integer-valued entries in [-9, 9].
fn random_tridiagonal(n: usize, rng: &mut StdRng) -> Tridiagonal<f64> {
    let mut entry = |_| f64::from(rng.random_range(-9..=9));
    let main: Vec<f64> = (0..n).map(&mut entry).collect();
    let upper: Vec<f64> = (0..n - 1).map(&mut entry).collect();
    let lower: Vec<f64> = (0..n - 1).map(&mut entry).collect();
    Tridiagonal::from_diagonals(main, upper, lower).unwrap()
}

/// Generates a pentadiagonal matrix with integer-valued entries in [-9, 9].
fn random_pentadiagonal(n: usize, rng: &mut StdRng) -> Pentadiagonal<f64> {
    let mut entry = |_| f64::from(rng.random_range(-9..=9));
    let main: Vec<f64> = (0..n).map(&mut entry).collect();
    let upper1: Vec<f64> = (0..n - 1).map(&mut entry).collect();
    let upper2: Vec<f64> = (0..n.saturating_sub(2)).map(&mut entry).collect();
    let lower1: Vec<f64> = (0..n - 1).map(&mut entry).collect();
    let lower2: Vec<f64> = (0..n.saturating_sub(2)).map(&mut entry).collect();
    Pentadiagonal::from_diagonals(main, upper1, upper2, lower1, lower2).unwrap()
}

/// The canonical 4×4 operand: main = [1, 2, 3, 4], upper = lower = [1, 1, 1].
///
///     | 1 1 0 0 |
///     | 1 2 1 0 |
///     | 0 1 3 1 |
///     | 0 0 1 4 |
fn canonical_operand() -> Tridiagonal<f64> {
    Tridiagonal::from_diagonals(vec![1.0, 2.0, 3.0, 4.0], vec![1.0; 3], vec![1.0; 3]).unwrap()
}

/// A macro to generate the dense cross-validation test for one dimension.
///
/// Each generated test multiplies two random tridiagonal matrices in banded
/// storage, multiplies their dense expansions with `faer`, and asserts that
/// the two results agree. The dimensions cover the degenerate sizes (1, 2),
/// the smallest size with a full band (3), the canonical fixture size (4),
/// and two larger sizes where interior rows dominate.
macro_rules! generate_dense_product_test {
    ($test_name:ident, $n:expr) => {
        #[test]
        fn $test_name() -> Result<()> {
            let n = $n;
            let mut rng = StdRng::seed_from_u64(42 + n as u64);
            let a = random_tridiagonal(n, &mut rng);
            let b = random_tridiagonal(n, &mut rng);

            let product = ops::multiply_tridiagonal(&a, &b)?;

            let dense_reference = &to_dense(&a) * &to_dense(&b);
            let difference = (&to_dense(&product) - &dense_reference).norm_l2();
            ensure!(
                difference <= DENSE_TOLERANCE,
                "banded product diverges from the dense reference for n = {}: {}",
                n,
                difference
            );
            Ok(())
        }
    };
}

generate_dense_product_test!(test_product_matches_dense_n1, 1);
generate_dense_product_test!(test_product_matches_dense_n2, 2);
generate_dense_product_test!(test_product_matches_dense_n3, 3);
generate_dense_product_test!(test_product_matches_dense_n4, 4);
generate_dense_product_test!(test_product_matches_dense_n8, 8);
generate_dense_product_test!(test_product_matches_dense_n64, 64);

#[test]
fn test_addition_matches_fixture() -> Result<()> {
    let a = canonical_operand();
    let sum = ops::add_tridiagonal(&a, &a)?;
    ensure!(sum.main() == [2.0, 4.0, 6.0, 8.0]);
    ensure!(sum.upper() == [2.0, 2.0, 2.0]);
    ensure!(sum.lower() == [2.0, 2.0, 2.0]);
    Ok(())
}

#[test]
fn test_multiplication_matches_fixture() -> Result<()> {
    // Squaring the canonical operand by hand:
    //
    //     | 1 1 0 0 |²   |  2  3  1  0 |
    //     | 1 2 1 0 |  = |  2  6  5  1 |
    //     | 0 1 3 1 |    |  1  5 11  7 |
    //     | 0 0 1 4 |    |  0  1  7 17 |
    //
    // Every branch of the product kernel is exercised: boundary rows 0 and 3
    // drop their missing contributions, interior rows accumulate all three
    // main-diagonal terms, and the outermost diagonals each collapse to a
    // single product.
    let a = canonical_operand();
    let product = ops::multiply_tridiagonal(&a, &a)?;
    ensure!(product.main() == [2.0, 6.0, 11.0, 17.0]);
    ensure!(product.upper1() == [3.0, 5.0, 7.0]);
    ensure!(product.upper2() == [1.0, 1.0]);
    ensure!(product.lower1() == [2.0, 5.0, 7.0]);
    ensure!(product.lower2() == [1.0, 1.0]);
    Ok(())
}

#[test]
fn test_add_then_subtract_round_trips() -> Result<()> {
    // With integer-valued entries, (A + B) - B must reproduce A exactly,
    // diagonal by diagonal.
    let mut rng = StdRng::seed_from_u64(42);
    let a = random_tridiagonal(50, &mut rng);
    let b = random_tridiagonal(50, &mut rng);

    let round_tripped = ops::sub_tridiagonal(&ops::add_tridiagonal(&a, &b)?, &b)?;
    ensure!(round_tripped == a, "round trip failed to reproduce the left operand");
    Ok(())
}

#[test]
fn test_addition_commutes_for_both_shapes() -> Result<()> {
    let mut rng = StdRng::seed_from_u64(42);

    let a = random_tridiagonal(20, &mut rng);
    let b = random_tridiagonal(20, &mut rng);
    ensure!(ops::add_tridiagonal(&a, &b)? == ops::add_tridiagonal(&b, &a)?);

    let c = random_pentadiagonal(20, &mut rng);
    let d = random_pentadiagonal(20, &mut rng);
    ensure!(ops::add_pentadiagonal(&c, &d)? == ops::add_pentadiagonal(&d, &c)?);
    Ok(())
}

#[test]
fn test_pentadiagonal_round_trip() -> Result<()> {
    let mut rng = StdRng::seed_from_u64(42);
    let a = random_pentadiagonal(30, &mut rng);
    let b = random_pentadiagonal(30, &mut rng);

    let round_tripped = ops::sub_pentadiagonal(&ops::add_pentadiagonal(&a, &b)?, &b)?;
    ensure!(round_tripped == a);
    Ok(())
}

#[test]
fn test_identity_product_embeds_identity() -> Result<()> {
    // Multiplying two tridiagonal identities yields the identity embedded in
    // pentadiagonal storage: unit main diagonal, all four off-diagonals zero.
    let identity = Tridiagonal::<f64>::identity(5)?;
    let product = ops::multiply_tridiagonal(&identity, &identity)?;
    ensure!(product == Pentadiagonal::identity(5)?);
    ensure!(product.upper1().iter().all(|&x| x == 0.0));
    ensure!(product.upper2().iter().all(|&x| x == 0.0));
    ensure!(product.lower1().iter().all(|&x| x == 0.0));
    ensure!(product.lower2().iter().all(|&x| x == 0.0));
    Ok(())
}

#[test]
fn test_dimension_mismatch_is_rejected() {
    let three = Tridiagonal::<f64>::zeros(3).unwrap();
    let four = Tridiagonal::<f64>::zeros(4).unwrap();

    let expected = "Dimension mismatch: left operand has dimension 3, right operand has dimension 4.";
    assert_eq!(
        ops::add_tridiagonal(&three, &four).unwrap_err().to_string(),
        expected
    );
    assert_eq!(
        ops::sub_tridiagonal(&three, &four).unwrap_err().to_string(),
        expected
    );
    assert_eq!(
        ops::multiply_tridiagonal(&three, &four)
            .unwrap_err()
            .to_string(),
        expected
    );
}

#[test]
fn test_off_band_reads_are_zero_for_both_shapes() {
    let mut rng = StdRng::seed_from_u64(42);
    let tri = random_tridiagonal(6, &mut rng);
    let penta = random_pentadiagonal(6, &mut rng);

    for row in 0usize..6 {
        for col in 0usize..6 {
            if row.abs_diff(col) > 1 {
                assert_eq!(tri.get(row, col), 0.0);
            }
            if row.abs_diff(col) > 2 {
                assert_eq!(penta.get(row, col), 0.0);
            }
        }
    }
}

#[test]
fn test_degenerate_products_have_empty_outer_diagonals() -> Result<()> {
    // n = 1 and n = 2 are legal: the diagonals that cannot exist at that
    // size come back empty, and the stored entries still match the dense
    // reference (covered by the generated tests above).
    let mut rng = StdRng::seed_from_u64(42);

    let single = random_tridiagonal(1, &mut rng);
    let product = ops::multiply_tridiagonal(&single, &single)?;
    ensure!(product.upper1().is_empty());
    ensure!(product.upper2().is_empty());
    ensure!(product.lower1().is_empty());
    ensure!(product.lower2().is_empty());

    let pair = random_tridiagonal(2, &mut rng);
    let product = ops::multiply_tridiagonal(&pair, &pair)?;
    ensure!(product.upper1().len() == 1);
    ensure!(product.upper2().is_empty());
    ensure!(product.lower2().is_empty());
    Ok(())
}

#[test]
fn test_zero_dimension_construction_is_rejected() {
    assert!(Tridiagonal::<f64>::zeros(0).is_err());
    assert!(Pentadiagonal::<f64>::zeros(0).is_err());
    assert!(Tridiagonal::<f64>::identity(0).is_err());
    assert!(
        Tridiagonal::<f64>::from_diagonals(vec![], vec![], vec![])
            .unwrap_err()
            .to_string()
            .starts_with("Invalid dimension")
    );
}
