//! Reproducible train/test splitting.

use rand::{SeedableRng as _, seq::SliceRandom as _};
use rand_pcg::Pcg32;

use crate::{error::AnalysisError, table::Table};

/// Splits `0..len` into shuffled `(train, test)` index sets.
///
/// The test set holds `ceil(len * test_size)` indices. The same `seed`
/// always yields the same split.
///
/// # Errors
///
/// Returns [`AnalysisError::InvalidTestSize`] unless `0 < test_size < 1`.
///
/// # Examples
///
/// ```
/// use edakit_analysis::{RANDOM_STATE, TEST_SIZE, split::train_test_indices};
///
/// let (train, test) = train_test_indices(10, TEST_SIZE, RANDOM_STATE).unwrap();
/// assert_eq!((train.len(), test.len()), (8, 2));
/// ```
#[expect(
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation
)]
pub fn train_test_indices(
    len: usize,
    test_size: f64,
    seed: u64,
) -> Result<(Vec<usize>, Vec<usize>), AnalysisError> {
    if !(test_size > 0.0 && test_size < 1.0) {
        return Err(AnalysisError::InvalidTestSize { test_size });
    }
    let num_test = ((len as f64 * test_size).ceil() as usize).min(len);

    let mut rng = Pcg32::seed_from_u64(seed);
    let mut indices = (0..len).collect::<Vec<_>>();
    indices.shuffle(&mut rng);

    let train = indices.split_off(num_test);
    tracing::debug!(train = train.len(), test = indices.len(), seed, "Split rows");
    Ok((train, indices))
}

/// Splits the rows of `table` into `(train, test)` tables.
///
/// # Errors
///
/// Returns [`AnalysisError::InvalidTestSize`] unless `0 < test_size < 1`.
pub fn train_test_split(
    table: &Table,
    test_size: f64,
    seed: u64,
) -> Result<(Table, Table), AnalysisError> {
    let (train, test) = train_test_indices(table.len(), test_size, seed)?;
    Ok((table.select_rows(&train), table.select_rows(&test)))
}
