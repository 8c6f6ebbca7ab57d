//! End-to-end reduction scenarios on the public API.
//!
//! Each test builds a matrix the way a caller would, reduces it, and reads
//! the outcome back through the accessors. Numerical checks use an absolute
//! tolerance; the systems here are small enough that the arithmetic stays
//! well clear of it.

use linsolve_core::{AugmentedMatrix, Index, View};

const TOL: f64 = 1e-10;

fn assert_close(got: f64, want: f64) {
    assert!(
        (got - want).abs() < TOL,
        "expected {want}, got {got} (diff {})",
        (got - want).abs()
    );
}

#[test]
fn test_three_by_three_unique_solution() {
    // x + y + z = 6, 2y + 5z = -4, 2x + 5y - z = 27  =>  x=5, y=3, z=-2
    let mut m = AugmentedMatrix::new(
        vec![
            vec![1.0, 1.0, 1.0],
            vec![0.0, 2.0, 5.0],
            vec![2.0, 5.0, -1.0],
        ],
        vec![6.0, -4.0, 27.0],
    )
    .unwrap();

    m.reduce();

    assert!(m.is_reduced(TOL));
    let expected = [5.0, 3.0, -2.0];
    for (row, want) in expected.iter().enumerate() {
        for col in 0..3 {
            let unit = if col == row { 1.0 } else { 0.0 };
            assert_close(m.cell(row, col).unwrap(), unit);
        }
        assert_close(m.constant(row).unwrap(), *want);
    }
}

#[test]
fn test_spec_scenario_two_by_two() {
    // 2x + y = 5, x + 3y = 10  =>  x=1, y=3
    let mut m =
        AugmentedMatrix::new(vec![vec![2.0, 1.0], vec![1.0, 3.0]], vec![5.0, 10.0]).unwrap();

    m.reduce();

    assert_close(m.constant(0).unwrap(), 1.0);
    assert_close(m.constant(1).unwrap(), 3.0);
    assert_eq!(
        m.get(Index::At(0), Index::All).unwrap(),
        View::Row(vec![1.0, 0.0])
    );
    assert_eq!(
        m.get(Index::At(1), Index::All).unwrap(),
        View::Row(vec![0.0, 1.0])
    );
}

#[test]
fn test_swap_chain_mid_reduction() {
    // zero pivot at every first attempt; the reduction has to pull rows up
    // from below twice
    let mut m = AugmentedMatrix::new(
        vec![
            vec![0.0, 0.0, 3.0],
            vec![0.0, 2.0, 0.0],
            vec![1.0, 0.0, 0.0],
        ],
        vec![9.0, 4.0, 7.0],
    )
    .unwrap();

    m.reduce();

    assert!(m.is_reduced(TOL));
    assert_eq!(m.constants(), &[7.0, 2.0, 3.0]);
}

#[test]
fn test_overdetermined_consistent_system() {
    // three equations, two unknowns, third is the sum of the first two:
    // the redundant row reduces to zeros
    let mut m = AugmentedMatrix::new(
        vec![vec![1.0, 1.0], vec![1.0, -1.0], vec![2.0, 0.0]],
        vec![4.0, 0.0, 4.0],
    )
    .unwrap();

    m.reduce();

    assert!(m.is_reduced(TOL));
    assert_close(m.constant(0).unwrap(), 2.0);
    assert_close(m.constant(1).unwrap(), 2.0);
    assert_eq!(m.row(2).unwrap(), vec![0.0, 0.0]);
    assert_close(m.constant(2).unwrap(), 0.0);
}

#[test]
fn test_underdetermined_wide_system_keeps_free_column() {
    // one equation, three unknowns: a single pivot, two free columns
    let mut m = AugmentedMatrix::new(vec![vec![2.0, 4.0, 6.0]], vec![8.0]).unwrap();

    m.reduce();

    assert_eq!(m.to_rows(), vec![vec![1.0, 2.0, 3.0]]);
    assert_eq!(m.constants(), &[4.0]);
    assert!(m.is_reduced(0.0));
}

#[test]
fn test_column_view_after_reduction() {
    let mut m =
        AugmentedMatrix::new(vec![vec![2.0, 1.0], vec![1.0, 3.0]], vec![5.0, 10.0]).unwrap();
    m.reduce();

    // pivot columns read back as unit columns
    assert_eq!(
        m.get(Index::All, Index::At(0)).unwrap(),
        View::Column(vec![1.0, 0.0])
    );
    assert_eq!(
        m.get(Index::All, Index::At(1)).unwrap(),
        View::Column(vec![0.0, 1.0])
    );
}

#[test]
fn test_reduction_step_listener_observes_progress() {
    let mut m = AugmentedMatrix::new(
        vec![vec![0.0, 1.0], vec![2.0, 0.0]],
        vec![3.0, 4.0],
    )
    .unwrap();

    let mut states = Vec::new();
    m.reduce_with(|row, state| states.push((row, state.to_rows(), state.constants().to_vec())));

    // after the first pass the swapped-up pivot row is normalized and the
    // other row untouched; after the second the matrix is fully reduced
    assert_eq!(states.len(), 2);
    assert_eq!(states[0].1, vec![vec![1.0, 0.0], vec![0.0, 1.0]]);
    assert_eq!(states[1].1, vec![vec![1.0, 0.0], vec![0.0, 1.0]]);
    assert_eq!(states[1].2, vec![2.0, 3.0]);
}
