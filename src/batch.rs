//! Validating many independent grids at once

use crate::grid::Grid;
use crate::validation::{analyze, MazeReport};
use log::info;
use rayon::prelude::*;

/// Analyzes every [`Grid`] in parallel, returning the reports in the same order as the grids
///
/// ```
/// use perfect_maze::batch::analyze_all;
/// use perfect_maze::grid::standard_grids::StandardGrid;
///
/// let grids: Vec<_> = StandardGrid::get_all().iter().map(|g| g.get_grid()).collect();
/// let reports = analyze_all(&grids);
/// assert_eq!(reports.len(), grids.len());
/// ```
pub fn analyze_all(grids: &[Grid]) -> Vec<MazeReport> {
    let reports: Vec<MazeReport> = grids.par_iter().map(analyze).collect();
    info!(
        "Analyzed {} grids, {} perfect",
        reports.len(),
        reports.iter().filter(|r| r.is_perfect()).count()
    );
    reports
}

/// Counts how many of the given grids are perfect mazes
pub fn count_perfect(grids: &[Grid]) -> usize {
    grids
        .par_iter()
        .filter(|grid| analyze(grid).is_perfect())
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::standard_grids::StandardGrid;
    use crate::validation::tests::random_tree;
    use crate::validation::MazeVerdict;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn reports_keep_order() {
        let grids: Vec<_> = StandardGrid::get_all()
            .iter()
            .map(|g| g.get_grid())
            .collect();
        let reports = analyze_all(&grids);
        for (grid, report) in grids.iter().zip(&reports) {
            assert_eq!(*report, analyze(grid));
        }
        assert_eq!(reports[0].verdict, MazeVerdict::NoPathCells);
        assert_eq!(reports[8].verdict, MazeVerdict::Disconnected);
    }

    #[test]
    fn count_standard_grids() {
        let grids: Vec<_> = StandardGrid::get_all()
            .iter()
            .map(|g| g.get_grid())
            .collect();
        assert_eq!(count_perfect(&grids), 5);
        assert_eq!(count_perfect(&[]), 0);
    }

    #[test]
    fn many_random_trees() {
        let mut rng = StdRng::seed_from_u64(1234);
        let grids: Vec<_> = (0..200)
            .map(|i| random_tree(&mut rng, 1 + i % 13, 1 + i % 7))
            .collect();
        assert_eq!(count_perfect(&grids), grids.len());
        assert!(analyze_all(&grids).iter().all(|r| r.is_perfect()));
    }
}
