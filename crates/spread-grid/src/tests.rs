//! Unit tests for spread-grid.

use spread_core::SimConfig;

/// Baseline config used across the init tests; individual tests override
/// fields with struct-update syntax.
fn test_config(grid_size: u32, density: f64, origins: Vec<u32>) -> SimConfig {
    SimConfig {
        grid_size,
        max_steps:              10,
        num_behaviors:          origins.len() as u16,
        prob_unaffected:        0.5,
        prob_affected:          0.5,
        initial_agents_density: density,
        origins_per_behavior:   origins,
        seed:                   42,
        num_threads:            Some(1),
    }
}

#[cfg(test)]
mod state {
    use spread_core::BehaviorId;

    use crate::CellState;

    #[test]
    fn code_roundtrip() {
        for state in [
            CellState::Empty,
            CellState::Unaffected,
            CellState::Carrying(BehaviorId(0)),
            CellState::Carrying(BehaviorId(5)),
        ] {
            assert_eq!(CellState::from_code(state.code()), state);
        }
    }

    #[test]
    fn raw_codes_match_encoding() {
        assert_eq!(CellState::Empty.code(), 0);
        assert_eq!(CellState::Unaffected.code(), 1);
        assert_eq!(CellState::Carrying(BehaviorId(0)).code(), 2);
        assert_eq!(CellState::Carrying(BehaviorId(3)).code(), 5);
    }

    #[test]
    fn agent_and_behavior_helpers() {
        assert!(!CellState::Empty.is_agent());
        assert!(CellState::Unaffected.is_agent());
        assert!(CellState::Carrying(BehaviorId(1)).is_agent());
        assert_eq!(CellState::Empty.behavior(), None);
        assert_eq!(CellState::Unaffected.behavior(), None);
        assert_eq!(CellState::Carrying(BehaviorId(1)).behavior(), Some(BehaviorId(1)));
    }
}

#[cfg(test)]
mod grid {
    use spread_core::{BehaviorId, CellId};

    use crate::{CellState, Grid, GridError};

    #[test]
    fn new_empty_is_all_empty() {
        let g = Grid::new_empty(4);
        assert_eq!(g.len(), 16);
        assert!(g.iter().all(|(_, s)| s == CellState::Empty));
        assert_eq!(g.total_agents(), 0);
    }

    #[test]
    fn from_cells_rejects_wrong_length() {
        let err = Grid::from_cells(3, vec![CellState::Empty; 8]).unwrap_err();
        assert_eq!(err, GridError::SizeMismatch { expected_cells: 9, got: 8 });
    }

    #[test]
    fn get_set_roundtrip() {
        let mut g = Grid::new_empty(3);
        g.set(1, 2, CellState::Carrying(BehaviorId(0)));
        assert_eq!(g.get(1, 2), CellState::Carrying(BehaviorId(0)));
        assert_eq!(g.get_id(CellId::from_coords(1, 2, 3)), CellState::Carrying(BehaviorId(0)));
        assert_eq!(g.get(2, 1), CellState::Empty);
    }

    #[test]
    fn iter_is_row_major() {
        let mut g = Grid::new_empty(2);
        g.set(0, 1, CellState::Unaffected);
        let ids: Vec<_> = g.iter().map(|(id, _)| id.0).collect();
        assert_eq!(ids, vec![0, 1, 2, 3]);
        assert_eq!(g.cells()[1], CellState::Unaffected);
    }

    #[test]
    fn tallies() {
        let mut g = Grid::new_empty(3);
        g.set(0, 0, CellState::Unaffected);
        g.set(0, 1, CellState::Carrying(BehaviorId(0)));
        g.set(1, 1, CellState::Carrying(BehaviorId(0)));
        g.set(2, 2, CellState::Carrying(BehaviorId(1)));
        assert_eq!(g.total_agents(), 4);
        assert_eq!(g.behavior_cells(2), vec![2, 1]);
        assert_eq!(g.count_state(CellState::Empty), 5);
    }

    #[test]
    fn behavior_validation() {
        let mut g = Grid::new_empty(2);
        g.set(0, 0, CellState::Carrying(BehaviorId(1)));
        g.validate_behaviors(2).unwrap();
        assert_eq!(
            g.validate_behaviors(1).unwrap_err(),
            GridError::BehaviorOutOfRange { behavior: BehaviorId(1), num_behaviors: 1 },
        );
    }
}

#[cfg(test)]
mod neighborhood {
    use spread_core::BehaviorId;

    use crate::{CellState, Grid, Neighborhood};

    /// 3×3 grid with a distinct behavior in every cell so each neighbor is
    /// identifiable.
    fn labeled_grid() -> Grid {
        let mut g = Grid::new_empty(3);
        for row in 0..3 {
            for col in 0..3 {
                g.set(row, col, CellState::Carrying(BehaviorId((row * 3 + col) as u16)));
            }
        }
        g
    }

    fn b(n: u16) -> CellState {
        CellState::Carrying(BehaviorId(n))
    }

    #[test]
    fn interior_cell_sees_four_distinct_neighbors() {
        let g = labeled_grid();
        let n = Neighborhood::sample(&g, 1, 1);
        assert_eq!(n.west,  b(3));
        assert_eq!(n.north, b(1));
        assert_eq!(n.east,  b(5));
        assert_eq!(n.south, b(7));
    }

    #[test]
    fn origin_corner_clamps_west_and_north_to_self() {
        let g = labeled_grid();
        let n = Neighborhood::sample(&g, 0, 0);
        // (0,0) has no west or north neighbor; it sees itself instead.
        assert_eq!(n.west,  b(0));
        assert_eq!(n.north, b(0));
        assert_eq!(n.east,  b(1));
        assert_eq!(n.south, b(3));
    }

    #[test]
    fn far_corner_clamps_east_and_south_to_self() {
        let g = labeled_grid();
        let n = Neighborhood::sample(&g, 2, 2);
        assert_eq!(n.west,  b(7));
        assert_eq!(n.north, b(5));
        assert_eq!(n.east,  b(8));
        assert_eq!(n.south, b(8));
    }

    #[test]
    fn single_cell_grid_is_its_own_neighborhood() {
        let mut g = Grid::new_empty(1);
        g.set(0, 0, CellState::Unaffected);
        let n = Neighborhood::sample(&g, 0, 0);
        assert_eq!(n.as_array(), [CellState::Unaffected; 4]);
    }

    #[test]
    fn contains_checks_all_four() {
        let g = labeled_grid();
        let n = Neighborhood::sample(&g, 1, 1);
        assert!(n.contains(b(3)));
        assert!(n.contains(b(7)));
        assert!(!n.contains(b(4))); // the center itself is not a neighbor
    }
}

#[cfg(test)]
mod init {
    use spread_core::{BehaviorId, SimRng};

    use super::test_config;
    use crate::{CellState, GridError, GridInitializer};

    #[test]
    fn zero_density_yields_all_empty() {
        let cfg = test_config(8, 0.0, vec![0]);
        let (grid, rngs) = GridInitializer::new(&cfg).build(&mut SimRng::new(cfg.seed)).unwrap();
        assert_eq!(grid.total_agents(), 0);
        assert_eq!(rngs.len(), 64);
    }

    #[test]
    fn zero_density_with_origins_fails() {
        let cfg = test_config(8, 0.0, vec![1]);
        let err = GridInitializer::new(&cfg).build(&mut SimRng::new(cfg.seed)).unwrap_err();
        assert_eq!(
            err,
            GridError::InsufficientUnaffectedCells {
                behavior:  BehaviorId(0),
                requested: 1,
                available: 0,
            },
        );
    }

    #[test]
    fn full_density_seeding_counts() {
        let cfg = test_config(4, 1.0, vec![3, 4]);
        let (grid, _) = GridInitializer::new(&cfg).build(&mut SimRng::new(cfg.seed)).unwrap();
        // All 16 cells are agents; 7 were flipped to origins.
        assert_eq!(grid.total_agents(), 16);
        assert_eq!(grid.behavior_cells(2), vec![3, 4]);
        assert_eq!(grid.count_state(CellState::Unaffected), 9);
    }

    #[test]
    fn origins_never_overlap() {
        // Pool of 9, all 9 consumed across three behaviors: every cell must
        // end up carrying exactly one behavior.
        let cfg = test_config(3, 1.0, vec![3, 3, 3]);
        let (grid, _) = GridInitializer::new(&cfg).build(&mut SimRng::new(cfg.seed)).unwrap();
        assert_eq!(grid.count_state(CellState::Unaffected), 0);
        assert_eq!(grid.behavior_cells(3), vec![3, 3, 3]);
    }

    #[test]
    fn pool_exhaustion_across_behaviors_reports_remainder() {
        // 4 unaffected cells; behavior 0 takes 3, behavior 1 wants 2 more.
        let cfg = test_config(2, 1.0, vec![3, 2]);
        let err = GridInitializer::new(&cfg).build(&mut SimRng::new(cfg.seed)).unwrap_err();
        assert_eq!(
            err,
            GridError::InsufficientUnaffectedCells {
                behavior:  BehaviorId(1),
                requested: 2,
                available: 1,
            },
        );
    }

    #[test]
    fn deterministic_under_fixed_seed() {
        let cfg = test_config(10, 0.6, vec![2, 2]);
        let (a, _) = GridInitializer::new(&cfg).build(&mut SimRng::new(cfg.seed)).unwrap();
        let (b, _) = GridInitializer::new(&cfg).build(&mut SimRng::new(cfg.seed)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn partial_density_is_plausible() {
        let cfg = test_config(32, 0.5, vec![0]);
        let (grid, _) = GridInitializer::new(&cfg).build(&mut SimRng::new(cfg.seed)).unwrap();
        let agents = grid.total_agents();
        // 1024 Bernoulli(0.5) draws; bounds are > 12 sigma out.
        assert!((300..=724).contains(&(agents as usize)), "got {agents}");
    }
}
