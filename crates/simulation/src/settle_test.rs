//! Regression tests: piles should settle into a resting shape and stay put.

#[cfg(test)]
mod tests {
    use crate::config::{GridConfig, SimulationParameters};
    use crate::run::{NoDelay, Outcome, Renderer, Simulation};
    use crate::Grid;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::io;

    struct Discard;

    impl Renderer for Discard {
        fn render(&mut self, _grid: &Grid) -> io::Result<()> {
            Ok(())
        }
    }

    /// Helper: print the grid for debugging.
    fn dump(grid: &Grid) {
        for (y, row) in grid.rows().enumerate() {
            let line: String = row.iter().map(|c| if c.filled { '#' } else { '.' }).collect();
            eprintln!("y={y:2}: {line}");
        }
    }

    /// True when no grain has an open cell below or diagonally below.
    fn at_rest(grid: &Grid) -> bool {
        grid.iter().filter(|(_, _, c)| c.filled).all(|(x, y, _)| {
            if y + 1 == grid.height {
                return true;
            }
            let open = |tx: usize| grid.get(tx, y + 1).is_empty();
            !open(x) && (x == 0 || !open(x - 1)) && (x + 1 == grid.width || !open(x + 1))
        })
    }

    #[test]
    fn column_collapses_into_pyramid() {
        let mut grid = Grid::new(9, 6);
        for y in 0..4 {
            grid.set(4, y, crate::Cell::filled());
        }
        let params = SimulationParameters::new(4, GridConfig::new(9, 6).unwrap()).unwrap();
        let mut sim = Simulation::from_grid(params, grid);

        let outcome = sim.run_from(&mut Discard, &mut NoDelay).unwrap();

        dump(sim.grid());
        assert!(matches!(outcome, Outcome::Stable { .. }));
        assert_eq!(
            *sim.grid(),
            Grid::from_rows(&[
                ".........",
                ".........",
                ".........",
                ".........",
                "....#....",
                "...###...",
            ])
        );
    }

    #[test]
    fn random_reference_grid_settles_at_rest() {
        for seed in [1, 42, 1234] {
            let params = SimulationParameters::new(1500, GridConfig::default()).unwrap();
            let mut sim = Simulation::new(params);
            let outcome = sim
                .run(&mut StdRng::seed_from_u64(seed), &mut Discard, &mut NoDelay)
                .unwrap();

            assert!(
                matches!(outcome, Outcome::Stable { .. }),
                "seed {seed} did not settle: {outcome:?}"
            );
            assert!(at_rest(sim.grid()), "seed {seed} left a grain hanging");
            assert!(outcome.grains() <= 1500);

            let mut again = sim.grid().clone();
            again.step();
            assert_eq!(&again, sim.grid());
        }
    }
}
