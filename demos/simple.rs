use grid_search::{Algorithm, Board, Counter};

// Every strategy is run on the same 7x7 layout
//  _______
// |S....#.|
// |.###.#.|
// |...#...|
// |##.#.##|
// |.....#.|
// |.###.#.|
// |.#....E|
//  _______
// where
// - # marks a barrier
// - S marks the start
// - E marks the end
//
// After each run the grid is printed with o for open cells, x for closed cells and * for the path.

const LAYOUT: &str = "
    S....#.
    .###.#.
    ...#...
    ##.#.##
    .....#.
    .###.#.
    .#....E
";

fn main() {
    for algorithm in Algorithm::ALL {
        let mut board = Board::parse(LAYOUT).unwrap();
        board.select(algorithm.name()).unwrap();
        let mut redraws = Counter::default();
        let outcome = board.run(&mut redraws).unwrap();
        println!("{algorithm}:");
        println!("{}", board.grid());
        match outcome.hops() {
            Some(hops) => println!(
                "Path of {hops} hops, {} cells expanded, {} redraws\n",
                outcome.expanded.len(),
                redraws.0
            ),
            None => println!(
                "No path found, {} cells expanded, {} redraws\n",
                outcome.expanded.len(),
                redraws.0
            ),
        }
    }
}
