use lattice_grid::{GridIterator2D, Point2D, Region};
use std::collections::{HashSet, VecDeque};

fn main() {
    // 0 = open, 1 = wall
    let grid = [
        [0, 0, 1, 0, 0, 0],
        [0, 0, 1, 0, 1, 0],
        [1, 1, 1, 0, 1, 0],
        [0, 0, 0, 0, 1, 0],
    ];
    let bounds = Point2D::new(grid.len() as i64, grid[0].len() as i64);
    let region = Region::from_end(bounds);
    let is_open = |p: Point2D| grid[p.x() as usize][p.y() as usize] == 0;

    // Scan in row-major order and flood each unvisited open cell.
    let mut visited = HashSet::new();
    let mut components = 0;
    for seed in GridIterator2D::new(bounds) {
        if visited.contains(&seed) || !is_open(seed) {
            continue;
        }
        components += 1;

        let mut queue = VecDeque::from([seed]);
        visited.insert(seed);
        let mut size = 0;
        while let Some(p) = queue.pop_front() {
            size += 1;
            for step in [
                Point2D::new(1, 0),
                Point2D::new(-1, 0),
                Point2D::new(0, 1),
                Point2D::new(0, -1),
            ] {
                let next = p + step;
                if region.contains(&next) && is_open(next) && visited.insert(next) {
                    queue.push_back(next);
                }
            }
        }
        println!("Component {components} starts at {seed} with {size} cells");
    }

    println!("\n{components} open components in a {bounds} grid");
}
