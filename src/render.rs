use std::collections::HashSet;

use colored::Colorize;

use crate::map::{Cell, Grid, Position};

/// Renders the grid with the route overlaid as `*` on every path cell
/// that is neither the start nor the goal marker.
pub fn render(grid: &Grid, path: &[Position]) -> String {
    let on_path: HashSet<Position> = path.iter().copied().collect();
    let mut out = String::new();

    for row in 0..grid.height() {
        for col in 0..grid.width() {
            let pos = Position::new(row, col);
            let cell = grid.get(pos).unwrap_or(Cell::Road);

            let glyph = match cell {
                Cell::Start => "R".cyan().bold().to_string(),
                Cell::Goal => "C".cyan().bold().to_string(),
                _ if on_path.contains(&pos) => "*".green().bold().to_string(),
                Cell::Wall => "#".red().to_string(),
                Cell::Traffic => "T".yellow().to_string(),
                Cell::Road => ".".to_string(),
            };
            out.push_str(&glyph);
        }
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::{AStar, SearchAlgorithm};

    const DEMO: &str = "\
R...#..C
.T#.T.#.
........
#.#.#T..
";

    #[test]
    fn overlays_route_cells_with_stars() {
        colored::control::set_override(false);

        let grid = Grid::parse(DEMO).unwrap();
        let start = grid.locate(Cell::Start).unwrap();
        let goal = grid.locate(Cell::Goal).unwrap();
        let path = AStar.search(&grid, start, goal).path.unwrap();

        let rendered = render(&grid, &path);
        let stars = rendered.chars().filter(|&c| c == '*').count();

        // every path cell except the start and goal markers
        assert_eq!(stars, path.len() - 2);
        assert_eq!(rendered.lines().count(), grid.height());
        assert!(rendered.contains('R'));
        assert!(rendered.contains('C'));
    }

    #[test]
    fn empty_route_leaves_the_map_untouched() {
        colored::control::set_override(false);

        let grid = Grid::parse(DEMO).unwrap();
        assert_eq!(render(&grid, &[]), DEMO);
    }
}
