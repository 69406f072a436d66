use std::collections::HashSet;

use super::random::RandomSource;
use super::state::{Position, Snake};

/// Cells not covered by the snake, in row-major order (y outer, x inner)
pub fn empty_cells(width: usize, height: usize, snake: &Snake) -> Vec<Position> {
    let occupied: HashSet<Position> = snake.body.iter().copied().collect();

    (0..height as i32)
        .flat_map(|y| (0..width as i32).map(move |x| Position::new(x, y)))
        .filter(|cell| !occupied.contains(cell))
        .collect()
}

/// Pick a free cell for food, or `None` when the snake fills the board.
///
/// Draws exactly one value from `random` when a cell is available, and none
/// otherwise. A draw of `1.0` is clamped to the last free cell.
pub fn place_food<R: RandomSource + ?Sized>(
    width: usize,
    height: usize,
    snake: &Snake,
    random: &mut R,
) -> Option<Position> {
    let cells = empty_cells(width, height, snake);
    if cells.is_empty() {
        return None;
    }

    let scaled = (random.next_f64() * cells.len() as f64).floor();
    // Negative or NaN draws saturate to 0 in the cast
    let index = (scaled as usize).min(cells.len() - 1);

    Some(cells[index])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::random::{FixedRandom, SequenceRandom};

    fn snake_of(cells: &[(i32, i32)]) -> Snake {
        Snake::from_segments(cells.iter().map(|&(x, y)| Position::new(x, y)).collect())
    }

    #[test]
    fn test_empty_cells_row_major() {
        let cells = empty_cells(3, 2, &snake_of(&[(1, 0)]));
        assert_eq!(
            cells,
            vec![
                Position::new(0, 0),
                Position::new(2, 0),
                Position::new(0, 1),
                Position::new(1, 1),
                Position::new(2, 1),
            ]
        );
    }

    #[test]
    fn test_single_free_cell() {
        let snake = snake_of(&[(0, 0), (1, 0), (0, 1)]);
        let food = place_food(2, 2, &snake, &mut FixedRandom(0.0));
        assert_eq!(food, Some(Position::new(1, 1)));
    }

    #[test]
    fn test_full_board_yields_none() {
        let snake = snake_of(&[(0, 0), (1, 0), (0, 1), (1, 1)]);
        for value in [0.0, 0.5, 0.999] {
            assert_eq!(place_food(2, 2, &snake, &mut FixedRandom(value)), None);
        }
    }

    #[test]
    fn test_random_of_one_is_clamped() {
        let snake = snake_of(&[(0, 0)]);
        let food = place_food(2, 2, &snake, &mut FixedRandom(1.0));
        assert_eq!(food, Some(Position::new(1, 1)));
    }

    #[test]
    fn test_selection_scales_with_random() {
        let snake = snake_of(&[(0, 0)]);
        // Free cells: (1,0), (0,1), (1,1)
        let mut random = SequenceRandom::new(vec![0.0, 0.34, 0.67]);
        assert_eq!(place_food(2, 2, &snake, &mut random), Some(Position::new(1, 0)));
        assert_eq!(place_food(2, 2, &snake, &mut random), Some(Position::new(0, 1)));
        assert_eq!(place_food(2, 2, &snake, &mut random), Some(Position::new(1, 1)));
    }

    #[test]
    fn test_food_never_on_snake() {
        let snake = snake_of(&[(0, 0), (1, 0), (2, 0), (2, 1)]);
        for step in 0..10 {
            let value = step as f64 / 10.0;
            let food = place_food(3, 3, &snake, &mut FixedRandom(value)).unwrap();
            assert!(!snake.contains(food));
        }
    }
}
