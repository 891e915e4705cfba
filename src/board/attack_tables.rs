use once_cell::sync::Lazy;

use super::Square;

pub(crate) const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, 2),
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
];

/// (file, rank) steps along ranks and files
pub(crate) const STRAIGHT_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (0, -1), (0, 1), (1, 0)];

/// (file, rank) steps along diagonals
pub(crate) const DIAGONAL_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

pub(crate) const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, 0),
    (0, -1),
    (0, 1),
    (1, 0),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

fn step_targets(offsets: &[(i8, i8)]) -> [Vec<Square>; 64] {
    std::array::from_fn(|idx| {
        let from = Square::at(idx % 8, idx / 8);
        offsets
            .iter()
            .filter_map(|&(df, dr)| from + (df, dr))
            .collect()
    })
}

/// On-board knight jump targets for every square
pub(crate) static KNIGHT_TARGETS: Lazy<[Vec<Square>; 64]> =
    Lazy::new(|| step_targets(&KNIGHT_OFFSETS));

/// On-board king step targets for every square
pub(crate) static KING_TARGETS: Lazy<[Vec<Square>; 64]> =
    Lazy::new(|| step_targets(&KING_OFFSETS));

#[cfg(test)]
mod tests {
    use super::*;

    fn names(squares: &[Square]) -> Vec<String> {
        let mut names: Vec<String> = squares.iter().map(|sq| sq.to_string()).collect();
        names.sort();
        names
    }

    #[test]
    fn test_knight_targets_in_corner() {
        let a1 = Square::from_name("a1").unwrap();
        assert_eq!(names(&KNIGHT_TARGETS[a1.index()]), ["b3", "c2"]);
    }

    #[test]
    fn test_knight_targets_in_center() {
        let e5 = Square::from_name("e5").unwrap();
        assert_eq!(KNIGHT_TARGETS[e5.index()].len(), 8);
    }

    #[test]
    fn test_king_targets_on_edge() {
        let h4 = Square::from_name("h4").unwrap();
        assert_eq!(names(&KING_TARGETS[h4.index()]), ["g3", "g4", "g5", "h3", "h5"]);
    }
}
