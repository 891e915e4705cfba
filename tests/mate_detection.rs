use serde::Deserialize;

use chess_rules::board::Board;

#[derive(Deserialize)]
struct ProblemSet {
    problems: Vec<Problem>,
}

#[derive(Deserialize)]
struct Problem {
    #[serde(rename = "type")]
    kind: String,
    fen: String,
    moves: String,
}

fn load_problems() -> ProblemSet {
    let data = include_str!("data/problems.json");
    serde_json::from_str(data).expect("invalid problems.json")
}

#[test]
fn mate_in_one_suite() {
    let set = load_problems();

    for problem in set.problems.iter().filter(|p| p.kind == "Mate in One") {
        let mut board = Board::from_fen(&problem.fen);
        assert!(!board.is_mate(), "already mate: {}", problem.fen);

        let played = board
            .play(&problem.moves)
            .unwrap_or_else(|err| panic!("fen: {} move: {}: {err}", problem.fen, problem.moves));

        assert!(
            board.is_mate(),
            "mate in one failed for fen: {} move: {} (played {})",
            problem.fen,
            problem.moves,
            played
        );
        assert!(board.is_in_check());
        assert!(board.legal_moves().is_empty());
    }
}

#[test]
fn final_position_suite() {
    let set = load_problems();

    for problem in &set.problems {
        let board = Board::from_fen(&problem.fen);
        let (mate, stalemate) = match problem.kind.as_str() {
            "Checkmate" => (true, false),
            "Stalemate" => (false, true),
            "Neither" => (false, false),
            _ => continue,
        };

        assert_eq!(board.is_mate(), mate, "checkmate status for fen: {}", problem.fen);
        assert_eq!(
            board.is_stalemate(),
            stalemate,
            "stalemate status for fen: {}",
            problem.fen
        );
    }
}
