use std::env;
use std::process::ExitCode;

use chess_rules::board::Board;

/// Splits off an optional leading `--fen <fen>` and returns the starting
/// board with the remaining move arguments.
fn starting_board(args: &[String]) -> Result<(Board, &[String]), String> {
    match args {
        [flag, rest @ ..] if flag.as_str() == "--fen" => {
            let [fen, moves @ ..] = rest else {
                return Err("--fen needs a position string".to_string());
            };
            let board = Board::try_from_fen(fen).map_err(|err| err.to_string())?;
            Ok((board, moves))
        }
        moves => Ok((Board::new(), moves)),
    }
}

fn main() -> ExitCode {
    // usage: position_status [--fen <fen>] <move1> <move2> ...
    let args: Vec<String> = env::args().skip(1).collect();
    let (mut board, moves) = match starting_board(&args) {
        Ok(start) => start,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    for notation in moves {
        match board.play(notation) {
            Ok(played) => println!("played: {played}"),
            Err(err) => {
                eprintln!("{err}");
                return ExitCode::FAILURE;
            }
        }
    }

    let legal_moves = board.legal_moves();
    println!("{board}");
    println!(
        "side_to_move: {}",
        if board.white_to_move() { "white" } else { "black" }
    );
    println!("in_check: {}", board.is_in_check());
    println!("legal_moves: {}", legal_moves.len());
    println!("checkmate: {}", board.is_mate());
    println!("stalemate: {}", board.is_stalemate());
    for mv in &legal_moves {
        println!("{mv}");
    }
    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_starting_board_defaults_to_start_position() {
        let args = args(&["e4", "e5"]);
        let (board, moves) = starting_board(&args).unwrap();
        assert_eq!(board, Board::new());
        assert_eq!(moves, &args[..]);
    }

    #[test]
    fn test_starting_board_reads_fen() {
        let args = args(&["--fen", "r3k3/8/8/8/8/8/8/4K2R w Kq - 0 1", "0-0"]);
        let (mut board, moves) = starting_board(&args).unwrap();
        assert_eq!(moves, &args[2..]);
        assert_eq!(board.play(&moves[0]).unwrap().to_string(), "0-0");
        assert_eq!(board.to_fen(), "r3k3/8/8/8/8/8/8/5RK1 b q - 1 1");
    }

    #[test]
    fn test_starting_board_rejects_bad_fen() {
        assert!(starting_board(&args(&["--fen"])).is_err());
        assert!(starting_board(&args(&["--fen", "8/8/8/8 w - -"])).is_err());
    }
}
