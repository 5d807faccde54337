use chessboard::{Board, ChessMove, Error};
use std::env;
use std::process;

// Play the coordinate-pair moves given on the command line from the starting position, then
// print the board.
fn run(moves: &[String]) -> Result<Board, Error> {
    let mut board = Board::default();
    for m in moves {
        let m: ChessMove = m.parse()?;
        let record = board.make_move(m)?;
        if let Some(captured) = record.captured() {
            println!("{}: takes {} on {}", m, captured.view(), captured.square());
        }
        if record.promoted() {
            println!("{}: promotes", m);
        }
    }
    Ok(board)
}

fn main() {
    let moves: Vec<String> = env::args().skip(1).collect();
    match run(&moves) {
        Ok(board) => print!("{}", board),
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    }
}
