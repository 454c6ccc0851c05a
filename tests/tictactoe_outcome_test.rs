//! Exhaustive checks of win/draw detection on the classic board.

use strum::IntoEnumIterator;
use timeline_tictactoe::games::tictactoe::rules::winning_lines;
use timeline_tictactoe::{Board, Outcome, Player, Square, detect_outcome};

const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

fn all_boards() -> impl Iterator<Item = Board> {
    let choices: Vec<Square> = std::iter::once(Square::Empty)
        .chain(Player::iter().map(Square::Occupied))
        .collect();
    (0..3usize.pow(9)).map(move |mut code| {
        let squares = (0..9)
            .map(|_| {
                let square = choices[code % 3];
                code /= 3;
                square
            })
            .collect();
        Board::from_squares(squares).unwrap()
    })
}

fn owns_line(board: &Board, player: Player) -> bool {
    LINES.iter().any(|line| {
        line.iter()
            .all(|&i| board.get(i) == Ok(Square::Occupied(player)))
    })
}

#[test]
fn test_outcome_matches_line_definition_on_every_board() {
    let mut counted = 0;
    for board in all_boards() {
        let x = owns_line(&board, Player::X);
        let o = owns_line(&board, Player::O);
        let outcome = detect_outcome(&board);

        match outcome {
            Outcome::Win(player) => assert!(owns_line(&board, player), "{}", board),
            Outcome::Draw => {
                assert!(!x && !o, "{}", board);
                assert!(board.is_full(), "{}", board);
            }
            Outcome::InProgress => {
                assert!(!x && !o, "{}", board);
                assert!(!board.is_full(), "{}", board);
            }
        }
        if x != o {
            assert_eq!(outcome.winner(), Some(if x { Player::X } else { Player::O }));
        }
        counted += 1;
    }
    assert_eq!(counted, 19683);
}

#[test]
fn test_outcome_is_deterministic() {
    for board in all_boards().step_by(97) {
        assert_eq!(detect_outcome(&board), detect_outcome(&board.clone()));
    }
}

#[test]
fn test_lines_scan_rows_then_columns_then_diagonals() {
    let expected: Vec<Vec<usize>> = LINES.iter().map(|line| line.to_vec()).collect();
    assert_eq!(winning_lines(3), expected);
}

#[test]
fn test_upper_row_wins_when_both_players_own_a_row() {
    let board = |text: &str| {
        let squares = text
            .chars()
            .map(|c| match c {
                'X' => Square::Occupied(Player::X),
                'O' => Square::Occupied(Player::O),
                _ => Square::Empty,
            })
            .collect();
        Board::from_squares(squares).unwrap()
    };
    assert_eq!(detect_outcome(&board("XXXOOO...")), Outcome::Win(Player::X));
    assert_eq!(detect_outcome(&board("OOOXXX...")), Outcome::Win(Player::O));
}
