use std::io::Cursor;

use minesweeper::{Board, Command, GameSession, GameStatus, Visibility};

fn corner_board() -> Board {
    Board::from_mines(3, [(0, 0), (2, 2)]).unwrap()
}

fn play(input: &str) -> (GameStatus, Board, String) {
    let mut session = GameSession::new(corner_board(), Cursor::new(input.as_bytes()), Vec::new())
        .with_clear_screen(false);
    let status = session.run().unwrap();
    let (board, output) = session.into_parts();
    (status, board, String::from_utf8(output).unwrap())
}

#[test]
fn test_exit_immediately() {
    let (status, board, output) = play("exit\n");
    assert_eq!(status, GameStatus::InProgress);
    assert_eq!(board, corner_board());
    assert!(output.contains("Make a choice:"));
}

#[test]
fn test_end_of_input_exits() {
    let (status, board, _) = play("o 1 1\n");
    assert_eq!(status, GameStatus::InProgress);
    assert_eq!(board.visibility(1, 1), Some(Visibility::Opened));

    let (status, _, output) = play("");
    assert_eq!(status, GameStatus::InProgress);
    assert!(output.contains("Make a choice:"));
}

#[test]
fn test_win_then_exit() {
    let (status, board, output) = play("f 0 0\nf 2 2\nexit\n");
    assert_eq!(status, GameStatus::Won);
    assert!(board.is_win());
    assert!(output.contains("YOU WIN"));
}

#[test]
fn test_loss_freezes_further_commands() {
    let (status, board, output) = play("o 2 2\no 1 1\nf 0 0\nexit\n");
    assert_eq!(status, GameStatus::Lost);
    assert_eq!(board.visibility(1, 1), Some(Visibility::FogOfWar));
    assert_eq!(board.visibility(0, 0), Some(Visibility::FogOfWar));
    assert!(output.contains("YOU LOSE"));
}

#[test]
fn test_garbage_and_out_of_range_ignored() {
    let (status, board, _) = play("hello\no 9 9\nf 1\r\no 1 1\r\nexit\r\n");
    assert_eq!(status, GameStatus::InProgress);
    assert_eq!(board.visibility(1, 1), Some(Visibility::Opened));
    assert_eq!(board.flag_count(), 0);
}

#[test]
fn test_step_reports_command_and_counts_lines() {
    let mut session =
        GameSession::new(corner_board(), Cursor::new("f 0 1\nexit\n"), Vec::new())
            .with_clear_screen(false);
    assert_eq!(session.step().unwrap(), Command::ToggleFlag { row: 0, col: 1 });
    assert_eq!(session.board().visibility(0, 1), Some(Visibility::Flagged));
    assert_eq!(session.step().unwrap(), Command::Exit);
    assert_eq!(session.commands_read(), 2);
}

#[test]
fn test_clear_screen_emits_escape_codes() {
    let mut session = GameSession::new(corner_board(), Cursor::new("exit\n"), Vec::new());
    session.run().unwrap();
    let (_, output) = session.into_parts();
    let output = String::from_utf8(output).unwrap();
    assert!(output.starts_with("\x1b[2J"));
}
