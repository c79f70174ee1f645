use minesweeper::{
    cell_symbol, render_board, status_text, Board, Cell, Command, GameStatus, FOG_SYMBOL,
};

fn corner_board() -> Board {
    Board::from_mines(3, [(0, 0), (2, 2)]).unwrap()
}

#[test]
fn test_cell_symbols() {
    assert_eq!(cell_symbol(Cell::Mine), " * ");
    assert_eq!(cell_symbol(Cell::Blank), "   ");
    assert_eq!(cell_symbol(Cell::Count(3)), " 3 ");
    assert_eq!(cell_symbol(Cell::Flag), " F ");
    assert_eq!(cell_symbol(Cell::Fog), "▒▒▒");
}

#[test]
fn test_fresh_board_renders_fog() {
    let rendered = render_board(&corner_board());
    let fog_row = FOG_SYMBOL.repeat(3);
    let expected = format!(
        "    0  1  2 \n 0 {fog}\n 1 {fog}\n 2 {fog}\n",
        fog = fog_row
    );
    assert_eq!(rendered, expected);
}

#[test]
fn test_render_mixed_states() {
    let mut board = corner_board();
    board.apply(Command::ToggleFlag { row: 0, col: 1 });
    board.apply(Command::Open { row: 0, col: 2 });
    board.apply(Command::Open { row: 1, col: 1 });
    board.apply(Command::Open { row: 2, col: 2 });

    let lines: Vec<_> = render_board(&board).lines().map(String::from).collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[1], format!(" 0 {} F    ", FOG_SYMBOL));
    assert_eq!(lines[2], format!(" 1 {} 2 {}", FOG_SYMBOL, FOG_SYMBOL));
    assert_eq!(lines[3], format!(" 2 {}{} * ", FOG_SYMBOL, FOG_SYMBOL));
}

#[test]
fn test_header_has_one_column_per_cell() {
    let board = Board::from_mines(12, [(0, 0)]).unwrap();
    let rendered = render_board(&board);
    let header = rendered.lines().next().unwrap();
    assert_eq!(header.chars().count(), 3 + 12 * 3);
    assert!(header.ends_with("11 "));
    assert_eq!(rendered.lines().count(), 13);
}

#[test]
fn test_status_text() {
    let active = status_text(GameStatus::InProgress);
    assert!(active.contains("Make a choice:"));
    assert!(active.contains("type 'o ROW COL' to open a cell"));
    assert!(active.contains("type 'f ROW COL' to flag a cell"));
    assert!(active.contains("type 'exit' to exit"));

    let won = status_text(GameStatus::Won);
    assert!(won.contains("YOU WIN"));
    assert!(won.contains("type 'exit' to exit"));
    assert!(!won.contains("Make a choice"));

    assert!(status_text(GameStatus::Lost).contains("YOU LOSE"));
}
