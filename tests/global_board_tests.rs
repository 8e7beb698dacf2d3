use uttt::{Cell, GlobalBoard, MoveError, Player};

fn win_local(board: &mut GlobalBoard, index: usize, player: Player) {
    for c in 0..3 {
        board.local_mut(index).unwrap().place(0, c, player).unwrap();
    }
    assert!(board.local_mut(index).unwrap().has_tic_tac_toe(player));
    board.record_local_result(index, player).unwrap();
}

#[test]
fn test_meta_mirrors_local_results() {
    let mut board = GlobalBoard::new();
    assert_eq!(board.meta_cell(1, 2).unwrap(), Cell::Empty);

    win_local(&mut board, 5, Player::Two);
    assert_eq!(board.meta_cell(1, 2).unwrap(), Cell::Taken(Player::Two));

    // invariant: meta is non-empty exactly where a local winner is recorded
    for i in 0..9 {
        let expect = board.local(i).unwrap().winner();
        assert_eq!(board.meta_cell(i / 3, i % 3).unwrap(), Cell::from(expect));
    }
}

#[test]
fn test_global_win_from_meta_row() {
    let mut board = GlobalBoard::new();
    win_local(&mut board, 0, Player::One);
    win_local(&mut board, 1, Player::One);
    assert!(!board.has_tic_tac_toe(Player::One));

    win_local(&mut board, 2, Player::One);
    assert!(board.has_tic_tac_toe(Player::One));
    assert!(!board.has_tic_tac_toe(Player::Two));
}

#[test]
fn test_global_win_ignores_raw_cells() {
    // A global line needs three claimed boards; scattered marks alone never
    // count, however many there are.
    let mut board = GlobalBoard::new();
    for i in 0..9 {
        board.local_mut(i).unwrap().place(1, 1, Player::One).unwrap();
        board.local_mut(i).unwrap().place(2, 2, Player::One).unwrap();
    }
    assert!(!board.has_tic_tac_toe(Player::One));
}

#[test]
fn test_record_out_of_range() {
    let mut board = GlobalBoard::new();
    assert_eq!(
        board.record_local_result(9, Player::One).unwrap_err(),
        MoveError::InvalidIndex
    );
}

#[test]
fn test_focus_follows_playable_target() {
    let mut board = GlobalBoard::new();
    board.recompute_focus(Some(4)).unwrap();

    let legal: Vec<usize> = board.legal_boards().collect();
    assert_eq!(legal, vec![4]);
    assert!(board.is_legal_board(4));
    assert!(!board.is_legal_board(3));
}

#[test]
fn test_focus_spreads_when_target_closed() {
    let mut board = GlobalBoard::new();
    win_local(&mut board, 4, Player::One);
    board.recompute_focus(Some(4)).unwrap();

    let legal: Vec<usize> = board.legal_boards().collect();
    assert_eq!(legal, vec![0, 1, 2, 3, 5, 6, 7, 8]);
}

#[test]
fn test_focus_free_choice() {
    let mut board = GlobalBoard::new();
    win_local(&mut board, 7, Player::Two);
    board.recompute_focus(None).unwrap();

    let legal: Vec<usize> = board.legal_boards().collect();
    assert_eq!(legal, vec![0, 1, 2, 3, 4, 5, 6, 8]);
}

#[test]
fn test_globally_drawn_counts_exhausted_boards() {
    // X X O / O O X / X X O fills a board with no local winner
    let ones = [(0, 0), (0, 1), (1, 2), (2, 0), (2, 1)];
    let twos = [(0, 2), (1, 0), (1, 1), (2, 2)];

    let mut board = GlobalBoard::new();
    for i in 0..9 {
        for (r, c) in ones {
            board.local_mut(i).unwrap().place(r, c, Player::One).unwrap();
        }
        for (r, c) in twos {
            board.local_mut(i).unwrap().place(r, c, Player::Two).unwrap();
        }
        assert!(board.local(i).unwrap().is_drawn());
    }
    assert!(board.is_globally_drawn());

    // drawn boards are excluded from "play anywhere" focus
    board.recompute_focus(Some(0)).unwrap();
    assert_eq!(board.legal_boards().count(), 0);
}
