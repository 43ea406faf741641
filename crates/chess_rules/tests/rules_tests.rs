//! End-to-end rule scenarios driven through the public surface.

use chess_rules::{
    Board, Color, GameState, Piece, PieceKind, Rules, Square, Status, all_legal_moves, apply,
    king_in_check, legal_moves, validate_move,
};

fn sq(coord: &str) -> Square {
    coord.parse().unwrap()
}

fn play(state: &mut GameState, moves: &[(&str, &str)]) {
    for (from, to) in moves {
        assert!(
            validate_move(state, sq(from), sq(to)),
            "{from}->{to} should be legal"
        );
        apply(state, sq(from), sq(to)).unwrap();
    }
}

fn king_count(board: &Board, c: Color) -> usize {
    board
        .pieces()
        .filter(|(_, pc)| pc.is(c, PieceKind::King))
        .count()
}

#[test]
fn test_castling_from_start_without_kingside_minor_pieces() {
    let mut board = Board::standard();
    board.take(sq("f1"));
    board.take(sq("g1"));
    let state = GameState::from_board(board.clone(), Color::White);
    assert!(validate_move(&state, sq("e1"), sq("g1")));

    // A black rook trained on f1 forbids castling through it
    board.take(sq("f2"));
    board.set_piece(sq("f4"), Some(Piece::new(Color::Black, PieceKind::Rook)));
    let state = GameState::from_board(board, Color::White);
    assert!(!validate_move(&state, sq("e1"), sq("g1")));
}

#[test]
fn test_pawn_capture_after_double_steps() {
    // e2-e4, d7-d5, e4xd5: the black pawn disappears from d5
    let mut state = GameState::new();
    play(&mut state, &[("e2", "e4"), ("d7", "d5"), ("e4", "d5")]);
    assert_eq!(
        state.board.piece_at(sq("d5")),
        Some(Piece::new(Color::White, PieceKind::Pawn))
    );
    assert_eq!(state.board.pieces_of(Color::Black).count(), 15);
}

#[test]
fn test_en_passant_window_is_one_ply() {
    let mut state = GameState::new();
    play(
        &mut state,
        &[("e2", "e4"), ("a7", "a6"), ("e4", "e5"), ("d7", "d5")],
    );
    assert!(legal_moves(&state, sq("e5")).contains(&sq("d6")));

    let mut taken = state.clone();
    let mv = apply(&mut taken, sq("e5"), sq("d6")).unwrap();
    assert!(mv.en_passant);
    assert_eq!(taken.board.piece_at(sq("d5")), None);

    // An intervening knight move closes the window
    play(&mut state, &[("g1", "f3"), ("g8", "f6")]);
    assert!(!legal_moves(&state, sq("e5")).contains(&sq("d6")));
    assert!(!validate_move(&state, sq("e5"), sq("d6")));
}

#[test]
fn test_replacement_rook_cannot_castle() {
    // The h1 rook is taken at home; the a2 rook later recaptures onto h1
    let mut state = GameState::from_board(
        Board::from_placement("4k2r/8/8/8/8/8/R7/4KB1R").unwrap(),
        Color::Black,
    );
    play(
        &mut state,
        &[
            ("h8", "h1"),
            ("a2", "h2"),
            ("e8", "d8"),
            ("h2", "h1"),
            ("d8", "e8"),
            ("f1", "d3"),
            ("e8", "d8"),
        ],
    );
    assert_eq!(
        state.board.piece_at(sq("h1")),
        Some(Piece::new(Color::White, PieceKind::Rook))
    );
    assert!(state.castling.white_kingside_rook_moved);
    assert!(!state.castling.white_king_moved);
    assert!(!validate_move(&state, sq("e1"), sq("g1")));
    assert!(!legal_moves(&state, sq("e1")).contains(&sq("g1")));
}

#[test]
fn test_promotion_to_queen_via_capture() {
    let mut state = GameState::from_board(
        Board::from_placement("rn2k3/P7/8/8/8/8/8/4K3").unwrap(),
        Color::White,
    );
    play(&mut state, &[("a7", "b8")]);
    assert_eq!(
        state.board.piece_at(sq("b8")),
        Some(Piece::new(Color::White, PieceKind::Queen))
    );
    assert_eq!(state.board.piece_at(sq("a7")), None);
}

#[test]
fn test_random_walk_keeps_invariants() {
    // Deterministic walk: always play the move at a rotating index.
    let rules = Rules::default();
    let mut state = GameState::new();
    for ply in 0..80usize {
        let moves = all_legal_moves(&state);
        if moves.is_empty() {
            break;
        }
        let (from, to) = moves[(ply * 7 + 3) % moves.len()];
        let mover = state.side_to_move;

        assert!(rules.validate_move(&state, from, to));
        // Repeated validation does not change the answer
        assert!(rules.validate_move(&state, from, to));
        rules.apply(&mut state, from, to).unwrap();

        assert_eq!(king_in_check(&state.board, mover), Some(false));
        assert_eq!(king_count(&state.board, Color::White), 1);
        assert_eq!(king_count(&state.board, Color::Black), 1);
        assert_eq!(state.history.len(), ply + 1);
        if rules.evaluate(&state).unwrap().is_terminal() {
            break;
        }
    }
}

#[test]
fn test_game_state_serde_round_trip() {
    let mut state = GameState::new();
    play(&mut state, &[("e2", "e4"), ("c7", "c5"), ("g1", "f3")]);

    let json = serde_json::to_string(&state).unwrap();
    let back: GameState = serde_json::from_str(&json).unwrap();
    assert_eq!(back, state);
    assert!(json.contains("\"side_to_move\":\"black\""));

    let status = serde_json::to_string(&Status::Checkmate).unwrap();
    assert_eq!(status, "\"checkmate\"");
}
