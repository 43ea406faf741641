use super::*;

fn sq(coord: &str) -> Square {
    coord.parse().unwrap()
}

fn state(placement: &str, side: Color) -> GameState {
    GameState::from_board(Board::from_placement(placement).unwrap(), side)
}

#[test]
fn test_quiet_move_bookkeeping() {
    let mut state = GameState::new();
    let mv = apply(&mut state, sq("g1"), sq("f3")).unwrap();

    assert_eq!(mv.piece, Piece::new(Color::White, PieceKind::Knight));
    assert_eq!(mv.captured, None);
    assert!(!mv.en_passant && !mv.castling);
    assert_eq!(state.side_to_move, Color::Black);
    assert_eq!(state.board.piece_at(sq("g1")), None);
    assert_eq!(state.board.piece_at(sq("f3")), Some(mv.piece));
    assert_eq!(
        state.last_move,
        Some(LastMove {
            piece: mv.piece,
            from: sq("g1"),
            to: sq("f3")
        })
    );
    assert_eq!(state.history, vec![mv]);
}

#[test]
fn test_capture_records_victim() {
    let mut state = state("4k3/8/8/3p4/4P3/8/8/4K3", Color::White);
    let mv = apply(&mut state, sq("e4"), sq("d5")).unwrap();
    assert_eq!(mv.captured, Some(Piece::new(Color::Black, PieceKind::Pawn)));
    assert!(!mv.en_passant);
    assert_eq!(state.board.pieces_of(Color::Black).count(), 1);
}

#[test]
fn test_illegal_move_leaves_state_untouched() {
    let mut state = GameState::new();
    let before = state.clone();
    let err = apply(&mut state, sq("e2"), sq("e5")).unwrap_err();
    assert_eq!(
        err,
        RulesError::IllegalMove {
            from: sq("e2"),
            to: sq("e5")
        }
    );
    assert_eq!(state, before);
}

#[test]
fn test_en_passant_removes_passed_pawn() {
    let mut state = state("4k3/3p4/8/4P3/8/8/8/4K3", Color::Black);
    apply(&mut state, sq("d7"), sq("d5")).unwrap();
    let mv = apply(&mut state, sq("e5"), sq("d6")).unwrap();

    assert!(mv.en_passant);
    assert_eq!(mv.captured, Some(Piece::new(Color::Black, PieceKind::Pawn)));
    assert_eq!(state.board.piece_at(sq("d5")), None);
    assert_eq!(
        state.board.piece_at(sq("d6")),
        Some(Piece::new(Color::White, PieceKind::Pawn))
    );
}

#[test]
fn test_castling_moves_rook() {
    let mut state = state("r3k2r/8/8/8/8/8/8/R3K2R", Color::White);
    let mv = apply(&mut state, sq("e1"), sq("g1")).unwrap();
    assert!(mv.castling);
    assert_eq!(
        state.board.piece_at(sq("f1")),
        Some(Piece::new(Color::White, PieceKind::Rook))
    );
    assert_eq!(state.board.piece_at(sq("h1")), None);
    assert!(state.castling.white_king_moved);

    let mv = apply(&mut state, sq("e8"), sq("c8")).unwrap();
    assert!(mv.castling);
    assert_eq!(
        state.board.piece_at(sq("d8")),
        Some(Piece::new(Color::Black, PieceKind::Rook))
    );
    assert_eq!(state.board.piece_at(sq("a8")), None);
    assert!(state.castling.black_king_moved);
}

#[test]
fn test_rook_departure_is_monotonic() {
    let mut state = state("4k3/8/8/8/8/8/8/R3K2R", Color::White);
    apply(&mut state, sq("h1"), sq("h2")).unwrap();
    apply(&mut state, sq("e8"), sq("d8")).unwrap();
    apply(&mut state, sq("h2"), sq("h1")).unwrap();
    assert!(state.castling.white_kingside_rook_moved);
    assert!(!state.castling.white_queenside_rook_moved);
    apply(&mut state, sq("d8"), sq("e8")).unwrap();
    // Back on h1, but the flag stays set
    assert!(!validate_castle(&state, "g1"));
    assert!(validate_castle(&state, "c1"));
}

#[test]
fn test_rook_captured_at_home_loses_castling() {
    let mut state = state("r3k3/8/8/8/8/8/8/R3K3", Color::White);
    let mv = apply(&mut state, sq("a1"), sq("a8")).unwrap();
    assert_eq!(mv.captured, Some(Piece::new(Color::Black, PieceKind::Rook)));
    assert!(state.castling.white_queenside_rook_moved);
    assert!(state.castling.black_queenside_rook_moved);
    assert!(!state.castling.black_kingside_rook_moved);
}

fn validate_castle(state: &GameState, to: &str) -> bool {
    crate::legality::validate_move(state, sq("e1"), sq(to))
}

#[test]
fn test_promotion_defaults_to_queen() {
    let mut state = state("4k3/1P6/8/8/8/8/8/4K3", Color::White);
    let mv = apply(&mut state, sq("b7"), sq("b8")).unwrap();
    assert_eq!(mv.promotion, Some(PieceKind::Queen));
    assert_eq!(mv.piece.kind, PieceKind::Pawn);
    assert_eq!(
        state.board.piece_at(sq("b8")),
        Some(Piece::new(Color::White, PieceKind::Queen))
    );
}

#[test]
fn test_underpromotion_on_capture() {
    let mut state = state("2r1k3/1P6/8/8/8/8/8/4K3", Color::White);
    let mv = apply_with_promotion(&mut state, sq("b7"), sq("c8"), PieceKind::Knight).unwrap();
    assert_eq!(mv.captured, Some(Piece::new(Color::Black, PieceKind::Rook)));
    assert_eq!(
        state.board.piece_at(sq("c8")),
        Some(Piece::new(Color::White, PieceKind::Knight))
    );
}

#[test]
fn test_black_promotes_on_first_rank() {
    let mut state = state("4k3/8/8/8/8/8/6p1/K7", Color::Black);
    apply(&mut state, sq("g2"), sq("g1")).unwrap();
    assert_eq!(
        state.board.piece_at(sq("g1")),
        Some(Piece::new(Color::Black, PieceKind::Queen))
    );
}

#[test]
fn test_rejects_unpromotable_kind() {
    let mut state = state("4k3/1P6/8/8/8/8/8/4K3", Color::White);
    let err = apply_with_promotion(&mut state, sq("b7"), sq("b8"), PieceKind::King).unwrap_err();
    assert_eq!(err, RulesError::InvalidPromotion(PieceKind::King));
    assert_eq!(state.history.len(), 0);
}
