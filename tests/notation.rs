use othellobot::board::{BoardError, Color, Move, Square};

#[test]
fn squares_use_column_letter_and_row_digit() {
    let d3 = Square::new(2, 3).unwrap();
    assert_eq!(d3.to_string(), "D3");
    assert_eq!("D3".parse::<Square>().unwrap(), d3);
    assert_eq!("d3".parse::<Square>().unwrap(), d3);
    assert_eq!("H8".parse::<Square>().unwrap(), Square::new(7, 7).unwrap());
    assert_eq!("A1".parse::<Square>().unwrap().index(), 0);
}

#[test]
fn pass_notation() {
    assert_eq!(Move::Pass.to_string(), "PASS");
    assert_eq!("pass".parse::<Move>().unwrap(), Move::Pass);
    assert_eq!(" PASS ".parse::<Move>().unwrap(), Move::Pass);
    assert_eq!("E6".parse::<Move>().unwrap(), Move::Place(Square::new(5, 4).unwrap()));
}

#[test]
fn malformed_notation_is_rejected() {
    for bad in ["", "I1", "A9", "A0", "D33", "3D", "pas"] {
        assert!(matches!(bad.parse::<Move>(), Err(BoardError::ParseMove(_))), "accepted {bad:?}");
    }
}

#[test]
fn out_of_bounds_coordinates() {
    assert_eq!(Square::new(8, 0), Err(BoardError::OutOfBounds { row: 8, col: 0 }));
    assert_eq!(Square::new(0, 8), Err(BoardError::OutOfBounds { row: 0, col: 8 }));
    assert!(Square::from_index(64).is_err());
}

#[test]
fn side_names_parse_and_unknown_sides_are_rejected() {
    assert_eq!("b".parse::<Color>().unwrap(), Color::Black);
    assert_eq!("White".parse::<Color>().unwrap(), Color::White);
    assert_eq!(" W ".parse::<Color>().unwrap(), Color::White);
    for bad in ["", "x", "blue", "bw"] {
        assert!(matches!(bad.parse::<Color>(), Err(BoardError::ParseColor(_))), "accepted {bad:?}");
    }
}
