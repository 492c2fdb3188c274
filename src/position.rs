use crate::error::CoordParseError;
use std::fmt;
use std::str::FromStr;

pub const BOARD_SIZE: i8 = 8;

/// A board coordinate. Row 0 is rank 8, so `Position::new(4, 6)` is e2.
///
/// Components are signed so that stepping off an edge yields a value that
/// fails [`Position::is_valid`] instead of wrapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub col: i8,
    pub row: i8,
}

impl Position {
    pub fn new(col: i8, row: i8) -> Self {
        Position { col, row }
    }

    pub fn is_valid(&self) -> bool {
        (0..BOARD_SIZE).contains(&self.col) && (0..BOARD_SIZE).contains(&self.row)
    }

    pub fn offset(&self, col_delta: i8, row_delta: i8) -> Position {
        Position::new(
            self.col.saturating_add(col_delta),
            self.row.saturating_add(row_delta),
        )
    }

    /// Grid index, for on-board positions only.
    pub(crate) fn index(&self) -> Option<usize> {
        if self.is_valid() {
            Some(self.row as usize * BOARD_SIZE as usize + self.col as usize)
        } else {
            None
        }
    }

    pub(crate) fn from_index(index: usize) -> Self {
        let size = BOARD_SIZE as usize;
        Position::new((index % size) as i8, (index / size) as i8)
    }

    /// Every on-board coordinate, rank 8 first.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..(BOARD_SIZE as usize * BOARD_SIZE as usize)).map(Position::from_index)
    }

    pub fn to_algebraic(&self) -> String {
        format!(
            "{}{}",
            (b'a' as i16 + self.col as i16) as u8 as char,
            (b'8' as i16 - self.row as i16) as u8 as char
        )
    }

    pub fn from_algebraic(s: &str) -> Result<Self, CoordParseError> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(CoordParseError::BadLength);
        }

        let (file_ch, rank_ch) = (bytes[0] as char, bytes[1] as char);
        if !('a'..='h').contains(&file_ch) {
            return Err(CoordParseError::UnexpectedFileChar(file_ch));
        }
        if !('1'..='8').contains(&rank_ch) {
            return Err(CoordParseError::UnexpectedRankChar(rank_ch));
        }

        Ok(Position::new(
            (bytes[0] - b'a') as i8,
            (b'8' - bytes[1]) as i8,
        ))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_valid() {
            write!(f, "{}", self.to_algebraic())
        } else {
            write!(f, "({}, {})", self.col, self.row)
        }
    }
}

impl FromStr for Position {
    type Err = CoordParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::from_algebraic(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_position_creation() {
        let pos = Position::new(3, 4);
        assert_eq!(pos.col, 3);
        assert_eq!(pos.row, 4);
    }

    #[rstest]
    #[case(0, 0, true)]
    #[case(7, 7, true)]
    #[case(3, 4, true)]
    #[case(-1, 0, false)]
    #[case(0, -1, false)]
    #[case(8, 0, false)]
    #[case(0, 8, false)]
    #[case(i8::MIN, i8::MAX, false)]
    fn test_position_validity(#[case] col: i8, #[case] row: i8, #[case] valid: bool) {
        assert_eq!(Position::new(col, row).is_valid(), valid);
    }

    #[test]
    fn test_validity_matches_range_everywhere() {
        for col in -20..20 {
            for row in -20..20 {
                let expected = (0..8).contains(&col) && (0..8).contains(&row);
                assert_eq!(Position::new(col, row).is_valid(), expected);
            }
        }
    }

    #[rstest]
    #[case(0, 0, "a8")]
    #[case(7, 7, "h1")]
    #[case(4, 6, "e2")]
    #[case(4, 4, "e4")]
    #[case(3, 0, "d8")]
    fn test_position_algebraic(#[case] col: i8, #[case] row: i8, #[case] notation: &str) {
        let pos = Position::new(col, row);
        assert_eq!(pos.to_algebraic(), notation);
        assert_eq!(
            Position::from_algebraic(notation).expect("Failed to parse notation"),
            pos
        );
    }

    #[test]
    fn test_algebraic_round_trip() {
        for pos in Position::all() {
            let parsed: Position = pos
                .to_algebraic()
                .parse()
                .expect("Failed to parse generated notation");
            assert_eq!(parsed, pos);
        }
        assert_eq!(Position::all().count(), 64);
    }

    #[rstest]
    #[case("", CoordParseError::BadLength)]
    #[case("e", CoordParseError::BadLength)]
    #[case("e44", CoordParseError::BadLength)]
    #[case("i4", CoordParseError::UnexpectedFileChar('i'))]
    #[case("E4", CoordParseError::UnexpectedFileChar('E'))]
    #[case("e9", CoordParseError::UnexpectedRankChar('9'))]
    #[case("e0", CoordParseError::UnexpectedRankChar('0'))]
    fn test_position_from_algebraic_invalid(#[case] input: &str, #[case] err: CoordParseError) {
        assert_eq!(Position::from_algebraic(input), Err(err));
    }

    #[test]
    fn test_offset_leaves_board_without_wrapping() {
        let corner = Position::new(0, 0);
        assert!(!corner.offset(-1, 0).is_valid());
        assert!(!corner.offset(0, -1).is_valid());
        assert_eq!(corner.offset(1, 2), Position::new(1, 2));
        assert_eq!(Position::new(7, 3).offset(1, 0).index(), None);
    }

    #[test]
    fn test_display_off_board() {
        assert_eq!(Position::new(4, 6).to_string(), "e2");
        assert_eq!(Position::new(-1, -1).to_string(), "(-1, -1)");
    }
}
