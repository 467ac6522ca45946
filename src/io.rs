use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

use crate::board::Board;
use crate::game::Move;
use crate::point::{Point, Stone, MAX_BOARD_SIZE};

// By convention 'I' is skipped because it can be confused with "1".
const COL_NAMES: &[u8] = b"ABCDEFGHJKLMNOPQRSTUVWXYZ";

fn stone_char(stone: Stone) -> char {
    match stone {
        Stone::Black => 'x',
        Stone::White => 'o',
    }
}

impl Display for Stone {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Stone::Black => write!(f, "black"),
            Stone::White => write!(f, "white"),
        }
    }
}

#[derive(Default, Debug, Copy, Clone, Eq, PartialEq)]
pub struct InvalidStone;

impl FromStr for Stone {
    type Err = InvalidStone;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "black" => Ok(Stone::Black),
            "white" => Ok(Stone::White),
            _ => Err(InvalidStone),
        }
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", COL_NAMES[self.col() as usize] as char, self.row() as u32 + 1)
    }
}

impl Debug for Point {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Point(({}, {}), {})", self.row(), self.col(), self)
    }
}

#[derive(Default, Debug, Copy, Clone, Eq, PartialEq)]
pub struct InvalidPoint;

impl FromStr for Point {
    type Err = InvalidPoint;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        check(bytes.len() >= 2 && s.is_ascii(), InvalidPoint)?;

        let col = COL_NAMES
            .iter()
            .position(|&c| c == bytes[0].to_ascii_uppercase())
            .ok_or(InvalidPoint)?;
        check(col < MAX_BOARD_SIZE as usize, InvalidPoint)?;

        let row_1 = s[1..].parse::<u32>().map_err(|_| InvalidPoint)?;
        check(0 < row_1 && row_1 <= MAX_BOARD_SIZE as u32, InvalidPoint)?;

        Ok(Point::new((row_1 - 1) as u8, col as u8))
    }
}

#[derive(Default, Debug, Copy, Clone, Eq, PartialEq)]
pub struct InvalidMove;

impl Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Play(point) => write!(f, "{}", point),
            Move::Pass => write!(f, "PASS"),
            Move::Resign => write!(f, "RESIGN"),
        }
    }
}

impl FromStr for Move {
    type Err = InvalidMove;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PASS" => Ok(Move::Pass),
            "RESIGN" => Ok(Move::Resign),
            _ => Point::from_str(s).map(Move::Play).map_err(|InvalidPoint| InvalidMove),
        }
    }
}

impl Debug for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let stones: usize = self.groups().map(|(_, group)| group.stones().len()).sum();
        write!(
            f,
            "Board({}x{}, stones={}, hash={:?})",
            self.rows(),
            self.cols(),
            stones,
            self.hash()
        )
    }
}

/// Text rendering: 'x' black, 'o' white, '.' empty, row numbers right-aligned
/// descending, column letters as a footer.
impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let width_y = self.rows().to_string().len();

        for row in (0..self.rows()).rev() {
            write!(f, "{:>width$} ", row as u32 + 1, width = width_y)?;
            for col in 0..self.cols() {
                let c = match self.stone_at(Point::new(row, col)) {
                    None => '.',
                    Some(stone) => stone_char(stone),
                };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }

        write!(f, "{:width$} ", "", width = width_y)?;
        for col in 0..self.cols() {
            write!(f, "{}", COL_NAMES[col as usize] as char)?;
        }
        writeln!(f)?;

        Ok(())
    }
}

fn check<E>(c: bool, e: E) -> Result<(), E> {
    match c {
        true => Ok(()),
        false => Err(e),
    }
}

#[cfg(test)]
mod test {
    use std::str::FromStr;

    use crate::board::Board;
    use crate::game::Move;
    use crate::io::{InvalidMove, InvalidPoint};
    use crate::point::{Point, Stone};

    #[test]
    fn point_round_trip() {
        let cases = [
            // basic
            ((0, 0), "A1"),
            ((0, 1), "B1"),
            ((1, 0), "A2"),
            // i skipped
            ((0, 7), "H1"),
            ((0, 8), "J1"),
            ((0, 9), "K1"),
            // largest 19x19 points
            ((18, 0), "A19"),
            ((0, 18), "T1"),
            ((18, 18), "T19"),
        ];

        for ((row, col), s) in cases {
            let point = Point::new(row, col);
            assert_eq!(point.to_string(), s);
            assert_eq!(Ok(point), s.parse());
        }
    }

    #[test]
    fn point_invalid() {
        for s in ["", "A", "5", "I5", "A0", "A20", "AA1", "Z9"] {
            assert_eq!(Err(InvalidPoint), Point::from_str(s), "{:?} should not parse", s);
        }
    }

    #[test]
    fn stone_round_trip() {
        assert_eq!(Stone::Black.to_string(), "black");
        assert_eq!(Ok(Stone::White), "white".parse());
        assert!("Black".parse::<Stone>().is_err());
    }

    #[test]
    fn move_round_trip() {
        assert_eq!(Ok(Move::Pass), "PASS".parse());
        assert_eq!(Ok(Move::Resign), "RESIGN".parse());
        assert_eq!(Ok(Move::Play(Point::new(15, 15))), "Q16".parse());
        assert_eq!(Err(InvalidMove), Move::from_str("pass"));

        assert_eq!(Move::Pass.to_string(), "PASS");
        assert_eq!(Move::Play(Point::new(15, 15)).to_string(), "Q16");
    }

    #[test]
    fn render_small_board() {
        let mut board = Board::new(5, 5);
        board.place(Point::new(0, 0), Stone::Black);
        board.place(Point::new(1, 1), Stone::White);

        let expected = "\
5 .....
4 .....
3 .....
2 .o...
1 x....
  ABCDE
";
        assert_eq!(board.to_string(), expected);
    }
}
