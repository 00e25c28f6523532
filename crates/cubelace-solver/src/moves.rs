//! Face turns in standard notation.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

/// A face that can be turned.
///
/// The declaration order (`U R F D L B`) is the move-table order used by the
/// solvers, and opposite faces are three positions apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum MoveFace {
    /// Up.
    U = 0,
    /// Right.
    R = 1,
    /// Front.
    F = 2,
    /// Down.
    D = 3,
    /// Left.
    L = 4,
    /// Back.
    B = 5,
}

impl MoveFace {
    /// All faces in move-table order.
    pub const ALL: [Self; 6] = [Self::U, Self::R, Self::F, Self::D, Self::L, Self::B];

    /// Returns the index of this face (0-5).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the face on the other side of the cube.
    #[must_use]
    pub const fn opposite(self) -> Self {
        Self::ALL[(self.index() + 3) % 6]
    }

    /// Relabels this face as seen after rotating the whole cube by `y`
    /// (a clockwise quarter turn around the U axis).
    ///
    /// The front face takes the place of the right one, the right face the
    /// place of the back one, and so on. `U` and `D` stay put.
    #[must_use]
    pub const fn rotate_y(self) -> Self {
        match self {
            Self::F => Self::R,
            Self::R => Self::B,
            Self::B => Self::L,
            Self::L => Self::F,
            Self::U => Self::U,
            Self::D => Self::D,
        }
    }

    const fn as_char(self) -> char {
        match self {
            Self::U => 'U',
            Self::R => 'R',
            Self::F => 'F',
            Self::D => 'D',
            Self::L => 'L',
            Self::B => 'B',
        }
    }

    const fn from_char(c: char) -> Option<Self> {
        match c {
            'U' => Some(Self::U),
            'R' => Some(Self::R),
            'F' => Some(Self::F),
            'D' => Some(Self::D),
            'L' => Some(Self::L),
            'B' => Some(Self::B),
            _ => None,
        }
    }
}

/// A single face turn: a face plus a number of clockwise quarter turns (1-3).
///
/// # Examples
///
/// ```
/// use cubelace_solver::{Move, MoveFace};
///
/// let m: Move = "R'".parse()?;
/// assert_eq!(m, Move::R_PRIME);
/// assert_eq!(m.face(), MoveFace::R);
/// assert_eq!(m.inverse(), Move::R);
/// assert_eq!(Move::U2.to_string(), "U2");
/// # Ok::<(), cubelace_solver::ParseMoveError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Move {
    face: MoveFace,
    quarters: u8,
}

macro_rules! face_moves {
    ($($face:ident: $cw:ident, $half:ident, $ccw:ident;)*) => {
        $(
            #[doc = concat!("`", stringify!($face), "` clockwise.")]
            pub const $cw: Self = Self::new(MoveFace::$face, 1);
            #[doc = concat!("`", stringify!($face), "2`.")]
            pub const $half: Self = Self::new(MoveFace::$face, 2);
            #[doc = concat!("`", stringify!($face), "'` (counter-clockwise).")]
            pub const $ccw: Self = Self::new(MoveFace::$face, 3);
        )*
    };
}

impl Move {
    face_moves! {
        U: U, U2, U_PRIME;
        R: R, R2, R_PRIME;
        F: F, F2, F_PRIME;
        D: D, D2, D_PRIME;
        L: L, L2, L_PRIME;
        B: B, B2, B_PRIME;
    }

    /// Number of distinct moves.
    pub const COUNT: usize = 18;

    /// All moves in move-table order (`U U2 U' R R2 R' ...`).
    pub const ALL: [Self; Self::COUNT] = {
        let mut all = [Self::U; Self::COUNT];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < Self::COUNT {
            all[i] = Self::new(MoveFace::ALL[i / 3], (i % 3) as u8 + 1);
            i += 1;
        }
        all
    };

    /// Creates a move from a face and a number of clockwise quarter turns.
    ///
    /// # Panics
    ///
    /// Panics if `quarters` is not in the range 1-3.
    #[must_use]
    pub const fn new(face: MoveFace, quarters: u8) -> Self {
        assert!(matches!(quarters, 1..=3), "Invalid quarter turn count");
        Self { face, quarters }
    }

    /// Returns the turned face.
    #[must_use]
    pub const fn face(self) -> MoveFace {
        self.face
    }

    /// Returns the number of clockwise quarter turns (1-3).
    #[must_use]
    pub const fn quarters(self) -> u8 {
        self.quarters
    }

    /// Returns the index of this move in [`Move::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self.face.index() * 3 + self.quarters as usize - 1
    }

    /// Returns the move that undoes this one.
    #[must_use]
    pub const fn inverse(self) -> Self {
        Self::new(self.face, 4 - self.quarters)
    }

    /// Returns this move as seen after a `y` rotation of the whole cube.
    #[must_use]
    pub const fn rotate_y(self) -> Self {
        Self::new(self.face.rotate_y(), self.quarters)
    }
}

impl Default for Move {
    fn default() -> Self {
        Self::U
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suffix = match self.quarters {
            1 => "",
            2 => "2",
            _ => "'",
        };
        write!(f, "{}{suffix}", self.face.as_char())
    }
}

/// Error returned when a token is not a valid move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid move: {token:?}")]
pub struct ParseMoveError {
    token: String,
}

impl ParseMoveError {
    /// Returns the token that failed to parse.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }
}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseMoveError {
            token: s.to_owned(),
        };
        let mut chars = s.chars();
        let face = chars.next().and_then(MoveFace::from_char).ok_or_else(err)?;
        let quarters = match chars.as_str() {
            "" => 1,
            "2" | "2'" => 2,
            "'" | "3" => 3,
            _ => return Err(err()),
        };
        Ok(Self::new(face, quarters))
    }
}

/// An ordered list of moves.
///
/// # Examples
///
/// ```
/// use cubelace_solver::MoveSequence;
///
/// let seq: MoveSequence = "R U R' U'".parse()?;
/// assert_eq!(seq.len(), 4);
/// assert_eq!(seq.inverse().to_string(), "U R U' R'");
///
/// let merged: MoveSequence = "R R U U' F2 F2".parse()?;
/// assert_eq!(merged.simplified().to_string(), "R2");
/// # Ok::<(), cubelace_solver::ParseMoveError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct MoveSequence {
    moves: Vec<Move>,
}

impl MoveSequence {
    /// Creates an empty sequence.
    #[must_use]
    pub const fn new() -> Self {
        Self { moves: Vec::new() }
    }

    /// Returns the moves as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    /// Returns the number of moves.
    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Returns `true` if there are no moves.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Appends one move.
    pub fn push(&mut self, m: Move) {
        self.moves.push(m);
    }

    /// Iterates over the moves.
    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    /// Returns the sequence that undoes this one.
    #[must_use]
    pub fn inverse(&self) -> Self {
        self.moves.iter().rev().map(|m| m.inverse()).collect()
    }

    /// Merges consecutive turns of the same face and drops the ones that
    /// cancel out.
    #[must_use]
    pub fn simplified(&self) -> Self {
        let mut out: Vec<Move> = Vec::with_capacity(self.moves.len());
        for &m in &self.moves {
            match out.last() {
                Some(last) if last.face == m.face => {
                    let quarters = (last.quarters + m.quarters) % 4;
                    out.pop();
                    if quarters != 0 {
                        out.push(Move::new(m.face, quarters));
                    }
                }
                _ => out.push(m),
            }
        }
        Self { moves: out }
    }
}

impl Display for MoveSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, m) in self.moves.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{m}")?;
        }
        Ok(())
    }
}

impl FromStr for MoveSequence {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split_whitespace().map(str::parse).collect()
    }
}

impl From<Vec<Move>> for MoveSequence {
    fn from(moves: Vec<Move>) -> Self {
        Self { moves }
    }
}

impl From<&[Move]> for MoveSequence {
    fn from(moves: &[Move]) -> Self {
        Self {
            moves: moves.to_vec(),
        }
    }
}

impl FromIterator<Move> for MoveSequence {
    fn from_iter<T: IntoIterator<Item = Move>>(iter: T) -> Self {
        Self {
            moves: iter.into_iter().collect(),
        }
    }
}

impl Extend<Move> for MoveSequence {
    fn extend<T: IntoIterator<Item = Move>>(&mut self, iter: T) {
        self.moves.extend(iter);
    }
}

impl IntoIterator for MoveSequence {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}

impl<'a> IntoIterator for &'a MoveSequence {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}
