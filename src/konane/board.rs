use std::fmt::{Debug, Display};

use rand::{seq::SliceRandom, Rng};
use smallvec::SmallVec;

use super::{Coord, Direction, KonaneError, Move};
use crate::{data_structures::MoveList, types::player_id::PlayerId};

/// A Konane position: stones on a square board plus the turn counter.
///
/// Every square starts occupied, `(row + col)` even holding a Black stone.
/// Turns 0 and 1 are the opening removals; every later move is a jump.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    size: u8,
    turn: u16,
    cells: SmallVec<[Option<PlayerId>; 64]>,
}

impl Board {
    pub const MIN_SIZE: u8 = 4;
    pub const MAX_SIZE: u8 = 16;

    /// Full board at turn 0.
    pub fn new(size: u8) -> Result<Board, KonaneError> {
        Self::check_size(size)?;
        let cells = (0..size)
            .flat_map(|row| (0..size).map(move |col| Some(Self::initial_owner(Coord::new(row, col)))))
            .collect();
        Ok(Board { size, turn: 0, cells })
    }

    /// Parse a mid-game position from text rows of `B`, `W` and `.`.
    ///
    /// The opening is assumed to be over: the turn counter is set to 2 or 3
    /// depending on `to_move`.
    pub fn from_rows(rows: &[&str], to_move: PlayerId) -> Result<Board, KonaneError> {
        let size = u8::try_from(rows.len()).map_err(|_| KonaneError::InvalidBoardSize(u8::MAX))?;
        Self::check_size(size)?;
        let mut cells: SmallVec<[Option<PlayerId>; 64]> = SmallVec::with_capacity(rows.len() * rows.len());
        for (row_idx, row) in rows.iter().enumerate() {
            let row_cells: SmallVec<[Option<PlayerId>; 16]> = row
                .chars()
                .filter(|c| !c.is_whitespace())
                .map(|c| match c {
                    'B' => Ok(Some(PlayerId::Black)),
                    'W' => Ok(Some(PlayerId::White)),
                    '.' => Ok(None),
                    _ => Err(KonaneError::InvalidPosition(format!("unexpected {c:?} in row {row_idx}"))),
                })
                .collect::<Result<_, _>>()?;
            if row_cells.len() != rows.len() {
                return Err(KonaneError::InvalidPosition(format!(
                    "row {row_idx} has {} squares, expected {}",
                    row_cells.len(),
                    rows.len()
                )));
            }
            cells.extend(row_cells);
        }
        let turn = to_move.select((2, 3));
        Ok(Board { size, turn, cells })
    }

    fn check_size(size: u8) -> Result<(), KonaneError> {
        if !(Self::MIN_SIZE..=Self::MAX_SIZE).contains(&size) {
            return Err(KonaneError::InvalidBoardSize(size));
        }
        Ok(())
    }

    #[inline]
    fn initial_owner(coord: Coord) -> PlayerId {
        if (coord.row + coord.col) % 2 == 0 {
            PlayerId::Black
        } else {
            PlayerId::White
        }
    }

    #[inline]
    fn index(&self, coord: Coord) -> usize {
        coord.row as usize * self.size as usize + coord.col as usize
    }

    #[inline]
    pub fn size(&self) -> u8 {
        self.size
    }

    #[inline]
    pub fn turn(&self) -> u16 {
        self.turn
    }

    #[inline]
    pub fn get(&self, coord: Coord) -> Option<PlayerId> {
        self.cells[self.index(coord)]
    }

    #[inline]
    pub fn to_move_player(&self) -> PlayerId {
        PlayerId::for_turn(self.turn)
    }

    #[inline]
    pub fn is_opening(&self) -> bool {
        self.turn < 2
    }

    pub fn stone_count(&self, player_id: PlayerId) -> usize {
        self.cells.iter().filter(|c| **c == Some(player_id)).count()
    }

    /// All squares in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| Coord::new(row, col)))
    }

    /// Legal moves for the side to move, in enumeration order.
    pub fn legal_moves(&self) -> MoveList {
        match self.turn {
            0 => self.opening_removals(),
            1 => self.second_removals(),
            _ => self.jumps_for(self.to_move_player()),
        }
    }

    /// Black removes one of its stones at a corner or a center square.
    fn opening_removals(&self) -> MoveList {
        let n = self.size;
        let last = n - 1;
        let mut candidates: SmallVec<[Coord; 8]> = SmallVec::from_slice(&[
            Coord::new(0, 0),
            Coord::new(0, last),
            Coord::new(last, 0),
            Coord::new(last, last),
        ]);
        if n % 2 == 0 {
            let (a, b) = (n / 2 - 1, n / 2);
            candidates.extend([Coord::new(a, a), Coord::new(a, b), Coord::new(b, a), Coord::new(b, b)]);
        } else {
            candidates.push(Coord::new(n / 2, n / 2));
        }
        candidates.sort();
        candidates.dedup();
        candidates
            .into_iter()
            .filter(|c| self.get(*c) == Some(PlayerId::Black))
            .map(Move::Remove)
            .collect()
    }

    /// White removes one of its stones next to the hole Black left.
    fn second_removals(&self) -> MoveList {
        self.coords()
            .filter(|c| self.get(*c) == Some(PlayerId::White))
            .filter(|c| {
                Direction::ALL
                    .iter()
                    .filter_map(|dir| c.offset(*dir, 1, self.size))
                    .any(|adj| self.get(adj).is_none())
            })
            .map(Move::Remove)
            .collect()
    }

    /// Jumps available to `player_id` regardless of whose turn it is.
    pub fn jumps_for(&self, player_id: PlayerId) -> MoveList {
        let opponent = player_id.opposite();
        let mut moves = MoveList::new();
        for from in self.coords() {
            if self.get(from) != Some(player_id) {
                continue;
            }
            for dir in Direction::ALL {
                let mut step = 1u8;
                loop {
                    let (Some(over), Some(land)) = (
                        from.offset(dir, 2 * step - 1, self.size),
                        from.offset(dir, 2 * step, self.size),
                    ) else {
                        break;
                    };
                    if self.get(over) != Some(opponent) || self.get(land).is_some() {
                        break;
                    }
                    moves.push(Move::Jump { from, to: land });
                    step += 1;
                }
            }
        }
        moves
    }

    /// The winner, if the side to move has no jump left. The opening never ends the game.
    pub fn winner_decided(&self) -> Option<PlayerId> {
        if self.is_opening() {
            return None;
        }
        let to_move = self.to_move_player();
        if self.jumps_for(to_move).is_empty() {
            Some(to_move.opposite())
        } else {
            None
        }
    }

    /// Mobility balance `(mine - theirs) / (mine + theirs + 1)`, strictly inside `(-1, 1)`.
    pub fn mobility_value(&self, player_id: PlayerId) -> f64 {
        if self.is_opening() {
            return 0.0;
        }
        let mine = self.jumps_for(player_id).len() as f64;
        let theirs = self.jumps_for(player_id.opposite()).len() as f64;
        (mine - theirs) / (mine + theirs + 1.0)
    }

    /// Apply `mv` for the side to move.
    pub fn execute_move(&mut self, mv: Move) -> Result<(), KonaneError> {
        if !self.legal_moves().contains(&mv) {
            return Err(KonaneError::IllegalMove(mv));
        }
        match mv {
            Move::Remove(coord) => {
                let idx = self.index(coord);
                self.cells[idx] = None;
            }
            Move::Jump { from, to } => {
                let Some((dir, distance)) = Direction::between(from, to) else {
                    return Err(KonaneError::IllegalMove(mv));
                };
                let player = self.to_move_player();
                for step in 0..distance {
                    if let Some(c) = from.offset(dir, step, self.size) {
                        let idx = self.index(c);
                        self.cells[idx] = None;
                    }
                }
                let idx = self.index(to);
                self.cells[idx] = Some(player);
            }
        }
        self.turn += 1;
        Ok(())
    }

    /// Play up to `steps` uniformly random legal moves. Returns the number of moves played.
    pub fn random_playout<R: Rng>(&mut self, steps: u32, rng: &mut R) -> Result<u32, KonaneError> {
        for played in 0..steps {
            if self.winner_decided().is_some() {
                return Ok(played);
            }
            let moves = self.legal_moves();
            let Some(mv) = moves.choose(rng).copied() else {
                return Ok(played);
            };
            self.execute_move(mv)?;
        }
        Ok(steps)
    }

    fn row_string(&self, row: u8) -> String {
        (0..self.size)
            .map(|col| match self.get(Coord::new(row, col)) {
                Some(PlayerId::Black) => 'B',
                Some(PlayerId::White) => 'W',
                None => '.',
            })
            .collect()
    }
}

impl Debug for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rows: Vec<String> = (0..self.size).map(|row| self.row_string(row)).collect();
        f.debug_struct("Board")
            .field("size", &self.size)
            .field("turn", &self.turn)
            .field("rows", &rows)
            .finish()
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "   ")?;
        for col in 0..self.size {
            write!(f, " {}", char::from(b'a' + col))?;
        }
        writeln!(f)?;
        for row in 0..self.size {
            write!(f, "{:>3}", row + 1)?;
            for c in self.row_string(row).chars() {
                write!(f, " {c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
