//! The 9x9 Sudoku adapter: builds a [`Puzzle`] from a grid and renders a
//! solved (or partially solved) one back to text. It's a thin layer over the
//! generic model — it supplies cells, row/column/box groups, two
//! construction paths (a 2D grid of entries, or a flat digit string), and
//! rendering. None of the solving logic lives here.

use std::collections::HashMap;

use crate::error::{Error, Result, StructuralError};
use crate::model::{Bitmask, Cell, CnppModel, Group, Puzzle};

/// A Sudoku cell's location: `(row, col)`, both `0..=8`.
pub type SudokuLocation = (u8, u8);

/// Binds the generic model to 9x9 Sudoku: symbols `1..=9`, `(row, col)`
/// locations, bitmask candidate sets. Nothing below this line is generic
/// CNPP machinery — it's all grid shape, group layout, and I/O.
#[derive(Clone, Copy, Debug)]
pub struct Sudoku;

impl CnppModel for Sudoku {
    type Symbol = u8;
    type Location = SudokuLocation;
    type Candidates = Bitmask;
}

const SIZE: usize = 9;

fn box_index(row: usize, col: usize) -> (usize, usize) {
    (row / 3, col / 3)
}

/// Parses one grid entry: `0` is empty (candidates `1..=9`), a single digit
/// `1..=9` is a commit, and any integer whose decimal representation has
/// more than one digit is read digit-wise as an explicit candidate set (so
/// `135` means candidates `{1, 3, 5}`).
fn parse_entry(value: i64) -> Result<Cell<Sudoku>> {
    if value == 0 {
        return Ok(Cell::with_candidates(Bitmask::from_values(1u8..=9)));
    }

    let digits = value.to_string();
    if digits.len() == 1 {
        let d = digits
            .parse::<u8>()
            .expect("single ASCII digit string parses as u8");
        if !(1..=9).contains(&d) {
            return Err(StructuralError::InvalidSymbol { found: digits }.into());
        }
        return Ok(Cell::solved(d));
    }

    let mut candidates = Vec::with_capacity(digits.len());
    for ch in digits.chars() {
        let d = ch
            .to_digit(10)
            .ok_or_else(|| StructuralError::InvalidSymbol { found: digits.clone() })? as u8;
        if !(1..=9).contains(&d) {
            return Err(StructuralError::InvalidSymbol { found: digits }.into());
        }
        candidates.push(d);
    }
    Ok(Cell::with_candidates(Bitmask::from_values(candidates)))
}

/// Builds the 27 row/column/box groups and their cell arena from a 9x9
/// grid of parsed cells.
fn build_puzzle(cells: [[Cell<Sudoku>; SIZE]; SIZE]) -> Result<Puzzle<Sudoku>> {
    let mut rows: Vec<Vec<SudokuLocation>> = vec![Vec::with_capacity(SIZE); SIZE];
    let mut cols: Vec<Vec<SudokuLocation>> = vec![Vec::with_capacity(SIZE); SIZE];
    let mut boxes: HashMap<(usize, usize), Vec<SudokuLocation>> = HashMap::new();
    let mut initial: HashMap<SudokuLocation, Cell<Sudoku>> = HashMap::new();

    for (row, row_cells) in cells.into_iter().enumerate() {
        for (col, cell) in row_cells.into_iter().enumerate() {
            let loc: SudokuLocation = (row as u8, col as u8);
            rows[row].push(loc);
            cols[col].push(loc);
            boxes.entry(box_index(row, col)).or_default().push(loc);
            initial.insert(loc, cell);
        }
    }

    let mut groups: Vec<Group<Sudoku>> = Vec::with_capacity(27);
    groups.extend(rows.into_iter().map(Group::new));
    groups.extend(cols.into_iter().map(Group::new));
    let mut box_groups: Vec<_> = boxes.into_iter().collect();
    box_groups.sort_by_key(|(idx, _)| *idx);
    groups.extend(box_groups.into_iter().map(|(_, locs)| Group::new(locs)));

    Puzzle::new(groups, initial)
}

/// Builds a puzzle from a 9x9 grid of integers, row-major (`grid[row][col]`).
/// See [`parse_entry`] for how each entry is interpreted.
pub fn from_grid(grid: &[Vec<i64>]) -> Result<Puzzle<Sudoku>> {
    if grid.len() != SIZE {
        return Err(StructuralError::WrongRowCount { rows: grid.len() }.into());
    }

    let mut cells: Vec<[Cell<Sudoku>; SIZE]> = Vec::with_capacity(SIZE);
    for row in grid {
        if row.len() != SIZE {
            return Err(StructuralError::WrongColumnCount {
                row: cells.len(),
                cols: row.len(),
            }
            .into());
        }
        let mut parsed: Vec<Cell<Sudoku>> = Vec::with_capacity(SIZE);
        for &value in row {
            parsed.push(parse_entry(value)?);
        }
        cells.push(parsed.try_into().expect("row has exactly SIZE entries"));
    }

    build_puzzle(cells.try_into().expect("grid has exactly SIZE rows"))
}

/// Builds a puzzle from a row-major sequence of 81 digits (`'0'..='9'`
/// characters, or the equivalent integers). Unlike [`from_grid`], every
/// entry is a single digit: `0` is empty (candidates `1..=9`), `1..=9` is a
/// commit. No multi-digit candidate shorthand here, matching
/// `init_from_1d_list`'s per-character reshape.
pub fn from_digits(data: &str) -> Result<Puzzle<Sudoku>> {
    let digits: Vec<i64> = data
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| {
            c.to_digit(10)
                .map(|d| d as i64)
                .ok_or_else(|| StructuralError::InvalidSymbol { found: c.to_string() }.into())
        })
        .collect::<Result<Vec<i64>>>()?;

    from_digit_sequence(&digits)
}

/// As [`from_digits`], but from an already-parsed sequence of 81 integers
/// rather than a string of digit characters.
pub fn from_digit_sequence(data: &[i64]) -> Result<Puzzle<Sudoku>> {
    if data.len() != SIZE * SIZE {
        return Err(StructuralError::WrongSequenceLength { len: data.len() }.into());
    }

    let grid: Vec<Vec<i64>> = data.chunks(SIZE).map(|row| row.to_vec()).collect();
    from_grid(&grid)
}

/// Renders a puzzle as a multiline string: one row per line, 9
/// space-separated tokens per row, solved cells as their digit and unsolved
/// cells as `?`. Reads `value()` rather than `committed()` so a cell whose
/// candidates happen to have collapsed to a singleton, but hasn't been
/// explicitly promoted yet, still renders as solved.
pub fn render(puzzle: &mut Puzzle<Sudoku>) -> String {
    let mut out = String::with_capacity(SIZE * (SIZE * 2 + 1));
    for row in 0..SIZE as u8 {
        let mut tokens = Vec::with_capacity(SIZE);
        for col in 0..SIZE as u8 {
            let cell = puzzle.cell_mut(&(row, col));
            match cell.value() {
                Some(v) => tokens.push(v.to_string()),
                None => tokens.push("?".to_string()),
            }
        }
        out.push_str(&tokens.join(" "));
        out.push('\n');
    }
    out
}
