// sheet.rs
// Sibling sheet generation: 90 -> 45/45 column split, then row arrangement

use serde::{Deserialize, Serialize};

use crate::column::{column_of, numbers_of_column};
use crate::defs::{COLUMNS, Column, EMPTYSLOT, NUMBERSPERROW, NUMBERSPERSHEET, Number, ROWSPERSHEET};
use crate::error::SheetError;
use crate::priority::PriorityMemory;
use crate::random::RandomSource;
use crate::row::build_row;

/// Two sheets generated together. Their numbers partition 1-90 exactly:
/// no overlap, no omission, 45 numbers each, row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetPair {
    pub sheet_one: Vec<Number>,
    pub sheet_two: Vec<Number>,
}

/// Generates sibling sheet pairs. Owns its random source, so independent
/// generators can run concurrently and a seeded generator replays exactly.
pub struct SheetGenerator {
    random: RandomSource,
}

impl SheetGenerator {
    pub fn new() -> Self {
        SheetGenerator {
            random: RandomSource::new(),
        }
    }

    pub fn from_seed(seed: u64) -> Self {
        SheetGenerator {
            random: RandomSource::from_seed(seed),
        }
    }

    /// Generate one pair of sibling sheets: split every column's numbers
    /// between the two sheets, then arrange each 45-number set into nine
    /// rows of five. Any failure discards the whole attempt; callers retry
    /// from scratch rather than resume mid-sheet.
    pub fn generate_sibling_sheets(&mut self) -> Result<SheetPair, SheetError> {
        let mut sheet_one: Vec<Number> = Vec::with_capacity(NUMBERSPERSHEET);
        let mut sheet_two: Vec<Number> = Vec::with_capacity(NUMBERSPERSHEET);

        for column in 0..COLUMNS {
            let (first, second) = self.split_column(column)?;
            sheet_one.extend(first);
            sheet_two.extend(second);
        }

        Ok(SheetPair {
            sheet_one: self.arrange_sheet(sheet_one)?,
            sheet_two: self.arrange_sheet(sheet_two)?,
        })
    }

    /// Split one column's shuffled numbers between the two sheets.
    fn split_column(&mut self, column: Column) -> Result<(Vec<Number>, Vec<Number>), SheetError> {
        let mut numbers = numbers_of_column(column)?;
        self.random.shuffle(&mut numbers);
        let second = numbers.split_off(first_sheet_share(column));
        Ok((numbers, second))
    }

    /// Arrange a 45-number set into nine rows of five, row-major. The pool
    /// is shuffled once up front; row construction then consumes it in
    /// first-fit order under the column priority heuristic.
    fn arrange_sheet(&mut self, mut pool: Vec<Number>) -> Result<Vec<Number>, SheetError> {
        self.random.shuffle(&mut pool);
        let mut priorities = PriorityMemory::from_numbers(&pool);
        let mut arranged: Vec<Number> = Vec::with_capacity(NUMBERSPERSHEET);
        while arranged.len() < NUMBERSPERSHEET {
            arranged.extend(build_row(&mut pool, &mut priorities)?);
        }
        Ok(arranged)
    }
}

impl Default for SheetGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// How many of a column's numbers go to the first sheet. Columns 1-7 split
/// five and five; the nine-number first column sends four and the
/// eleven-number last column six, so both sheets land on 45 exactly.
fn first_sheet_share(column: Column) -> usize {
    if column == 0 {
        NUMBERSPERROW - 1
    } else if column == COLUMNS - 1 {
        NUMBERSPERROW + 1
    } else {
        NUMBERSPERROW
    }
}

/// Reshape one row of an arranged sheet into its 9-slot display layout:
/// each number lands in the slot of its column, every other slot holds the
/// EMPTYSLOT sentinel. `row_number` is 1-based.
pub fn row_render_data(row_number: usize, sheet_numbers: &[Number]) -> Result<[Number; COLUMNS], SheetError> {
    if sheet_numbers.len() != NUMBERSPERSHEET {
        return Err(SheetError::InvalidRange {
            requested: NUMBERSPERSHEET,
            available: sheet_numbers.len(),
        });
    }
    if row_number < 1 || row_number > ROWSPERSHEET {
        return Err(SheetError::InvalidRange {
            requested: row_number,
            available: ROWSPERSHEET,
        });
    }

    let start = (row_number - 1) * NUMBERSPERROW;
    let mut slots = [EMPTYSLOT; COLUMNS];
    for &number in &sheet_numbers[start..start + NUMBERSPERROW] {
        slots[column_of(number)] = number;
    }
    Ok(slots)
}
