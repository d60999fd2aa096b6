// row.rs
// Builds one 5-number row from a sheet's remaining pool

use crate::column::column_of;
use crate::defs::{Column, NUMBERSPERROW, Number};
use crate::error::SheetError;
use crate::priority::PriorityMemory;

/// Assemble one valid row: five numbers from five distinct columns, taken
/// preferentially from the columns that still hold the most unplaced
/// numbers. Picked numbers are consumed from `pool` and `priorities` is
/// decremented in step, so both always describe the same remaining multiset.
///
/// The pool arrives pre-shuffled, so scanning it in order and taking the
/// first eligible number is a uniform random choice among the candidates.
pub fn build_row(pool: &mut Vec<Number>, priorities: &mut PriorityMemory) -> Result<Vec<Number>, SheetError> {
    let mut row: Vec<Number> = Vec::with_capacity(NUMBERSPERROW);
    let mut used_columns: Vec<Column> = Vec::with_capacity(NUMBERSPERROW);

    while row.len() < NUMBERSPERROW {
        let excluded = priorities.low_priority_columns();
        let position = pool.iter().position(|&candidate| {
            let column = column_of(candidate);
            !excluded.contains(&column) && !used_columns.contains(&column)
        });

        match position {
            Some(index) => {
                // swap_remove keeps removal O(1); the pool order stays
                // random enough since it was shuffled to begin with
                let number = pool.swap_remove(index);
                let column = column_of(number);
                priorities.decrement(column);
                used_columns.push(column);
                row.push(number);
            }
            None => return Err(SheetError::RowConstruction),
        }
    }

    Ok(row)
}
