// column.rs
// Pure column math: the authoritative partition of 1-90 into nine bands

use crate::defs::{COLUMNS, Column, FIRSTNUMBER, LASTNUMBER, Number};
use crate::error::SheetError;

/// Column owning `number`: 1-9 fall in column 0, 10-19 in column 1 and so
/// on, with 90 clamped into column 8 alongside 80-89.
pub fn column_of(number: Number) -> Column {
    ((number / 10) as Column).min(COLUMNS - 1)
}

/// Numbers belonging to `column`, in ascending order. Column 0 holds nine
/// numbers, columns 1-7 ten each, column 8 eleven.
pub fn numbers_of_column(column: Column) -> Result<Vec<Number>, SheetError> {
    if column >= COLUMNS {
        return Err(SheetError::InvalidColumn(column));
    }
    Ok(column_numbers(column))
}

/// All 90 numbers, concatenated column by column. Together with `column_of`
/// this is the partition the rest of the pipeline trusts.
pub fn all_numbers_partitioned() -> Vec<Number> {
    let mut numbers = Vec::with_capacity((LASTNUMBER - FIRSTNUMBER + 1) as usize);
    for column in 0..COLUMNS {
        numbers.extend(column_numbers(column));
    }
    numbers
}

fn column_numbers(column: Column) -> Vec<Number> {
    let base = (column * 10) as Number;
    let mut numbers: Vec<Number> = Vec::with_capacity(11);
    if column != 0 {
        numbers.push(base);
    }
    numbers.extend(base + 1..=base + 9);
    if column == COLUMNS - 1 {
        numbers.push(LASTNUMBER);
    }
    numbers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_of_boundaries() {
        assert_eq!(column_of(1), 0);
        assert_eq!(column_of(9), 0);
        assert_eq!(column_of(10), 1);
        assert_eq!(column_of(19), 1);
        assert_eq!(column_of(20), 2);
        assert_eq!(column_of(79), 7);
        assert_eq!(column_of(80), 8);
        assert_eq!(column_of(90), 8);
    }

    #[test]
    fn test_column_sizes() {
        assert_eq!(numbers_of_column(0).unwrap().len(), 9);
        for column in 1..=7 {
            assert_eq!(numbers_of_column(column).unwrap().len(), 10);
        }
        assert_eq!(numbers_of_column(8).unwrap().len(), 11);
    }

    #[test]
    fn test_column_of_inverts_numbers_of_column() {
        for column in 0..COLUMNS {
            for number in numbers_of_column(column).unwrap() {
                assert_eq!(column_of(number), column, "number {number}");
            }
        }
    }

    #[test]
    fn test_numbers_of_column_contents() {
        assert_eq!(numbers_of_column(0).unwrap(), (1..=9).collect::<Vec<Number>>());
        assert_eq!(numbers_of_column(3).unwrap(), (30..=39).collect::<Vec<Number>>());
        assert_eq!(numbers_of_column(8).unwrap(), (80..=90).collect::<Vec<Number>>());
    }

    #[test]
    fn test_numbers_of_column_rejects_out_of_range() {
        assert_eq!(numbers_of_column(9).unwrap_err(), SheetError::InvalidColumn(9));
        assert_eq!(numbers_of_column(100).unwrap_err(), SheetError::InvalidColumn(100));
    }

    #[test]
    fn test_all_numbers_partitioned_covers_range() {
        let numbers = all_numbers_partitioned();
        assert_eq!(numbers.len(), 90);
        let mut sorted = numbers.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (1..=90).collect::<Vec<Number>>());
    }

    #[test]
    fn test_column_math_is_deterministic() {
        assert_eq!(all_numbers_partitioned(), all_numbers_partitioned());
        for number in 1..=90 {
            assert_eq!(column_of(number), column_of(number));
        }
    }
}
