// priority.rs
// Per-column remaining-count memory driving row construction order

use crate::column::column_of;
use crate::defs::{COLUMNS, Column, Number};

/// Remaining-count vector, one counter per column, for one sheet's unplaced
/// numbers. Columns holding more numbers than the rest are drained first,
/// which keeps every row able to find five distinct columns without
/// backtracking. The counters always sum to the size of the remaining pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriorityMemory {
    counts: [u8; COLUMNS],
}

impl PriorityMemory {
    /// Count the given numbers per column.
    pub fn from_numbers(numbers: &[Number]) -> Self {
        let mut counts = [0u8; COLUMNS];
        for &number in numbers {
            counts[column_of(number)] += 1;
        }
        PriorityMemory { counts }
    }

    /// Columns strictly below the current maximum count. Empty when every
    /// column is level, meaning no column is excluded from selection.
    pub fn low_priority_columns(&self) -> Vec<Column> {
        let highest = self.counts.iter().copied().max().unwrap_or(0);
        if self.counts.iter().all(|&count| count == highest) {
            return Vec::new();
        }
        (0..COLUMNS)
            .filter(|&column| self.counts[column] < highest)
            .collect()
    }

    /// One number of `column` was placed into a row. Callers never decrement
    /// an already exhausted column.
    pub fn decrement(&mut self, column: Column) {
        debug_assert!(self.counts[column] > 0, "decrement on exhausted column {column}");
        self.counts[column] -= 1;
    }

    pub fn count(&self, column: Column) -> u8 {
        self.counts[column]
    }

    /// Total numbers still unplaced across all columns.
    pub fn remaining(&self) -> usize {
        self.counts.iter().map(|&count| count as usize).sum()
    }
}
