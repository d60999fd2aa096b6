// defs.rs
// Shared types and geometry constants for sheet generation

/// A game number, always in [FIRSTNUMBER, LASTNUMBER].
pub type Number = u8;

/// A column index into the sheet grid, always in [0, COLUMNS).
pub type Column = usize;

pub struct SheetStruct {
    pub columns: u8,
    pub rows_per_sheet: u8,
    pub numbers_per_row: u8,
}

pub const SHEETCONFIG: SheetStruct = SheetStruct {
    columns: 9,       // numeric bands per sheet
    rows_per_sheet: 9,
    numbers_per_row: 5,
};

pub const FIRSTNUMBER: Number = 1;
pub const LASTNUMBER: Number = 90;

pub const COLUMNS: usize = SHEETCONFIG.columns as usize;
pub const ROWSPERSHEET: usize = SHEETCONFIG.rows_per_sheet as usize;
pub const NUMBERSPERROW: usize = SHEETCONFIG.numbers_per_row as usize;
pub const NUMBERSPERSHEET: usize = ROWSPERSHEET * NUMBERSPERROW;

/// Sentinel for an unoccupied slot in a rendered row. Never a valid Number.
pub const EMPTYSLOT: Number = 0;
