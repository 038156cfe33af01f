/// Bytes emitted per line of a generated byte table.
pub const BYTE_COLS: usize = 24;
