/// A US state (or DC) in the fixed lookup table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateInfo {
    pub code: &'static str,
    pub name: &'static str,
    /// Column on the tile grid map (0 = west).
    pub col: u8,
    /// Row on the tile grid map (0 = north).
    pub row: u8,
}

const fn state(code: &'static str, name: &'static str, col: u8, row: u8) -> StateInfo {
    StateInfo {
        code,
        name,
        col,
        row,
    }
}

/// Every trackable state, in default list order.
pub const ALL_STATES: [StateInfo; 51] = [
    state("AL", "Alabama", 7, 6),
    state("AK", "Alaska", 0, 0),
    state("AZ", "Arizona", 2, 5),
    state("AR", "Arkansas", 5, 5),
    state("CA", "California", 1, 4),
    state("CO", "Colorado", 3, 4),
    state("CT", "Connecticut", 10, 3),
    state("DC", "District of Columbia", 9, 5),
    state("DE", "Delaware", 10, 4),
    state("FL", "Florida", 9, 7),
    state("GA", "Georgia", 8, 6),
    state("HI", "Hawaii", 0, 7),
    state("ID", "Idaho", 2, 2),
    state("IL", "Illinois", 6, 2),
    state("IN", "Indiana", 6, 3),
    state("IA", "Iowa", 5, 3),
    state("KS", "Kansas", 4, 5),
    state("KY", "Kentucky", 6, 4),
    state("LA", "Louisiana", 5, 6),
    state("ME", "Maine", 11, 0),
    state("MD", "Maryland", 9, 4),
    state("MA", "Massachusetts", 11, 2),
    state("MI", "Michigan", 8, 2),
    state("MN", "Minnesota", 5, 2),
    state("MS", "Mississippi", 6, 6),
    state("MO", "Missouri", 5, 4),
    state("MT", "Montana", 3, 2),
    state("NE", "Nebraska", 4, 4),
    state("NV", "Nevada", 2, 3),
    state("NH", "New Hampshire", 11, 1),
    state("NJ", "New Jersey", 9, 3),
    state("NM", "New Mexico", 3, 5),
    state("NY", "New York", 9, 2),
    state("NC", "North Carolina", 7, 5),
    state("ND", "North Dakota", 4, 2),
    state("OH", "Ohio", 7, 3),
    state("OK", "Oklahoma", 4, 6),
    state("OR", "Oregon", 1, 3),
    state("PA", "Pennsylvania", 8, 3),
    state("RI", "Rhode Island", 10, 2),
    state("SC", "South Carolina", 8, 5),
    state("SD", "South Dakota", 4, 3),
    state("TN", "Tennessee", 6, 5),
    state("TX", "Texas", 4, 7),
    state("UT", "Utah", 2, 4),
    state("VT", "Vermont", 10, 1),
    state("VA", "Virginia", 8, 4),
    state("WA", "Washington", 1, 2),
    state("WV", "West Virginia", 7, 4),
    state("WI", "Wisconsin", 7, 2),
    state("WY", "Wyoming", 3, 3),
];

/// States considered "not had" when no data file exists yet.
pub const DEFAULT_NOT_HAD: [&str; 6] = ["AL", "AK", "KS", "MS", "NE", "SD"];

/// Tile grid dimensions covering every entry in [`ALL_STATES`].
pub const GRID_COLS: u8 = 12;
pub const GRID_ROWS: u8 = 8;

/// Normalize user input into a postal code: trimmed and upper-cased.
pub fn normalize_code(input: &str) -> String {
    input.trim().to_ascii_uppercase()
}

/// Look up a state by postal code (case-insensitive).
pub fn lookup(code: &str) -> Option<&'static StateInfo> {
    let code = normalize_code(code);
    ALL_STATES.iter().find(|s| s.code == code)
}

/// Full name for a code, falling back to the code itself.
pub fn display_name(code: &str) -> &str {
    lookup(code).map(|s| s.name).unwrap_or(code)
}

/// Postal codes of every state, in table order.
pub fn all_codes() -> impl Iterator<Item = &'static str> {
    ALL_STATES.iter().map(|s| s.code)
}
