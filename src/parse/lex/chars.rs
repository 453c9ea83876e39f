

/// Check if the given character may separate the lower and upper bound of a range, `-` or `:`
pub const fn is_range_separator(c: char) -> bool {
    c == '-' || c == ':'
}

/// Check if the given character separates two members of a range list
pub const fn is_member_separator(c: char) -> bool {
    c == ','
}

/// Check if the given character is valid in a decimal number literal. Only ASCII digits are
/// accepted
pub const fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Check if the given character is skipped between tokens
pub fn is_blank(c: char) -> bool {
    c.is_whitespace()
}
