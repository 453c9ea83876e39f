use crate::source::span::SourceSpan;

/// Run of decimal digits, decoded lazily against the text it was lexed from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberLiteral {
    pub digits: SourceSpan,
}

impl NumberLiteral {
    /// Decode the value of this literal, or `None` if it does not fit an `i32`
    pub fn value(&self, src: &str) -> Option<i32> {
        src.get(self.digits.range())?
            .bytes()
            .try_fold(0i32, |acc, digit| {
                acc.checked_mul(10)?.checked_add(i32::from(digit - b'0'))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_digits() {
        let lit = NumberLiteral { digits: SourceSpan::new(2, 5) };
        assert_eq!(lit.value("1,042"), Some(42));
    }

    #[test]
    fn overflow_is_none() {
        let src = "2147483648";
        let lit = NumberLiteral { digits: SourceSpan::new(0, src.len() as u32) };
        assert_eq!(lit.value(src), None);

        let src = "2147483647";
        let lit = NumberLiteral { digits: SourceSpan::new(0, src.len() as u32) };
        assert_eq!(lit.value(src), Some(i32::MAX));
    }
}
