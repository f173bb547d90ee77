use std::fmt;

/// Label assigned to a number by the divisibility rule
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Classification {
    FizzBuzz,
    Fizz,
    Buzz,
    Number(u32),
}

/// Classify `n`, checking 15 before 3 and 5 so the first match wins
pub(crate) fn classify(n: u32) -> Classification {
    if n % 15 == 0 {
        Classification::FizzBuzz
    } else if n % 3 == 0 {
        Classification::Fizz
    } else if n % 5 == 0 {
        Classification::Buzz
    } else {
        Classification::Number(n)
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::FizzBuzz => f.write_str("FizzBuzz"),
            Classification::Fizz => f.write_str("Fizz"),
            Classification::Buzz => f.write_str("Buzz"),
            Classification::Number(n) => write!(f, "{}", n),
        }
    }
}
