//! Classic FizzBuzz over the numbers 1 to 100

mod classify;
mod sequence;

pub use sequence::write_sequence;
