use std::{error, fmt::Display};

use clap::Parser;
use num_bigint::BigUint;

pub const MAX_NUMBER_LENGTH: usize = 20;

#[derive(Debug)]
pub enum Error {
    NoMatchFound(usize, usize),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::NoMatchFound(required_changes, max_length) => write!(
                f,
                "No number of digits 4 and 7 within {} digit(s) has exactly {} change(s).",
                max_length, required_changes
            ),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub max_length: Option<usize>,
}

pub fn find_last_match(
    required_changes: usize,
    max_length: usize,
) -> Result<(usize, BigUint), Error> {
    let mut numbers = Vec::new();
    let mut digits = String::new();
    generate_numbers(&mut digits, required_changes, max_length, &mut numbers);
    numbers
        .last()
        .map(|n| (numbers.len(), n.clone()))
        .ok_or(Error::NoMatchFound(required_changes, max_length))
}

pub fn count_changes(digits: &str) -> usize {
    digits
        .as_bytes()
        .windows(2)
        .filter(|pair| pair[0] != pair[1])
        .count()
}

fn generate_numbers(
    digits: &mut String,
    required_changes: usize,
    max_length: usize,
    numbers: &mut Vec<BigUint>,
) {
    if !digits.is_empty() && count_changes(digits) == required_changes {
        numbers.push(digits.parse::<BigUint>().unwrap());
    }

    if digits.len() < max_length {
        for digit in ['4', '7'] {
            digits.push(digit);
            generate_numbers(digits, required_changes, max_length, numbers);
            digits.pop();
        }
    }
}
