//! Interactive console input
//!
//! Values are read as whitespace-separated tokens, so answers may be typed
//! one per line or several on the same line.

use muatan_domain::{Good, Staging};
use muatan_types::{Result, ValidationError};
use std::collections::VecDeque;
use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::debug;

struct Tokens<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    fn next(&mut self, field: &str) -> Result<String> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(ValidationError::UnexpectedEof {
                    field: field.to_string(),
                }
                .into());
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }

    fn next_parsed<T: FromStr>(&mut self, field: &str) -> Result<T> {
        let token = self.next(field)?;
        token.parse::<T>().map_err(|_| {
            ValidationError::InvalidNumber {
                field: field.to_string(),
                value: token,
            }
            .into()
        })
    }
}

fn prompt<W: Write>(out: &mut W, text: &str) -> Result<()> {
    write!(out, "{}", text)?;
    out.flush()?;
    Ok(())
}

/// Ask for a count of goods and then each good's name, weight and price.
///
/// Any invalid answer aborts collection with a validation error; nothing is
/// returned partially.
pub fn collect_goods<R: BufRead, W: Write>(input: R, out: &mut W) -> Result<Staging<Good>> {
    let mut tokens = Tokens::new(input);
    let mut staging = Staging::new();

    prompt(out, "\nEnter number of goods: ")?;
    let count: usize = tokens.next_parsed("number of goods")?;

    for i in 1..=count {
        writeln!(out)?;
        writeln!(out, "Good #{}", i)?;
        prompt(out, "Name         : ")?;
        let name = tokens.next("name")?;
        prompt(out, "Weight (kg)  : ")?;
        let weight: f64 = tokens.next_parsed("weight")?;
        prompt(out, "Price/kg     : ")?;
        let unit_price: f64 = tokens.next_parsed("unit price")?;

        let good = Good::new(name, weight, unit_price)?;
        debug!(index = i, good = ?good, "staged");
        staging += good;
    }

    Ok(staging)
}
