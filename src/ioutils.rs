use super::{Item, Problem};

use std::fs;
use std::str::FromStr;

use derive_more::Display;

#[derive(Debug, Display)]
pub enum InputError {
    #[display(fmt = "could not read problem file {}: {}", path, reason)]
    Io { path: String, reason: String },
    #[display(fmt = "input format error on line {}: {}", line, reason)]
    Format { line: usize, reason: String },
    #[display(fmt = "invalid item on line {}: {}", line, reason)]
    InvalidItem { line: usize, reason: String },
}

// parsed straight from the command-line path, clap reports the error text on failure
#[derive(Debug)]
pub struct ProblemFromFile(pub Problem);

impl FromStr for ProblemFromFile {
    type Err = InputError;
    fn from_str(file_name: &str) -> Result<ProblemFromFile, InputError> {
        let content = fs::read_to_string(file_name).map_err(|e| InputError::Io {
            path: file_name.to_string(),
            reason: e.to_string(),
        })?;
        Ok(ProblemFromFile(parse_problem(&content)?))
    }
}

pub fn parse_problem(content: &str) -> Result<Problem, InputError> {
    let mut lines = content.lines().enumerate();
    let (_, capacity_line) = lines.next().ok_or_else(|| InputError::Format {
        line: 1,
        reason: "empty input, expected a capacity".to_string(),
    })?;
    let capacity = capacity_line
        .trim()
        .parse()
        .map_err(|e| InputError::Format {
            line: 1,
            reason: format!("could not parse number {:?}", e),
        })?;
    let items = lines
        .map(|(index, line)| parse_item_line(line, index + 1))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Problem { capacity, items })
}

fn parse_item_line(line: &str, line_no: usize) -> Result<Item, InputError> {
    let mut iter = line.split_whitespace();
    let weight = next_parse_with_err(&mut iter).map_err(|reason| InputError::Format {
        line: line_no,
        reason,
    })?;
    let profit = next_parse_with_err(&mut iter).map_err(|reason| InputError::Format {
        line: line_no,
        reason,
    })?;
    if iter.next().is_some() {
        return Err(InputError::Format {
            line: line_no,
            reason: "line was not exhausted, expected two values per item".to_string(),
        });
    }
    Item::new(weight, profit).map_err(|reason| InputError::InvalidItem {
        line: line_no,
        reason,
    })
}

pub fn next_parse_with_err<'a, T, K>(iter: &mut T) -> Result<K, String>
where
    T: Iterator<Item = &'a str>,
    K: FromStr,
    <K as FromStr>::Err: std::fmt::Debug,
{
    iter.next()
        .ok_or_else(|| "line exhausted, but another value was expected".to_string())?
        .parse()
        .map_err(|e| format!("could not parse number {:?}", e))
}

pub fn init_logger() {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!("[{}] {}", record.level(), message))
        })
        .level(log::LevelFilter::Info)
        // keep stdout for the result lines
        .chain(std::io::stderr())
        .apply()
        .expect("could not initialize logger");
}
