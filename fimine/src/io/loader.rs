use crate::error::{Error, Result};
use ndarray::ArrayView2;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Reads one transaction per line, tokens separated by whitespace.
///
/// Blank lines are skipped. With `limit`, only the first `limit` transactions
/// are kept.
pub fn parse_transactions<R: BufRead>(
    reader: R,
    limit: Option<usize>,
) -> std::io::Result<Vec<Vec<String>>> {
    let mut transactions = Vec::new();
    for line in reader.lines() {
        if limit.is_some_and(|limit| transactions.len() >= limit) {
            break;
        }
        let line = line?;
        let items: Vec<String> = line.split_whitespace().map(str::to_string).collect();
        if !items.is_empty() {
            transactions.push(items);
        }
    }
    Ok(transactions)
}

pub fn load_transactions(path: &Path, limit: Option<usize>) -> Result<Vec<Vec<String>>> {
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    parse_transactions(BufReader::new(file), limit).map_err(|e| Error::io(path, e))
}

/// Converts a dense transaction matrix (rows are transactions, a non-zero
/// cell means the column's item is present) into item-index transactions.
pub fn transactions_from_matrix(matrix: ArrayView2<i32>) -> Vec<Vec<usize>> {
    matrix
        .rows()
        .into_iter()
        .map(|row| {
            row.iter()
                .enumerate()
                .filter(|&(_, &cell)| cell != 0)
                .map(|(item, _)| item)
                .collect()
        })
        .collect()
}
