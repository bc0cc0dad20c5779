use crate::config::MinSupport;
use crate::io::transactions_from_matrix;
use crate::miner::Algorithm;
use numpy::PyReadonlyArray2;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

type PyItemsets<T> = Vec<(Vec<T>, usize)>;

fn resolve_threshold(min_support_count: i64, num_transactions: usize) -> PyResult<usize> {
    MinSupport::Count(min_support_count)
        .resolve(num_transactions)
        .map_err(|e| PyValueError::new_err(e.to_string()))
}

fn mine_strings(
    py: Python<'_>,
    algorithm: Algorithm,
    transactions: Vec<Vec<String>>,
    min_support_count: i64,
) -> PyResult<PyItemsets<String>> {
    let min_count = resolve_threshold(min_support_count, transactions.len())?;
    Ok(py.allow_threads(move || algorithm.mine(&transactions, min_count).into_pairs()))
}

#[pyfunction]
fn apriori(
    py: Python<'_>,
    transactions: Vec<Vec<String>>,
    min_support_count: i64,
) -> PyResult<PyItemsets<String>> {
    mine_strings(py, Algorithm::Apriori, transactions, min_support_count)
}

#[pyfunction]
fn eclat(
    py: Python<'_>,
    transactions: Vec<Vec<String>>,
    min_support_count: i64,
) -> PyResult<PyItemsets<String>> {
    mine_strings(py, Algorithm::Eclat, transactions, min_support_count)
}

#[pyfunction]
fn fp_growth(
    py: Python<'_>,
    transactions: Vec<Vec<String>>,
    min_support_count: i64,
) -> PyResult<PyItemsets<String>> {
    mine_strings(py, Algorithm::FpGrowth, transactions, min_support_count)
}

/// Mines a dense 0/1 matrix; itemsets are column indices.
#[pyfunction]
#[pyo3(signature = (transactions, min_support_count, algorithm = "fp-growth"))]
fn mine_dense<'py>(
    py: Python<'py>,
    transactions: PyReadonlyArray2<'py, i32>,
    min_support_count: i64,
    algorithm: &str,
) -> PyResult<PyItemsets<usize>> {
    let algorithm: Algorithm = algorithm
        .parse()
        .map_err(|e: crate::error::Error| PyValueError::new_err(e.to_string()))?;
    let rows = transactions_from_matrix(transactions.as_array());
    let min_count = resolve_threshold(min_support_count, rows.len())?;
    Ok(py.allow_threads(move || algorithm.mine(&rows, min_count).into_pairs()))
}

#[pymodule]
fn fimine(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(apriori, m)?)?;
    m.add_function(wrap_pyfunction!(eclat, m)?)?;
    m.add_function(wrap_pyfunction!(fp_growth, m)?)?;
    m.add_function(wrap_pyfunction!(mine_dense, m)?)?;
    Ok(())
}
