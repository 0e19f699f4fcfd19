// PyO3 Python binding layer
//
// Mirrors the command-line tool for build scripts written in Python:
// - render(): bytes + name → declaration line, no I/O
// - convert(): same defaults and diagnostics as the CLI, raises OSError on failure

use std::path::PathBuf;

use pyo3::exceptions::PyOSError;
use pyo3::prelude::*;

use crate::encode::render_declaration;
use crate::pipeline;
use crate::target::ConvertJob;

/// Render the declaration line for `data` without touching the filesystem
///
/// Args:
///     data: Raw bytes to embed
///     var: Identifier of the emitted array
///
/// Returns:
///     str: `constexpr char <var>[] = { ... };` followed by a newline
#[pyfunction]
fn render(data: &[u8], var: &str) -> String {
    render_declaration(var, data)
}

/// Convert a binary file into a C header
///
/// Args:
///     input: Path to the binary file
///     output: Header path, defaults to input + ".h"
///     var: Array identifier, defaults to the file name with '.' replaced by '_'
///
/// Returns:
///     str: Path of the written header
#[pyfunction]
#[pyo3(signature = (input, output=None, var=None))]
fn convert(input: PathBuf, output: Option<PathBuf>, var: Option<String>) -> PyResult<String> {
    let job = ConvertJob::resolve(input, output, var);
    let report = pipeline::convert(&job).map_err(|e| PyOSError::new_err(e.to_string()))?;
    Ok(report.output.to_string_lossy().into_owned())
}

/// Binary to C header conversion
#[pymodule]
fn spvheader(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(render, m)?)?;
    m.add_function(wrap_pyfunction!(convert, m)?)?;
    Ok(())
}
