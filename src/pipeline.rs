// Conversion pipeline: read input → encode bytes → write declaration
//
// Each step owns its file handle; the handle is closed when the step returns,
// on success and on failure. A read failure returns before the output path is
// touched. A write failure is not rolled back: the output may be left empty or
// partially written.

use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use crate::encode::render_declaration;
use crate::error::ConvertError;
use crate::target::ConvertJob;

/// Outcome of a successful conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertReport {
    pub output: PathBuf,
    pub identifier: String,
    /// Number of input bytes embedded in the array
    pub bytes_written: usize,
}

/// Run the whole pipeline for a resolved job.
pub fn convert(job: &ConvertJob) -> Result<ConvertReport, ConvertError> {
    let data = read_input(&job.input)?;
    write_output(&job.output, &job.identifier, &data)?;
    Ok(ConvertReport {
        output: job.output.clone(),
        identifier: job.identifier.clone(),
        bytes_written: data.len(),
    })
}

/// Read the whole input file into memory.
pub fn read_input(path: &Path) -> Result<Vec<u8>, ConvertError> {
    let input_err = |source| ConvertError::InputRead {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::open(path).map_err(input_err)?;
    let mut data = Vec::new();
    // Directories open fine on Unix and only fail here
    file.read_to_end(&mut data).map_err(input_err)?;
    Ok(data)
}

/// Create (or truncate) `path` and write the declaration line.
pub fn write_output(path: &Path, identifier: &str, data: &[u8]) -> Result<(), ConvertError> {
    let output_err = |source| ConvertError::OutputWrite {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(output_err)?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(render_declaration(identifier, data).as_bytes())
        .map_err(output_err)?;
    // Flush explicitly: BufWriter swallows errors on drop
    writer.flush().map_err(output_err)?;
    Ok(())
}
