use crate::core::io::pdb::{ModelBlock, ModelBlocks};
use crate::core::naming::model_output_path;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

/// One per-model file produced by a split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenModel {
    pub output_path: PathBuf,
    pub index: i64,
    pub lines_written: usize,
    pub terminated: bool,
}

impl WrittenModel {
    fn to_progress(&self) -> Progress {
        Progress::ModelWritten {
            output_path: self.output_path.clone(),
            index: self.index,
            terminated: self.terminated,
        }
    }
}

/// Splits `source` into one `<stem>_model_<index>.pdb` file per model.
///
/// Each model is written as soon as its `ENDMDL` record has been read and a
/// [`Progress::ModelWritten`] event is reported. Existing
/// files at the output paths are overwritten.
///
/// # Errors
///
/// Returns [`EngineError::NotFound`] if `source` does not exist, and an I/O
/// or read error if the source cannot be read or an output cannot be written.
#[instrument(skip_all, name = "split_workflow", fields(source = %source.display()))]
pub fn run(source: &Path, reporter: &ProgressReporter) -> Result<Vec<WrittenModel>, EngineError> {
    if !source.exists() {
        return Err(EngineError::NotFound(source.to_path_buf()));
    }
    debug!("Opening {:?} for splitting.", source);
    let file = File::open(source).map_err(|e| EngineError::io(source, e))?;

    let mut written = Vec::new();
    for block in ModelBlocks::new(BufReader::new(file)) {
        let block = block.map_err(|e| EngineError::Pdb {
            path: source.to_path_buf(),
            source: e,
        })?;
        let model = write_block(source, &block)?;
        reporter.report(model.to_progress());
        written.push(model);
    }

    if written.is_empty() {
        info!("No MODEL records found in {:?}.", source);
    } else {
        info!("Split {:?} into {} model file(s).", source, written.len());
    }
    Ok(written)
}

fn write_block(source: &Path, block: &ModelBlock) -> Result<WrittenModel, EngineError> {
    let output_path = model_output_path(source, block.index);
    if !block.terminated {
        warn!(
            "Model {} in {:?} has no ENDMDL record; writing it up to end of file.",
            block.index, source
        );
    }

    let file = File::create(&output_path).map_err(|e| EngineError::io(&output_path, e))?;
    block
        .write_to(&mut BufWriter::new(file))
        .map_err(|e| EngineError::io(&output_path, e))?;
    debug!(
        "Wrote model {} ({} lines) to {:?}.",
        block.index,
        block.line_count(),
        &output_path
    );

    Ok(WrittenModel {
        output_path,
        index: block.index,
        lines_written: block.line_count(),
        terminated: block.terminated,
    })
}
