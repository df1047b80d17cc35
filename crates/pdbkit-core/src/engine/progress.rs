use std::path::PathBuf;

/// Events emitted while PDB files are being split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Progress {
    /// A batch over `total_files` source files begins.
    BatchStart { total_files: u64 },
    /// One source file of the batch has been handled, whatever the outcome.
    FileDone,
    BatchFinish,

    /// A model file was written. `terminated` is `false` when the model ran
    /// to end of input without an `ENDMDL` record.
    ModelWritten {
        output_path: PathBuf,
        index: i64,
        terminated: bool,
    },
    /// A source file could not be split; the batch carries on.
    FileFailed { path: PathBuf, message: String },
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

/// Optional sink for [`Progress`] events. Without a callback every event is
/// dropped.
#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }
}
