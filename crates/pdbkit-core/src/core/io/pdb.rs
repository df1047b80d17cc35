use std::io::{self, BufRead, Write};
use std::num::IntErrorKind;
use thiserror::Error;
use tracing::{trace, warn};

const MODEL_RECORD: &str = "MODEL";
const ENDMDL_RECORD: &str = "ENDMDL";

#[derive(Debug, Error)]
pub enum PdbError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Model index out of range in record '{}'", .0.trim_end())]
    IndexOutOfRange(String),
}

/// A contiguous `MODEL` ... `ENDMDL` span of a PDB file.
///
/// `lines` holds every line of the span verbatim, including the `MODEL` and
/// `ENDMDL` markers and each line's original terminator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelBlock {
    pub index: i64,
    pub lines: Vec<String>,
    /// `false` when the block ran to end-of-input without an `ENDMDL` record.
    pub terminated: bool,
}

impl ModelBlock {
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Writes the block's lines exactly as they were read.
    pub fn write_to(&self, writer: &mut impl Write) -> io::Result<()> {
        for line in &self.lines {
            writer.write_all(line.as_bytes())?;
        }
        writer.flush()
    }
}

/// Line-at-a-time state machine that groups `MODEL`/`ENDMDL` spans.
///
/// Lines outside any span are dropped. A `MODEL` record without a numeric
/// second token continues the numbering from the previous model. A numeric
/// token outside the `i64` range, or a continuation past `i64::MAX`, is an
/// [`PdbError::IndexOutOfRange`] error.
#[derive(Debug, Default)]
pub struct ModelSplitter {
    in_model: bool,
    model_lines: Vec<String>,
    model_idx: i64,
}

impl ModelSplitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one line (terminator included) and returns a block if the line
    /// closed one.
    pub fn push_line(&mut self, line: String) -> Result<Option<ModelBlock>, PdbError> {
        if line.starts_with(MODEL_RECORD) {
            if self.in_model {
                warn!(
                    "MODEL record encountered inside model {}; discarding {} buffered line(s).",
                    self.model_idx,
                    self.model_lines.len()
                );
            }
            self.model_idx = match parse_model_index(&line) {
                ModelIndex::Parsed(index) => index,
                ModelIndex::Missing => self
                    .model_idx
                    .checked_add(1)
                    .ok_or_else(|| PdbError::IndexOutOfRange(line.clone()))?,
                ModelIndex::OutOfRange => return Err(PdbError::IndexOutOfRange(line)),
            };
            trace!("Entering model {}.", self.model_idx);
            self.in_model = true;
            self.model_lines = vec![line];
            Ok(None)
        } else if line.starts_with(ENDMDL_RECORD) && self.in_model {
            self.model_lines.push(line);
            self.in_model = false;
            Ok(Some(ModelBlock {
                index: self.model_idx,
                lines: std::mem::take(&mut self.model_lines),
                terminated: true,
            }))
        } else {
            if self.in_model {
                self.model_lines.push(line);
            }
            Ok(None)
        }
    }

    /// Flushes a trailing block that never saw its `ENDMDL` record.
    pub fn finish(self) -> Option<ModelBlock> {
        if self.in_model && !self.model_lines.is_empty() {
            let index = if self.model_idx == 0 { 1 } else { self.model_idx };
            Some(ModelBlock {
                index,
                lines: self.model_lines,
                terminated: false,
            })
        } else {
            None
        }
    }
}

enum ModelIndex {
    Parsed(i64),
    Missing,
    OutOfRange,
}

fn parse_model_index(line: &str) -> ModelIndex {
    let Some(token) = line.split_whitespace().nth(1) else {
        return ModelIndex::Missing;
    };
    match token.parse::<i64>() {
        Ok(index) => ModelIndex::Parsed(index),
        Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
            ModelIndex::OutOfRange
        }
        Err(_) => ModelIndex::Missing,
    }
}

/// Streams [`ModelBlock`]s out of a buffered reader.
///
/// Blocks are yielded as soon as their `ENDMDL` record is read, so callers
/// can persist earlier models before a later read fails.
pub struct ModelBlocks<R> {
    reader: R,
    splitter: Option<ModelSplitter>,
}

impl<R: BufRead> ModelBlocks<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            splitter: Some(ModelSplitter::new()),
        }
    }
}

impl<R: BufRead> Iterator for ModelBlocks<R> {
    type Item = Result<ModelBlock, PdbError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let splitter = self.splitter.as_mut()?;
            let mut line = String::new();
            match self.reader.read_line(&mut line) {
                Ok(0) => return self.splitter.take()?.finish().map(Ok),
                Ok(_) => match splitter.push_line(line) {
                    Ok(Some(block)) => return Some(Ok(block)),
                    Ok(None) => {}
                    Err(e) => {
                        self.splitter = None;
                        return Some(Err(e));
                    }
                },
                Err(e) => {
                    self.splitter = None;
                    return Some(Err(PdbError::Io(e)));
                }
            }
        }
    }
}
