use indicatif::{ProgressBar, ProgressDrawTarget, ProgressState, ProgressStyle};
use pdbkit::engine::progress::{Progress, ProgressCallback};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::warn;

const TICK_MS: u64 = 100;
const BATCH_MESSAGE: &str = "Splitting PDB files";

/// Drives an `indicatif` bar from batch split events. Written models and
/// failed files are printed to stdout above the bar.
#[derive(Clone)]
pub struct CliProgressHandler {
    pb: Arc<Mutex<ProgressBar>>,
}

impl CliProgressHandler {
    pub fn new() -> Self {
        Self::with_draw_target(ProgressDrawTarget::stderr())
    }

    pub fn with_draw_target(target: ProgressDrawTarget) -> Self {
        let pb = ProgressBar::new(0).with_style(Self::bar_style());
        pb.set_draw_target(target);
        pb.finish_and_clear();

        Self {
            pb: Arc::new(Mutex::new(pb)),
        }
    }

    pub fn get_callback(&self) -> ProgressCallback<'static> {
        let pb_clone = self.pb.clone();

        Box::new(move |progress: Progress| {
            let Ok(pb_guard) = pb_clone.lock() else {
                warn!("Progress bar mutex was poisoned. Cannot update progress.");
                return;
            };

            match progress {
                Progress::BatchStart { total_files } => {
                    pb_guard.reset();
                    pb_guard.set_style(Self::bar_style());
                    pb_guard.set_length(total_files);
                    pb_guard.set_position(0);
                    pb_guard.set_message(BATCH_MESSAGE);
                    pb_guard.enable_steady_tick(Duration::from_millis(TICK_MS));
                }
                Progress::FileDone => {
                    pb_guard.inc(1);
                }
                Progress::BatchFinish => {
                    pb_guard.disable_steady_tick();
                    pb_guard.finish_and_clear();
                }
                event => {
                    if let Some(line) = describe(&event) {
                        pb_guard.suspend(|| println!("{}", line));
                    }
                }
            }
        })
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::with_template("{msg:<20} [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
            .expect("Failed to create bar style template")
            .with_key(
                "eta",
                |state: &ProgressState, w: &mut dyn std::fmt::Write| {
                    let _ = write!(w, "{:.1}s", state.eta().as_secs_f64());
                },
            )
            .progress_chars("##-")
    }
}

impl Default for CliProgressHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Console line for an event that reports a file, if any.
pub fn describe(progress: &Progress) -> Option<String> {
    match progress {
        Progress::ModelWritten {
            output_path,
            terminated: true,
            ..
        } => Some(format!("Wrote: {}", output_path.display())),
        Progress::ModelWritten { output_path, .. } => {
            Some(format!("Wrote (no ENDMDL): {}", output_path.display()))
        }
        Progress::FileFailed { path, message } => {
            Some(format!("Error processing {}: {}", path.display(), message))
        }
        _ => None,
    }
}

/// Callback printing file events as plain lines, for single-file runs where a bar
/// would be noise.
pub fn line_printer() -> ProgressCallback<'static> {
    Box::new(|progress: Progress| {
        if let Some(line) = describe(&progress) {
            println!("{}", line);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::thread;

    fn hidden_handler() -> CliProgressHandler {
        CliProgressHandler::with_draw_target(ProgressDrawTarget::hidden())
    }

    #[test]
    fn handler_initializes_in_a_clean_state() {
        let handler = hidden_handler();
        let pb = handler.pb.lock().unwrap();
        assert_eq!(pb.length(), Some(0));
        assert!(pb.is_finished());
    }

    #[test]
    fn callback_updates_progress_bar_state() {
        let handler = hidden_handler();
        let callback = handler.get_callback();

        callback(Progress::BatchStart { total_files: 4 });
        {
            let pb = handler.pb.lock().unwrap();
            assert_eq!(pb.message(), "Splitting PDB files");
            assert_eq!(pb.length(), Some(4));
            assert_eq!(pb.position(), 0);
            assert!(!pb.is_finished());
        }

        callback(Progress::FileDone);
        callback(Progress::FileDone);
        {
            let pb = handler.pb.lock().unwrap();
            assert_eq!(pb.position(), 2);
        }

        callback(Progress::BatchFinish);
        {
            let pb = handler.pb.lock().unwrap();
            assert!(pb.is_finished());
        }
    }

    #[test]
    fn callback_is_thread_safe() {
        let handler = hidden_handler();
        let callback = handler.get_callback();

        thread::spawn(move || {
            callback(Progress::BatchStart { total_files: 1 });
            callback(Progress::ModelWritten {
                output_path: PathBuf::from("X_model_1.pdb"),
                index: 1,
                terminated: true,
            });
            callback(Progress::FileDone);
            callback(Progress::BatchFinish);
        })
        .join()
        .unwrap();

        let pb = handler.pb.lock().unwrap();
        assert!(pb.is_finished());
    }

    #[test]
    fn describe_formats_file_events() {
        let written = Progress::ModelWritten {
            output_path: PathBuf::from("X_model_1.pdb"),
            index: 1,
            terminated: true,
        };
        assert_eq!(describe(&written).as_deref(), Some("Wrote: X_model_1.pdb"));

        let unterminated = Progress::ModelWritten {
            output_path: PathBuf::from("X_model_2.pdb"),
            index: 2,
            terminated: false,
        };
        assert_eq!(
            describe(&unterminated).as_deref(),
            Some("Wrote (no ENDMDL): X_model_2.pdb")
        );

        let failed = Progress::FileFailed {
            path: PathBuf::from("A.pdb"),
            message: "boom".to_string(),
        };
        assert_eq!(
            describe(&failed).as_deref(),
            Some("Error processing A.pdb: boom")
        );

        assert!(describe(&Progress::FileDone).is_none());
    }
}
