use std::path::{Path, PathBuf};

use anyhow::Result;
use directories::ProjectDirs;
use log::debug;
use rustyline::DefaultEditor;

/// Line editor for the interactive questions, created on first use.
///
/// Answers are kept in a history file so folder names from a previous run can
/// be recalled with the arrow keys.
pub struct SensorPrompt {
    editor: Option<DefaultEditor>,
    history_path: Option<PathBuf>,
}

impl SensorPrompt {
    pub fn new() -> Self {
        let history_path = ProjectDirs::from("", "", "joint-angles")
            .map(|dirs| dirs.data_dir().join("history.txt"));
        Self {
            editor: None,
            history_path,
        }
    }

    fn editor(&mut self) -> Result<&mut DefaultEditor> {
        if let Some(editor) = self.editor.take() {
            return Ok(self.editor.insert(editor));
        }

        let mut editor = DefaultEditor::new()?;
        if let Some(history_path) = &self.history_path {
            if let Err(err) = editor.load_history(history_path) {
                debug!("no prompt history loaded: {}", err);
            }
        }
        Ok(self.editor.insert(editor))
    }

    fn ask(&mut self, question: &str) -> Result<String> {
        let editor = self.editor()?;
        let answer = editor.readline(question)?;
        let answer = answer.trim().to_string();
        if !answer.is_empty() {
            editor.add_history_entry(answer.as_str())?;
        }
        Ok(answer)
    }

    pub fn parent_directory(&mut self) -> Result<PathBuf> {
        self.ask("Enter the parent directory path containing sensor data folders: ")
            .map(PathBuf::from)
    }

    /// `sensor` is 1-based.
    pub fn sensor_folder(&mut self, sensor: usize) -> Result<String> {
        self.ask(&format!("Enter the name of sensor data folder {}: ", sensor))
    }

    pub fn save_history(&mut self) {
        let (Some(editor), Some(history_path)) = (self.editor.as_mut(), &self.history_path) else {
            return;
        };
        if !create_parent_dir(history_path) {
            return;
        }
        if let Err(err) = editor.save_history(history_path) {
            debug!("failed to save prompt history: {}", err);
        }
    }
}

fn create_parent_dir(path: &Path) -> bool {
    let Some(parent) = path.parent() else {
        return true;
    };
    match std::fs::create_dir_all(parent) {
        Ok(()) => true,
        Err(err) => {
            debug!("failed to create prompt history folder {}: {}", parent.display(), err);
            false
        }
    }
}
