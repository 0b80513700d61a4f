#![allow(dead_code)]

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use affectnet_clean::{DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH};
use tempfile::{TempDir, tempdir};

pub const HEADER: &str = "subDirectory_filePath,face_x,face_y,face_width,face_height,facial_landmarks,expression,valence,arousal";

/// Builds an annotation row with `label` in the expression column.
pub fn annotation_row(name: &str, label: &str) -> String {
    format!("{name}.jpg,10,12,200,200,\"1.0;2.0;3.0\",{label},0.5,-0.25")
}

/// Scratch directory laid out the way the binary expects: it runs inside
/// `work/` and reads the annotation list from a sibling `affectnet/` tree.
pub struct TestWorkspace {
    temp_dir: TempDir,
}

impl TestWorkspace {
    pub fn new() -> Self {
        let temp_dir = tempdir().expect("temp dir");
        fs::create_dir_all(temp_dir.path().join("work")).expect("create work dir");
        Self { temp_dir }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Working directory for the binary.
    pub fn work_dir(&self) -> PathBuf {
        self.temp_dir.path().join("work")
    }

    pub fn input_path(&self) -> PathBuf {
        self.work_dir().join(DEFAULT_INPUT_PATH)
    }

    pub fn output_path(&self) -> PathBuf {
        self.work_dir().join(DEFAULT_OUTPUT_PATH)
    }

    /// Writes `contents` to the fixed annotation list location.
    pub fn write_input(&self, contents: &str) -> PathBuf {
        let path = self.input_path();
        fs::create_dir_all(path.parent().expect("input parent")).expect("create input dir");
        let mut file = File::create(&path).expect("create input file");
        file.write_all(contents.as_bytes())
            .expect("write input file contents");
        path
    }

    /// Writes `contents` to an arbitrary file under the workspace root.
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        fs::write(&path, contents).expect("write temp file");
        path
    }
}
