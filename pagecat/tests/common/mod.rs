use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use assert_cmd::assert::Assert;
use assert_cmd::Command;
use tempfile::{tempdir, TempDir};

pub const PAGECAT_BIN: &str = env!("CARGO_BIN_EXE_pagecat");

pub struct Runner {
    args: Vec<String>,
    current_dir: Option<PathBuf>,
    envs: Vec<(String, String)>,
}

impl Runner {
    pub fn new() -> Self {
        Self {
            args: Vec::new(),
            current_dir: None,
            envs: vec![("PAGECAT_COLOR".to_owned(), "never".to_owned())],
        }
    }

    pub fn args<T>(mut self, args: &[T]) -> Self
    where
        T: AsRef<str>,
    {
        self.args
            .extend(args.iter().map(|arg| arg.as_ref().to_owned()));
        self
    }

    pub fn arg_path<T>(mut self, path: T) -> Self
    where
        T: AsRef<Path>,
    {
        self.args
            .push(path.as_ref().to_string_lossy().into_owned());
        self
    }

    pub fn current_dir<T>(mut self, dir: T) -> Self
    where
        T: AsRef<Path>,
    {
        self.current_dir = Some(dir.as_ref().to_owned());
        self
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.envs.push((key.to_owned(), value.to_owned()));
        self
    }

    pub fn run(self) -> Assert {
        let mut cmd = Command::new(PAGECAT_BIN);
        cmd.env_remove("PAGECAT_LOG");
        for (key, value) in self.envs {
            cmd.env(key, value);
        }
        if let Some(dir) = self.current_dir {
            cmd.current_dir(dir);
        }
        cmd.args(self.args).assert()
    }
}

pub fn get_sandbox() -> TempDir {
    tempdir().expect("Creating sandbox directory failed")
}

/// Deterministic, non-repeating at buffer boundaries
pub fn make_content(len: usize) -> Vec<u8> {
    let mut state = 0x2545_f491_u32;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            state.to_le_bytes()[0]
        })
        .collect()
}

pub fn create_file(dir: &TempDir, name: &str, content: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = File::create(&path).expect("Creating fixture file failed");
    file.write_all(content)
        .expect("Writing fixture file failed");
    path
}
