//! Hermetic working directory for driving the `advocates` binary.
//!
//! Everything lives under an `assert_fs::TempDir` and is cleaned up on drop.
//! Commands run with a scrubbed environment: `ADVOCATES_DB` points into the
//! sandbox and nothing from the host's `ADVOCATES_*` variables leaks in.
//!
//! ```no_run
//! use advocates_test_utils::sandbox::Sandbox;
//!
//! let sb = Sandbox::new();
//! sb.run("advocates", ["seed"]).unwrap();
//! let out = sb.run("advocates", ["search", "anx", "--json"]).unwrap();
//! println!("{out}");
//! ```

use assert_fs::fixture::PathChild;
use assert_fs::TempDir;
use duct::Expression;
use std::collections::HashMap;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Output;

pub struct Sandbox {
    root: TempDir,
    db_path: PathBuf,
}

impl Default for Sandbox {
    fn default() -> Self {
        Self::new()
    }
}

impl Sandbox {
    pub fn new() -> Self {
        let root = TempDir::new().expect("create sandbox TempDir");
        let db_path = root.child("data/advocates.db").to_path_buf();
        Self { root, db_path }
    }

    pub fn root_path(&self) -> &Path {
        self.root.path()
    }

    /// Database file the sandboxed binary uses by default.
    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    /// Write/overwrite a file relative to the sandbox root.
    pub fn write<P: AsRef<Path>, S: AsRef<[u8]>>(&self, rel: P, contents: S) -> PathBuf {
        let p = self.root_path().join(rel);
        if let Some(parent) = p.parent() {
            fs::create_dir_all(parent).expect("create parent dir");
        }
        fs::write(&p, contents).expect("write file");
        p
    }

    /// `duct::Expression` for a cargo binary, pre-wired with the sandbox env.
    pub fn cmd<I>(&self, program: &str, args: I) -> Expression
    where
        I: IntoIterator,
        I::Item: AsRef<OsStr>,
    {
        let bin = assert_cmd::cargo::cargo_bin(program);
        let args: Vec<_> = args
            .into_iter()
            .map(|arg| arg.as_ref().to_os_string())
            .collect();
        let expr = duct::cmd(bin, args).dir(self.root_path());
        self.inject_env(expr)
    }

    /// Run a cargo binary and return stdout. Errors on a non-zero exit.
    pub fn run<I>(&self, program: &str, args: I) -> Result<String, String>
    where
        I: IntoIterator,
        I::Item: AsRef<OsStr>,
    {
        self.cmd(program, args)
            .read()
            .map_err(|e| format!("command failed: {e}"))
    }

    /// Run a cargo binary and capture everything, whatever the exit status.
    pub fn output<I>(&self, program: &str, args: I) -> Output
    where
        I: IntoIterator,
        I::Item: AsRef<OsStr>,
    {
        self.cmd(program, args)
            .stdout_capture()
            .stderr_capture()
            .unchecked()
            .run()
            .expect("spawn sandboxed command")
    }

    fn inject_env(&self, expr: Expression) -> Expression {
        let mut env_map: HashMap<String, String> = HashMap::new();
        if let Ok(path) = std::env::var("PATH") {
            env_map.insert("PATH".into(), path);
        }
        env_map.insert(
            "HOME".into(),
            self.root_path().to_string_lossy().into_owned(),
        );
        env_map.insert(
            "ADVOCATES_DB".into(),
            self.db_path.to_string_lossy().into_owned(),
        );
        env_map.insert("NO_COLOR".into(), "1".into());
        expr.full_env(&env_map)
    }
}
