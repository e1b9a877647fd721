//! LocalArtifactStore - ローカルファイルシステム上の ArtifactStore
//!
//! # 学習ポイント
//! - write は一時ファイルに書いてから rename する（書きかけの current を残さない）
//! - 一時ファイルは対象と同じディレクトリに置く（rename が同一ファイルシステム内で完結する）
//! - same_file は字面ではなく解決後の path で比べる（`sub/../stats.csv` や symlink を見抜く）

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use crate::ports::ArtifactStore;

#[derive(Debug, Default, Clone, Copy)]
pub struct LocalArtifactStore;

impl LocalArtifactStore {
    pub fn new() -> Self {
        Self
    }
}

/// `stats.csv` -> `.stats.csv.tmp`
fn staging_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(".");
    name.push(path.file_name().unwrap_or(path.as_os_str()));
    name.push(".tmp");
    path.with_file_name(name)
}

/// 同一性の比較に使う path
///
/// 存在すれば canonicalize で symlink まで解決する。
/// 無ければ親ディレクトリだけ解決してファイル名を付け直し、親も無ければ字面で比べる。
fn resolve(path: &Path) -> io::Result<PathBuf> {
    match fs::canonicalize(path) {
        Ok(resolved) => return Ok(resolved),
        Err(e) if e.kind() != io::ErrorKind::NotFound => return Err(e),
        Err(_) => {}
    }

    let lexical = || -> PathBuf {
        path.components()
            .filter(|c| !matches!(c, Component::CurDir))
            .collect()
    };
    let Some(name) = path.file_name() else {
        return Ok(lexical());
    };
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    match fs::canonicalize(parent) {
        Ok(dir) => Ok(dir.join(name)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(lexical()),
        Err(e) => Err(e),
    }
}

impl ArtifactStore for LocalArtifactStore {
    fn exists(&self, path: &Path) -> io::Result<bool> {
        path.try_exists()
    }

    fn same_file(&self, a: &Path, b: &Path) -> io::Result<bool> {
        Ok(resolve(a)? == resolve(b)?)
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }

    fn write(&self, path: &Path, bytes: &[u8]) -> io::Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let staging = staging_path(path);
        let result = fs::write(&staging, bytes).and_then(|()| fs::rename(&staging, path));
        if result.is_err() {
            // 一時ファイルの掃除に失敗しても、元のエラーを優先して返す
            let _ = fs::remove_file(&staging);
        }
        result
    }

    fn remove(&self, path: &Path) -> io::Result<()> {
        fs::remove_file(path)
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        fs::rename(from, to)
    }
}
