//! InMemoryArtifactStore - テスト用の ArtifactStore
//!
//! # 学習ポイント
//! - Arc<RwLock<..>> で状態を共有（Clone したハンドルは同じ中身を見る）
//! - 故障注入: 特定の操作・path で io::Error を返せる
//! - 実行された変更操作を順番に記録して、テストで検証できる

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, RwLock};

use crate::ports::ArtifactStore;

/// 故障注入・操作記録の対象になる操作
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreOp {
    Exists,
    Read,
    Write,
    Remove,
    /// rename の移動元 path で指定する
    Rename,
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryArtifactStore {
    files: Arc<RwLock<HashMap<PathBuf, Vec<u8>>>>,
    faults: Arc<Mutex<HashMap<(StoreOp, PathBuf), io::ErrorKind>>>,
    ops: Arc<Mutex<Vec<(StoreOp, PathBuf)>>>,
}

impl InMemoryArtifactStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// テストの前提となるファイルを直接置く（操作記録には残らない）
    pub fn insert(&self, path: impl Into<PathBuf>, bytes: impl Into<Vec<u8>>) {
        self.files
            .write()
            .unwrap()
            .insert(path.into(), bytes.into());
    }

    pub fn get(&self, path: &Path) -> Option<Vec<u8>> {
        self.files.read().unwrap().get(path).cloned()
    }

    pub fn len(&self) -> usize {
        self.files.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// op を path に対して実行したときに kind のエラーを返すようにする
    pub fn fail_on(&self, op: StoreOp, path: impl Into<PathBuf>, kind: io::ErrorKind) {
        self.faults.lock().unwrap().insert((op, path.into()), kind);
    }

    /// 成功した変更操作（Write / Remove / Rename）の履歴
    pub fn mutations(&self) -> Vec<(StoreOp, PathBuf)> {
        self.ops.lock().unwrap().clone()
    }

    fn check_fault(&self, op: StoreOp, path: &Path) -> io::Result<()> {
        match self.faults.lock().unwrap().get(&(op, path.to_path_buf())) {
            Some(kind) => Err(io::Error::new(
                *kind,
                format!("injected {op:?} failure: {}", path.display()),
            )),
            None => Ok(()),
        }
    }

    fn record(&self, op: StoreOp, path: &Path) {
        self.ops.lock().unwrap().push((op, path.to_path_buf()));
    }
}

fn not_found(path: &Path) -> io::Error {
    io::Error::new(
        io::ErrorKind::NotFound,
        format!("file not found: {}", path.display()),
    )
}

impl ArtifactStore for InMemoryArtifactStore {
    fn exists(&self, path: &Path) -> io::Result<bool> {
        self.check_fault(StoreOp::Exists, path)?;
        Ok(self.files.read().unwrap().contains_key(path))
    }

    /// 字面の一致だけを見る（HashMap のキーは path そのもの）
    fn same_file(&self, a: &Path, b: &Path) -> io::Result<bool> {
        Ok(a == b)
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        self.check_fault(StoreOp::Read, path)?;
        self.get(path).ok_or_else(|| not_found(path))
    }

    fn write(&self, path: &Path, bytes: &[u8]) -> io::Result<()> {
        self.check_fault(StoreOp::Write, path)?;
        self.files
            .write()
            .unwrap()
            .insert(path.to_path_buf(), bytes.to_vec());
        self.record(StoreOp::Write, path);
        Ok(())
    }

    fn remove(&self, path: &Path) -> io::Result<()> {
        self.check_fault(StoreOp::Remove, path)?;
        self.files
            .write()
            .unwrap()
            .remove(path)
            .ok_or_else(|| not_found(path))?;
        self.record(StoreOp::Remove, path);
        Ok(())
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        self.check_fault(StoreOp::Rename, from)?;
        let mut files = self.files.write().unwrap();
        let bytes = files.remove(from).ok_or_else(|| not_found(from))?;
        files.insert(to.to_path_buf(), bytes);
        drop(files);
        self.record(StoreOp::Rename, from);
        Ok(())
    }
}
