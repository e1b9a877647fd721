//! ContentSource port - 新しい artifact の中身を供給する上流
//!
//! 表データの読み込み・整形はこのクレートの外で行われ、
//! ここでは完成した bytes を受け取るだけです。

use std::io;
use std::path::PathBuf;

pub trait ContentSource: Send + Sync {
    fn load(&self) -> io::Result<Vec<u8>>;
}

/// ファイルから読み込む ContentSource（上流の分析結果の CSV など）
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ContentSource for FileSource {
    fn load(&self) -> io::Result<Vec<u8>> {
        std::fs::read(&self.path)
    }
}

/// 固定の bytes を返す ContentSource
#[derive(Debug, Clone)]
pub struct StaticSource {
    bytes: Vec<u8>,
}

impl StaticSource {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }
}

impl ContentSource for StaticSource {
    fn load(&self) -> io::Result<Vec<u8>> {
        Ok(self.bytes.clone())
    }
}
