//! ArtifactStore port - artifact を置くファイルストレージ
//!
//! rotator は std::fs を直接触らず、この trait 経由で操作します。
//! テストでは InMemoryArtifactStore に差し替えて、任意の操作を失敗させられます。
//!
//! # 実装
//! - **LocalArtifactStore**: ローカルファイルシステム（本番用）
//! - **InMemoryArtifactStore**: HashMap ベース（テスト用、故障注入つき）

use std::io;
use std::path::Path;

/// ArtifactStore は path 単位で opaque な bytes を保存する
///
/// # 設計原則
/// - 同期 API（rotator は単一スレッドで順番に呼ぶ）
/// - 失敗は io::Error のまま返し、文脈付けは rotator が行う
/// - `write` は既存の内容を無条件に上書きする
pub trait ArtifactStore: Send + Sync {
    /// path に artifact が存在するか
    ///
    /// 存在を確認できなかった場合（権限不足、シンボリックリンクのループ等）は Err
    fn exists(&self, path: &Path) -> io::Result<bool>;

    /// a と b が同じファイルを指すか
    ///
    /// `stats.csv` と `sub/../stats.csv` のように綴りが違っても同じ実体なら true
    fn same_file(&self, a: &Path, b: &Path) -> io::Result<bool>;

    /// artifact の内容を読む
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// artifact を書き込む（上書き）
    fn write(&self, path: &Path, bytes: &[u8]) -> io::Result<()>;

    /// artifact を削除する
    fn remove(&self, path: &Path) -> io::Result<()>;

    /// artifact を from から to へ移動する
    fn rename(&self, from: &Path, to: &Path) -> io::Result<()>;
}
