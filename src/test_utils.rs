//! テスト用ユーティリティ関数
//!
//! 複数のテストモジュールで使用される共通のヘルパーを提供します。
#![cfg(test)]
#![allow(clippy::unwrap_used)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// 一時ディレクトリ上に作成するテスト用プロジェクト
///
/// デフォルトのレイアウト（`resources/views`, `lang`）に従ってファイルを配置する。
#[derive(Debug)]
pub(crate) struct ProjectFixture {
    dir: TempDir,
}

impl ProjectFixture {
    /// 空のプロジェクトを作成する（views ディレクトリも作成しない）
    pub(crate) fn new() -> Self {
        Self { dir: TempDir::new().unwrap() }
    }

    /// プロジェクトルートからの相対パスにファイルを作成する
    pub(crate) fn file(self, relative_path: &str, content: &str) -> Self {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
        self
    }

    /// `resources/views` 配下にテンプレートを作成する
    pub(crate) fn view(self, relative_path: &str, content: &str) -> Self {
        self.file(&format!("resources/views/{relative_path}"), content)
    }

    /// `lang` 配下に翻訳ファイルを作成する
    pub(crate) fn locale(self, relative_path: &str, content: &str) -> Self {
        self.file(&format!("lang/{relative_path}"), content)
    }

    pub(crate) fn root(&self) -> &Path {
        self.dir.path()
    }

    /// `lang` 配下の翻訳ファイルを読み込む
    pub(crate) fn read_locale(&self, relative_path: &str) -> String {
        fs::read_to_string(self.dir.path().join("lang").join(relative_path)).unwrap()
    }
}
