//! 設定管理を行うモジュール

use std::path::{
    Path,
    PathBuf,
};

use super::{
    ConfigError,
    Settings,
    loader,
};

/// コマンドラインから渡される設定の上書き
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    /// `--theme <name>`
    pub theme: Option<String>,
    /// `--default-file <file>`
    pub default_file: Option<PathBuf>,
    /// `--no-controllers`
    pub no_controllers: bool,
}

/// 実行時に使用する絶対パスの一覧
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPaths {
    pub root: PathBuf,
    /// テンプレートを走査するディレクトリ（テーマ指定時はテーマ配下）
    pub views: PathBuf,
    /// `None` の場合はコントローラーを走査しない
    pub controllers: Option<PathBuf>,
    pub lang: PathBuf,
    pub default_file: PathBuf,
}

/// 設定管理を行う
#[derive(Debug, Clone)]
pub struct ConfigManager {
    /// 現在の設定
    current_settings: Settings,

    /// プロジェクトのルートパス
    project_root: PathBuf,
}

impl ConfigManager {
    /// デフォルト設定でマネージャーを作成
    #[must_use]
    pub fn new(project_root: PathBuf) -> Self {
        Self { current_settings: Settings::default(), project_root }
    }

    /// 設定ファイルを読み込み、コマンドラインの上書きを適用する
    ///
    /// # Errors
    /// - ファイル読み込みエラー
    /// - JSON パースエラー
    /// - バリデーションエラー
    pub fn load(project_root: PathBuf, overrides: &Overrides) -> Result<Self, ConfigError> {
        tracing::debug!("Loading settings for project: {:?}", project_root);

        let mut settings = loader::load_from_project(&project_root)?.map_or_else(
            Settings::default,
            |loaded| {
                tracing::debug!("Loaded project settings: {:?}", loaded);
                loaded
            },
        );

        apply_overrides(&mut settings, overrides);

        let mut manager = Self::new(project_root);
        manager.update_settings(settings)?;
        tracing::debug!("Settings loaded successfully: {:?}", manager.current_settings);

        Ok(manager)
    }

    /// 設定を更新する
    ///
    /// # Errors
    /// - バリデーションエラー
    pub fn update_settings(&mut self, new_settings: Settings) -> Result<(), ConfigError> {
        new_settings.validate().map_err(ConfigError::ValidationErrors)?;
        self.current_settings = new_settings;
        Ok(())
    }

    /// 現在の設定を取得
    #[must_use]
    pub const fn get_settings(&self) -> &Settings {
        &self.current_settings
    }

    /// プロジェクトルートを取得
    #[must_use]
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// 設定からパスを解決する
    #[must_use]
    pub fn paths(&self) -> ProjectPaths {
        let settings = &self.current_settings;
        let root = &self.project_root;

        let views = settings.theme.as_ref().map_or_else(
            || root.join(&settings.views_dir),
            |theme| root.join(&settings.themes_dir).join(theme).join("views"),
        );
        let controllers =
            settings.scan_controllers.then(|| root.join(&settings.controllers_dir));

        ProjectPaths {
            root: root.clone(),
            views,
            controllers,
            lang: root.join(&settings.lang_dir),
            default_file: root.join(&settings.default_file),
        }
    }
}

fn apply_overrides(settings: &mut Settings, overrides: &Overrides) {
    if let Some(theme) = &overrides.theme {
        settings.theme = Some(theme.clone());
    }
    if let Some(default_file) = &overrides.default_file {
        settings.default_file = default_file.to_string_lossy().into_owned();
    }
    if overrides.no_controllers {
        settings.scan_controllers = false;
    }
}
