//! Recursive file listing.

use std::path::{
    Path,
    PathBuf,
};

use ignore::WalkBuilder;

use super::IndexerError;

/// `root` 配下のファイルのうち、相対パスが `filter` を満たすものを列挙する
///
/// Hidden files and `.gitignore`d files are included. Symlinks are followed,
/// and the paths returned keep the link location under `root`. Any error while
/// walking, a symlink loop included, aborts the listing.
///
/// # Errors
/// - [`IndexerError::MissingDirectory`]: `root` がディレクトリではない
/// - [`IndexerError::Walk`]: 走査中のエラー（権限エラー、シンボリックリンクのループなど）
pub fn find_files<F>(root: &Path, filter: F) -> Result<Vec<PathBuf>, IndexerError>
where
    F: Fn(&Path) -> bool,
{
    if !root.is_dir() {
        return Err(IndexerError::MissingDirectory { path: root.to_path_buf() });
    }

    let mut found_files = Vec::new();

    for result in WalkBuilder::new(root).standard_filters(false).follow_links(true).build() {
        let entry = result?;

        // ファイルのみを対象
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }

        let path = entry.path();

        // 走査ルートからの相対パスでフィルタ
        let Ok(relative_path) = path.strip_prefix(root) else {
            continue;
        };
        if !filter(relative_path) {
            continue;
        }

        found_files.push(path.to_path_buf());
    }

    tracing::debug!(root = %root.display(), count = found_files.len(), "Listed files");
    Ok(found_files)
}
