use crate::error::{LaudoError, Result};
use std::path::{Path, PathBuf};
use tracing::warn;
use walkdir::WalkDir;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedFile {
    pub path: PathBuf,
    pub file_name: String,
}

/// フォルダ直下の通常ファイルを列挙する（拡張子は問わない）
pub fn list_files(folder: &Path) -> Result<Vec<ScannedFile>> {
    if !folder.is_dir() {
        return Err(LaudoError::FolderNotFound(folder.display().to_string()));
    }

    let mut files = Vec::new();

    for entry in WalkDir::new(folder)
        .min_depth(1)
        .max_depth(1)  // 直下のみ（再帰しない）
    {
        let entry = match entry {
            Ok(entry) => entry,
            // フォルダ自体が読めない場合は中断
            Err(err) if err.depth() == 0 => return Err(std::io::Error::from(err).into()),
            Err(err) => {
                warn!("entrada ignorada: {}", err);
                continue;
            }
        };

        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        files.push(ScannedFile {
            path: path.to_path_buf(),
            file_name,
        });
    }

    // ファイル名でソート
    files.sort_by(|a, b| a.file_name.cmp(&b.file_name));

    Ok(files)
}
