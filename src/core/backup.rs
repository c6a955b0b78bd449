use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use std::fs;
use std::path::{Path, PathBuf};

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the store to `dest_file`, optionally compressing the copy
    /// (zip on Windows, tar.gz elsewhere). Refuses to overwrite an
    /// existing destination unless `force` is set.
    pub fn backup(cfg: &Config, dest_file: &str, compress: bool, force: bool) -> AppResult<()> {
        let src = Path::new(&cfg.database);
        let dest = Path::new(dest_file);

        if !src.exists() {
            return Err(AppError::Backup(format!(
                "Database not found: {}",
                src.display()
            )));
        }

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }

        if dest.exists() && !force {
            return Err(AppError::Backup(format!(
                "'{}' already exists (use --force to overwrite)",
                dest.display()
            )));
        }

        fs::copy(src, dest)?;
        success(format!("Backup created: {}", dest.display()));

        if compress {
            let compressed = compress_backup(dest)?;
            if compressed != dest {
                fs::remove_file(dest)?;
            }
            success(format!("Compressed: {}", compressed.display()));
        }

        Ok(())
    }
}

#[cfg(target_os = "windows")]
fn compress_backup(path: &Path) -> AppResult<PathBuf> {
    use std::io;
    use zip::write::FileOptions;
    use zip::ZipWriter;

    let zip_path = path.with_extension("zip");
    let file = fs::File::create(&zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let name = path
        .file_name()
        .ok_or_else(|| AppError::Backup("invalid backup file name".into()))?
        .to_string_lossy();

    zip.start_file(name, options).map_err(io::Error::other)?;

    let mut f = fs::File::open(path)?;
    io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(io::Error::other)?;

    Ok(zip_path)
}

#[cfg(not(target_os = "windows"))]
fn compress_backup(path: &Path) -> AppResult<PathBuf> {
    use flate2::write::GzEncoder;
    use flate2::Compression;

    let tgz_path = path.with_extension("tar.gz");
    let file = fs::File::create(&tgz_path)?;
    let enc = GzEncoder::new(file, Compression::default());
    let mut ar = tar::Builder::new(enc);

    let name = path
        .file_name()
        .ok_or_else(|| AppError::Backup("invalid backup file name".into()))?;

    ar.append_path_with_name(path, name)?;
    ar.into_inner()?.finish()?;

    Ok(tgz_path)
}
