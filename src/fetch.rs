//! Download, unpack, and clean up a dataset archive.
//!
//! The pipeline is deliberately linear and blocking: retrieve the archive,
//! untar it beside itself, delete the tarball. Any failure is terminal for
//! the invocation; a failed unpack leaves the archive on disk.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;

use crate::dataset::DatasetDescriptor;
use crate::error::NavfetchError;

/// Fetch one dataset into `base_dir`.
///
/// Downloads the descriptor's archive, unpacks it, and removes the archive,
/// leaving `base_dir/<dir_name>` as the only new entry. Returns the path of
/// the extracted directory.
pub fn fetch(descriptor: &DatasetDescriptor, base_dir: &Path) -> Result<PathBuf, NavfetchError> {
    let archive_path = base_dir.join(&descriptor.archive_name);

    println!("Downloading {} dataset...", descriptor.dir_name);
    download_archive(&descriptor.url, &archive_path)?;
    unpack_archive(&archive_path, base_dir)?;
    fs::remove_file(&archive_path)?;

    println!("Saved folder: {}", descriptor.dir_name);
    Ok(base_dir.join(&descriptor.dir_name))
}

/// Stream the archive at `url` into `dest`, overwriting any prior download.
///
/// The destination file is only created once the request has succeeded, so
/// an unreachable host or a non-2xx response leaves nothing on disk.
pub fn download_archive(url: &str, dest: &Path) -> Result<(), NavfetchError> {
    let mut response = ureq::get(url)
        .call()
        .map_err(|source| NavfetchError::Transfer {
            url: url.to_string(),
            message: source.to_string(),
        })?;

    let mut reader = response.body_mut().as_reader();
    let mut file = File::create(dest)?;
    std::io::copy(&mut reader, &mut file).map_err(|source| NavfetchError::Transfer {
        url: url.to_string(),
        message: source.to_string(),
    })?;

    Ok(())
}

/// Unpack a gzip tarball into `dest`. The archive is left in place; deleting
/// it after a successful unpack is the caller's decision.
pub fn unpack_archive(archive_path: &Path, dest: &Path) -> Result<(), NavfetchError> {
    let file = File::open(archive_path)?;
    let mut archive = tar::Archive::new(GzDecoder::new(file));
    archive
        .unpack(dest)
        .map_err(|source| NavfetchError::Extraction {
            archive: archive_path.to_path_buf(),
            message: source.to_string(),
        })
}
