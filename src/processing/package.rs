/*! Packaging (prepping for distribution) utilities

Computes a sha384sum for each file of a tier folder, and writes them into a single file,
_usually_ compatible with `sha384sum -c` implementations.
!*/
use std::fs::File;
use std::io;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{debug, info};
use sha2::Digest;
use sha2::Sha384;

use crate::error::Error;

/// Name of the checksum file for `name`.
pub fn checksum_filename(name: &str) -> String {
    format!("{}_sha384.txt", name)
}

/// Create checksum file `<name>_sha384.txt` in `dir`, covering every other file of `dir`.
///
/// Files are hashed in name order. Returns the path of the checksum file.
pub fn gen_checksum_file(dir: &Path, name: &str) -> Result<PathBuf, Error> {
    let checksum_filepath = dir.join(checksum_filename(name));

    debug!("gen checksum on folder {:?}", dir);
    let mut hasher = Sha384::new();
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(Error::file(dir))? {
        let path = entry.map_err(Error::file(dir))?.path();
        if path.is_file() && path != checksum_filepath {
            files.push(path);
        }
    }
    files.sort();

    debug!("files to hash: {:#?}", files);
    let mut lines: Vec<String> = Vec::with_capacity(files.len());
    for f in files {
        let filename = f
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| Error::Custom(format!("invalid file name: {:?}", f)))?;

        // push hash and filename
        info!("[{}] hashing {:?}", name, filename);
        let hash = get_hash(&f, &mut hasher)?;
        lines.push(format!("{} {}", hash, filename));
    }

    debug!("writing hashes to: {:?}", checksum_filepath);
    let mut checksum_file =
        File::create(&checksum_filepath).map_err(Error::file(&checksum_filepath))?;

    // write filenames and hashes in sha384sum -c compatible format.
    for line in lines {
        writeln!(&mut checksum_file, "{}", line).map_err(Error::file(&checksum_filepath))?;
    }

    Ok(checksum_filepath)
}

/// compute the hash of the file pointed by the filepath by using [io::copy] between a file handler and the hasher.
#[inline]
fn get_hash(filepath: &Path, hasher: &mut Sha384) -> Result<String, Error> {
    let mut f = File::open(filepath).map_err(Error::file(filepath))?;
    io::copy(&mut f, hasher).map_err(Error::file(filepath))?;
    let result = format!("{:x}", hasher.finalize_reset());
    Ok(result)
}
