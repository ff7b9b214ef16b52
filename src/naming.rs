//! Output file names used by the `roundtrip` tool: `notes.txt` becomes `notes-compressed.txt`
//! and `notes-decompressed.txt`; a name without an extension just gets the suffix.

use std::path::{Path, PathBuf};

pub const COMPRESSED_SUFFIX: &str = "-compressed";
pub const DECOMPRESSED_SUFFIX: &str = "-decompressed";

fn with_suffix(input: &Path, suffix: &str) -> PathBuf {
    let name = input.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
    let name = match name.rfind('.') {
        Some(dot) => format!("{}{}{}", &name[..dot], suffix, &name[dot..]),
        None => format!("{}{}", name, suffix),
    };
    input.with_file_name(name)
}

pub fn compressed_path(input: &Path) -> PathBuf {
    with_suffix(input, COMPRESSED_SUFFIX)
}

pub fn decompressed_path(input: &Path) -> PathBuf {
    with_suffix(input, DECOMPRESSED_SUFFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_extension() {
        let input = Path::new("data/notes.txt");
        assert_eq!(compressed_path(input), PathBuf::from("data/notes-compressed.txt"));
        assert_eq!(decompressed_path(input), PathBuf::from("data/notes-decompressed.txt"));
    }

    #[test]
    fn test_without_extension() {
        assert_eq!(compressed_path(Path::new("README")), PathBuf::from("README-compressed"));
    }

    #[test]
    fn test_only_last_dot_counts() {
        assert_eq!(
            compressed_path(Path::new("archive.tar.gz")),
            PathBuf::from("archive.tar-compressed.gz")
        );
    }
}
