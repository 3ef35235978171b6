// Digest command for printing the SHA-256 of a local file

use crate::sources::hash;
use std::io::Write;
use std::path::Path;

/// Writes `<digest>  <path>`, the layout of `sha256sum`.
pub fn digest(path: &Path, output: &mut impl Write) -> anyhow::Result<String> {
    let digest = hash::sha256_file(path)?;
    writeln!(output, "{}  {}", digest, path.display())?;
    Ok(digest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_digest_line() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("example");
        std::fs::write(&path, "test content").unwrap();

        let mut output = Vec::new();
        digest(&path, &mut output).unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            format!(
                "6ae8a75555209fd6c44157c0aed8016e763ff435a19cf186f76863140143ff72  {}\n",
                path.display()
            )
        );
    }

    #[test]
    fn test_digest_missing_file() {
        let dir = TempDir::new().unwrap();
        let mut output = Vec::new();
        assert!(digest(&dir.path().join("nope"), &mut output).is_err());
    }
}
