// Interactive prompts over caller-supplied input and output streams

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

const CONFIRM_PROMPT: &str = "Do you want to download the latest version? (yes/no): ";
const PATH_PROMPT: &str = "Enter the path where you want to download the file \
     (press Enter for current directory, or 'cancel' to abort): ";

/// Read one line, `None` at end of input.
fn read_answer(input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Ask whether to download. Only "yes" or "y" (any case) agrees.
pub fn confirm_download(input: &mut impl BufRead, output: &mut impl Write) -> io::Result<bool> {
    write!(output, "{}", CONFIRM_PROMPT)?;
    output.flush()?;

    let answer = read_answer(input)?.unwrap_or_default().to_lowercase();
    Ok(answer == "yes" || answer == "y")
}

/// Ask for a destination directory until an existing one is given.
///
/// An empty answer selects the working directory. "cancel", or running out
/// of input, returns `None`.
pub fn prompt_download_dir(
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> io::Result<Option<PathBuf>> {
    loop {
        write!(output, "{}", PATH_PROMPT)?;
        output.flush()?;

        let Some(answer) = read_answer(input)? else {
            return Ok(None);
        };

        if answer.eq_ignore_ascii_case("cancel") {
            return Ok(None);
        }

        if answer.is_empty() {
            match std::env::current_dir() {
                Ok(dir) => {
                    writeln!(output, "Using current directory: {}", dir.display())?;
                    return Ok(Some(dir));
                }
                Err(e) => {
                    writeln!(output, "Error getting current directory: {}", e)?;
                    continue;
                }
            }
        }

        let path = PathBuf::from(&answer);
        if !path.is_dir() {
            writeln!(output, "Specified path does not exist. Please try again.")?;
            continue;
        }
        return Ok(Some(path));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn confirm(answer: &str) -> bool {
        let mut output = Vec::new();
        confirm_download(&mut Cursor::new(answer.to_string()), &mut output).unwrap()
    }

    #[test]
    fn test_confirm_download_answers() {
        assert!(confirm("yes\n"));
        assert!(confirm("  YES \n"));
        assert!(confirm("y\n"));
        assert!(!confirm("no\n"));
        assert!(!confirm("maybe\n"));
        assert!(!confirm(""));
    }

    #[test]
    fn test_confirm_download_writes_prompt() {
        let mut output = Vec::new();
        confirm_download(&mut Cursor::new("no\n"), &mut output).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), CONFIRM_PROMPT);
    }

    #[test]
    fn test_prompt_download_dir_existing_path() {
        let dir = TempDir::new().unwrap();
        let mut input = Cursor::new(format!("{}\n", dir.path().display()));
        let mut output = Vec::new();

        let chosen = prompt_download_dir(&mut input, &mut output).unwrap();
        assert_eq!(chosen, Some(dir.path().to_path_buf()));
    }

    #[test]
    fn test_prompt_download_dir_retries_missing_path() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("does-not-exist");
        let mut input = Cursor::new(format!(
            "{}\n{}\n",
            missing.display(),
            dir.path().display()
        ));
        let mut output = Vec::new();

        let chosen = prompt_download_dir(&mut input, &mut output).unwrap();
        assert_eq!(chosen, Some(dir.path().to_path_buf()));

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Specified path does not exist. Please try again."));
        assert_eq!(text.matches(PATH_PROMPT).count(), 2);
    }

    #[test]
    fn test_prompt_download_dir_empty_uses_current_dir() {
        let mut output = Vec::new();
        let chosen = prompt_download_dir(&mut Cursor::new("\n"), &mut output).unwrap();

        assert_eq!(chosen, Some(std::env::current_dir().unwrap()));
        assert!(
            String::from_utf8(output)
                .unwrap()
                .contains("Using current directory:")
        );
    }

    #[test]
    fn test_prompt_download_dir_cancel_and_eof() {
        let mut output = Vec::new();
        assert_eq!(
            prompt_download_dir(&mut Cursor::new("cancel\n"), &mut output).unwrap(),
            None
        );
        assert_eq!(
            prompt_download_dir(&mut Cursor::new(""), &mut output).unwrap(),
            None
        );
    }
}
