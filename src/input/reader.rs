use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};
use std::string::FromUtf8Error;
use thiserror::Error;

const MAX_INPUT_SIZE: usize = 1024 * 1024; // 1MB

/// Input that cannot be used as a message.
#[derive(Error, Debug)]
pub enum InputError {
    #[error(
        "No input given\n\n\
         Pass a file, pipe text on stdin, or run 'ryomen chat' for the interactive panes."
    )]
    Missing,

    #[error("Failed to read file: {}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read from stdin")]
    Stdin(#[source] io::Error),

    #[error(
        "Input size ({:.1} MB) exceeds maximum allowed size (1 MB).\n\n\
         Messages this long are unlikely to be an email or chat message.",
        megabytes(.size)
    )]
    TooLarge { size: usize },

    #[error("Input is not valid UTF-8")]
    InvalidUtf8(#[from] FromUtf8Error),
}

/// Reads one-shot command input from a file or stdin.
pub struct InputReader;

impl InputReader {
    /// Reads `file`, or stdin when no file is given.
    ///
    /// Refuses to wait on an interactive terminal: one-shot commands expect
    /// piped input or a file.
    pub fn read(file: Option<&Path>) -> Result<String, InputError> {
        match file {
            Some(path) => Self::read_file(path),
            None if io::stdin().is_terminal() => Err(InputError::Missing),
            None => Self::read_stdin(),
        }
    }

    fn read_file(path: &Path) -> Result<String, InputError> {
        let file_error = |source| InputError::File {
            path: path.to_path_buf(),
            source,
        };

        let metadata = fs::metadata(path).map_err(file_error)?;
        check_size(metadata.len() as usize)?;

        let bytes = fs::read(path).map_err(file_error)?;
        Ok(String::from_utf8(bytes)?)
    }

    #[allow(clippy::significant_drop_tightening)]
    fn read_stdin() -> Result<String, InputError> {
        let mut buffer = Vec::new();
        let mut chunk = [0u8; 8192];
        let mut stdin = io::stdin().lock();

        loop {
            let bytes_read = stdin.read(&mut chunk).map_err(InputError::Stdin)?;

            if bytes_read == 0 {
                break;
            }

            buffer.extend_from_slice(&chunk[..bytes_read]);
            check_size(buffer.len())?;
        }

        Ok(String::from_utf8(buffer)?)
    }
}

#[allow(clippy::trivially_copy_pass_by_ref)] // thiserror passes fields by reference
fn megabytes(size: &usize) -> f64 {
    *size as f64 / 1024.0 / 1024.0
}

fn check_size(size: usize) -> Result<(), InputError> {
    if size > MAX_INPUT_SIZE {
        return Err(InputError::TooLarge { size });
    }
    Ok(())
}
