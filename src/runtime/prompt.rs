use std::io::{self, BufRead, Write};
use std::path::PathBuf;

pub const ROOT_PROMPT: &str = "Enter the folder path containing your music files:";

/// Ask for the music folder and read one line of input.
///
/// Surrounding whitespace is trimmed; end of input yields an empty path,
/// which the walker then rejects.
pub fn read_root<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<PathBuf> {
    writeln!(output, "{ROOT_PROMPT}")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(PathBuf::from(line.trim()))
}
