//! Interactive prompts

use anyhow::{Result, bail};
use iso_inject::PatchMode;
use std::io::{self, BufRead, Write};

/// Question asked when no `--mode` was given
pub const MODE_PROMPT: &str = "Do you want to apply or disable a mod? (apply/disable): ";

/// Shown once the run succeeded
pub const EXIT_PROMPT: &str = "Task finished, you may exit now.";

/// Ask for a mode until the answer is `apply` or `disable`
///
/// Invalid answers are reported and the question is asked again with no
/// retry limit. Running out of input is an error since no answer can follow.
pub fn prompt_mode<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<PatchMode> {
    loop {
        write!(output, "{MODE_PROMPT}")?;
        output.flush()?;

        let mut answer = String::new();
        if input.read_line(&mut answer)? == 0 {
            bail!("Input ended before apply or disable was chosen.");
        }

        match answer.parse::<PatchMode>() {
            Ok(mode) => return Ok(mode),
            Err(e) => {
                log::debug!("Rejected mode answer {:?}", answer.trim());
                writeln!(output, "Error: {e}")?;
            }
        }
    }
}

/// Hold the console open until the user presses Enter
pub fn wait_for_exit<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<()> {
    write!(output, "{EXIT_PROMPT}")?;
    output.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_prompt_accepts_first_valid_answer() {
        let mut input = Cursor::new("Disable\n");
        let mut output = Vec::new();

        let mode = prompt_mode(&mut input, &mut output).unwrap();
        assert_eq!(mode, PatchMode::Disable);
        assert_eq!(String::from_utf8(output).unwrap(), MODE_PROMPT);
    }

    #[test]
    fn test_prompt_repeats_on_invalid_answers() {
        let mut input = Cursor::new("yes\n\nAPPLY\n");
        let mut output = Vec::new();

        let mode = prompt_mode(&mut input, &mut output).unwrap();
        assert_eq!(mode, PatchMode::Apply);

        let output = String::from_utf8(output).unwrap();
        assert_eq!(output.matches(MODE_PROMPT).count(), 3);
        assert!(output.contains("Error: The answer given 'yes' was not a valid answer.\n"));
        assert!(output.contains("Error: The answer given '' was not a valid answer.\n"));
    }

    #[test]
    fn test_prompt_fails_on_end_of_input() {
        let mut input = Cursor::new("maybe\n");
        let mut output = Vec::new();

        let err = prompt_mode(&mut input, &mut output).unwrap_err();
        assert!(err.to_string().contains("Input ended"));
    }

    #[test]
    fn test_wait_for_exit() {
        let mut input = Cursor::new("\n");
        let mut output = Vec::new();

        wait_for_exit(&mut input, &mut output).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), EXIT_PROMPT);

        // Closed input must not block or fail.
        let mut input = Cursor::new("");
        wait_for_exit(&mut input, &mut Vec::new()).unwrap();
    }
}
