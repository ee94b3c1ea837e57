//! Start menu shown when no `--mode` is given

use anyhow::{bail, Context, Result};
use crossterm::style::Stylize;
use std::io::{BufRead, Write};

use crate::game::GameMode;

/// Ask on stdin until a valid choice is entered
pub fn prompt_for_mode() -> Result<GameMode> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    prompt_with(&mut stdin.lock(), &mut stdout.lock())
}

pub fn prompt_with<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<GameMode> {
    write_menu(output)?;

    let mut line = String::new();
    loop {
        write!(output, "  {} ", "Enter choice (1-3):".cyan()).context("Failed to write prompt")?;
        output.flush().context("Failed to flush prompt")?;

        line.clear();
        if input.read_line(&mut line).context("Failed to read choice")? == 0 {
            bail!("No game mode selected");
        }
        if let Some(mode) = GameMode::from_menu_choice(&line) {
            return Ok(mode);
        }
        writeln!(output, "  {}", "Invalid choice.".red()).context("Failed to write prompt")?;
    }
}

fn write_menu<W: Write>(output: &mut W) -> Result<()> {
    let frame = "+----------------------------+".green().bold();
    writeln!(output, "  {frame}")?;
    writeln!(output, "  {}", "|     S N A K E   G A M E    |".green().bold())?;
    writeln!(output, "  {frame}")?;
    writeln!(output, "    {} Versus (slither.io)", "1.".yellow())?;
    writeln!(output, "    {} Play yourself", "2.".yellow())?;
    writeln!(output, "    {} Watch AI play (2x)", "3.".yellow())?;
    writeln!(output)?;
    Ok(())
}
