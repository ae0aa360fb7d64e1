//! Numbered selection menus on the terminal.

use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};

/// Print `items` as a 1-based menu and read a choice from `reader`.
///
/// Out-of-range and non-numeric answers re-prompt until a valid one is
/// given. Returns the 0-based index of the chosen item; end of input is an
/// error.
pub fn select_from_menu<R: BufRead, W: Write>(
    items: &[String],
    question: &str,
    reader: &mut R,
    writer: &mut W,
) -> Result<usize> {
    if items.is_empty() {
        bail!("Nothing to select: the list is empty");
    }

    for (i, item) in items.iter().enumerate() {
        writeln!(writer, "{}. {}", i + 1, item).context("Failed to write menu")?;
    }

    let mut line = String::new();
    loop {
        write!(writer, "\n{} (number): ", question).context("Failed to write prompt")?;
        writer.flush().context("Failed to flush prompt")?;

        line.clear();
        let read = reader.read_line(&mut line).context("Failed to read selection")?;
        if read == 0 {
            bail!("No selection made: end of input");
        }

        match line.trim().parse::<usize>() {
            Ok(choice) if (1..=items.len()).contains(&choice) => return Ok(choice - 1),
            _ => writeln!(
                writer,
                "Invalid selection. Please enter a number between 1 and {}.",
                items.len()
            )
            .context("Failed to write prompt")?,
        }
    }
}

/// Menu selection on stdin/stdout, returning the chosen item
pub fn select_interactive(items: &[String], question: &str) -> Result<String> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let index = select_from_menu(items, question, &mut stdin.lock(), &mut stdout.lock())?;
    Ok(items[index].clone())
}
