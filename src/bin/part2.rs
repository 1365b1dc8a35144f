use anyhow::{Context, Result};
use clap::Parser;
use lucky_changes::CLIArgs;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let max_length = args.max_length.unwrap_or(lucky_changes::MAX_NUMBER_LENGTH);
    let required_changes = 7;
    let (position, number) = lucky_changes::find_last_match(required_changes, max_length)
        .with_context(|| {
            format!(
                "Failed to find any number of digits 4 and 7 with exactly {} change(s) within {} digit(s).",
                required_changes, max_length
            )
        })?;
    println!(
        "The last number of digits 4 and 7 with exactly {} change(s) is {}, found at position {}.",
        required_changes, number, position
    );

    Ok(())
}
