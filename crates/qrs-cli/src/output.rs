use serde::Serialize;

/// Print a command response as pretty JSON on stdout.
pub fn output<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
