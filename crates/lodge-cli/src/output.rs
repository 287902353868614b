use serde::Serialize;

use crate::cli::OutputFormat;

/// Render a serializable response to a string in the requested format.
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde::Serialize;

    use super::*;

    #[derive(Serialize)]
    struct Sample {
        ok: bool,
        count: u32,
    }

    #[test]
    fn raw_is_compact_json() {
        let rendered = render(&Sample { ok: true, count: 2 }, OutputFormat::Raw).expect("render");
        assert_eq!(rendered, r#"{"ok":true,"count":2}"#);
    }

    #[test]
    fn json_is_pretty_printed() {
        let rendered = render(&Sample { ok: true, count: 2 }, OutputFormat::Json).expect("render");
        assert!(rendered.contains("\n"));
        assert!(rendered.contains("\"count\": 2"));
    }
}
