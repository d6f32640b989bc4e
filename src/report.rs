//! Non-interactive trace output

use crate::trace::Trace;
use std::fmt::Write;

/// Render a trace as one line per step followed by a verdict
pub fn render_plain(trace: &Trace) -> String {
    let mut out = String::new();

    for step in &trace.steps {
        let ch = match step.ch {
            Some(c) => format!("'{}'", c),
            None => "end".to_string(),
        };
        let stack: String = step.stack_snapshot.iter().collect();
        let status = if step.status.as_str().is_empty() {
            "-"
        } else {
            step.status.as_str()
        };
        // Writing to a String cannot fail
        let _ = writeln!(
            out,
            "[{:>3}] {:<5} stack=[{}] {:<5} {}",
            step.index, ch, stack, status, step.message
        );
    }

    let counts = trace.counts();
    let _ = writeln!(
        out,
        "Result: {} ({} steps: {} valid, {} skipped, {} error)",
        if trace.is_valid {
            "balanced"
        } else {
            "not balanced"
        },
        trace.len(),
        counts.valid,
        counts.unset,
        counts.error
    );
    out
}

/// Render a trace as pretty-printed JSON
pub fn render_json(trace: &Trace) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(trace)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::evaluate;

    #[test]
    fn test_plain_balanced() {
        let text = render_plain(&evaluate("(x)"));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("Push '(' to stack"));
        assert!(lines[1].contains("'x'"));
        assert!(lines[1].contains(" - "));
        assert!(lines[3].starts_with("Result: balanced"));
    }

    #[test]
    fn test_plain_unclosed_marks_end() {
        let text = render_plain(&evaluate("(("));
        assert!(text.contains("end"));
        assert!(text.contains("Unclosed brackets remaining: (("));
        assert!(text.contains("Result: not balanced"));
    }

    #[test]
    fn test_json_shape() {
        let json = render_json(&evaluate("(]")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["is_valid"], false);
        assert_eq!(value["steps"].as_array().unwrap().len(), 2);
        assert_eq!(value["steps"][1]["status"], "error");
    }
}
