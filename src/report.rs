// 📋 Status Report
// Numbered listing of status lines, stamped when it is built

use chrono::{DateTime, Local};

#[derive(Debug, Clone)]
pub struct StatusReport {
    pub lines: Vec<String>,
    pub generated_at: DateTime<Local>,
}

impl StatusReport {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        StatusReport {
            lines: lines.into_iter().map(Into::into).collect(),
            generated_at: Local::now(),
        }
    }

    /// Lines numbered from 1, in input order
    pub fn numbered(&self) -> Vec<String> {
        self.lines
            .iter()
            .enumerate()
            .map(|(i, line)| format!("{}) {}", i + 1, line))
            .collect()
    }

    pub fn render(&self) -> String {
        let mut out = String::from("REPORT:\n");
        for line in self.numbered() {
            out.push_str(&line);
            out.push('\n');
        }
        out.push_str(&format!("Generated at: {}\n", self.generated_at.to_rfc3339()));
        out
    }
}
