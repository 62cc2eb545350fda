//! Report rendering.
//!
//! The output format is an external contract: a header line followed by one
//! detail line per completed task, each detail line being a tab, a space,
//! and the title. Any deviation in whitespace or ordering is a regression.

use crate::types::TaskSummary;

/// Render the completion report for one employee.
pub fn render_report(name: &str, summary: &TaskSummary) -> String {
    let mut out = format!(
        "Employee {} is done with tasks({}/{}):\n",
        name,
        summary.done(),
        summary.total
    );
    for title in &summary.completed_titles {
        out.push_str("\t ");
        out.push_str(title);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_header_and_detail_lines_are_exact() {
        let summary = TaskSummary {
            total: 2,
            completed_titles: vec!["A".to_string()],
        };
        let report = render_report("Leanne Graham", &summary);
        assert_eq!(report, "Employee Leanne Graham is done with tasks(1/2):\n\t A\n");
    }

    #[test]
    fn test_empty_summary_renders_header_only() {
        let report = render_report("Ervin Howell", &TaskSummary::default());
        assert_eq!(report, "Employee Ervin Howell is done with tasks(0/0):\n");
    }

    #[test]
    fn test_detail_lines_follow_summary_order() {
        let summary = TaskSummary {
            total: 3,
            completed_titles: vec!["first".to_string(), "second".to_string()],
        };
        let report = render_report("X", &summary);
        let lines: Vec<_> = report.lines().collect();
        assert_eq!(lines[1], "\t first");
        assert_eq!(lines[2], "\t second");
    }

    #[test]
    fn test_titles_are_not_truncated_or_punctuated() {
        let title = "a fairly long title with trailing spaces   ";
        let summary = TaskSummary {
            total: 1,
            completed_titles: vec![title.to_string()],
        };
        let report = render_report("X", &summary);
        assert!(report.ends_with(&format!("\t {title}\n")));
    }
}
