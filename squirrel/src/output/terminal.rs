//! Human-readable terminal output.
//!
//! Renderers build the whole text and return it; printing is left to the
//! caller. Colors are applied only when the palette is enabled, so piped
//! output stays free of escape codes.

use chrono::{DateTime, Local, Utc};
use owo_colors::{OwoColorize, Style};

use crate::analyzer::Buckets;
use crate::models::{InteractionRecord, ProjectSummary};

const NAME_WIDTH: usize = 22;
const SESSION_SUMMARY_WIDTH: usize = 60;
const PROMPT_WIDTH: usize = 70;

/// Branches left out of the per-project line.
const QUIET_BRANCHES: &[&str] = &["main", "master"];

#[derive(Debug, Clone, Copy)]
struct Palette {
    color: bool,
}

impl Palette {
    const fn new(color: bool) -> Self {
        Self { color }
    }

    fn paint(self, text: &str, style: Style) -> String {
        if self.color {
            text.style(style).to_string()
        } else {
            text.to_string()
        }
    }

    fn title(self, text: &str) -> String {
        self.paint(text, Style::new().bold().truecolor(255, 140, 0))
    }

    fn section(self, text: &str) -> String {
        self.paint(text, Style::new().bold().truecolor(135, 206, 235))
    }

    fn warn(self, text: &str) -> String {
        self.paint(text, Style::new().truecolor(255, 215, 0))
    }

    fn ok(self, text: &str) -> String {
        self.paint(text, Style::new().truecolor(152, 251, 152))
    }

    fn sleep(self, text: &str) -> String {
        self.paint(text, Style::new().truecolor(128, 128, 128))
    }

    fn dim(self, text: &str) -> String {
        self.paint(text, Style::new().truecolor(102, 102, 102))
    }
}

/// Shorten to `max` characters, marking the cut with `~`.
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
    out.push('~');
    out
}

/// Collapse line breaks so a preview stays on one line.
fn single_line(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn local(ts: DateTime<Utc>, fmt: &str) -> String {
    ts.with_timezone(&Local).format(fmt).to_string()
}

fn project_columns(p: &ProjectSummary) -> Vec<String> {
    vec![
        format!("{:<width$}", truncate(&p.short_name, NAME_WIDTH), width = NAME_WIDTH),
        local(p.last_activity, "%b %d"),
        format!("{:4} prompts", p.prompt_count),
    ]
}

fn format_project(p: &ProjectSummary, palette: Palette) -> String {
    let mut columns = project_columns(p);

    if p.uncommitted_files > 0 {
        columns.push(palette.warn(&format!("{} uncommitted", p.uncommitted_files)));
    }

    let branch = p.effective_branch();
    if !branch.is_empty() && !QUIET_BRANCHES.contains(&branch) {
        columns.push(palette.dim(&format!("branch: {branch}")));
    }

    if p.days_since_active > 0 {
        columns.push(palette.dim(&format!("{}d inactive", p.days_since_active)));
    }

    columns.join(" | ")
}

fn push_section(
    lines: &mut Vec<String>,
    heading: &str,
    projects: &[ProjectSummary],
    bullet: &str,
    palette: Palette,
) {
    if projects.is_empty() {
        return;
    }
    if !lines.is_empty() {
        lines.push(String::new());
    }
    lines.push(palette.section(&format!("{heading} ({})", projects.len())));
    for p in projects {
        lines.push(format!("{bullet}{}", format_project(p, palette)));
    }
}

/// Render the four attention buckets.
pub fn render_terminal(buckets: &Buckets, color: bool) -> String {
    let palette = Palette::new(color);
    let mut body = Vec::new();

    push_section(&mut body, "Open work", &buckets.open_work, &palette.warn("  ! "), palette);
    push_section(
        &mut body,
        "Recent activity",
        &buckets.recent_activity,
        &palette.ok("  + "),
        palette,
    );
    push_section(&mut body, "Sleeping", &buckets.sleeping, &palette.sleep("  ~ "), palette);

    if !buckets.acknowledged.is_empty() {
        if !body.is_empty() {
            body.push(String::new());
        }
        body.push(palette.section(&format!("Acknowledged ({})", buckets.acknowledged.len())));
        for p in &buckets.acknowledged {
            let line = format!("  ✓ {}", project_columns(p).join(" | "));
            body.push(palette.dim(&line));
        }
    }

    if buckets.is_empty() {
        body.push(palette.dim("  No projects found in the selected time window."));
    }

    let mut out = palette.title("Squirrel - your forgotten nuts");
    out.push_str("\n\n");
    for line in body {
        out.push_str(&line);
        out.push('\n');
    }
    out
}

fn field(label: &str, value: &str) -> String {
    format!("  {:<12}{value}", format!("{label}:"))
}

/// Render the detail view of one project.
pub fn render_project_detail(
    p: &ProjectSummary,
    prompts: &[InteractionRecord],
    color: bool,
) -> String {
    let palette = Palette::new(color);
    let mut lines = vec![
        palette.title("Squirrel - project detail"),
        String::new(),
        palette.section("Project"),
        field("Path", &p.path),
        field("Name", &p.short_name),
    ];

    let branch = p.effective_branch();
    if !branch.is_empty() {
        lines.push(field("Branch", branch));
    }

    if p.git_dirty {
        lines.push(field(
            "Git",
            &palette.warn(&format!("{} uncommitted", p.uncommitted_files)),
        ));
    } else if !p.git_branch.is_empty() {
        lines.push(field("Git", &palette.ok("clean")));
    }

    lines.push(field("Score", &format!("{:.1}", p.score)));
    lines.push(field("Prompts", &p.prompt_count.to_string()));

    lines.push(String::new());
    lines.push(palette.section("Activity"));
    lines.push(field("First", &local(p.first_activity, "%Y-%m-%d %H:%M")));
    lines.push(field("Last", &local(p.last_activity, "%Y-%m-%d %H:%M")));
    if p.days_since_active > 0 {
        lines.push(field("Inactive", &format!("{} days", p.days_since_active)));
    }

    if !p.sessions.is_empty() {
        lines.push(String::new());
        lines.push(palette.section(&format!("Sessions ({})", p.sessions.len())));
        for s in &p.sessions {
            let summary = if s.summary.is_empty() {
                &s.first_prompt
            } else {
                &s.summary
            };
            let date = s.modified.get(..10).unwrap_or(&s.modified);
            lines.push(format!(
                "  {}  {}  {} msgs",
                palette.dim(date),
                truncate(&single_line(summary), SESSION_SUMMARY_WIDTH),
                s.message_count
            ));
        }
    }

    if !prompts.is_empty() {
        lines.push(String::new());
        lines.push(palette.section(&format!("Recent prompts ({})", prompts.len())));
        for r in prompts {
            let ts = r
                .occurred_at()
                .map_or_else(|| "?".to_string(), |t| local(t, "%m-%d %H:%M"));
            lines.push(format!(
                "  {}  {}",
                palette.dim(&ts),
                truncate(&single_line(&r.display), PROMPT_WIDTH)
            ));
        }
    }

    if !p.todos.is_empty() {
        lines.push(String::new());
        lines.push(palette.section(&format!("Markers ({})", p.todos.len())));
        for todo in &p.todos {
            lines.push(format!(
                "  {} {}",
                palette.warn(&format!("[{}]", todo.source)),
                todo.text
            ));
        }
    }

    if !p.last_messages.is_empty() {
        lines.push(String::new());
        lines.push(palette.section(&format!("Recent messages ({})", p.last_messages.len())));
        for m in &p.last_messages {
            lines.push(format!("  {}", truncate(&single_line(m), PROMPT_WIDTH)));
        }
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
