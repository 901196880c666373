//! Terminal output formatting.

use buster_core::ui::layout::{self, Panel, PanelKind};
use buster_core::AnalysisResult;
use colored::{ColoredString, Colorize};

/// Print a result in display priority: reassurance, summary, deadline, action.
pub fn print_result(result: &AnalysisResult) {
    println!();
    for panel in layout::panels(result) {
        println!("{} {}", panel.icon(), heading(&panel));
        println!("   {}", body(&panel));
        println!();
    }
}

fn heading(panel: &Panel) -> ColoredString {
    match panel.kind {
        PanelKind::Reassurance => panel.heading.green().bold(),
        PanelKind::Summary => panel.heading.blue().bold(),
        PanelKind::Deadline if panel.emphasized => panel.heading.yellow().bold(),
        PanelKind::Deadline => panel.heading.dimmed(),
        PanelKind::Action => panel.heading.cyan().bold(),
    }
}

fn body(panel: &Panel) -> ColoredString {
    match panel.kind {
        PanelKind::Deadline if panel.emphasized => panel.body.as_str().yellow().bold(),
        PanelKind::Deadline => panel.body.as_str().dimmed(),
        PanelKind::Action => panel.body.as_str().bold(),
        _ => panel.body.as_str().normal(),
    }
}
