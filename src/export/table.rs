use crate::models::SessionSummary;
use crate::models::session_summary::get_headers;
use crate::utils::colors::colorize_waypoint;
use crate::utils::table::Table;

/// Human-readable trip table for the terminal.
pub fn render_table(sessions: &[SessionSummary], color: bool) -> String {
    let mut table = Table::with_headers(&get_headers());

    for s in sessions {
        let mut row = s.as_row();
        if color {
            row[3] = colorize_waypoint(&s.start_waypoint);
            row[4] = colorize_waypoint(&s.end_waypoint);
        }
        table.add_row(row);
    }

    table.render()
}
