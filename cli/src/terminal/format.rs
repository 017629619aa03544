use catisland_common::application::ApplicationRecord;
use colored::*;

use crate::terminal::colors;

/// `<address><path> (<state>)`, coloured per part.
pub fn application_line(app: &ApplicationRecord) -> String {
    format!(
        "{}{} ({})",
        app.host.color(colors::HOST),
        app.path.color(colors::PRIMARY),
        state(&app.state)
    )
}

pub fn state(state: &str) -> ColoredString {
    match state {
        "running" => state.color(colors::STATE_RUNNING),
        "stopped" => state.color(colors::STATE_STOPPED),
        _ => state.color(colors::STATE_OTHER),
    }
}

pub fn plural(count: usize, one: &str, many: &str) -> String {
    let unit: &str = if count == 1 { one } else { many };
    format!("{count} {unit}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn application_line_keeps_display_form() {
        colored::control::set_override(false);
        let app = ApplicationRecord::new("http://a:8080", "/app1", "running");
        assert_eq!(application_line(&app), "http://a:8080/app1 (running)");
    }

    #[test]
    fn plural_picks_unit() {
        assert_eq!(plural(1, "host", "hosts"), "1 host");
        assert_eq!(plural(0, "host", "hosts"), "0 hosts");
        assert_eq!(plural(7, "app", "apps"), "7 apps");
    }
}
