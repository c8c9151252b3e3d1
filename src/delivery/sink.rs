use crate::models::Match;
use crate::utils::display_feed_timestamp;

/// Where a rendered document came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceTag {
    Cache,
    Static,
    Live,
}

impl SourceTag {
    pub fn label(self) -> &'static str {
        match self {
            SourceTag::Cache => "cache",
            SourceTag::Static => "static",
            SourceTag::Live => "live",
        }
    }
}

/// Render hook for the delivery controller, resolved at construction.
/// The controller never probes for optional callbacks at call time; a
/// caller that wants nothing rendered passes [`NoopSink`].
pub trait RenderSink {
    fn render_matches(&mut self, matches: &[Match]);
    fn show_status(&mut self, last_update: Option<&str>, source: SourceTag, stale: bool);
    fn show_error(&mut self);
    fn show_toast(&mut self, _message: &str) {}
}

pub struct NoopSink;

impl RenderSink for NoopSink {
    fn render_matches(&mut self, _matches: &[Match]) {}
    fn show_status(&mut self, _last_update: Option<&str>, _source: SourceTag, _stale: bool) {}
    fn show_error(&mut self) {}
}

/// Console sink used by the `load` and `refresh` CLI commands.
pub struct ConsoleSink;

impl RenderSink for ConsoleSink {
    fn render_matches(&mut self, matches: &[Match]) {
        for m in matches {
            println!(
                "[{}] {} | {} {} | {} — {} | {} {} {}",
                m.sport, m.league, m.date, m.time, m.team1, m.team2, m.p1, m.x, m.p2
            );
        }
    }

    fn show_status(&mut self, last_update: Option<&str>, source: SourceTag, stale: bool) {
        let staleness = if stale { ", stale" } else { "" };
        println!(
            "🕑 Updated: {} ({}{})",
            display_feed_timestamp(last_update),
            source.label(),
            staleness
        );
    }

    fn show_error(&mut self) {
        println!("❌ Failed to load matches. Try again later.");
    }

    fn show_toast(&mut self, message: &str) {
        println!("💬 {message}");
    }
}
