//! Colorful console output for search events.
//!
//! Provides a custom `tracing` layer that formats search events with colors.
//! Output goes to stderr so that solutions printed on stdout stay clean.
//!
//! ## Log Levels
//!
//! - **INFO**: Lifecycle events (search start/end)
//! - **WARN**: Non-monotone `reject` found under full assertion
//! - **DEBUG**: Termination firing
//! - **TRACE**: Individual solutions

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();
static SEARCH_START_NANOS: AtomicU64 = AtomicU64::new(0);

/// Package version for banner display.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_DIRECTIVE: &str = "backtrack_solver=info";

/// Initializes console output with [`DEFAULT_DIRECTIVE`].
///
/// Safe to call multiple times - only the first call has effect.
pub fn init() {
    init_with(DEFAULT_DIRECTIVE);
}

/// Initializes console output with a custom default directive, such as
/// `"backtrack_solver=trace"` to see every solution.
///
/// `RUST_LOG` still overrides the default. An unparsable directive falls
/// back to [`DEFAULT_DIRECTIVE`].
pub fn init_with(default_directive: &str) {
    INIT.get_or_init(|| {
        print_banner();

        let directive = default_directive
            .parse::<Directive>()
            .or_else(|_| DEFAULT_DIRECTIVE.parse::<Directive>());
        let mut builder = EnvFilter::builder();
        if let Ok(directive) = directive {
            builder = builder.with_default_directive(directive);
        }
        let filter = builder.from_env_lossy();

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(SearchConsoleLayer)
            .try_init();
    });
}

// Marks the start of a search for elapsed time tracking.
fn mark_search_start() {
    let epoch = EPOCH.get_or_init(Instant::now);
    let nanos = epoch.elapsed().as_nanos() as u64;
    SEARCH_START_NANOS.store(nanos, Ordering::Relaxed);
}

// Returns elapsed time since search start.
fn elapsed_secs() -> f64 {
    let Some(epoch) = EPOCH.get() else {
        return 0.0;
    };
    let start_nanos = SEARCH_START_NANOS.load(Ordering::Relaxed);
    let now_nanos = epoch.elapsed().as_nanos() as u64;
    now_nanos.saturating_sub(start_nanos) as f64 / 1_000_000_000.0
}

fn print_banner() {
    let banner = r#"
 _                _    _                  _
| |__   __ _  ___| | _| |_ _ __ __ _  ___| | __
| '_ \ / _` |/ __| |/ / __| '__/ _` |/ __| |/ /
| |_) | (_| | (__|   <| |_| | | (_| | (__|   <
|_.__/ \__,_|\___|_|\_\\__|_|  \__,_|\___|_|\_\
"#;

    let version_line = format!("             v{} - Backtracking Search\n", VERSION);

    let mut stderr = io::stderr().lock();
    let _ = writeln!(stderr, "{}", banner.bright_cyan());
    let _ = writeln!(stderr, "{}", version_line.bright_white().bold());
    let _ = stderr.flush();
}

/// A tracing layer that formats search events with colors.
pub struct SearchConsoleLayer;

impl<S: Subscriber> Layer<S> for SearchConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if !metadata.target().starts_with("backtrack") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor, *metadata.level());
        if !output.is_empty() {
            let _ = writeln!(io::stderr(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    engine: Option<String>,
    environment_mode: Option<String>,
    reason: Option<String>,
    candidate: Option<String>,
    rejected_candidate: Option<String>,
    descendant: Option<String>,
    nodes: Option<u64>,
    solutions: Option<u64>,
    rejected: Option<u64>,
    expansions: Option<u64>,
    peak_frontier: Option<u64>,
    max_depth: Option<u64>,
    depth: Option<u64>,
    duration_ms: Option<u64>,
    speed: Option<u64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        match field.name() {
            "event" => self.event = Some(s.trim_matches('"').to_string()),
            "engine" => self.engine = Some(s),
            "environment_mode" => self.environment_mode = Some(s),
            "reason" => self.reason = Some(s),
            "candidate" => self.candidate = Some(s),
            "rejected" => self.rejected_candidate = Some(s),
            "descendant" => self.descendant = Some(s),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "nodes" => self.nodes = Some(value),
            "solutions" => self.solutions = Some(value),
            "rejected" => self.rejected = Some(value),
            "expansions" => self.expansions = Some(value),
            "peak_frontier" => self.peak_frontier = Some(value),
            "max_depth" => self.max_depth = Some(value),
            "depth" => self.depth = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            "speed" => self.speed = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value as u64);
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "engine" => self.engine = Some(value.to_string()),
            "reason" => self.reason = Some(value.to_string()),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    match v.event.as_deref().unwrap_or("") {
        "search_start" => format_search_start(v),
        "search_end" => format_search_end(v),
        "terminated" => format_terminated(v),
        "non_monotone_reject" => format_non_monotone(v),
        "solution" => format_solution(v, level),
        _ => String::new(),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn count(n: u64) -> String {
    n.to_formatted_string(&Locale::en)
}

fn format_search_start(v: &EventVisitor) -> String {
    mark_search_start();
    let engine = v.engine.as_deref().unwrap_or("Unknown");
    let mode = v.environment_mode.as_deref().unwrap_or("Production");

    format!(
        "{} {} Searching │ {} │ {}",
        format_elapsed(),
        "▶".bright_green().bold(),
        engine.white().bold(),
        mode.bright_black()
    )
}

fn format_search_end(v: &EventVisitor) -> String {
    let engine = v.engine.as_deref().unwrap_or("Unknown");
    let reason = v.reason.as_deref().unwrap_or("Exhausted");
    let reason = if reason == "Exhausted" {
        reason.bright_green().bold().to_string()
    } else {
        reason.bright_yellow().bold().to_string()
    };

    let mut output = format!(
        "{} {} {} ended │ {} │ {} │ {} nodes │ {} nodes/s",
        format_elapsed(),
        "■".bright_cyan().bold(),
        engine.white().bold(),
        reason,
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
        count(v.nodes.unwrap_or(0)).white(),
        count(v.speed.unwrap_or(0)).bright_magenta().bold(),
    );

    output.push_str(&format!(
        " │ {} solutions │ {} rejected │ {} expanded │ peak frontier {} │ depth {}",
        count(v.solutions.unwrap_or(0)).bright_green().bold(),
        count(v.rejected.unwrap_or(0)).bright_red(),
        count(v.expansions.unwrap_or(0)).white(),
        count(v.peak_frontier.unwrap_or(0)).bright_yellow(),
        count(v.max_depth.unwrap_or(0)).white(),
    ));

    output
}

fn format_terminated(v: &EventVisitor) -> String {
    format!(
        "{} {} Termination reached │ {} nodes │ {} solutions",
        format_elapsed(),
        "◆".bright_yellow(),
        count(v.nodes.unwrap_or(0)).white(),
        count(v.solutions.unwrap_or(0)).white(),
    )
}

fn format_non_monotone(v: &EventVisitor) -> String {
    format!(
        "{} {} reject is not monotone │ {} rejected │ child {} kept",
        format_elapsed(),
        "!".bright_red().bold(),
        v.rejected_candidate.as_deref().unwrap_or("?").bright_red(),
        v.descendant.as_deref().unwrap_or("?").bright_red(),
    )
}

fn format_solution(v: &EventVisitor, level: Level) -> String {
    if level != Level::TRACE {
        return String::new();
    }

    format!(
        "{} {} depth {:>3} │ {}",
        format_elapsed(),
        "✓".bright_green(),
        v.depth.unwrap_or(0).bright_black(),
        v.candidate.as_deref().unwrap_or("").white()
    )
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        let mins = ms / 60_000;
        let secs = (ms % 60_000) / 1000;
        format!("{}m {}s", mins, secs)
    }
}
