//! Rolling Logger
//!
//! A `tracing` subscriber for the app: one layer prints each event (browser
//! console on wasm32, stderr elsewhere), another keeps the most recent
//! lines in memory so the UI can show them. Records sent through the `log`
//! facade are bridged into the same subscriber.

use std::collections::VecDeque;
use std::fmt;
use std::sync::{Arc, Mutex, OnceLock};

use chrono::Local;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

/// Default number of lines kept in memory
pub const DEFAULT_CAPACITY: usize = 500;

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

static BUFFER: OnceLock<LogBuffer> = OnceLock::new();

/// Fixed-size buffer of formatted lines; the oldest line is evicted first
#[derive(Debug)]
pub struct LineBuffer {
    lines: VecDeque<String>,
    capacity: usize,
}

impl LineBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, line: String) {
        if self.capacity == 0 {
            return;
        }
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    pub fn snapshot(&self) -> Vec<String> {
        self.lines.iter().cloned().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Shared handle to a `LineBuffer`
#[derive(Debug, Clone)]
pub struct LogBuffer {
    lines: Arc<Mutex<LineBuffer>>,
}

impl LogBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: Arc::new(Mutex::new(LineBuffer::new(capacity))),
        }
    }

    pub fn push(&self, line: String) {
        match self.lines.lock() {
            Ok(mut lines) => lines.push(line),
            Err(poisoned) => poisoned.into_inner().push(line),
        }
    }

    pub fn snapshot(&self) -> Vec<String> {
        match self.lines.lock() {
            Ok(lines) => lines.snapshot(),
            Err(poisoned) => poisoned.into_inner().snapshot(),
        }
    }
}

/// Layer that formats every event into one line and stores it in a `LogBuffer`
pub struct RingLayer {
    app_name: String,
    buffer: LogBuffer,
}

impl RingLayer {
    pub fn new(app_name: impl Into<String>, buffer: LogBuffer) -> Self {
        Self {
            app_name: app_name.into(),
            buffer,
        }
    }
}

impl<S> Layer<S> for RingLayer
where
    S: Subscriber,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let mut fields = EventFields::default();
        event.record(&mut fields);

        // Bridged `log` records carry their real target as a field
        let target = fields.log_target.as_deref().unwrap_or(metadata.target());
        let mut line = format!(
            "{} [{}] {} {}: {}",
            Local::now().format(TIME_FORMAT),
            self.app_name,
            metadata.level(),
            target,
            fields.message
        );
        for (name, value) in &fields.extra {
            line.push_str(&format!(" {}={}", name, value));
        }
        self.buffer.push(line);
    }
}

/// Collects the message, the bridged log target and any structured fields
#[derive(Default)]
struct EventFields {
    message: String,
    log_target: Option<String>,
    extra: Vec<(&'static str, String)>,
}

impl EventFields {
    fn put(&mut self, field: &Field, value: String) {
        match field.name() {
            "message" => self.message = value,
            "log.target" => self.log_target = Some(value),
            name if name.starts_with("log.") => {}
            name => self.extra.push((name, value)),
        }
    }
}

impl Visit for EventFields {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.put(field, value.to_string());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.put(field, format!("{:?}", value));
    }
}

/// Local wall-clock timestamps; `SystemTime` is unavailable in the browser
struct LocalTime;

impl FormatTime for LocalTime {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        write!(w, "{}", Local::now().format(TIME_FORMAT))
    }
}

#[cfg(target_arch = "wasm32")]
mod console {
    use std::io;

    use tracing::{Level, Metadata};
    use tracing_subscriber::fmt::MakeWriter;

    /// Buffers one formatted event and hands it to `console.*` on drop
    pub struct ConsoleWriter {
        level: Level,
        buf: Vec<u8>,
    }

    impl io::Write for ConsoleWriter {
        fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
            self.buf.extend_from_slice(bytes);
            Ok(bytes.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Drop for ConsoleWriter {
        fn drop(&mut self) {
            let text = String::from_utf8_lossy(&self.buf);
            let text = text.trim_end();
            if text.is_empty() {
                return;
            }
            let value = wasm_bindgen::JsValue::from_str(text);
            match self.level {
                Level::ERROR => web_sys::console::error_1(&value),
                Level::WARN => web_sys::console::warn_1(&value),
                Level::INFO => web_sys::console::info_1(&value),
                _ => web_sys::console::debug_1(&value),
            }
        }
    }

    pub struct MakeConsoleWriter;

    impl<'a> MakeWriter<'a> for MakeConsoleWriter {
        type Writer = ConsoleWriter;

        fn make_writer(&'a self) -> Self::Writer {
            ConsoleWriter { level: Level::INFO, buf: Vec::new() }
        }

        fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
            ConsoleWriter { level: *meta.level(), buf: Vec::new() }
        }
    }
}

fn console_layer<S>() -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    let layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_timer(LocalTime);
    #[cfg(target_arch = "wasm32")]
    let layer = layer.with_writer(console::MakeConsoleWriter);
    #[cfg(not(target_arch = "wasm32"))]
    let layer = layer.with_writer(std::io::stderr);
    layer
}

/// Install the subscriber for the whole process.
///
/// Debug builds log at `DEBUG`, release builds at `INFO`. Calling it twice
/// keeps the first subscriber and its buffer.
pub fn init_logger(app_name: &str, capacity: usize) {
    let level = if cfg!(debug_assertions) {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    let buffer = BUFFER.get_or_init(|| LogBuffer::new(capacity)).clone();

    let installed = tracing_subscriber::registry()
        .with(level)
        .with(console_layer())
        .with(RingLayer::new(app_name, buffer))
        .try_init();
    if installed.is_err() {
        tracing::debug!("Logger already installed");
    }
}

/// Lines currently kept in memory, oldest first
pub fn recent() -> Vec<String> {
    BUFFER.get().map(LogBuffer::snapshot).unwrap_or_default()
}

/// Log info message
pub fn info(msg: &str) {
    tracing::info!("{}", msg);
}

/// Log error message
pub fn error(msg: &str) {
    tracing::error!("{}", msg);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capture(level: LevelFilter, emit: impl FnOnce()) -> Vec<String> {
        let buffer = LogBuffer::new(10);
        let subscriber = tracing_subscriber::registry()
            .with(level)
            .with(RingLayer::new("test", buffer.clone()));
        tracing::subscriber::with_default(subscriber, emit);
        buffer.snapshot()
    }

    #[test]
    fn test_buffer_evicts_oldest() {
        let mut buffer = LineBuffer::new(2);
        buffer.push("a".into());
        buffer.push("b".into());
        buffer.push("c".into());
        assert_eq!(buffer.snapshot(), vec!["b", "c"]);
    }

    #[test]
    fn test_zero_capacity_keeps_nothing() {
        let mut buffer = LineBuffer::new(0);
        buffer.push("a".into());
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_layer_records_enabled_levels() {
        let lines = capture(LevelFilter::INFO, || {
            tracing::info!(target: "core", "saved {}", 3);
            tracing::debug!("hidden");
        });

        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with("[test] INFO core: saved 3"));
    }

    #[test]
    fn test_layer_appends_structured_fields() {
        let lines = capture(LevelFilter::DEBUG, || {
            tracing::warn!(target: "store", key = "abc", "write failed");
        });

        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with("WARN store: write failed key=abc"));
    }

    #[test]
    fn test_init_bridges_log_records() {
        init_logger("bridge", 16);
        log::info!(target: "core", "bridged {}", 7);
        error("direct failure");

        let lines = recent();
        assert!(lines.iter().any(|l| l.ends_with("[bridge] INFO core: bridged 7")));
        assert!(lines.iter().any(|l| l.ends_with("ERROR rolling_logger: direct failure")));
    }
}
