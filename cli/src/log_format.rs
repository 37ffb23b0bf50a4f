//! Plain-text event formatter that tags each line with the ids of the enclosing spans.
//!
//! Used by `logging::init()` for `LOG_FILE` output so lines from one request can be grepped
//! together.

use std::fmt;

use tracing_core::Subscriber;
use tracing_subscriber::fmt::format::{FormatEvent, FormatFields, Writer};
use tracing_subscriber::fmt::time::{FormatTime, SystemTime};
use tracing_subscriber::fmt::FmtContext;
use tracing_subscriber::registry::LookupSpan;

/// Output format: `TIMESTAMP [trace_id=R span_id=S span=NAME] LEVEL target: fields`.
///
/// The bracketed part is present only inside a span; `trace_id` is the root span's id and
/// `span_id`/`span` describe the innermost one.
#[derive(Default)]
pub struct TextWithSpanIds {
    timer: SystemTime,
}

impl TextWithSpanIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S, N> FormatEvent<S, N> for TextWithSpanIds
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &tracing_core::Event<'_>,
    ) -> fmt::Result {
        self.timer.format_time(&mut writer)?;
        if let Some(span) = ctx.parent_span() {
            let span_id = span.id().into_u64();
            let trace_id = span
                .scope()
                .from_root()
                .next()
                .map(|root| root.id().into_u64())
                .unwrap_or(span_id);
            write!(
                writer,
                " trace_id={} span_id={} span={}",
                trace_id,
                span_id,
                span.name()
            )?;
        }
        let meta = event.metadata();
        write!(writer, " {} {}: ", meta.level(), meta.target())?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}
