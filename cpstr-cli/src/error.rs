use cpstr::error::Error;

/// Report an error raised by a special method on stderr.
pub(crate) fn render_error(e: &Error) {
    eprintln!("{}", format_error(e));
}

fn format_error(e: &Error) -> String {
    let mut report = format!("error[{}]: {}: {}", e.code(), e.kind(), e.message());
    if !e.note().is_empty() {
        report.push('\n');
        report.push_str(e.note());
    }
    report
}
