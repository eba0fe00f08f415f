//! Directory listing parser
//!
//! Wire format, one entry per line:
//! ```text
//! <type><display text>\t<selector>\t<host>\t<port>\r\n
//! ...
//! .\r\n
//! ```
//! Lines after the lone `.` are not parsed.

use crate::entry::{Entry, EntryKind};
use crate::error::ProtocolError;
use crate::target::Target;

pub const LINE_TERMINATOR: &str = "\r\n";
pub const LISTING_TERMINATOR: &str = ".";

const FIELD_DELIMITER: char = '\t';

/// Request framing: the bare selector followed by CRLF
pub fn request_payload(selector: &str) -> String {
    format!("{}{}", selector, LINE_TERMINATOR)
}

/// Parse a raw response into entries. Never fails; each line degrades on its own.
pub fn parse_listing(raw: &[u8]) -> Vec<Entry> {
    let text = String::from_utf8_lossy(raw);
    let mut entries = Vec::new();

    for (index, line) in text.split('\n').enumerate() {
        let line = line.strip_suffix('\r').unwrap_or(line);

        if line == LISTING_TERMINATOR {
            break;
        }
        if line.is_empty() {
            continue;
        }

        entries.push(parse_line(index + 1, line));
    }

    entries
}

fn parse_line(number: usize, line: &str) -> Entry {
    // type+label, selector, host, port, and an optional extra field we ignore
    let mut fields = line.splitn(5, FIELD_DELIMITER);

    let head = fields.next().unwrap_or_default();
    let mut chars = head.chars();
    let code = chars.next().unwrap_or(EntryKind::INFO_CODE);
    let display_text = chars.as_str().to_string();

    let selector = fields.next();
    let host = fields.next();
    let port = fields.next();

    if port.is_none() {
        malformed(number, "missing fields");
    }

    let port = match port.map(str::trim) {
        Some(text) if !text.is_empty() => text.parse::<u16>().unwrap_or_else(|_| {
            malformed(number, "unparsable port");
            0
        }),
        _ => 0,
    };

    Entry {
        kind: EntryKind::from_code(code),
        code,
        display_text,
        target: Target::new(
            host.unwrap_or_default(),
            port,
            selector.unwrap_or_default(),
        ),
    }
}

fn malformed(line: usize, reason: &str) {
    let error = ProtocolError::MalformedResponseLine {
        line,
        reason: reason.to_string(),
    };
    tracing::debug!(%error, "Recovered malformed listing line");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_info_line() {
        let entries = parse_listing(b"iHello World\t\t\t0\r\n.\r\n");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].kind, EntryKind::Info);
        assert_eq!(entries[0].display_text, "Hello World");
        assert_eq!(entries[0].target.port, 0);
    }

    #[test]
    fn test_directory_line() {
        let entries = parse_listing(b"1Docs\t/docs\tgopher.navan.dev\t70\r\n.\r\n");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].kind, EntryKind::Directory);
        assert_eq!(entries[0].display_text, "Docs");
        assert_eq!(
            entries[0].target,
            Target::new("gopher.navan.dev", 70, "/docs")
        );
        assert!(entries[0].is_navigable());
    }

    #[test]
    fn test_mixed_listing() {
        let raw = b"iWelcome\tfake\t(NULL)\t0\r\n\
0About\t/about.txt\texample.org\t70\r\n\
1Phlog\t/phlog\texample.org\t70\r\n\
3Oops\t\terror.host\t1\r\n\
.\r\n";
        let entries = parse_listing(raw);
        let kinds: Vec<EntryKind> = entries.iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![
                EntryKind::Info,
                EntryKind::File,
                EntryKind::Directory,
                EntryKind::File
            ]
        );
        assert_eq!(entries[1].code, '0');
        assert_eq!(entries[3].code, '3');
    }

    #[test]
    fn test_stops_at_terminator() {
        let raw = b"iBefore\t\t\t0\r\n.\r\niAfter\t\t\t0\r\n";
        let entries = parse_listing(raw);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].display_text, "Before");
    }

    #[test]
    fn test_single_field_line() {
        // Plain text with no tabs still renders as a row
        let entries = parse_listing(b"iJust a message\r\n.\r\n");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].kind, EntryKind::Info);
        assert_eq!(entries[0].display_text, "Just a message");
        assert_eq!(entries[0].target, Target::new("", 0, ""));
    }

    #[test]
    fn test_malformed_lines_do_not_abort() {
        let raw = b"1Broken\t/x\r\n1Bad port\t/y\thost\tseventy\r\n1Good\t/z\thost\t70\r\n.\r\n";
        let entries = parse_listing(raw);
        assert_eq!(entries.len(), 3);

        assert_eq!(entries[0].target, Target::new("", 0, "/x"));
        assert_eq!(entries[1].target, Target::new("host", 0, "/y"));
        assert_eq!(entries[2].target, Target::new("host", 70, "/z"));
    }

    #[test]
    fn test_extra_field_ignored() {
        let entries = parse_listing(b"1Plus\t/plus\thost\t70\t+\r\n.\r\n");
        assert_eq!(entries[0].target, Target::new("host", 70, "/plus"));
    }

    #[test]
    fn test_blank_lines_and_missing_terminator() {
        let entries = parse_listing(b"\r\niOne\t\t\t0\n\niTwo\t\t\t0");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].display_text, "Two");
    }

    #[test]
    fn test_invalid_utf8_is_lossy() {
        let entries = parse_listing(b"iCaf\xe9\t\t\t0\r\n.\r\n");
        assert_eq!(entries.len(), 1);
        assert!(entries[0].display_text.starts_with("Caf"));
    }

    #[test]
    fn test_request_payload() {
        assert_eq!(request_payload("/docs"), "/docs\r\n");
        assert_eq!(request_payload(""), "\r\n");
    }
}
