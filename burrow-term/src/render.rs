//! Plain-text page rendering

use burrow_core::{Entry, EntryKind, Page};

pub const HELP: &str = "\
<address>   open gopher://host:port/selector, host:port/selector or host
<number>    follow the numbered directory
@back @b    previous page
@forward @f next page
@reload @r  fetch the current page again
@quit @q    exit
";

/// Address bar plus listing. Arrows show which history directions are available.
pub fn page(page: &Page, can_go_back: bool, can_go_forward: bool) -> String {
    let back = if can_go_back { '<' } else { ' ' };
    let forward = if can_go_forward { '>' } else { ' ' };

    let mut out = format!("{}{} {}\n", back, forward, page.address());
    out.push_str(&entries(&page.entries));
    out
}

/// One row per entry. Numbers count every row so they match `Command::Select`.
pub fn entries(entries: &[Entry]) -> String {
    let mut out = String::new();
    for (index, entry) in entries.iter().enumerate() {
        let row = match entry.kind {
            EntryKind::Info => format!("      {}\n", entry.display_text),
            EntryKind::Directory => format!("{:>4}) {}/\n", index + 1, entry.display_text),
            EntryKind::File => format!("  [{}] {}\n", entry.code, entry.display_text),
        };
        out.push_str(&row);
    }
    out
}
