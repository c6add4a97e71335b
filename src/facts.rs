//! MLSx-style fact-line formatting for `LIST` output.
//!
//! Field order: `Type=`, then `Size=` for files only, then `UNIX.owner=`,
//! `UNIX.group=`, `Modify=`, `Perm=`, and finally a space-separated name.

use crate::storage::Stat;
use chrono::{DateTime, Utc};

/// Renders one directory entry as a single CRLF-terminated fact line.
pub fn format_fact(name: &str, stat: &Stat) -> String {
    let kind = if stat.is_dir { "dir" } else { "file" };
    let size = if stat.is_dir { String::new() } else { format!("Size={};", stat.size) };
    let modify: DateTime<Utc> = stat.mtime.into();
    format!(
        "Type={};{}UNIX.owner={};UNIX.group={};Modify={};Perm={}; {}\r\n",
        kind,
        size,
        stat.uid,
        stat.gid,
        modify.format("%Y%m%d%H%M%S"),
        stat.mode_string,
        name,
    )
}
