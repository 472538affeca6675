//! `AsciiHistory` — the multi-step text observation.

use std::fmt;

/// Text maps from successive decision cycles, oldest first.
///
/// Displays as numbered blocks separated by a blank line:
///
/// ```text
/// 1 step:
/// Current Map:
/// ...
///
/// 2 step (latest):
/// Current Map:
/// ...
/// ```
#[derive(Clone, Debug, Default)]
pub struct AsciiHistory {
    entries: Vec<String>,
}

impl AsciiHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, map: String) {
        self.entries.push(map);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn latest(&self) -> Option<&str> {
        self.entries.last().map(String::as_str)
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// The full prompt text.  Empty when there are no entries.
    pub fn prompt(&self) -> String {
        self.to_string()
    }

    /// The prompt as it would read after pushing `current`, without pushing
    /// it.  Lets a cycle show its map before the cycle is known to succeed.
    pub fn prompt_with(&self, current: &str) -> String {
        Blocks { done: &self.entries, current: Some(current) }.to_string()
    }
}

impl fmt::Display for AsciiHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Blocks { done: &self.entries, current: None }.fmt(f)
    }
}

/// Committed entries plus an optional uncommitted latest map.
struct Blocks<'a> {
    done:    &'a [String],
    current: Option<&'a str>,
}

impl fmt::Display for Blocks<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let last = self.done.len() + usize::from(self.current.is_some());
        let maps = self.done.iter().map(String::as_str).chain(self.current);
        for (i, map) in maps.enumerate() {
            if i > 0 {
                f.write_str("\n\n")?;
            }
            let n = i + 1;
            if n == last {
                write!(f, "{n} step (latest):\n{map}")?;
            } else {
                write!(f, "{n} step:\n{map}")?;
            }
        }
        Ok(())
    }
}
