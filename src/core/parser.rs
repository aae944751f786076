//! # show-keys Parser
//!
//! Turns the text printed by `wezterm show-keys` into a [`ParseResult`].
//!
//! The dump is loosely formatted and context sensitive: table markers switch
//! the "current scope", and every tab-indented line with an arrow below a
//! marker is a binding in that scope.
//!
//! ```text
//! Leader: Char('a') CTRL 2.001s          → Leader
//! Default key table                      → scope = "Default"
//! -----------------                      → skipped
//!     CTRL   Tab   ->   ActivateTab(1)   → Binding
//! Key Table: copy_mode                   → scope = "copy_mode"
//! Mouse: alt_screen                      → scope = "Mouse: alt_screen"
//! ```
//!
//! Parsing never fails. Lines that don't fit any class are dropped, since
//! newer wezterm versions may print lines this parser doesn't know about.
//!
//! The scanner is one forward pass. Each line is classified by [`classify`]
//! into a [`LineKind`]; the only state carried between lines is the current
//! scope name.

use log::debug;

/// Canonical name for the table introduced by the default marker.
pub const DEFAULT_TABLE: &str = "Default";

const LEADER_PREFIX: &str = "Leader:";
const DEFAULT_TABLE_MARKER: &str = "Default key table";
const KEY_TABLE_PREFIX: &str = "Key Table: ";
const MOUSE_TABLE_MARKER: &str = "Mouse";
const MOUSE_TABLE_PREFIX: &str = "Mouse: ";
const SEPARATOR_PREFIX: &str = "---";
const ARROW: &str = "->";

const MODIFIER_TOKENS: [&str; 5] = ["CTRL", "SHIFT", "ALT", "SUPER", "NONE"];
const NO_MODIFIER: &str = "NONE";
const MODIFIER_JOIN: &str = " | ";

/// The global leader key, if one is configured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leader {
    pub key: String,
    pub modifiers: String,
    /// Passed through as printed, e.g. `2.001s`.
    pub timeout: String,
}

/// One keybinding row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub table: String,
    pub modifiers: String,
    /// Opaque key descriptor, e.g. `Tab` or `Down { streak: 1, button: Left }`.
    pub key: String,
    pub action: String,
}

impl Binding {
    /// Text the fuzzy filter runs against: `modifiers key action`.
    pub fn searchable(&self) -> String {
        format!("{} {} {}", self.modifiers, self.key, self.action)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseResult {
    pub leader: Option<Leader>,
    /// In input order.
    pub bindings: Vec<Binding>,
    /// Distinct table names in first-seen order.
    pub tables: Vec<String>,
}

impl ParseResult {
    fn register_table(&mut self, name: &str) {
        if !self.tables.iter().any(|t| t == name) {
            self.tables.push(name.to_string());
        }
    }

    /// Position of `name` in `tables`.
    pub fn table_index(&self, name: &str) -> Option<usize> {
        self.tables.iter().position(|t| t == name)
    }
}

/// What a single line of the dump means.
#[derive(Debug, PartialEq, Eq)]
enum LineKind<'a> {
    /// A `Leader:` line; `None` when it didn't fit the grammar.
    Leader(Option<Leader>),
    /// A table marker; the payload is the new scope name.
    Table(&'a str),
    /// A binding candidate, already split at the arrow.
    Binding { left: &'a str, action: &'a str },
    Skip,
}

/// Parse a `wezterm show-keys` dump.
pub fn parse(input: &str) -> ParseResult {
    let mut result = ParseResult::default();
    let mut current_scope = String::new();

    for line in input.lines() {
        match classify(line) {
            LineKind::Leader(Some(leader)) => result.leader = Some(leader),
            LineKind::Leader(None) => debug!("Ignoring malformed leader line: {line:?}"),
            LineKind::Table(name) => {
                current_scope = name.to_string();
                result.register_table(name);
            }
            LineKind::Binding { left, action } => {
                let (modifiers, key) = match split_modifiers(left) {
                    Some((mods, key)) => (normalize_modifiers(mods), key.to_string()),
                    None => (String::new(), left.to_string()),
                };
                result.bindings.push(Binding {
                    table: current_scope.clone(),
                    modifiers,
                    key,
                    action: action.to_string(),
                });
            }
            LineKind::Skip => {}
        }
    }

    debug!(
        "Parsed {} bindings across {} tables (leader: {})",
        result.bindings.len(),
        result.tables.len(),
        result.leader.is_some()
    );
    result
}

fn classify(line: &str) -> LineKind<'_> {
    if let Some(rest) = line.strip_prefix(LEADER_PREFIX) {
        return LineKind::Leader(parse_leader(rest));
    }
    if line == DEFAULT_TABLE_MARKER {
        return LineKind::Table(DEFAULT_TABLE);
    }
    if let Some(name) = line.strip_prefix(KEY_TABLE_PREFIX) {
        return LineKind::Table(name);
    }
    if line == MOUSE_TABLE_MARKER || line.starts_with(MOUSE_TABLE_PREFIX) {
        return LineKind::Table(line);
    }

    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with(SEPARATOR_PREFIX) {
        return LineKind::Skip;
    }
    if !line.starts_with('\t') {
        return LineKind::Skip;
    }

    match split_arrow(line) {
        Some((left, action)) => LineKind::Binding { left, action },
        None => LineKind::Skip,
    }
}

/// Split at the first `->` that has whitespace on both sides.
fn split_arrow(line: &str) -> Option<(&str, &str)> {
    line.match_indices(ARROW).find_map(|(at, _)| {
        let before = &line[..at];
        let after = &line[at + ARROW.len()..];
        let spaced = before.ends_with(char::is_whitespace) && after.starts_with(char::is_whitespace);
        spaced.then(|| (before.trim(), after.trim()))
    })
}

/// `<ws> <key> <ws> <modifier-list> <ws> <timeout>`, the part after `Leader:`.
///
/// The key is the shortest prefix that lets the rest of the line match, so
/// keys containing spaces such as `Char(' ')` survive.
fn parse_leader(rest: &str) -> Option<Leader> {
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let body = rest.trim_start();
    if body.ends_with(char::is_whitespace) {
        return None;
    }
    let split = body.rfind(char::is_whitespace)?;
    let timeout = body[split..].trim_start();
    let middle = body[..split].trim_end();

    middle
        .char_indices()
        .filter(|&(at, c)| at > 0 && c.is_whitespace())
        .find_map(|(at, _)| {
            let mods = middle[at..].trim_start();
            is_modifier_list(mods).then(|| Leader {
                key: middle[..at].to_string(),
                modifiers: normalize_modifiers(mods),
                timeout: timeout.to_string(),
            })
        })
}

/// Byte offsets just past each modifier token of the list starting at `s`.
///
/// Tokens are joined by `|` with optional whitespace around it. The scan stops
/// at the first thing that can't continue the list.
fn modifier_token_ends(s: &str) -> Vec<usize> {
    let mut ends = Vec::new();
    let mut pos = 0;
    loop {
        let Some(token) = MODIFIER_TOKENS.iter().find(|t| s[pos..].starts_with(*t)) else {
            break;
        };
        pos += token.len();
        ends.push(pos);

        let after_ws = s[pos..].trim_start();
        let Some(next) = after_ws.strip_prefix('|') else {
            break;
        };
        pos = s.len() - next.trim_start().len();
    }
    ends
}

fn is_modifier_list(s: &str) -> bool {
    modifier_token_ends(s).last() == Some(&s.len())
}

/// Split `SHIFT | CTRL   Tab` into (`SHIFT | CTRL`, `Tab`).
///
/// The longest modifier list that is still followed by whitespace and a
/// non-empty key wins. Returns `None` when the line has no modifier prefix.
fn split_modifiers(left: &str) -> Option<(&str, &str)> {
    modifier_token_ends(left).into_iter().rev().find_map(|end| {
        let rest = &left[end..];
        let key = rest.trim();
        (rest.starts_with(char::is_whitespace) && !key.is_empty()).then(|| (&left[..end], key))
    })
}

/// Normalize a raw modifier list to `"A | B"` form.
///
/// Empty tokens and `NONE` are dropped and the written order is kept, so
/// `SHIFT|ALT|CTRL` becomes `SHIFT | ALT | CTRL`, never a sorted variant.
pub fn normalize_modifiers(raw: &str) -> String {
    raw.split('|')
        .map(str::trim)
        .filter(|m| !m.is_empty() && *m != NO_MODIFIER)
        .collect::<Vec<_>>()
        .join(MODIFIER_JOIN)
}
