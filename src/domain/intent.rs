//! Intent classification for transcribed utterances.
//!
//! Classification is a fixed, ordered rule list over keyword containment.
//! The first matching rule wins. Rule order, not semantic priority, resolves
//! ambiguous phrases: "delete the old search results" classifies as Search
//! because the search rule is evaluated before the delete rule. That ordering
//! is part of the command contract and must not be rearranged.

use serde::{Deserialize, Serialize};

/// The classified purpose of an utterance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// Open a known folder with the system file browser
    OpenFolder,
    /// Search for files by name substring
    Search,
    /// Delete a file (requires confirmation)
    Delete,
    /// List the entries of a directory
    ListFiles,
    /// Show the command reference
    Help,
    /// No rule matched
    Unrecognized,
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Intent::OpenFolder => write!(f, "open_folder"),
            Intent::Search => write!(f, "search"),
            Intent::Delete => write!(f, "delete"),
            Intent::ListFiles => write!(f, "list_files"),
            Intent::Help => write!(f, "help"),
            Intent::Unrecognized => write!(f, "unrecognized"),
        }
    }
}

/// Keyword trigger for one classification rule
enum Trigger {
    /// Every word must occur somewhere in the utterance
    All(&'static [&'static str]),
    /// At least one word must occur in the utterance
    Any(&'static [&'static str]),
}

impl Trigger {
    fn matches(&self, utterance: &str) -> bool {
        match self {
            Trigger::All(words) => words.iter().all(|w| utterance.contains(w)),
            Trigger::Any(words) => words.iter().any(|w| utterance.contains(w)),
        }
    }
}

struct Rule {
    intent: Intent,
    trigger: Trigger,
}

/// The ordered rule list. First match wins.
const RULES: &[Rule] = &[
    Rule {
        intent: Intent::OpenFolder,
        trigger: Trigger::All(&["open", "folder"]),
    },
    Rule {
        intent: Intent::Search,
        trigger: Trigger::Any(&["search", "find"]),
    },
    Rule {
        intent: Intent::Delete,
        trigger: Trigger::Any(&["delete"]),
    },
    Rule {
        intent: Intent::ListFiles,
        trigger: Trigger::Any(&["list", "show"]),
    },
    Rule {
        intent: Intent::Help,
        trigger: Trigger::Any(&["help"]),
    },
];

/// Classify a lowercase utterance. Total: falls back to `Unrecognized`.
pub fn classify(utterance: &str) -> Intent {
    RULES
        .iter()
        .find(|rule| rule.trigger.matches(utterance))
        .map(|rule| rule.intent)
        .unwrap_or(Intent::Unrecognized)
}
