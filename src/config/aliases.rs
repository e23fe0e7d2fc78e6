//! Known-directory alias table.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// A short human-friendly name mapped to an absolute directory path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryAlias {
    pub name: String,
    pub path: PathBuf,
}

/// Fixed table of directory aliases, resolved once at startup.
///
/// The table is immutable after construction. Iteration order is the
/// declaration order below; utterance matching picks the first alias whose
/// name occurs in the phrase, so that order is part of the command contract.
#[derive(Debug, Clone)]
pub struct AliasTable {
    entries: Vec<DirectoryAlias>,
}

impl AliasTable {
    /// Build the seven standard aliases under the given home directory
    pub fn for_home(home: &Path) -> Self {
        let entries = [
            ("downloads", home.join("Downloads")),
            ("documents", home.join("Documents")),
            ("desktop", home.join("Desktop")),
            ("pictures", home.join("Pictures")),
            ("music", home.join("Music")),
            ("videos", home.join("Videos")),
            ("home", home.to_path_buf()),
        ]
        .into_iter()
        .map(|(name, path)| DirectoryAlias {
            name: name.to_string(),
            path,
        })
        .collect();

        Self { entries }
    }

    /// Resolve the table from the host home directory
    pub fn from_env() -> Result<Self> {
        let home = dirs::home_dir().context("Could not determine home directory")?;
        Ok(Self::for_home(&home))
    }

    /// Iterate the aliases in table order
    pub fn iter(&self) -> impl Iterator<Item = &DirectoryAlias> {
        self.entries.iter()
    }

    /// Look up an alias by exact name
    pub fn get(&self, name: &str) -> Option<&DirectoryAlias> {
        self.entries.iter().find(|alias| alias.name == name)
    }

    /// First alias (in table order) whose name occurs in the utterance
    pub fn match_utterance(&self, utterance: &str) -> Option<&DirectoryAlias> {
        self.entries
            .iter()
            .find(|alias| utterance.contains(alias.name.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seven_entries_in_order() {
        let table = AliasTable::for_home(Path::new("/home/test"));
        let names: Vec<&str> = table.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(
            names,
            ["downloads", "documents", "desktop", "pictures", "music", "videos", "home"]
        );
    }

    #[test]
    fn test_paths_resolve_under_home() {
        let table = AliasTable::for_home(Path::new("/home/test"));
        assert_eq!(
            table.get("downloads").unwrap().path,
            PathBuf::from("/home/test/Downloads")
        );
        assert_eq!(table.get("home").unwrap().path, PathBuf::from("/home/test"));
    }

    #[test]
    fn test_match_utterance_first_wins() {
        let table = AliasTable::for_home(Path::new("/home/test"));
        let alias = table.match_utterance("open downloads folder").unwrap();
        assert_eq!(alias.name, "downloads");

        // Both "documents" and "home" appear; table order decides.
        let alias = table
            .match_utterance("move documents to home")
            .unwrap();
        assert_eq!(alias.name, "documents");

        assert!(table.match_utterance("open the folder").is_none());
    }
}
