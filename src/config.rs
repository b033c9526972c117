use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level ticket file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TicketFile {
    /// Tickets in file order.
    #[serde(default)]
    pub tickets: Vec<TicketToml>,
}

/// One `[[tickets]]` entry.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TicketToml {
    pub number: i64,
    pub client_id: String,
    /// Issue date as `dd/mm/yyyy`.
    pub date: String,
    pub description: String,
    #[serde(default)]
    pub closed: bool,
}

/// Reads and parses a ticket file.
pub fn load(path: &Path) -> Result<TicketFile> {
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read ticket file: {}", path.display()))?;
    toml::from_str(&toml_str)
        .with_context(|| format!("failed to parse ticket file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parses_tickets() {
        let file: TicketFile = toml::from_str(
            r#"
            [[tickets]]
            number = 1
            client_id = "AMCE_123"
            date = "01/07/2014"
            description = "Password Reset"

            [[tickets]]
            number = 2
            client_id = "MACDONALD-001"
            date = "10/03/2012"
            description = "User cannot locate 'any' key."
            closed = true
            "#,
        )
        .unwrap();
        assert_eq!(file.tickets.len(), 2);
        assert!(!file.tickets[0].closed);
        assert!(file.tickets[1].closed);
        assert_eq!(file.tickets[1].client_id, "MACDONALD-001");
    }

    #[test]
    fn empty_file_has_no_tickets() {
        let file: TicketFile = toml::from_str("").unwrap();
        assert!(file.tickets.is_empty());
    }

    #[test]
    fn rejects_unknown_fields() {
        let result: Result<TicketFile, _> = toml::from_str(
            r#"
            [[tickets]]
            number = 1
            client_id = "A"
            date = "01/01/2001"
            description = "x"
            priority = "high"
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn load_from_disk() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            tmp,
            "[[tickets]]\nnumber = 5\nclient_id = \"Z\"\ndate = \"5/5/2055\"\ndescription = \"d\""
        )
        .unwrap();
        let file = load(tmp.path()).unwrap();
        assert_eq!(file.tickets[0].number, 5);
    }

    #[test]
    fn load_missing_file_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        let err = load(&path).unwrap_err();
        assert!(format!("{err:#}").contains("missing.toml"));
    }
}
