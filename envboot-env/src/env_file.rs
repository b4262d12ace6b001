//! Env file reader.
//!
//! Reading is best-effort: a missing or unreadable file yields no entries,
//! and an I/O error part way through keeps whatever was read before it.
//! Lines that are not valid UTF-8 are decoded lossily, never fatal.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use envboot_types::Environment;

/// Syntax accepted in the env file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dialect {
    /// One `KEY=VALUE` per line, split on the first `=`. Nothing else is
    /// recognized: no trimming, comments, quotes or escapes.
    #[default]
    Literal,
    /// dotenv syntax (comments, quoting, `export`), parsed by `dotenvy`.
    ///
    /// `$VAR` and `${VAR}` are expanded from the process environment first,
    /// then from earlier lines of the file, regardless of which
    /// `Environment` the entries are later applied to.
    Dotenv,
}

/// Entries read from an env file. Later duplicates replace earlier ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvFile {
    entries: HashMap<String, String>,
}

impl EnvFile {
    /// Reads `path` with the given dialect. Never fails.
    pub fn read(path: impl AsRef<Path>, dialect: Dialect) -> Self {
        let path = path.as_ref();
        match dialect {
            Dialect::Literal => match File::open(path) {
                Ok(file) => Self::parse(BufReader::new(file)),
                Err(e) => {
                    tracing::debug!(path = %path.display(), error = %e, "No env file loaded");
                    Self::default()
                }
            },
            Dialect::Dotenv => Self::read_dotenv(path),
        }
    }

    /// Parses the literal format from any buffered reader.
    pub fn parse<R: BufRead>(reader: R) -> Self {
        let mut entries = HashMap::new();

        for line in reader.split(b'\n') {
            let mut line = match line {
                Ok(line) => line,
                Err(e) => {
                    tracing::warn!(error = %e, "Stopped reading env file");
                    break;
                }
            };
            if line.last() == Some(&b'\r') {
                line.pop();
            }

            let line = match String::from_utf8(line) {
                Ok(line) => line,
                Err(e) => {
                    tracing::warn!("Env file line is not valid UTF-8, decoding lossily");
                    String::from_utf8_lossy(e.as_bytes()).into_owned()
                }
            };
            if let Some((key, value)) = line.split_once('=') {
                entries.insert(key.to_string(), value.to_string());
            }
        }

        Self { entries }
    }

    fn read_dotenv(path: &Path) -> Self {
        let iter = match dotenvy::from_path_iter(path) {
            Ok(iter) => iter,
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "No env file loaded");
                return Self::default();
            }
        };

        let mut entries = HashMap::new();
        for item in iter {
            match item {
                Ok((key, value)) => {
                    entries.insert(key, value);
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Stopped reading env file");
                    break;
                }
            }
        }

        Self { entries }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Writes every entry into `env`, overwriting existing values.
    /// Returns the number of entries written.
    pub fn apply<E: Environment + ?Sized>(&self, env: &mut E) -> usize {
        for (key, value) in &self.entries {
            env.set(key, value);
        }
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Read, Write};

    use super::*;
    use crate::MapEnvironment;

    fn parse(s: &str) -> EnvFile {
        EnvFile::parse(s.as_bytes())
    }

    fn parse_bytes(bytes: &[u8]) -> EnvFile {
        EnvFile::parse(bytes)
    }

    #[test]
    fn test_parse_basic_lines() {
        let file = parse("DB_HOST=localhost\nDB_USER=admin\n");
        assert_eq!(file.len(), 2);
        assert_eq!(file.get("DB_HOST"), Some("localhost"));
        assert_eq!(file.get("DB_USER"), Some("admin"));
    }

    #[test]
    fn test_lines_without_equals_are_ignored() {
        let file = parse("just some text\n\nDB_HOST=db\n# comment\n");
        assert_eq!(file.len(), 1);
        assert_eq!(file.get("DB_HOST"), Some("db"));
    }

    #[test]
    fn test_splits_on_first_equals_only() {
        let file = parse("DB_PASSWORD=a=b==c\n");
        assert_eq!(file.get("DB_PASSWORD"), Some("a=b==c"));
    }

    #[test]
    fn test_last_duplicate_wins() {
        let file = parse("DB_HOST=first\nDB_HOST=second\n");
        assert_eq!(file.len(), 1);
        assert_eq!(file.get("DB_HOST"), Some("second"));
    }

    #[test]
    fn test_no_trimming_or_quoting() {
        let file = parse(" KEY = \"value\" \r\n#X=1\n");
        assert_eq!(file.get(" KEY "), Some(" \"value\" "));
        assert_eq!(file.get("#X"), Some("1"));
    }

    #[test]
    fn test_empty_key_and_value() {
        let file = parse("=orphan\nEMPTY=\n");
        assert_eq!(file.get(""), Some("orphan"));
        assert_eq!(file.get("EMPTY"), Some(""));
    }

    #[test]
    fn test_non_utf8_line_does_not_stop_reading() {
        let file = parse_bytes(b"# caf\xe9 latin-1 comment\nDB_HOST=localhost\nDB_USER=admin\n");
        assert_eq!(file.get("DB_HOST"), Some("localhost"));
        assert_eq!(file.get("DB_USER"), Some("admin"));
    }

    #[test]
    fn test_non_utf8_value_is_decoded_lossily() {
        let file = parse_bytes(b"DB_PASSWORD=p\xe4ss\r\nDB_SSLMODE=disable");
        assert_eq!(file.get("DB_PASSWORD"), Some("p\u{FFFD}ss"));
        assert_eq!(file.get("DB_SSLMODE"), Some("disable"));
    }

    /// Yields its bytes once, then fails.
    struct FailingReader(Option<&'static [u8]>);

    impl Read for FailingReader {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            match self.0.take() {
                Some(data) => {
                    buf[..data.len()].copy_from_slice(data);
                    Ok(data.len())
                }
                None => Err(std::io::Error::other("disk went away")),
            }
        }
    }

    #[test]
    fn test_io_error_keeps_earlier_entries() {
        let reader = BufReader::new(FailingReader(Some(b"DB_HOST=db\nDB_USER=admin\n")));
        let file = EnvFile::parse(reader);
        assert_eq!(file.len(), 2);
        assert_eq!(file.get("DB_HOST"), Some("db"));
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.env");
        assert!(EnvFile::read(&path, Dialect::Literal).is_empty());
        assert!(EnvFile::read(&path, Dialect::Dotenv).is_empty());
    }

    #[test]
    fn test_read_literal_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "DB_HOST=localhost\nDB_SSLMODE=disable").unwrap();

        let env_file = EnvFile::read(file.path(), Dialect::Literal);
        assert_eq!(env_file.get("DB_HOST"), Some("localhost"));
        assert_eq!(env_file.get("DB_SSLMODE"), Some("disable"));
    }

    #[test]
    fn test_read_dotenv_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# database").unwrap();
        writeln!(file, "DB_HOST=\"db.internal\"").unwrap();
        writeln!(file, "export DB_USER=admin").unwrap();

        let env_file = EnvFile::read(file.path(), Dialect::Dotenv);
        assert_eq!(env_file.len(), 2);
        assert_eq!(env_file.get("DB_HOST"), Some("db.internal"));
        assert_eq!(env_file.get("DB_USER"), Some("admin"));
    }

    #[test]
    fn test_dotenv_parse_error_keeps_earlier_entries() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "DB_HOST=db").unwrap();
        writeln!(file, "1BAD=value").unwrap();
        writeln!(file, "DB_USER=admin").unwrap();

        let env_file = EnvFile::read(file.path(), Dialect::Dotenv);
        assert_eq!(env_file.len(), 1);
        assert_eq!(env_file.get("DB_HOST"), Some("db"));
        assert_eq!(env_file.get("DB_USER"), None);
    }

    #[test]
    fn test_dotenv_substitutes_earlier_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "ENVBOOT_TEST_BASE=db").unwrap();
        writeln!(file, "DB_HOST=${{ENVBOOT_TEST_BASE}}.internal").unwrap();

        let env_file = EnvFile::read(file.path(), Dialect::Dotenv);
        assert_eq!(env_file.get("DB_HOST"), Some("db.internal"));
    }

    #[test]
    fn test_apply_overwrites() {
        let mut env: MapEnvironment = [("DB_HOST", "old"), ("KEEP", "me")].into_iter().collect();
        let applied = parse("DB_HOST=new\n").apply(&mut env);

        assert_eq!(applied, 1);
        assert_eq!(env.get("DB_HOST").as_deref(), Some("new"));
        assert_eq!(env.get("KEEP").as_deref(), Some("me"));
    }
}
