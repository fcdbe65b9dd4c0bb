use crate::error::EngineError;
use csv::ReaderBuilder;
use serde::Deserialize;
use shared::models::{LocaleOption, Separators};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Convention table compiled into the engine.
const EMBEDDED_TABLE: &str = include_str!("../../assets/locales.csv");

// Header: locale;label;currency;thousands;decimal
// Example row: es-CO;Español (Colombia);COP;.;,
#[derive(Debug, Deserialize)]
struct LocaleRow {
    locale: String,
    label: String,
    currency: String,
    thousands: String,
    decimal: String,
}

/// Parses a separator cell: either one character or a named token, since
/// whitespace-like separators are unreadable in a CSV file.
pub fn parse_separator_token(cell: &str) -> Result<char, EngineError> {
    let named = match cell {
        "nbsp" => Some('\u{00A0}'),
        "nnbsp" => Some('\u{202F}'),
        "space" => Some(' '),
        "apos" => Some('\''),
        "rsquo" => Some('\u{2019}'),
        _ => None,
    };
    if let Some(ch) = named {
        return Ok(ch);
    }
    let mut chars = cell.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) if !ch.is_ascii_digit() => Ok(ch),
        _ => Err(EngineError::LocaleTableError(format!("Invalid separator '{}'", cell))),
    }
}

/// Static thousands/decimal conventions per locale, in file order.
#[derive(Debug, Clone, Default)]
pub struct LocaleTable {
    entries: Vec<LocaleOption>,
    index: HashMap<String, usize>,
}

impl LocaleTable {
    pub fn embedded() -> Result<Self, EngineError> {
        Self::from_reader(EMBEDDED_TABLE.as_bytes())
    }

    pub fn load_from_path(file_path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let file = File::open(file_path.as_ref())?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, EngineError> {
        let mut rdr = ReaderBuilder::new()
            .delimiter(b';')
            .has_headers(true)
            .from_reader(reader);

        let mut table = LocaleTable::default();
        for (idx, result) in rdr.deserialize::<LocaleRow>().enumerate() {
            let line = idx + 2;
            let row = result?;
            let locale = row.locale.trim().to_string();
            if locale.is_empty() {
                return Err(EngineError::LocaleTableError(format!("Empty locale at line {}", line)));
            }
            let thousands = parse_separator_token(row.thousands.trim())
                .map_err(|e| EngineError::LocaleTableError(format!("'thousands' at line {}: {}", line, e)))?;
            let decimal = parse_separator_token(row.decimal.trim())
                .map_err(|e| EngineError::LocaleTableError(format!("'decimal' at line {}: {}", line, e)))?;
            if thousands == decimal {
                return Err(EngineError::LocaleTableError(format!(
                    "Separators for '{}' at line {} are identical",
                    locale, line
                )));
            }
            if table.index.contains_key(&locale) {
                return Err(EngineError::LocaleTableError(format!("Duplicate locale '{}' at line {}", locale, line)));
            }

            table.index.insert(locale.clone(), table.entries.len());
            table.entries.push(LocaleOption {
                id: locale,
                label: row.label.trim().to_string(),
                currency: row.currency.trim().to_string(),
                separators: Separators::new(thousands, decimal),
            });
        }
        tracing::debug!(locales = table.entries.len(), "Loaded locale table");
        Ok(table)
    }

    pub fn get(&self, locale: &str) -> Option<&LocaleOption> {
        self.index.get(locale).map(|&pos| &self.entries[pos])
    }

    pub fn entries(&self) -> &[LocaleOption] {
        &self.entries
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
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_test_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_embedded_table_has_primary_locales() {
        let table = LocaleTable::embedded().unwrap();
        let co = table.get("es-CO").unwrap();
        assert_eq!(co.separators, Separators::new('.', ','));
        assert_eq!(co.currency, "COP");
        assert_eq!(table.get("en-US").unwrap().separators, Separators::new(',', '.'));
        assert_eq!(table.get("fr-FR").unwrap().separators.thousands, '\u{202F}');
        assert_eq!(table.entries()[0].id, "es-CO");
    }

    #[test]
    fn test_named_separator_tokens() {
        assert_eq!(parse_separator_token("nbsp").unwrap(), '\u{00A0}');
        assert_eq!(parse_separator_token("rsquo").unwrap(), '’');
        assert_eq!(parse_separator_token(",").unwrap(), ',');
        assert!(parse_separator_token("..").is_err());
        assert!(parse_separator_token("7").is_err());
        assert!(parse_separator_token("").is_err());
    }

    #[test]
    fn test_load_from_path() {
        let tmp_file = create_test_csv("locale;label;currency;thousands;decimal\nxx-YY;Test;XYZ;apos;.");
        let table = LocaleTable::load_from_path(tmp_file.path()).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("xx-YY").unwrap().separators, Separators::new('\'', '.'));
    }

    #[test]
    fn test_identical_separators_rejected() {
        let tmp_file = create_test_csv("locale;label;currency;thousands;decimal\nxx-YY;Test;XYZ;.;.");
        let err = LocaleTable::load_from_path(tmp_file.path()).unwrap_err();
        assert!(err.to_string().contains("identical"));
    }

    #[test]
    fn test_duplicate_locale_rejected() {
        let tmp_file = create_test_csv("locale;label;currency;thousands;decimal\nes-CO;A;COP;.;,\nes-CO;B;COP;.;,");
        let err = LocaleTable::load_from_path(tmp_file.path()).unwrap_err();
        assert!(err.to_string().contains("Duplicate locale 'es-CO' at line 3"));
    }

    #[test]
    fn test_missing_column_is_csv_error() {
        let tmp_file = create_test_csv("locale;label;currency;thousands\nes-CO;A;COP;.");
        let err = LocaleTable::load_from_path(tmp_file.path()).unwrap_err();
        assert!(matches!(err, EngineError::CsvSystemError { .. }));
    }
}
