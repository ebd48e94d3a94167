//! Form state for the three tool pages.
//!
//! Each form holds the raw text the user typed. `validate` turns it into a
//! typed plan or the full list of problems. Plans only describe a transfer;
//! nothing here talks to ClickHouse or touches the filesystem.

use std::fmt;

use thiserror::Error;

/// A problem found while validating a form.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("port must be a number between 1 and 65535, got {0:?}")]
    InvalidPort(String),

    #[error("delimiter must be a single character, got {0:?}")]
    InvalidDelimiter(String),

    #[error("column {0:?} is selected more than once")]
    DuplicateColumn(String),

    #[error("select at least one column")]
    NoColumns,
}

fn required(value: &str, field: &'static str, errors: &mut Vec<FormError>) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        errors.push(FormError::MissingField(field));
        None
    } else {
        Some(value.to_string())
    }
}

/// Single-character field separator for flat files.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Delimiter(char);

impl Delimiter {
    /// Parses user input. `\t` and `tab` both mean TAB.
    pub fn parse(input: &str) -> Result<Self, FormError> {
        if input == "\\t" || input.eq_ignore_ascii_case("tab") {
            return Ok(Self('\t'));
        }
        let mut chars = input.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(Self(c)),
            _ => Err(FormError::InvalidDelimiter(input.to_string())),
        }
    }

    pub fn as_char(&self) -> char {
        self.0
    }
}

impl Default for Delimiter {
    fn default() -> Self {
        Self(',')
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            '\t' => f.write_str("tab"),
            c => write!(f, "{:?}", c),
        }
    }
}

/// Ordered, duplicate-free list of column names.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnSelection(Vec<String>);

impl ColumnSelection {
    /// Parses a comma-separated list, dropping blank entries.
    pub fn parse(input: &str) -> Result<Self, FormError> {
        let mut columns: Vec<String> = Vec::new();
        for name in input.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            if columns.iter().any(|c| c == name) {
                return Err(FormError::DuplicateColumn(name.to_string()));
            }
            columns.push(name.to_string());
        }
        if columns.is_empty() {
            return Err(FormError::NoColumns);
        }
        Ok(Self(columns))
    }

    pub fn names(&self) -> &[String] {
        &self.0
    }

    pub fn joined(&self) -> String {
        self.0.join(", ")
    }
}

/// Which connection field an edit targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConnectionField {
    Host,
    Port,
    Database,
    User,
    JwtToken,
}

/// Raw ClickHouse connection input.
#[derive(Clone, Debug, PartialEq)]
pub struct ConnectionForm {
    pub host: String,
    pub port: String,
    pub database: String,
    pub user: String,
    pub jwt_token: String,
}

impl Default for ConnectionForm {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: "8123".to_string(),
            database: "default".to_string(),
            user: "default".to_string(),
            jwt_token: String::new(),
        }
    }
}

impl ConnectionForm {
    pub fn get(&self, field: ConnectionField) -> &str {
        match field {
            ConnectionField::Host => &self.host,
            ConnectionField::Port => &self.port,
            ConnectionField::Database => &self.database,
            ConnectionField::User => &self.user,
            ConnectionField::JwtToken => &self.jwt_token,
        }
    }

    pub fn set(&mut self, field: ConnectionField, value: String) {
        match field {
            ConnectionField::Host => self.host = value,
            ConnectionField::Port => self.port = value,
            ConnectionField::Database => self.database = value,
            ConnectionField::User => self.user = value,
            ConnectionField::JwtToken => self.jwt_token = value,
        }
    }

    fn validate(&self, errors: &mut Vec<FormError>) -> Option<Connection> {
        let host = required(&self.host, "host", errors);
        let port = match self.port.trim().parse::<u16>() {
            Ok(port) if port > 0 => Some(port),
            _ => {
                errors.push(FormError::InvalidPort(self.port.clone()));
                None
            }
        };
        let database = required(&self.database, "database", errors);
        let user = required(&self.user, "user", errors);

        Some(Connection {
            host: host?,
            port: port?,
            database: database?,
            user: user?,
            jwt_token: self.jwt_token.trim().to_string(),
        })
    }
}

/// Validated connection settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Connection {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub user: String,
    pub jwt_token: String,
}

impl Connection {
    fn summary(&self, rows: &mut Vec<(String, String)>) {
        rows.push(("Server".to_string(), format!("{}:{}", self.host, self.port)));
        rows.push(("Database".to_string(), self.database.clone()));
        rows.push(("User".to_string(), self.user.clone()));
        let token = if self.jwt_token.is_empty() {
            "none"
        } else {
            "provided"
        };
        rows.push(("JWT token".to_string(), token.to_string()));
    }
}

/// Validated flat file settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlatFile {
    pub path: String,
    pub delimiter: Delimiter,
}

impl FlatFile {
    fn validate(path: &str, delimiter: &str, errors: &mut Vec<FormError>) -> Option<Self> {
        let path = required(path, "file path", errors);
        let delimiter = Delimiter::parse(delimiter)
            .map_err(|e| errors.push(e))
            .ok();
        Some(Self {
            path: path?,
            delimiter: delimiter?,
        })
    }

    fn summary(&self, rows: &mut Vec<(String, String)>) {
        rows.push(("File".to_string(), self.path.clone()));
        rows.push(("Delimiter".to_string(), self.delimiter.to_string()));
    }
}

fn columns(input: &str, errors: &mut Vec<FormError>) -> Option<ColumnSelection> {
    ColumnSelection::parse(input).map_err(|e| errors.push(e)).ok()
}

fn finish<T>(plan: Option<T>, errors: Vec<FormError>) -> Result<T, Vec<FormError>> {
    match plan {
        Some(plan) if errors.is_empty() => Ok(plan),
        _ => Err(errors),
    }
}

/// ClickHouse table to flat file.
#[derive(Clone, Debug, PartialEq)]
pub struct ExportForm {
    pub connection: ConnectionForm,
    pub table: String,
    pub columns: String,
    pub file_path: String,
    pub delimiter: String,
}

impl Default for ExportForm {
    fn default() -> Self {
        Self {
            connection: ConnectionForm::default(),
            table: String::new(),
            columns: String::new(),
            file_path: String::new(),
            delimiter: ",".to_string(),
        }
    }
}

impl ExportForm {
    pub fn validate(&self) -> Result<ExportPlan, Vec<FormError>> {
        let mut errors = Vec::new();
        let connection = self.connection.validate(&mut errors);
        let table = required(&self.table, "table", &mut errors);
        let columns = columns(&self.columns, &mut errors);
        let file = FlatFile::validate(&self.file_path, &self.delimiter, &mut errors);

        let plan = (|| {
            Some(ExportPlan {
                connection: connection?,
                table: table?,
                columns: columns?,
                file: file?,
            })
        })();
        finish(plan, errors)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ExportPlan {
    pub connection: Connection,
    pub table: String,
    pub columns: ColumnSelection,
    pub file: FlatFile,
}

impl ExportPlan {
    pub fn statement(&self) -> String {
        format!(
            "SELECT {} FROM {} FORMAT TabSeparated",
            self.columns.joined(),
            self.table
        )
    }

    pub fn summary(&self) -> Vec<(String, String)> {
        let mut rows = Vec::new();
        self.connection.summary(&mut rows);
        rows.push(("Table".to_string(), self.table.clone()));
        rows.push(("Columns".to_string(), self.columns.joined()));
        self.file.summary(&mut rows);
        rows
    }
}

/// Flat file into a ClickHouse table.
#[derive(Clone, Debug, PartialEq)]
pub struct ImportForm {
    pub connection: ConnectionForm,
    pub file_path: String,
    pub delimiter: String,
    pub table: String,
    pub columns: String,
}

impl Default for ImportForm {
    fn default() -> Self {
        Self {
            connection: ConnectionForm::default(),
            file_path: String::new(),
            delimiter: ",".to_string(),
            table: String::new(),
            columns: String::new(),
        }
    }
}

impl ImportForm {
    pub fn validate(&self) -> Result<ImportPlan, Vec<FormError>> {
        let mut errors = Vec::new();
        let connection = self.connection.validate(&mut errors);
        let file = FlatFile::validate(&self.file_path, &self.delimiter, &mut errors);
        let table = required(&self.table, "table", &mut errors);
        let columns = columns(&self.columns, &mut errors);

        let plan = (|| {
            Some(ImportPlan {
                connection: connection?,
                file: file?,
                table: table?,
                columns: columns?,
            })
        })();
        finish(plan, errors)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ImportPlan {
    pub connection: Connection,
    pub file: FlatFile,
    pub table: String,
    pub columns: ColumnSelection,
}

impl ImportPlan {
    /// Target table DDL; every imported column is stored as `String`.
    pub fn create_table_statement(&self) -> String {
        let columns: Vec<String> = self
            .columns
            .names()
            .iter()
            .map(|c| format!("{} String", c))
            .collect();
        format!(
            "CREATE TABLE IF NOT EXISTS {} ({}) ENGINE = MergeTree() ORDER BY tuple()",
            self.table,
            columns.join(", ")
        )
    }

    pub fn summary(&self) -> Vec<(String, String)> {
        let mut rows = Vec::new();
        self.connection.summary(&mut rows);
        self.file.summary(&mut rows);
        rows.push(("Table".to_string(), self.table.clone()));
        rows.push(("Columns".to_string(), self.columns.joined()));
        rows
    }
}

/// One or two ClickHouse tables, joined, to a flat file.
#[derive(Clone, Debug, PartialEq)]
pub struct JoinForm {
    pub connection: ConnectionForm,
    pub source_table: String,
    pub join_table: String,
    pub join_condition: String,
    pub columns: String,
    pub file_path: String,
    pub delimiter: String,
}

impl Default for JoinForm {
    fn default() -> Self {
        Self {
            connection: ConnectionForm::default(),
            source_table: String::new(),
            join_table: String::new(),
            join_condition: String::new(),
            columns: String::new(),
            file_path: String::new(),
            delimiter: ",".to_string(),
        }
    }
}

impl JoinForm {
    pub fn validate(&self) -> Result<JoinPlan, Vec<FormError>> {
        let mut errors = Vec::new();
        let connection = self.connection.validate(&mut errors);
        let source_table = required(&self.source_table, "source table", &mut errors);

        let join_table = self.join_table.trim();
        let join = if join_table.is_empty() {
            Some(None)
        } else {
            required(&self.join_condition, "join condition", &mut errors).map(|condition| {
                Some(JoinClause {
                    table: join_table.to_string(),
                    condition,
                })
            })
        };

        let columns = columns(&self.columns, &mut errors);
        let file = FlatFile::validate(&self.file_path, &self.delimiter, &mut errors);

        let plan = (|| {
            Some(JoinPlan {
                connection: connection?,
                source_table: source_table?,
                join: join?,
                columns: columns?,
                file: file?,
            })
        })();
        finish(plan, errors)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JoinClause {
    pub table: String,
    pub condition: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct JoinPlan {
    pub connection: Connection,
    pub source_table: String,
    pub join: Option<JoinClause>,
    pub columns: ColumnSelection,
    pub file: FlatFile,
}

impl JoinPlan {
    pub fn statement(&self) -> String {
        let mut query = format!("SELECT {} FROM {}", self.columns.joined(), self.source_table);
        if let Some(join) = &self.join {
            query.push_str(&format!(" JOIN {} ON {}", join.table, join.condition));
        }
        query.push_str(" FORMAT TabSeparated");
        query
    }

    pub fn summary(&self) -> Vec<(String, String)> {
        let mut rows = Vec::new();
        self.connection.summary(&mut rows);
        rows.push(("Source table".to_string(), self.source_table.clone()));
        if let Some(join) = &self.join {
            rows.push(("Join table".to_string(), join.table.clone()));
            rows.push(("Join condition".to_string(), join.condition.clone()));
        }
        rows.push(("Columns".to_string(), self.columns.joined()));
        self.file.summary(&mut rows);
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delimiter_parsing() {
        assert_eq!(Delimiter::parse(",").unwrap().as_char(), ',');
        assert_eq!(Delimiter::parse("|").unwrap().as_char(), '|');
        assert_eq!(Delimiter::parse("\\t").unwrap().as_char(), '\t');
        assert_eq!(Delimiter::parse("TAB").unwrap().as_char(), '\t');
        assert_eq!(
            Delimiter::parse(""),
            Err(FormError::InvalidDelimiter(String::new()))
        );
        assert_eq!(
            Delimiter::parse(";;"),
            Err(FormError::InvalidDelimiter(";;".to_string()))
        );
        assert_eq!(Delimiter::parse("\\t").unwrap().to_string(), "tab");
        assert_eq!(Delimiter::default().to_string(), "','");
    }

    #[test]
    fn test_column_selection() {
        let columns = ColumnSelection::parse(" id, name ,, ts ").unwrap();
        assert_eq!(columns.names(), ["id", "name", "ts"]);
        assert_eq!(columns.joined(), "id, name, ts");

        assert_eq!(ColumnSelection::parse(" , "), Err(FormError::NoColumns));
        assert_eq!(
            ColumnSelection::parse("id, name, id"),
            Err(FormError::DuplicateColumn("id".to_string()))
        );
    }

    #[test]
    fn test_connection_set_and_get() {
        let mut form = ConnectionForm::default();
        form.set(ConnectionField::Port, "9000".to_string());
        form.set(ConnectionField::JwtToken, "secret".to_string());
        assert_eq!(form.get(ConnectionField::Port), "9000");
        assert_eq!(form.get(ConnectionField::Host), "localhost");
        assert_eq!(form.jwt_token, "secret");
    }

    #[test]
    fn test_connection_errors_are_collected() {
        let mut errors = Vec::new();
        let form = ConnectionForm {
            host: " ".to_string(),
            port: "99999".to_string(),
            database: String::new(),
            user: "default".to_string(),
            jwt_token: String::new(),
        };
        assert!(form.validate(&mut errors).is_none());
        assert_eq!(
            errors,
            vec![
                FormError::MissingField("host"),
                FormError::InvalidPort("99999".to_string()),
                FormError::MissingField("database"),
            ]
        );
    }

    #[test]
    fn test_zero_port_rejected() {
        let mut errors = Vec::new();
        let form = ConnectionForm {
            port: "0".to_string(),
            ..Default::default()
        };
        assert!(form.validate(&mut errors).is_none());
        assert_eq!(errors, vec![FormError::InvalidPort("0".to_string())]);
    }

    #[test]
    fn test_export_plan() {
        let form = ExportForm {
            table: "events".to_string(),
            columns: "id, ts".to_string(),
            file_path: "/tmp/events.csv".to_string(),
            ..Default::default()
        };
        let plan = form.validate().unwrap();
        assert_eq!(plan.statement(), "SELECT id, ts FROM events FORMAT TabSeparated");
        assert_eq!(plan.connection.port, 8123);
        assert!(plan
            .summary()
            .contains(&("JWT token".to_string(), "none".to_string())));
    }

    #[test]
    fn test_export_reports_every_error() {
        let form = ExportForm {
            delimiter: "ab".to_string(),
            ..Default::default()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(
            errors,
            vec![
                FormError::MissingField("table"),
                FormError::NoColumns,
                FormError::MissingField("file path"),
                FormError::InvalidDelimiter("ab".to_string()),
            ]
        );
    }

    #[test]
    fn test_import_create_table_statement() {
        let form = ImportForm {
            file_path: "upload.csv".to_string(),
            delimiter: "tab".to_string(),
            table: "staging".to_string(),
            columns: "a,b".to_string(),
            ..Default::default()
        };
        let plan = form.validate().unwrap();
        assert_eq!(
            plan.create_table_statement(),
            "CREATE TABLE IF NOT EXISTS staging (a String, b String) ENGINE = MergeTree() ORDER BY tuple()"
        );
        assert_eq!(plan.file.delimiter.as_char(), '\t');
    }

    #[test]
    fn test_join_without_join_table() {
        let form = JoinForm {
            source_table: "orders".to_string(),
            columns: "id".to_string(),
            file_path: "out.csv".to_string(),
            ..Default::default()
        };
        let plan = form.validate().unwrap();
        assert!(plan.join.is_none());
        assert_eq!(plan.statement(), "SELECT id FROM orders FORMAT TabSeparated");
    }

    #[test]
    fn test_join_statement() {
        let form = JoinForm {
            source_table: "orders".to_string(),
            join_table: "customers".to_string(),
            join_condition: "orders.customer_id = customers.id".to_string(),
            columns: "orders.id, customers.name".to_string(),
            file_path: "out.csv".to_string(),
            ..Default::default()
        };
        let plan = form.validate().unwrap();
        assert_eq!(
            plan.statement(),
            "SELECT orders.id, customers.name FROM orders JOIN customers \
             ON orders.customer_id = customers.id FORMAT TabSeparated"
        );
    }

    #[test]
    fn test_join_table_requires_condition() {
        let form = JoinForm {
            source_table: "orders".to_string(),
            join_table: "customers".to_string(),
            columns: "id".to_string(),
            file_path: "out.csv".to_string(),
            ..Default::default()
        };
        assert_eq!(
            form.validate().unwrap_err(),
            vec![FormError::MissingField("join condition")]
        );
    }
}
