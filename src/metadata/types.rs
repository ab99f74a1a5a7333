//! Schema metadata types.
//!
//! These mirror what an ORM's generated table maps expose: columns with their
//! declared SQL type, nullability and size, and relations with a cardinality.

use serde::{Deserialize, Serialize};

use super::inflection;

/// Declared column type, as known to the ORM.
///
/// Deserializes from any spelling accepted by [`SqlType::from_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", try_from = "String")]
pub enum SqlType {
    Char,
    Varchar,
    #[serde(rename = "LONGVARCHAR")]
    LongVarchar,
    Clob,
    ClobEmu,
    Numeric,
    Decimal,
    #[serde(rename = "TINYINT")]
    TinyInt,
    #[serde(rename = "SMALLINT")]
    SmallInt,
    Integer,
    #[serde(rename = "BIGINT")]
    BigInt,
    Real,
    Float,
    Double,
    Binary,
    #[serde(rename = "VARBINARY")]
    VarBinary,
    #[serde(rename = "LONGVARBINARY")]
    LongVarBinary,
    Blob,
    Date,
    Time,
    Timestamp,
    BuDate,
    BuTimestamp,
    Boolean,
    BooleanEmu,
    Enum,
    Object,
    PhpArray,
}

impl TryFrom<String> for SqlType {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        SqlType::from_str(&value).ok_or_else(|| format!("unknown column type: {}", value))
    }
}

/// Broad family a [`SqlType`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeCategory {
    Boolean,
    Integer,
    /// Floating point and fixed precision decimals.
    Float,
    Text,
    LongText,
    Enum,
    Date,
    Time,
    Timestamp,
    Binary,
    /// Serialized objects and arrays.
    Opaque,
}

impl SqlType {
    /// Type family used by the guessing rules.
    pub fn category(self) -> TypeCategory {
        match self {
            SqlType::Boolean | SqlType::BooleanEmu => TypeCategory::Boolean,
            SqlType::TinyInt
            | SqlType::SmallInt
            | SqlType::Integer
            | SqlType::BigInt
            | SqlType::Numeric => TypeCategory::Integer,
            SqlType::Float | SqlType::Real | SqlType::Double | SqlType::Decimal => {
                TypeCategory::Float
            }
            SqlType::Char | SqlType::Varchar => TypeCategory::Text,
            SqlType::LongVarchar | SqlType::Clob | SqlType::ClobEmu | SqlType::Blob => {
                TypeCategory::LongText
            }
            SqlType::Enum => TypeCategory::Enum,
            SqlType::Date | SqlType::BuDate => TypeCategory::Date,
            SqlType::Time => TypeCategory::Time,
            SqlType::Timestamp | SqlType::BuTimestamp => TypeCategory::Timestamp,
            SqlType::Binary | SqlType::VarBinary | SqlType::LongVarBinary => TypeCategory::Binary,
            SqlType::Object | SqlType::PhpArray => TypeCategory::Opaque,
        }
    }

    /// Character types whose declared size is a length limit.
    pub fn is_text(self) -> bool {
        matches!(self, SqlType::Char | SqlType::Varchar | SqlType::LongVarchar)
    }

    /// Numeric types with bounded precision.
    pub fn is_float(self) -> bool {
        self.category() == TypeCategory::Float
    }

    /// Parse a type name, accepting the ORM's spellings (`VARCHAR`, `BU_DATE`, `LONGVARCHAR`).
    pub fn from_str(s: &str) -> Option<Self> {
        let normalized = s.trim().to_uppercase().replace(['_', ' '], "");
        match normalized.as_str() {
            "CHAR" => Some(SqlType::Char),
            "VARCHAR" => Some(SqlType::Varchar),
            "LONGVARCHAR" => Some(SqlType::LongVarchar),
            "CLOB" => Some(SqlType::Clob),
            "CLOBEMU" => Some(SqlType::ClobEmu),
            "NUMERIC" => Some(SqlType::Numeric),
            "DECIMAL" => Some(SqlType::Decimal),
            "TINYINT" => Some(SqlType::TinyInt),
            "SMALLINT" => Some(SqlType::SmallInt),
            "INTEGER" | "INT" => Some(SqlType::Integer),
            "BIGINT" => Some(SqlType::BigInt),
            "REAL" => Some(SqlType::Real),
            "FLOAT" => Some(SqlType::Float),
            "DOUBLE" => Some(SqlType::Double),
            "BINARY" => Some(SqlType::Binary),
            "VARBINARY" => Some(SqlType::VarBinary),
            "LONGVARBINARY" => Some(SqlType::LongVarBinary),
            "BLOB" => Some(SqlType::Blob),
            "DATE" => Some(SqlType::Date),
            "TIME" => Some(SqlType::Time),
            "TIMESTAMP" => Some(SqlType::Timestamp),
            "BUDATE" => Some(SqlType::BuDate),
            "BUTIMESTAMP" => Some(SqlType::BuTimestamp),
            "BOOLEAN" | "BOOL" => Some(SqlType::Boolean),
            "BOOLEANEMU" => Some(SqlType::BooleanEmu),
            "ENUM" => Some(SqlType::Enum),
            "OBJECT" => Some(SqlType::Object),
            "PHPARRAY" | "ARRAY" => Some(SqlType::PhpArray),
            _ => None,
        }
    }
}

/// Static description of a single column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnMetadata {
    /// Column name as declared in the schema (e.g. `updated_at`).
    pub name: String,

    /// Accessor-style name (e.g. `UpdatedAt`); derived from `name` when absent.
    #[serde(default)]
    pub php_name: Option<String>,

    #[serde(rename = "type")]
    pub sql_type: SqlType,

    /// Column is declared NOT NULL.
    #[serde(default, alias = "required")]
    pub not_null: bool,

    /// Declared size (length for character types, precision for numerics).
    #[serde(default)]
    pub size: Option<u32>,

    #[serde(default)]
    pub primary_key: bool,

    /// Allowed values for ENUM columns.
    #[serde(default)]
    pub value_set: Vec<String>,
}

impl ColumnMetadata {
    /// A nullable column with no size.
    pub fn new(name: impl Into<String>, sql_type: SqlType) -> Self {
        Self {
            name: name.into(),
            php_name: None,
            sql_type,
            not_null: false,
            size: None,
            primary_key: false,
            value_set: Vec::new(),
        }
    }

    pub fn not_null(mut self) -> Self {
        self.not_null = true;
        self
    }

    pub fn with_size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }

    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self.not_null = true;
        self
    }

    pub fn with_php_name(mut self, php_name: impl Into<String>) -> Self {
        self.php_name = Some(php_name.into());
        self
    }

    pub fn with_value_set<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.value_set = values.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_nullable(&self) -> bool {
        !self.not_null
    }

    /// Accessor-style name, explicit or derived.
    pub fn accessor_name(&self) -> String {
        self.php_name
            .clone()
            .unwrap_or_else(|| inflection::to_accessor_name(&self.name))
    }

    /// Whether `property` refers to this column.
    ///
    /// Matches the column name, the accessor name, or the snake-cased property,
    /// all case-insensitively.
    pub fn matches(&self, property: &str) -> bool {
        let property = inflection::strip_table_prefix(property);
        if property.eq_ignore_ascii_case(&self.name)
            || property.eq_ignore_ascii_case(&self.accessor_name())
        {
            return true;
        }
        inflection::to_column_name(property).eq_ignore_ascii_case(&self.name)
    }
}

/// Cardinality of a relation as seen from the owning model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationKind {
    ManyToOne,
    OneToOne,
    OneToMany,
    ManyToMany,
}

impl RelationKind {
    /// The owning model holds a collection of targets.
    pub fn is_to_many(self) -> bool {
        matches!(self, RelationKind::OneToMany | RelationKind::ManyToMany)
    }
}

impl std::fmt::Display for RelationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RelationKind::ManyToOne => write!(f, "N:1"),
            RelationKind::OneToOne => write!(f, "1:1"),
            RelationKind::OneToMany => write!(f, "1:N"),
            RelationKind::ManyToMany => write!(f, "N:N"),
        }
    }
}

/// Static description of an association between two models.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationMetadata {
    /// Relation name, singular (e.g. `Author`, `MainAuthor`).
    pub name: String,

    /// Collection name for to-many relations; derived from `name` when absent.
    #[serde(default)]
    pub plural_name: Option<String>,

    /// Target model.
    pub target: String,

    pub kind: RelationKind,
}

impl RelationMetadata {
    pub fn new(name: impl Into<String>, target: impl Into<String>, kind: RelationKind) -> Self {
        Self {
            name: name.into(),
            plural_name: None,
            target: target.into(),
            kind,
        }
    }

    pub fn with_plural_name(mut self, plural_name: impl Into<String>) -> Self {
        self.plural_name = Some(plural_name.into());
        self
    }

    /// Collection name, explicit or pluralized from `name`.
    pub fn plural(&self) -> String {
        self.plural_name
            .clone()
            .unwrap_or_else(|| inflection::pluralize(&self.name))
    }

    /// The property name a form uses for this relation.
    ///
    /// To-many relations are addressed by their plural name, to-one relations
    /// by their name.
    pub fn property_name(&self) -> String {
        if self.kind.is_to_many() {
            self.plural()
        } else {
            self.name.clone()
        }
    }

    /// Whether `property` refers to this relation (case-insensitive).
    pub fn matches(&self, property: &str) -> bool {
        inflection::strip_table_prefix(property).eq_ignore_ascii_case(&self.property_name())
    }
}

/// Static description of a model and its table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableMetadata {
    /// Model identifier (e.g. `Item` or a fully qualified class name).
    #[serde(alias = "model")]
    pub name: String,

    /// Underlying table name; derived from `name` when absent.
    #[serde(default)]
    pub table: Option<String>,

    #[serde(default)]
    pub columns: Vec<ColumnMetadata>,

    #[serde(default)]
    pub relations: Vec<RelationMetadata>,
}

impl TableMetadata {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            table: None,
            columns: Vec::new(),
            relations: Vec::new(),
        }
    }

    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = Some(table.into());
        self
    }

    pub fn with_column(mut self, column: ColumnMetadata) -> Self {
        self.columns.push(column);
        self
    }

    pub fn with_relation(mut self, relation: RelationMetadata) -> Self {
        self.relations.push(relation);
        self
    }

    /// Table name, explicit or derived from the model name.
    pub fn table_name(&self) -> String {
        self.table
            .clone()
            .unwrap_or_else(|| inflection::to_column_name(inflection::short_model_name(&self.name)))
    }

    /// Property name without its table prefix, or `None` when the prefix
    /// names another table. The prefix may be the table or the model name.
    fn own_property<'a>(&self, property: &'a str) -> Option<&'a str> {
        match inflection::split_table_prefix(property) {
            (None, bare) => Some(bare),
            (Some(prefix), bare) => {
                let ours = prefix.eq_ignore_ascii_case(&self.table_name())
                    || prefix.eq_ignore_ascii_case(inflection::short_model_name(&self.name));
                ours.then_some(bare)
            }
        }
    }

    /// Find a column by property name.
    pub fn column(&self, property: &str) -> Option<&ColumnMetadata> {
        let bare = self.own_property(property)?;
        // Exact column names take precedence over derived spellings.
        self.columns
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(bare))
            .or_else(|| self.columns.iter().find(|c| c.matches(bare)))
    }

    /// Find a relation by property name.
    pub fn relation(&self, property: &str) -> Option<&RelationMetadata> {
        let bare = self.own_property(property)?;
        self.relations.iter().find(|r| r.matches(bare))
    }

    pub fn primary_key(&self) -> Vec<&ColumnMetadata> {
        self.columns.iter().filter(|c| c.primary_key).collect()
    }
}
