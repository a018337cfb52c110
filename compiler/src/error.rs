use mavlink_mappings_schema::{TypeSpecError, UnknownTypeError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MappingsError {
    #[error("Expected <mavlink> root element but found <{0}>")]
    UnexpectedRoot(String),

    #[error("Missing attribute \"{attribute}\" on <{element}>")]
    MissingAttribute {
        element:   String,
        attribute: String,
    },

    #[error("Invalid {attribute} \"{value}\" on <{element}>")]
    InvalidNumber {
        element:   String,
        attribute: String,
        value:     String,
    },

    #[error("Message {message}, field {field}: {source}")]
    FieldType {
        message: String,
        field:   String,
        #[source]
        source:  TypeSpecError,
    },

    #[error("No enum resolves to MavCmd")]
    MissingDistinguishedEnum,

    #[error("Dialect {dialect}: {source}")]
    Dialect {
        dialect: String,
        #[source]
        source:  Box<MappingsError>,
    },

    #[error("Worker compiling dialect {0} panicked")]
    WorkerPanicked(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl MappingsError {
    /// The unknown primitive behind this error, if a field named one.
    pub fn unknown_type(&self) -> Option<&UnknownTypeError> {
        match self {
            MappingsError::FieldType { source: TypeSpecError::UnknownType(e), .. } => Some(e),
            MappingsError::Dialect { source, .. } => source.unknown_type(),
            _ => None,
        }
    }
}
