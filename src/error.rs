use thiserror::Error;

/// Errors that can occur while loading or snapshotting the recipe catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Could not read dataset '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse recipe dataset: {0}")]
    Parse(String),

    #[error("Catalog snapshot error: {0}")]
    Snapshot(String),

    #[error("Record {index} could not be converted: {source}")]
    Conversion {
        index: usize,
        #[source]
        source: RecipeConversionError,
    },
}

/// Errors that can occur when converting a custom dataset record into a `Recipe`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecipeConversionError {
    #[error("Missing required field '{0}'")]
    MissingField(&'static str),

    #[error("Invalid custom data: {0}")]
    ValidationError(String),
}

/// Errors surfaced by the saved-recipe store and its key-value backends.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Could not read stored value for key '{key}': {message}")]
    StorageReadFailure { key: String, message: String },

    #[error("Could not write stored value for key '{key}': {message}")]
    StorageWriteFailure { key: String, message: String },

    #[error("Position {position} is out of range for a collection of {len} saved recipes")]
    OutOfRange { position: usize, len: usize },
}

/// Errors that can occur when handing a URI to the platform's default handler.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LinkError {
    #[error("'{uri}' is not a valid link: {message}")]
    InvalidUri { uri: String, message: String },

    #[error("Failed to open '{uri}': {message}")]
    ExternalLinkFailure { uri: String, message: String },
}

/// Errors that can occur while loading the application configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {message}")]
    Parse { path: String, message: String },

    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: &'static str, message: String },
}
