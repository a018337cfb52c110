use std::thread;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::{
    error::MappingsError,
    options::ReaderOptions,
    reader::SchemaReader,
    tree::Element,
    types::{Dialect, MagicNumbers},
};

/// One dialect definition file, already parsed into a tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialectSource {
    pub name: String,
    pub root: Element,
}

impl DialectSource {
    pub fn new(name: impl Into<String>, root: Element) -> Self {
        DialectSource { name: name.into(), root }
    }
}

/// Every dialect of a run plus the checksum-by-id aggregate over all of them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Batch {
    pub dialects:      Vec<Dialect>,
    pub magic_numbers: MagicNumbers,
}

/// Compile one dialect tree into its IR.
pub fn compile_dialect(name: &str, root: &Element, options: &ReaderOptions) -> Result<Dialect, MappingsError> {
    SchemaReader::new(options.clone()).read(name, root)
}

/// Compile each source independently, in order. A failing file does not
/// affect the others.
pub fn compile_dialects(sources: &[DialectSource], options: &ReaderOptions) -> Vec<Result<Dialect, MappingsError>> {
    sources
        .iter()
        .map(|source| compile_dialect(&source.name, &source.root, options))
        .collect()
}

/// Like [`compile_dialects`] with one worker thread per source. Results
/// come back in input order.
pub fn compile_dialects_parallel(
    sources: &[DialectSource],
    options: &ReaderOptions,
) -> Vec<Result<Dialect, MappingsError>> {
    thread::scope(|scope| {
        let handles: Vec<_> = sources
            .iter()
            .map(|source| scope.spawn(move || compile_dialect(&source.name, &source.root, options)))
            .collect();

        handles
            .into_iter()
            .zip(sources)
            .map(|(handle, source)| {
                handle
                    .join()
                    .unwrap_or_else(|_| Err(MappingsError::WorkerPanicked(source.name.clone())))
            })
            .collect()
    })
}

/// Checksums by message id. Later dialects overwrite earlier ones for the
/// same id, so pass dialects in a fixed order for a deterministic result.
pub fn collect_magic_numbers(dialects: &[Dialect]) -> MagicNumbers {
    let mut magic_numbers = MagicNumbers::new();
    for dialect in dialects {
        magic_numbers.merge(dialect.magic_numbers());
    }
    magic_numbers
}

/// Compile every source, stopping at the first failing dialect, then build
/// the magic number aggregate.
pub fn compile_all(sources: &[DialectSource], options: &ReaderOptions) -> Result<Batch, MappingsError> {
    let mut dialects = Vec::with_capacity(sources.len());
    for (source, result) in sources.iter().zip(compile_dialects(sources, options)) {
        match result {
            Ok(dialect) => dialects.push(dialect),
            Err(e) => {
                warn!("dialect {} failed: {}", source.name, e);
                return Err(MappingsError::Dialect {
                    dialect: source.name.clone(),
                    source:  Box::new(e),
                });
            }
        }
    }

    let magic_numbers = collect_magic_numbers(&dialects);
    debug!("compiled {} dialects, {} message checksums", dialects.len(), magic_numbers.len());
    Ok(Batch { dialects, magic_numbers })
}
