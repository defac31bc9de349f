//! Descriptor text format.
//!
//! A descriptor is six lines, one per field, in a fixed order:
//!
//! ```text
//! *Name*: foo
//! *Version*: 1.0
//! *Installation*: https://example.com/foo.msi
//! *Description*: Foo tool
//! *Install*: msiexec /i foo.msi /quiet
//! *Section*: utils
//! ```
//!
//! Decoding is best-effort: unknown lines are skipped and missing fields stay
//! empty. [`decode_strict`] additionally insists that every field is present.

use crate::error::CodecError;

use super::Package;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Name,
    Version,
    Installation,
    Description,
    Install,
    Section,
}

impl Field {
    const ENCODE_ORDER: [Field; 6] = [
        Field::Name,
        Field::Version,
        Field::Installation,
        Field::Description,
        Field::Install,
        Field::Section,
    ];

    const DECODE_ORDER: [Field; 6] = [
        Field::Name,
        Field::Installation,
        Field::Description,
        Field::Install,
        Field::Section,
        Field::Version,
    ];

    fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Version => "Version",
            Field::Installation => "Installation",
            Field::Description => "Description",
            Field::Install => "Install",
            Field::Section => "Section",
        }
    }

    fn get(self, package: &Package) -> &str {
        match self {
            Field::Name => &package.name,
            Field::Version => &package.version,
            Field::Installation => &package.installation,
            Field::Description => &package.description,
            Field::Install => &package.install,
            Field::Section => &package.section,
        }
    }

    fn get_mut(self, package: &mut Package) -> &mut String {
        match self {
            Field::Name => &mut package.name,
            Field::Version => &mut package.version,
            Field::Installation => &mut package.installation,
            Field::Description => &mut package.description,
            Field::Install => &mut package.install,
            Field::Section => &mut package.section,
        }
    }

    /// The value carried by `line` if it is this field's line.
    fn value_of(self, line: &str) -> Option<&str> {
        let rest = line
            .strip_prefix('*')?
            .strip_prefix(self.label())?
            .strip_prefix("*:")?;
        Some(rest.strip_prefix(' ').unwrap_or(rest))
    }
}

/// Render `package` as a descriptor block, newline-terminated.
pub fn encode(package: &Package) -> String {
    Field::ENCODE_ORDER
        .iter()
        .map(|field| format!("*{}*: {}\n", field.label(), field.get(package)))
        .collect()
}

/// Parse a descriptor block. Never fails.
pub fn decode(text: &str) -> Package {
    decode_fields(text).0
}

/// Parse a descriptor block, failing when a field line is absent.
pub fn decode_strict(text: &str) -> Result<Package, CodecError> {
    let (package, seen) = decode_fields(text);
    match Field::ENCODE_ORDER.iter().find(|f| !seen.contains(f)) {
        Some(missing) => Err(CodecError::MissingField(missing.label())),
        None => Ok(package),
    }
}

fn decode_fields(text: &str) -> (Package, Vec<Field>) {
    let mut package = Package::default();
    let mut seen = Vec::with_capacity(Field::DECODE_ORDER.len());

    for line in text.split('\n').map(str::trim) {
        let matched = Field::DECODE_ORDER
            .iter()
            .find_map(|field| field.value_of(line).map(|value| (*field, value)));

        if let Some((field, value)) = matched {
            // A repeated line overrides the earlier value
            *field.get_mut(&mut package) = value.to_string();
            if !seen.contains(&field) {
                seen.push(field);
            }
        }
    }

    (package, seen)
}
