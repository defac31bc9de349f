//! Interactive authoring of a new package descriptor.

use anyhow::Result;
use std::io::{BufRead, Write};

use crate::package::Package;
use crate::runtime::prompt_with_io;

/// Ask for each descriptor field in turn.
///
/// Returns `None` if the input ends before every field was answered.
pub fn prompt_package<B: BufRead, W: Write>(input: &mut B, output: &mut W) -> Result<Option<Package>> {
    writeln!(output, "Enter the package details:")?;

    let mut package = Package::default();
    let fields = [
        ("Name", &mut package.name),
        ("Version", &mut package.version),
        ("Installation File", &mut package.installation),
        ("Description", &mut package.description),
        ("Install Command", &mut package.install),
        ("Section", &mut package.section),
    ];

    for (label, value) in fields {
        match prompt_with_io(label, input, output)? {
            Some(answer) => *value = answer,
            None => return Ok(None),
        }
    }

    Ok(Some(package))
}
