//! Resolution of command-line arguments into inputs and an output path
//!
//! Positional arguments mix inputs and (optionally) the output file. The
//! rules are order dependent:
//!
//! 1. An argument ending in `.svg` that exists is an input.
//! 2. A `.svg` argument that does not exist becomes the output once at least
//!    `capacity` inputs have been collected; before that it is skipped.
//! 3. Anything else is skipped with a warning.
//! 4. If more than `capacity` inputs were collected, the *last* one becomes the
//!    output and only the first `capacity` are kept.
//!
//! Rule 4 means an existing file can be picked as the output and overwritten.
//! Passing `--output` disables rules 2 and 4 entirely.

use std::path::{Path, PathBuf};

use tracing::warn;

use crate::config::DEFAULT_OUTPUT;
use crate::error::InputError;

/// Inputs and output path for one run
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedInputs {
    pub inputs: Vec<PathBuf>,
    pub output: PathBuf,
    /// Arguments that were neither an input nor the output
    pub skipped: Vec<PathBuf>,
}

/// Resolve positional arguments using the real filesystem
pub fn resolve_inputs(
    args: &[PathBuf],
    capacity: usize,
    explicit_output: Option<PathBuf>,
) -> Result<ResolvedInputs, InputError> {
    resolve_inputs_with(args, capacity, explicit_output, |p| p.exists())
}

/// Resolve positional arguments with a custom existence check
pub fn resolve_inputs_with<F>(
    args: &[PathBuf],
    capacity: usize,
    explicit_output: Option<PathBuf>,
    exists: F,
) -> Result<ResolvedInputs, InputError>
where
    F: Fn(&Path) -> bool,
{
    let infer_output = explicit_output.is_none();
    let mut output = explicit_output.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));
    let mut inputs = Vec::new();
    let mut skipped = Vec::new();

    for arg in args {
        if !is_svg(arg) {
            warn!("skipping non-SVG argument: {}", arg.display());
            skipped.push(arg.clone());
            continue;
        }

        if exists(arg) {
            inputs.push(arg.clone());
        } else if infer_output && inputs.len() >= capacity {
            output = arg.clone();
        } else {
            warn!("skipping missing file: {}", arg.display());
            skipped.push(arg.clone());
        }
    }

    if inputs.len() > capacity {
        if infer_output {
            if let Some(last) = inputs.pop() {
                output = last;
            }
        }
        if inputs.len() > capacity {
            warn!(
                "found {} SVG files, using only the first {}",
                inputs.len(),
                capacity
            );
            inputs.truncate(capacity);
        }
    } else if inputs.len() < capacity && !inputs.is_empty() {
        warn!(
            "found only {} SVG files, grid may have empty spaces",
            inputs.len()
        );
    }

    if inputs.is_empty() {
        return Err(InputError::NoValidInputs);
    }

    Ok(ResolvedInputs {
        inputs,
        output,
        skipped,
    })
}

fn is_svg(arg: &Path) -> bool {
    arg.extension().is_some_and(|ext| ext == "svg")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    fn args(list: &[&str]) -> Vec<PathBuf> {
        list.iter().map(PathBuf::from).collect()
    }

    fn resolve(
        list: &[&str],
        existing: &[&str],
        explicit: Option<&str>,
    ) -> Result<ResolvedInputs, InputError> {
        let existing: HashSet<PathBuf> = existing.iter().map(PathBuf::from).collect();
        resolve_inputs_with(&args(list), 8, explicit.map(PathBuf::from), |p| {
            existing.contains(p)
        })
    }

    fn paths(list: &[&str]) -> Vec<PathBuf> {
        list.iter().map(PathBuf::from).collect()
    }

    const EIGHT: [&str; 8] = [
        "1.svg", "2.svg", "3.svg", "4.svg", "5.svg", "6.svg", "7.svg", "8.svg",
    ];

    #[test]
    fn test_exact_capacity_with_new_output() {
        let mut list = EIGHT.to_vec();
        list.push("out.svg");
        let resolved = resolve(&list, &EIGHT, None).unwrap();
        assert_eq!(resolved.inputs, paths(&EIGHT));
        assert_eq!(resolved.output, PathBuf::from("out.svg"));
        assert!(resolved.skipped.is_empty());
    }

    #[test]
    fn test_default_output() {
        let resolved = resolve(&EIGHT, &EIGHT, None).unwrap();
        assert_eq!(resolved.output, PathBuf::from(DEFAULT_OUTPUT));
    }

    #[test]
    fn test_missing_file_before_capacity_is_skipped() {
        let resolved = resolve(&["missing.svg", "1.svg"], &["1.svg"], None).unwrap();
        assert_eq!(resolved.inputs, paths(&["1.svg"]));
        assert_eq!(resolved.output, PathBuf::from(DEFAULT_OUTPUT));
        assert_eq!(resolved.skipped, args(&["missing.svg"]));
    }

    #[test]
    fn test_non_svg_is_skipped() {
        let resolved = resolve(&["notes.txt", "1.svg"], &["1.svg", "notes.txt"], None).unwrap();
        assert_eq!(resolved.inputs, paths(&["1.svg"]));
        assert_eq!(resolved.skipped, args(&["notes.txt"]));
    }

    #[test]
    fn test_excess_inputs_last_becomes_output() {
        let mut existing = EIGHT.to_vec();
        existing.extend(["9.svg", "10.svg"]);
        let resolved = resolve(&existing, &existing, None).unwrap();
        assert_eq!(resolved.inputs, paths(&EIGHT));
        assert_eq!(resolved.output, PathBuf::from("10.svg"));
    }

    #[test]
    fn test_excess_input_overrides_earlier_missing_output() {
        let mut existing = EIGHT.to_vec();
        existing.push("9.svg");
        let mut list = EIGHT.to_vec();
        list.extend(["out.svg", "9.svg"]);
        let resolved = resolve(&list, &existing, None).unwrap();
        assert_eq!(resolved.inputs, paths(&EIGHT));
        assert_eq!(resolved.output, PathBuf::from("9.svg"));
    }

    #[test]
    fn test_explicit_output_disables_inference() {
        let mut existing = EIGHT.to_vec();
        existing.extend(["9.svg", "10.svg"]);
        let mut list = existing.clone();
        list.push("stray.svg");
        let resolved = resolve(&list, &existing, Some("grid.svg")).unwrap();
        assert_eq!(resolved.inputs, paths(&EIGHT));
        assert_eq!(resolved.output, PathBuf::from("grid.svg"));
        assert_eq!(resolved.skipped, args(&["stray.svg"]));
    }

    #[test]
    fn test_fewer_inputs_is_ok() {
        let resolved = resolve(&EIGHT[..5], &EIGHT, None).unwrap();
        assert_eq!(resolved.inputs.len(), 5);
    }

    #[test]
    fn test_no_inputs_is_error() {
        let result = resolve(&["a.png", "missing.svg"], &[], None);
        assert!(matches!(result, Err(InputError::NoValidInputs)));
    }

    #[test]
    fn test_capacity_is_configurable() {
        let existing = ["a.svg", "b.svg", "c.svg"];
        let resolved = resolve_inputs_with(
            &args(&["a.svg", "b.svg", "out.svg", "c.svg"]),
            2,
            None,
            |p| existing.iter().any(|e| Path::new(e) == p),
        )
        .unwrap();
        assert_eq!(resolved.inputs, paths(&["a.svg", "b.svg"]));
        assert_eq!(resolved.output, PathBuf::from("c.svg"));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_argument_is_skipped() {
        use std::ffi::OsString;
        use std::os::unix::ffi::OsStringExt;

        let odd = PathBuf::from(OsString::from_vec(b"caf\xe9.txt".to_vec()));
        let list = vec![odd.clone(), PathBuf::from("1.svg")];
        let resolved = resolve_inputs_with(&list, 8, None, |p| p == Path::new("1.svg")).unwrap();
        assert_eq!(resolved.inputs, paths(&["1.svg"]));
        assert_eq!(resolved.skipped, vec![odd]);
    }
}
