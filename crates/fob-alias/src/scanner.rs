//! Line-based import scanner.
//!
//! Each line is searched for at most one module reference, in this order:
//!
//! 1. a `from "<spec>"` clause (static imports and re-exports)
//! 2. a dynamic `import("<spec>")` call
//! 3. a `require("<spec>")` call
//!
//! The quote character must match on both sides. A line carrying more than
//! one reference, counting every pattern together, is rejected: rewriting one
//! specifier by position would leave the others silently unresolved.

use std::ops::Range;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::error::{Result, RewriteError};

fn regex(pattern: &str) -> Regex {
    Regex::new(pattern).expect("valid regex literal")
}

static FROM_CLAUSE: LazyLock<Regex> = LazyLock::new(|| regex(r#"from (?:"(.*?)"|'(.*?)')"#));

static DYNAMIC_IMPORT: LazyLock<Regex> =
    LazyLock::new(|| regex(r#"import\((?:"(.*?)"|'(.*?)')\)"#));

static REQUIRE_CALL: LazyLock<Regex> =
    LazyLock::new(|| regex(r#"require\((?:"(.*?)"|'(.*?)')\)"#));

/// Patterns in priority order.
fn patterns() -> [&'static Regex; 3] {
    [&*FROM_CLAUSE, &*DYNAMIC_IMPORT, &*REQUIRE_CALL]
}

/// A module specifier located on one line of a source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportReference {
    /// File that owns the line.
    pub path: PathBuf,
    /// Zero-based physical line number.
    pub index: usize,
    /// Specifier text without quotes.
    pub specifier: String,
    /// Byte range of the specifier within the line.
    pub span: Range<usize>,
}

/// Scan `lines` of the file at `owner` for import references.
///
/// Returns one reference per qualifying line, in line order.
///
/// # Errors
///
/// [`RewriteError::AmbiguousLine`] when a line holds more than one reference.
///
/// # Example
///
/// ```
/// use fob_alias::scan;
/// use std::path::Path;
///
/// let lines = ["import { a } from '@app/a';", "const b = 1;", "const c = require(\"c\");"];
/// let refs = scan(&lines, Path::new("src/index.ts")).unwrap();
///
/// assert_eq!(refs.len(), 2);
/// assert_eq!(refs[0].specifier, "@app/a");
/// assert_eq!(refs[1].index, 2);
/// ```
pub fn scan(lines: &[&str], owner: &Path) -> Result<Vec<ImportReference>> {
    let mut references = Vec::new();

    for (index, line) in lines.iter().enumerate() {
        let Some(span) = find_specifier(line) else {
            continue;
        };

        if count_references(line) > 1 {
            return Err(RewriteError::AmbiguousLine {
                path: owner.to_path_buf(),
                line: index + 1,
            });
        }

        references.push(ImportReference {
            path: owner.to_path_buf(),
            index,
            specifier: line[span.clone()].to_string(),
            span,
        });
    }

    Ok(references)
}

/// Byte range of the first specifier on `line`, honouring pattern priority.
pub fn find_specifier(line: &str) -> Option<Range<usize>> {
    patterns()
        .into_iter()
        .find_map(|re| re.captures(line))
        .and_then(|caps| quoted(&caps))
}

/// Total number of import-like references on `line` across all patterns.
pub fn count_references(line: &str) -> usize {
    patterns()
        .into_iter()
        .map(|re| re.find_iter(line).count())
        .sum()
}

fn quoted(caps: &Captures<'_>) -> Option<Range<usize>> {
    caps.get(1).or_else(|| caps.get(2)).map(|m| m.range())
}
