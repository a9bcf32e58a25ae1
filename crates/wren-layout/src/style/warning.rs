//! One-shot reporting for style values the engine does not support.
//!
//! Embedders feed whole stylesheets through the string mutators, so a
//! single unsupported unit can recur thousands of times. Each distinct
//! value is reported once; parsing still rejects it either way.

use std::collections::HashSet;
use std::sync::Mutex;

/// ANSI color codes for terminal output
const YELLOW: &str = "\x1b[33m";
const RESET: &str = "\x1b[0m";

/// Values already reported (to deduplicate).
static REPORTED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Report a length value whose unit the engine does not understand,
/// once per distinct value.
///
/// # Panics
/// Panics if the reported-value mutex is poisoned.
pub(crate) fn warn_unsupported_unit(value: &str) {
    let first_report = REPORTED
        .lock()
        .unwrap()
        .get_or_insert_with(HashSet::new)
        .insert(value.to_owned());

    if first_report {
        eprintln!("{YELLOW}[wren] ⚠ unsupported unit in length '{value}'{RESET}");
    }
}
