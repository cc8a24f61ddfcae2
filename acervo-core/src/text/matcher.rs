//! Substring and prefix checks over pre-folded text.
//!
//! ## The Input Contract
//!
//! Every function here expects **both** arguments to be already folded
//! (see [`crate::text::fold`]). Violating the contract gives silently
//! case-sensitive matches, so debug builds assert on uppercase ASCII.

use memchr::memmem;

use crate::text::fold::looks_folded;

/// Returns `true` if folded `haystack` contains folded `needle`.
///
/// An empty needle matches everything, mirroring `str::contains`.
#[inline(always)]
#[must_use]
pub fn contains(haystack: &str, needle: &str) -> bool {
    debug_assert!(looks_folded(haystack), "haystack must be pre-folded");
    debug_assert!(looks_folded(needle), "needle must be pre-folded");
    memmem::find(haystack.as_bytes(), needle.as_bytes()).is_some()
}

/// Returns `true` if folded `haystack` starts with folded `needle`.
#[inline(always)]
#[must_use]
pub fn starts_with(haystack: &str, needle: &str) -> bool {
    debug_assert!(looks_folded(haystack), "haystack must be pre-folded");
    debug_assert!(looks_folded(needle), "needle must be pre-folded");
    haystack.as_bytes().starts_with(needle.as_bytes())
}
