use crate::metadata::CategoryDesc;

/// Internal number matching API used to isolate the underlying
/// implementation of the matcher and allow different implementations to be
/// swapped in easily.
pub(crate) trait MatcherApi: Send + Sync {
    /// Returns whether the given national number (a string containing only
    /// decimal digits) matches the structural pattern defined in the given
    /// category description.
    fn match_national_number(
        &self,
        number: &str,
        desc: &CategoryDesc,
        allow_prefix_match: bool,
    ) -> bool;
}
