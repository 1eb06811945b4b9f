/*!
Miscellaneous items related to [logging](log).

Calls to the log macro are made on each state change and each refused conversion.
These are intended to help trace how a trilean came to hold the flags it holds.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [assignment](crate::structures::trilean::Assign)
    pub const ASSIGNMENT: &str = "assignment";

    /// Logs related to [decision coercion](crate::structures::trilean::Trilean::is_true) and its fallible counterpart
    pub const DECISION: &str = "decision";

    /// Logs related to parsing renderings
    pub const PARSE: &str = "parse";
}
