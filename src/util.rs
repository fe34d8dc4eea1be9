/// Numeric conversion helpers.
///
/// This module provides safe functions for converting between integer and
/// floating-point types without risking silent data loss. The bitwise
/// operators rely on them to decide whether a floating-point operand can be
/// treated as an integer.
pub mod num;
