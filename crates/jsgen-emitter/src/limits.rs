//! Emitter limits.

/// Maximum nesting depth the printer will descend before giving up.
///
/// Rendering recurses once per tree level, so a pathologically deep input
/// (for example a long left-nested `a + b + c + ...` chain built in code)
/// would otherwise overflow the stack. Exceeding the limit fails the render
/// with `GenerateError::NestingTooDeep`.
///
/// ```javascript
/// // a left-nested chain 600 operators long:
/// x = 1 + 2 + 3 + 4 /* ... */ + 600;
/// ```
pub const MAX_EMIT_DEPTH: u32 = 500;
