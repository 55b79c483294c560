/// Escape sequence resolution for printed strings.
///
/// String literals are stored with their backslash escapes intact; this
/// module turns them into the characters they denote at print time.
pub mod escape;
/// Stack growth for deeply nested programs.
///
/// Parsing, evaluation and printing recurse once per nesting level; this
/// module keeps those recursions from exhausting the thread's stack.
pub mod stack;
/// Source positions.
///
/// Converts the byte offsets reported by the lexer into the 1-based line and
/// column numbers carried by tokens and diagnostics.
pub mod position;
