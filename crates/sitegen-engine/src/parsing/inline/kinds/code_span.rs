/// Code span inline type with owned delimiter constant.
///
/// Code spans are "raw zones" - nothing inside them is parsed as emphasis.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick that both opens and closes a code span.
    pub const TICK: &'static str = "`";
}
