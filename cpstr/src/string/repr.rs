use std::fmt::Write;

use super::Str;

impl Str {
    /// The source form of the string: quoted, with special characters
    /// escaped.
    ///
    /// Single quotes are used unless the text contains a single quote and no
    /// double quote. Control characters (C0, DEL and C1) and lone surrogates
    /// are escaped; other characters appear as themselves.
    pub fn repr(&self) -> String {
        let has_single = self.code_points().any(|cp| cp == u32::from('\''));
        let has_double = self.code_points().any(|cp| cp == u32::from('"'));
        let quote = if has_single && !has_double { '"' } else { '\'' };

        let mut r = String::with_capacity(self.len() + 2);
        r.push(quote);
        for cp in self.code_points() {
            match cpstr_seq::to_char(cp) {
                Some(c) if c == quote || c == '\\' => {
                    r.push('\\');
                    r.push(c);
                }
                Some('\t') => r.push_str("\\t"),
                Some('\n') => r.push_str("\\n"),
                Some('\r') => r.push_str("\\r"),
                Some(c) if c.is_control() => {
                    let _ = write!(r, "\\x{:02x}", cp);
                }
                Some(c) => r.push(c),
                None => {
                    let _ = write!(r, "\\u{:04x}", cp);
                }
            }
        }
        r.push(quote);
        r
    }
}
