use super::Str;

impl Str {
    /// The hash the interpreter exposes for this string.
    ///
    /// It is computed from the code points alone, so that a string may be
    /// found in a hashed table whichever representation is used for the key
    /// or the query. The value is computed once and cached. It is never `-1`,
    /// which interpreters reserve to signal failure.
    pub fn hash_value(&self) -> i64 {
        *self.hash.get_or_init(|| string_hash(self))
    }
}

fn string_hash(s: &Str) -> i64 {
    let mut code_points = s.code_points().peekable();
    let first = match code_points.peek() {
        Some(cp) => *cp,
        None => return 0,
    };
    let mut x = u64::from(first) << 7;
    for cp in code_points {
        x = x.wrapping_mul(1_000_003) ^ u64::from(cp);
    }
    x ^= s.len() as u64;
    match x as i64 {
        -1 => -2,
        h => h,
    }
}
