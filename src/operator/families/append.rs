//! `.` and `.=` (spec §4.4): coerce both sides to String and concatenate.

use crate::value::V;

pub fn append(a: V, b: V) -> V {
    let a = a.as_tag(crate::value::Tag::String);
    let b = b.as_tag(crate::value::Tag::String);
    match (a, b) {
        (V::String(mut a), V::String(b)) => {
            a.push_str(&b);
            V::String(a)
        }
        _ => unreachable!("as_tag(String) always returns V::String"),
    }
}
