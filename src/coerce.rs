//! Best-effort normalization of loose version-like strings.
//!
//! CI tags come in shapes like `1`, `1.2`, `v1.2.3-beta`, or `01.02.03` that
//! are not strict semver. Coercion rewrites the leading numeric portion into
//! a canonical `MAJOR.MINOR.PATCH` prefix and leaves the rest of the string
//! for the strict parser to judge.

/// Rewrites the anchored `v?MAJOR[.MINOR[.PATCH]]` prefix of `raw` into
/// canonical `MAJOR.MINOR.PATCH` form.
///
/// Missing components default to `0`, leading zeros are collapsed (`007`
/// becomes `7`), and a single leading lowercase `v` is dropped. Whatever
/// follows the matched prefix is appended untouched, so `v1.2.3-beta.1`
/// becomes `1.2.3-beta.1` and `1.2.3.4` becomes `1.2.3.4` (left for the
/// parser to reject). If no digit prefix is found, the string is returned
/// unchanged.
///
/// Coercion is idempotent: applying it to its own output changes nothing.
///
/// # Examples
///
/// ```
/// use semver_next::coerce;
///
/// assert_eq!("1.0.0", coerce("1"));
/// assert_eq!("1.2.0", coerce("1.2"));
/// assert_eq!("1.2.3", coerce("01.02.03"));
/// assert_eq!("1.2.3-beta.1", coerce("v1.2.3-beta.1"));
/// assert_eq!("not-a-version", coerce("not-a-version"));
/// ```
pub fn coerce(raw: &str) -> String {
    let bytes = raw.as_bytes();
    let mut idx = 0;

    // a leading `v` only anchors the match when digits follow it
    if bytes.first() == Some(&b'v') && bytes.get(1).is_some_and(u8::is_ascii_digit) {
        idx = 1;
    }

    let Some(major) = take_digits(bytes, &mut idx) else {
        return raw.to_owned();
    };
    let minor = take_dotted_digits(bytes, &mut idx);
    let patch = take_dotted_digits(bytes, &mut idx);

    format!(
        "{}.{}.{}{}",
        collapse_zeros(major),
        minor.map_or("0", collapse_zeros),
        patch.map_or("0", collapse_zeros),
        &raw[idx..]
    )
}

/// Consumes a run of ASCII digits at `*idx`, advancing it past them.
fn take_digits<'r>(bytes: &'r [u8], idx: &mut usize) -> Option<&'r str> {
    let start = *idx;
    while bytes.get(*idx).is_some_and(u8::is_ascii_digit) {
        *idx += 1;
    }
    (*idx > start).then(|| {
        // the consumed range is all ASCII digits
        unsafe { core::str::from_utf8_unchecked(&bytes[start..*idx]) }
    })
}

/// Consumes a `.` followed by a digit run, or nothing at all.
fn take_dotted_digits<'r>(bytes: &'r [u8], idx: &mut usize) -> Option<&'r str> {
    if bytes.get(*idx) != Some(&b'.') || !bytes.get(*idx + 1).is_some_and(u8::is_ascii_digit) {
        return None;
    }
    *idx += 1;
    take_digits(bytes, idx)
}

fn collapse_zeros(component: &str) -> &str {
    let trimmed = component.trim_start_matches('0');
    if trimmed.is_empty() {
        "0"
    } else {
        trimmed
    }
}
