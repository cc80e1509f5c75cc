/// Recombine literal fragments and values into a single string.
///
/// Emits `literals[0]`, `values[0]`, `literals[1]`, `values[1]`, ... with no
/// separators. The walk is driven by `literals`: trailing literals are
/// appended verbatim, while values beyond `literals.len()` are dropped.
///
/// Callers pass one more literal than values (a path always starts and ends
/// with a literal fragment, possibly empty). That contract is not checked:
/// a short `values` slice simply leaves the remaining literals joined together.
///
/// # Example
///
/// ```rust
/// use hateoas_links::path::interleave;
///
/// assert_eq!(interleave(&["/users/", "/posts/", ""], &["1", "2"]), "/users/1/posts/2");
/// assert_eq!(interleave(&["/users/", ""], &[] as &[&str]), "/users/");
/// ```
#[must_use]
pub fn interleave<A, B>(literals: &[A], values: &[B]) -> String
where
    A: AsRef<str>,
    B: AsRef<str>,
{
    let capacity = literals.iter().map(|l| l.as_ref().len()).sum::<usize>()
        + values.iter().map(|v| v.as_ref().len()).sum::<usize>();
    let mut out = String::with_capacity(capacity);

    for (i, literal) in literals.iter().enumerate() {
        out.push_str(literal.as_ref());
        if let Some(value) = values.get(i) {
            out.push_str(value.as_ref());
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::interleave;

    const NONE: &[&str] = &[];

    #[test]
    fn test_balanced_sequences_are_fully_consumed() {
        let literals = ["/a/", "/b/", "/c"];
        let values = ["1", "2"];
        assert_eq!(interleave(&literals, &values), "/a/1/b/2/c");
    }

    #[test]
    fn test_single_literal_without_values() {
        assert_eq!(interleave(&["/users"], NONE), "/users");
    }

    #[test]
    fn test_short_values_leave_trailing_literals_verbatim() {
        let literals = ["/users/", "/posts/", ""];
        assert_eq!(interleave(&literals, &["7"]), "/users/7/posts/");
    }

    #[test]
    fn test_excess_values_are_dropped() {
        assert_eq!(interleave(&["/users/", ""], &["1", "2", "3"]), "/users/12");
        assert_eq!(interleave(&["/only"], &["x", "y"]), "/onlyx");
    }

    #[test]
    fn test_empty_literals_produce_empty_string() {
        assert_eq!(interleave(NONE, &["ignored"]), "");
    }

    #[test]
    fn test_accepts_owned_and_borrowed_inputs() {
        let literals = vec![String::from("/pets/"), String::new()];
        let values = vec!["fido"];
        assert_eq!(interleave(&literals, &values), "/pets/fido");
    }
}
