use crate::utils::hash::sha256_hex;

/// Names are sorted and deduplicated before hashing. A digest collision would
/// merge two shapes.
#[must_use]
pub fn shape_fingerprint<'a, I>(keys: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut names = keys.into_iter().collect::<Vec<_>>();
    names.sort_unstable();
    names.dedup();
    sha256_hex(names.join(",").as_bytes())
}
