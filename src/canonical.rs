/// Normalizes a medicine name into the key used to join classifier output
/// to the reference dataset. Applied identically on both sides of the join.
pub fn canonicalize(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .replace(' ', "_")
        .replace('-', "_")
}
