use slug::slugify;

/// Normalizes a human title into a slug fragment: lowercased, with runs of
/// non-alphanumeric characters collapsed to single hyphens and edge hyphens
/// trimmed.
pub fn generate_slug(text: &str) -> String {
    slugify(text)
}

/// Derives the stable identifier for an experience record from its sequence
/// order and title: the order zero-padded to two digits, then the slugified
/// title. order 3 + "Junior Developer" => "03-junior-developer".
pub fn experience_filename(order: u32, title: &str) -> String {
    format!("{:02}-{}", order, generate_slug(title))
}
