//! Route templates for span names and metric labels.

const ID_PLACEHOLDER: &str = "{id}";

/// Collection prefix whose next segment is always a product id.
const PRODUCT_PREFIX: [&str; 2] = ["api", "product"];

/// Collapse id segments so every product lookup shares one route, whether or
/// not the id parses.
pub(super) fn route_template(path: &str) -> String {
    let mut segments: Vec<&str> = path
        .trim_start_matches('/')
        .split('/')
        .filter(|segment| !segment.is_empty())
        .collect();

    if segments.starts_with(&PRODUCT_PREFIX) {
        segments.truncate(PRODUCT_PREFIX.len() + 1);

        if let Some(id) = segments.get_mut(PRODUCT_PREFIX.len()) {
            *id = ID_PLACEHOLDER;
        }
    }

    format!("/{}", segments.join("/"))
}
