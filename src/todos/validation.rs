/// True when `raw` is present and not blank after trimming.
pub fn is_valid(raw: Option<&str>) -> bool {
    raw.is_some_and(|text| !text.trim().is_empty())
}
