/// Strip invisible characters that spreadsheet exports leave behind and collapse whitespace.
pub(crate) fn normalize_field(value: &str) -> String {
    let cleaned = strip_invisible(value);
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub(crate) fn strip_invisible(value: &str) -> String {
    value.replace(['\u{feff}', '\u{200b}'], "")
}
