use chrono::NaiveDateTime;
use lazy_static::lazy_static;
use regex::Regex;

/// Timestamp written in the post front matter
pub fn format_post_date(date_time: &NaiveDateTime) -> String {
    date_time.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// `{YYYY-MM-DD}-{version}-changelog.md`
pub fn post_file_name(date_time: &NaiveDateTime, version: &str) -> String {
    let day = date_time.format("%Y-%m-%d");
    format!("{}-{}-changelog.md", day, version)
}

/// Directory git creates when cloning `uri`: the last path component without `.git`.
/// Both `/` and the `:` of scp-like SSH URIs separate components.
pub fn repo_name_from_uri(uri: &str) -> String {
    lazy_static! {
        static ref REPO_NAME_REGEX: Regex = Regex::new(
            r"(?P<name>[^/:]*?)(\.git)?/*$"
        ).unwrap();
    }

    REPO_NAME_REGEX.captures(uri)
        .and_then(|cap| cap.name("name"))
        .map(|name| name.as_str().to_string())
        .unwrap_or_default()
}

/// Gists are included as scripts, so point at the `.js` rendering.
pub fn gist_script_uri(gist_uri: &str) -> String {
    if gist_uri.is_empty() || gist_uri.ends_with(".js") {
        gist_uri.to_string()
    } else {
        format!("{}.js", gist_uri)
    }
}
