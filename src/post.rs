use std::fmt;
use std::fmt::{Display, Formatter};

use chrono::NaiveDateTime;

use crate::text_utils::{format_post_date, gist_script_uri};

pub struct Header {
    pub title: String,
    pub date: NaiveDateTime,
    pub category: String,
}

/// Changelog post as published on the site
pub struct Post {
    pub header: Header,
    pub script_src: String,
}

/// Example of post
/// ---
/// title: Spinnaker Changelog 1.2.3
/// date: 2017-06-01 10:42:32
/// categories: changelogs
/// ---
///
/// <script src="https://gist.github.com/abc123.js"></script>
impl Post {
    pub fn new(title: String, date: NaiveDateTime, category: String, gist_uri: &str) -> Post {
        Post {
            header: Header {
                title,
                date,
                category,
            },
            script_src: gist_script_uri(gist_uri),
        }
    }

    fn header_lines(&self) -> Vec<String> {
        vec![
            "---".to_string(),
            format!("title: {}", self.header.title),
            format!("date: {}", format_post_date(&self.header.date)),
            format!("categories: {}", self.header.category),
            "---".to_string(),
        ]
    }

    fn body_lines(&self) -> Vec<String> {
        vec![format!("<script src=\"{}\"></script>", self.script_src)]
    }
}

impl Display for Post {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut lines = self.header_lines();
        lines.push("".to_string());
        lines.extend(self.body_lines());
        write!(f, "{}", lines.join("\n"))
    }
}
