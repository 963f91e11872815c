#[cfg(test)]
pub const POST_DATA: &str = r#"---
title: Spinnaker Changelog 1.2.3
date: 2017-06-01 10:42:32
categories: changelogs
---

<script src="https://gist.github.com/abc123.js"></script>"#;
