//! Static HTML report rendering
//!
//! Rendering is a pure function of the record sequences, the report
//! settings and the generation timestamp. It performs no I/O.

mod style;

use crate::avatar::{avatar_file_name, PLACEHOLDER_FILE};
use crate::config::Config;
use crate::profile::ProfileRecord;
use chrono::{DateTime, Local};
use maud::{html, Markup, PreEscaped, DOCTYPE};
use std::path::Path;

/// Timestamp format shown in the report header
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Everything a report is built from
#[derive(Debug, Clone, Copy)]
pub struct ReportInput<'a> {
    pub sponsors: &'a [ProfileRecord],
    pub developers: &'a [ProfileRecord],
    /// Participants with developers already merged in front
    pub participants: &'a [ProfileRecord],
    /// Identifiers loaded across all lists, regardless of outcome
    pub total_requested: usize,
}

/// Renders [`ReportInput`] into a self-contained HTML document
#[derive(Debug, Clone)]
pub struct ReportRenderer {
    title: String,
    lang: String,
    footer: String,
    profile_url_base: String,
    assets_href: String,
}

impl ReportRenderer {
    /// Build a renderer from configuration
    ///
    /// Asset links are made relative to the document's directory.
    pub fn from_config(config: &Config) -> Self {
        Self {
            title: config.report.title.clone(),
            lang: config.report.lang.clone(),
            footer: config.report.footer.clone(),
            profile_url_base: config.provider.profile_url_base.clone(),
            assets_href: assets_href(&config.output.document, &config.output.assets_dir),
        }
    }

    /// Render the full document
    pub fn render(&self, input: &ReportInput<'_>, generated_at: DateTime<Local>) -> String {
        let updated = generated_at.format(TIMESTAMP_FORMAT).to_string();

        let markup = html! {
            (DOCTYPE)
            html lang=(self.lang) {
                head {
                    meta charset="utf-8";
                    meta name="viewport" content="width=device-width, initial-scale=1.0";
                    title { (self.title) }
                    link rel="preconnect" href="https://fonts.googleapis.com";
                    link rel="preconnect" href="https://fonts.gstatic.com" crossorigin;
                    link href=(style::FONT_STYLESHEET) rel="stylesheet";
                    style { (PreEscaped(style::STYLESHEET)) }
                }
                body {
                    div class="container" {
                        header {
                            h1 { (self.title) }
                            p { "Last updated: " (updated) }
                            div class="stats" {
                                div class="stat-item" { "Total " (input.total_requested) }
                                div class="stat-item" { "Sponsors " (input.sponsors.len()) }
                                div class="stat-item" { "Developers " (input.developers.len()) }
                                div class="stat-item" { "Participants " (input.participants.len()) }
                            }
                        }
                        div class="lists-wrapper" {
                            (self.section("Sponsors", input.sponsors))
                            (self.section("Participants", input.participants))
                        }
                        footer {
                            p { (self.footer) }
                        }
                    }
                }
            }
        };

        markup.into_string()
    }

    fn section(&self, heading: &str, records: &[ProfileRecord]) -> Markup {
        html! {
            div class="list-section" {
                h2 class="section-title" { (heading) " (" (records.len()) ")" }
                div class="user-list" {
                    @if records.is_empty() {
                        p class="empty" { "No entries" }
                    }
                    @for record in records {
                        (self.card(record))
                    }
                }
            }
        }
    }

    fn card(&self, record: &ProfileRecord) -> Markup {
        let placeholder = self.asset(PLACEHOLDER_FILE);

        if !record.resolved {
            return html! {
                div class="user-card failed" {
                    img src=(placeholder) alt=(record.identifier);
                    div class="info" {
                        div class="username" {
                            (record.identifier) " "
                            span class="failed-tag" { "Lookup failed" }
                        }
                        div class="fullname" { "Profile information unavailable" }
                    }
                    span class="btn disabled" aria-disabled="true" { "Unavailable" }
                }
            };
        }

        let display_name = if record.display_name.is_empty() {
            "-"
        } else {
            record.display_name.as_str()
        };
        let fallback = format!("this.onerror=null;this.src='{}'", placeholder);

        html! {
            div class="user-card" {
                img src=(self.asset(&avatar_file_name(&record.identifier)))
                    onerror=(fallback)
                    alt=(record.identifier);
                div class="info" {
                    div class="username" {
                        (record.identifier) " "
                        @if record.is_private {
                            span class="private-tag" { "Private" }
                        } @else {
                            span class="public-tag" { "Public" }
                        }
                    }
                    div class="fullname" { (display_name) }
                }
                a href=(self.profile_url(&record.identifier))
                    target="_blank"
                    rel="noopener"
                    class="btn" { "Follow" }
            }
        }
    }

    fn asset(&self, file_name: &str) -> String {
        format!("{}/{}", self.assets_href, file_name)
    }

    fn profile_url(&self, identifier: &str) -> String {
        let base = self.profile_url_base.trim_end_matches('/');
        format!("{}/{}/", base, identifier)
    }
}

/// Link prefix for the assets directory as seen from the document
///
/// Falls back to the configured path when the assets directory is not
/// below the document's directory. Never empty, so links cannot turn
/// root-relative.
fn assets_href(document: &Path, assets_dir: &Path) -> String {
    let document_dir = document.parent().unwrap_or(Path::new(""));
    let relative = assets_dir.strip_prefix(document_dir).unwrap_or(assets_dir);
    let href = relative.to_string_lossy().replace('\\', "/");
    let href = href.trim_end_matches('/');

    if href.is_empty() {
        ".".to_string()
    } else {
        href.to_string()
    }
}
