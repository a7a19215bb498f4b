// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Turning ranked records into something a page can show.
//!
//! Two layouts exist, picked by [`CardStyle`]:
//!
//! ```text
//! Card (store pages)                 Snippet (website search)
//! ┌──────────────────────────┐       ──────────────────────────
//! │ [icon]                   │       # Name
//! │ Name  [v]                │       [icon]
//! │ summary                  │       ## Summary / ## Description
//! │ [download] [info] [exec] │       ## Tags  • a • b
//! └──────────────────────────┘       ## Download
//! ```
//!
//! Every piece of record text is HTML-escaped. Missing icons and summaries fall
//! back to [`PLACEHOLDER_ICON`] and [`PLACEHOLDER_SUMMARY`].

use crate::catalog::Catalog;
use crate::types::{AppRecord, ExecType, RecordId};
use serde::{Deserialize, Serialize};

/// Icon shown for records that don't name one.
pub const PLACEHOLDER_ICON: &str = "org.sugarlabs.HelloWorld";

/// Summary shown for records that don't have one.
pub const PLACEHOLDER_SUMMARY: &str = "No info provided";

/// Shown in place of results when nothing scored.
pub const NO_RESULTS_MESSAGE: &str = "No search result found";

/// Shown when the catalog index could not be loaded.
pub const UNAVAILABLE_MESSAGE: &str = "Search is currently unavailable";

// =============================================================================
// DISPLAY OPTIONS
// =============================================================================

/// Page colour scheme. Dark adds the `-dark` card classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardTheme {
    #[default]
    Light,
    Dark,
}

impl CardTheme {
    pub fn card_class(self) -> &'static str {
        match self {
            CardTheme::Light => "",
            CardTheme::Dark => "saas-card-dark",
        }
    }

    pub fn heading_link_class(self) -> &'static str {
        match self {
            CardTheme::Light => "",
            CardTheme::Dark => "saas-card-heading-link-dark",
        }
    }

    pub fn image_class(self) -> &'static str {
        match self {
            CardTheme::Light => "",
            CardTheme::Dark => "saas-card-image-top-dark",
        }
    }
}

/// Which HTML layout results use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardStyle {
    #[default]
    Card,
    Snippet,
}

/// How results are laid out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayOptions {
    pub theme: CardTheme,
    pub style: CardStyle,
    /// Show at most this many results.
    pub limit: Option<usize>,
    /// Prepended to `app/`, `bundles/`, `icons/` and `img/` links.
    pub asset_prefix: String,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            theme: CardTheme::Light,
            style: CardStyle::Card,
            limit: None,
            asset_prefix: "../".to_string(),
        }
    }
}

// =============================================================================
// EXEC BADGE
// =============================================================================

/// The runtime badge next to a card's buttons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExecBadge {
    pub image: &'static str,
    pub title: &'static str,
    pub alt: &'static str,
}

impl ExecBadge {
    /// Badge for a runtime; unknown runtimes get none.
    pub fn for_exec(exec_type: &ExecType) -> Option<ExecBadge> {
        match exec_type {
            ExecType::Web => Some(ExecBadge {
                image: "sugarweb-1.svg",
                title: "Based on WebKit. Works on most platforms",
                alt: "Works with Webkit",
            }),
            ExecType::Python2 => Some(ExecBadge {
                image: "sugar2-1.svg",
                title: "Powered by Python2. Supported by older sugar.",
                alt: "Powered by Python2.x",
            }),
            ExecType::Python3 => Some(ExecBadge {
                image: "sugar3-1.svg",
                title: "Powered by Python3. Supported by Sugar 0.116+",
                alt: "Powered by Python3.x",
            }),
            ExecType::Other(_) => None,
        }
    }
}

// =============================================================================
// RESULT CARD
// =============================================================================

/// Everything a card shows, with placeholders applied and links resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultCard {
    pub id: RecordId,
    pub name: String,
    pub summary: String,
    pub version: Option<String>,
    pub app_href: String,
    pub bundle_href: String,
    pub icon_src: String,
    /// Project page; only set when the record has a non-blank URL.
    pub info_href: Option<String>,
    pub badge: Option<ExecBadge>,
}

impl ResultCard {
    pub fn from_record(id: RecordId, record: &AppRecord, asset_prefix: &str) -> Self {
        let icon = record.icon_name.as_deref().unwrap_or(PLACEHOLDER_ICON);
        ResultCard {
            id,
            name: record.name.clone(),
            summary: record
                .summary
                .clone()
                .unwrap_or_else(|| PLACEHOLDER_SUMMARY.to_string()),
            version: record
                .v
                .as_ref()
                .filter(|v| v.is_shown())
                .map(|v| v.to_string()),
            app_href: format!(
                "{}app/{}.html",
                asset_prefix,
                record.bundle_id.as_deref().unwrap_or_default()
            ),
            bundle_href: format!(
                "{}bundles/{}",
                asset_prefix,
                record.bundle_name.as_deref().unwrap_or_default()
            ),
            icon_src: format!("{}icons/{}.svg", asset_prefix, icon),
            info_href: record
                .url
                .as_deref()
                .filter(|url| !url.trim().is_empty())
                .map(str::to_string),
            badge: record.exec_type.as_ref().and_then(ExecBadge::for_exec),
        }
    }

    /// Bootstrap card markup.
    pub fn to_html(&self, theme: CardTheme, asset_prefix: &str) -> String {
        let name = escape_html(&self.name);
        let version = self
            .version
            .as_deref()
            .map(|v| format!(r#"<span class="badge badge-secondary">{}</span>"#, escape_html(v)))
            .unwrap_or_default();
        let info = self
            .info_href
            .as_deref()
            .map(|href| {
                format!(
                    r#"<a href="{}" class="btn btn-primary"><i class="fa fa-info-circle"></i></a>"#,
                    escape_html(href)
                )
            })
            .unwrap_or_default();
        let badge = self
            .badge
            .as_ref()
            .map(|badge| {
                format!(
                    r#"<a data-toggle="tooltip" title="{}"><img src="{}img/{}" alt="{}" height="38px"></a>"#,
                    badge.title,
                    escape_html(asset_prefix),
                    badge.image,
                    badge.alt
                )
            })
            .unwrap_or_default();

        format!(
            concat!(
                r#"<div class="card saas-card shadow-lg {card}">"#,
                r#"<div class="saas-image-placeholder">"#,
                r#"<img class="card-img-top saas-card-image-hidden saas-card-image-top {image}" loading="lazy" src="{icon}" alt="Activity Logo of {name}">"#,
                r#"</div>"#,
                r#"<div class="card-body">"#,
                r#"<h3 class="card-title saas-h1"><a href="{app}" class="saas-card-heading-link {heading}">{name}</a>{version}</h3>"#,
                r#"<p class="card-text">{summary}</p>"#,
                r#"<a type="application/zip" href="{bundle}" class="btn btn-primary"><i class="fa fa-download"></i></a>"#,
                "{info}{badge}",
                r#"</div>"#,
                r#"</div>"#,
            ),
            card = theme.card_class(),
            image = theme.image_class(),
            heading = theme.heading_link_class(),
            icon = escape_html(&self.icon_src),
            name = name,
            app = escape_html(&self.app_href),
            version = version,
            summary = escape_html(&self.summary),
            bundle = escape_html(&self.bundle_href),
            info = info,
            badge = badge,
        )
    }
}

/// Long-form snippet used by the website search page. Links are relative to
/// the page (`./app/`, `./icons/`, `./bundles/<name>.xo`).
pub fn snippet_html(record: &AppRecord) -> String {
    let name = escape_html(&record.name);
    let mut html = format!(
        "<hr><h1><a href=\"./app/{name}.html\">{name}</a></h1>\n\
         <p><img src=\"./icons/{name}.svg\" style=\"max-width: 250px\"></img></p>\n\
         <div id=summary><h2>Summary</h2>\n<p>{summary}</p>\n</div>\n\
         <div id=description><h2>Description</h2>\n<p>{description}</p>\n</div>\n\
         <div id=tags><h2>Tags</h2>\n<ul>\n",
        name = name,
        summary = escape_html(record.summary.as_deref().unwrap_or(PLACEHOLDER_SUMMARY)),
        description = escape_html(record.description_text()),
    );
    for tag in &record.tags {
        html.push_str(&format!("<li>{}</li>\n", escape_html(tag)));
    }
    html.push_str(&format!(
        "</ul>\n</div>\n<h2 id=\"downloadButton\"><a href=\"./bundles/{}.xo\">Download</a></h2>\n",
        name
    ));
    html
}

/// Escape text for HTML element content and double-quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

// =============================================================================
// OUTCOME
// =============================================================================

/// What a results pane shows: cards, or a message explaining why there are none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedOutcome {
    pub cards: Vec<ResultCard>,
    pub message: Option<&'static str>,
}

impl RenderedOutcome {
    pub fn message(message: &'static str) -> Self {
        RenderedOutcome {
            cards: Vec::new(),
            message: Some(message),
        }
    }

    /// Cards for `ids`, in order, up to the configured limit. Ids outside the
    /// catalog are skipped.
    pub fn from_ids(
        catalog: &Catalog,
        ids: impl IntoIterator<Item = RecordId>,
        options: &DisplayOptions,
    ) -> Self {
        let cards: Vec<ResultCard> = ids
            .into_iter()
            .filter_map(|id| {
                catalog
                    .get(id)
                    .map(|record| ResultCard::from_record(id, record, &options.asset_prefix))
            })
            .take(options.limit.unwrap_or(usize::MAX))
            .collect();

        if cards.is_empty() {
            Self::message(NO_RESULTS_MESSAGE)
        } else {
            RenderedOutcome {
                cards,
                message: None,
            }
        }
    }

    /// The whole pane as HTML in the configured layout.
    pub fn to_html(&self, catalog: &Catalog, options: &DisplayOptions) -> String {
        if let Some(message) = self.message {
            return format!("<h1>{}</h1>", escape_html(message));
        }
        self.cards
            .iter()
            .map(|card| match options.style {
                CardStyle::Card => card.to_html(options.theme, &options.asset_prefix),
                CardStyle::Snippet => catalog
                    .get(card.id)
                    .map(snippet_html)
                    .unwrap_or_default(),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
