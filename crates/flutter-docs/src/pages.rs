//! HTML views for the documentation site.
//!
//! Every page shares [`layout`]: a sidebar with all categories and their topics,
//! a search box, and the page body. All interpolated text is escaped by maud.

use maud::{html, Markup, PreEscaped, DOCTYPE};

use docs_common::model::{Category, DocumentContent, DocumentEntry};
use docs_common::render::{Block, ListKind, RichText};
use docs_common::search::{filter_categories, filter_topics, learning_path, MIN_QUERY_LEN};
use docs_common::store::DocumentStore;

const SITE_TITLE: &str = "Learn Flutter";

const STYLE: &str = "\
body{margin:0;display:flex;font-family:system-ui,sans-serif;color:#1f2937;background:#f9fafb}\
nav.sidebar{width:16rem;min-height:100vh;padding:1rem;background:#fff;border-right:1px solid #e5e7eb}\
nav.sidebar a{display:block;padding:.2rem 0;color:#374151;text-decoration:none}\
nav.sidebar a.active{color:#2563eb;font-weight:600}\
nav.sidebar h3{margin:1rem 0 .3rem;font-size:.8rem;text-transform:uppercase}\
main{flex:1;max-width:56rem;padding:2rem}\
.cards{display:grid;grid-template-columns:repeat(auto-fill,minmax(16rem,1fr));gap:1rem}\
.card{display:block;padding:1rem;background:#fff;border:1px solid #e5e7eb;border-radius:.5rem;color:inherit;text-decoration:none}\
.code{margin:1rem 0}.code-header{background:#1f2937;color:#d1d5db;padding:.4rem 1rem;font-size:.8rem}\
pre{margin:0;padding:1rem;background:#111827;color:#f3f4f6;overflow-x:auto}\
.pager{display:flex;justify-content:space-between;margin-top:3rem;border-top:1px solid #e5e7eb;padding-top:1rem}\
.muted{color:#6b7280}";

/// Which sidebar entries to highlight.
#[derive(Debug, Clone, Copy, Default)]
pub struct Location<'a> {
    pub category: Option<&'a str>,
    pub page: Option<&'a str>,
}

pub fn home_page(store: &DocumentStore, query: &str) -> Markup {
    let categories = filter_categories(store, query);
    let first = store.default_category();

    let body = html! {
        h1 { (SITE_TITLE) }
        p.muted { "A practical reference for building apps with Flutter." }
        (search_form("/", "Filter categories...", query))
        @if !query.is_empty() && categories.is_empty() {
            p.muted { "No categories found for \"" (query) "\"" }
        } @else {
            div.cards {
                @for category in &categories {
                    a.card href=(category_path(&category.slug)) {
                        h2 { (category.title) }
                        p.muted { (category.description) }
                    }
                }
            }
        }
        @if let Some(first) = first {
            section {
                h2 { "Quick Start" }
                p { "Get started with Flutter in just a few minutes:" }
                ol {
                    @for topic in learning_path(first) {
                        li { a href=(doc_path(&first.slug, &topic.slug)) { (topic.title) } }
                    }
                }
                a href=(category_path(&first.slug)) { "Start Learning →" }
            }
        }
    };

    layout(SITE_TITLE, store, Location::default(), body)
}

pub fn category_page(store: &DocumentStore, category: &Category, query: &str) -> Markup {
    let topics = filter_topics(category, query);
    let location = Location {
        category: Some(category.slug.as_str()),
        page: None,
    };

    let body = html! {
        div.muted {
            a href="/" { "Home" } " / " (category.title)
        }
        h1 { (category.title) }
        p.muted { (category.description) }
        (search_form(&category_path(&category.slug), &format!("Search {}...", category.title), query))
        @if !query.is_empty() && topics.is_empty() {
            p.muted { "No results found for \"" (query) "\"" }
        } @else {
            div.cards {
                @for topic in &topics {
                    a.card href=(doc_path(&category.slug, &topic.slug)) {
                        h2 { (topic.title) }
                        @if let Some(read_time) = &topic.read_time {
                            span.muted { (read_time) }
                        }
                        p { (topic.description) }
                    }
                }
            }
        }
        section {
            h2 { "Learning Path" }
            p {
                "Follow this recommended learning path to master "
                (category.title.to_lowercase())
                " in Flutter:"
            }
            ol {
                @for topic in learning_path(category) {
                    li { a href=(doc_path(&category.slug, &topic.slug)) { (topic.title) } }
                }
            }
        }
    };

    layout(&category.title, store, location, body)
}

pub fn document_page(
    store: &DocumentStore,
    category_slug: &str,
    slug: &str,
    doc: &DocumentContent,
    content: &[Block],
) -> Markup {
    let location = Location {
        category: Some(category_slug),
        page: Some(slug),
    };
    let category_title = store
        .category(category_slug)
        .map(|c| c.title.clone())
        .unwrap_or_else(|| humanize(category_slug));

    let body = html! {
        div.muted {
            a href="/" { "Home" } " / "
            a href=(category_path(category_slug)) { (category_title) } " / "
            (doc.title)
        }
        h1 { (doc.title) }
        p.muted { (doc.description) }
        article { (blocks(content)) }
        div.pager {
            @if let Some(prev) = &doc.prev {
                a href=(doc_path(category_slug, &prev.slug)) { "← " (prev.title) }
            } @else {
                span {}
            }
            @if let Some(next) = &doc.next {
                a href=(doc_path(category_slug, &next.slug)) { (next.title) " →" }
            } @else {
                span {}
            }
        }
    };

    layout(&doc.title, store, location, body)
}

pub fn search_page(store: &DocumentStore, query: &str, results: &[DocumentEntry]) -> Markup {
    let body = html! {
        h1 { "Search" }
        (search_form("/search", "Search documentation...", query))
        @if query.chars().count() < MIN_QUERY_LEN {
            p.muted { "Type at least " (MIN_QUERY_LEN) " characters to search." }
        } @else if results.is_empty() {
            p.muted { "No results found for \"" (query) "\"" }
        } @else {
            ul {
                @for entry in results {
                    li {
                        a href=(entry.path()) { (entry.summary.title) }
                        div.muted { (humanize(&entry.category)) " · " (entry.summary.description) }
                    }
                }
            }
        }
    };

    layout("Search", store, Location::default(), body)
}

pub fn not_found_page(store: &DocumentStore, path: &str) -> Markup {
    let body = html! {
        h1 { "Page not found" }
        p.muted { "Nothing is published at " code { (path) } "." }
        a href="/" { "Back to the home page" }
    };
    layout("Not found", store, Location::default(), body)
}

fn layout(title: &str, store: &DocumentStore, location: Location<'_>, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title {
                    @if title == SITE_TITLE { (SITE_TITLE) } @else { (title) " | " (SITE_TITLE) }
                }
                style { (PreEscaped(STYLE)) }
            }
            body {
                (sidebar(store, location))
                main { (body) }
            }
        }
    }
}

fn sidebar(store: &DocumentStore, location: Location<'_>) -> Markup {
    let at_home = location.category.is_none() && location.page.is_none();
    html! {
        nav.sidebar {
            a href="/" { strong { (SITE_TITLE) } }
            form action="/search" method="get" {
                input type="search" name="q" placeholder="Search documentation...";
            }
            a class=[at_home.then_some("active")] href="/" { "Home" }
            @for category in store.categories() {
                @let current = location.category == Some(category.slug.as_str());
                a class=[current.then_some("active")] href=(category_path(&category.slug)) {
                    h3 { (category.title) }
                }
                @for topic in &category.topics {
                    @let active = current && location.page == Some(topic.slug.as_str());
                    a class=[active.then_some("active")] href=(doc_path(&category.slug, &topic.slug)) { (topic.title) }
                }
            }
        }
    }
}

fn search_form(action: &str, placeholder: &str, query: &str) -> Markup {
    html! {
        form action=(action) method="get" {
            input type="search" name="q" value=(query) placeholder=(placeholder);
        }
    }
}

enum Group<'a> {
    Single(&'a Block),
    List(ListKind, Vec<&'a RichText>),
}

/// Groups consecutive list items of the same kind so they share one list element.
fn group_lists(content: &[Block]) -> Vec<Group<'_>> {
    let mut groups: Vec<Group<'_>> = Vec::new();
    for block in content {
        if let Block::ListItem { kind, text } = block {
            if let Some(Group::List(current, items)) = groups.last_mut() {
                if *current == *kind {
                    items.push(text);
                    continue;
                }
            }
            groups.push(Group::List(*kind, vec![text]));
        } else {
            groups.push(Group::Single(block));
        }
    }
    groups
}

pub fn blocks(content: &[Block]) -> Markup {
    html! {
        @for group in group_lists(content) {
            @match group {
                Group::List(ListKind::Unordered, items) => {
                    ul { @for item in items { li { (rich(item)) } } }
                },
                Group::List(ListKind::Ordered, items) => {
                    ol { @for item in items { li { (rich(item)) } } }
                },
                Group::Single(block) => { (single(block)) },
            }
        }
    }
}

fn single(block: &Block) -> Markup {
    html! {
        @match block {
            Block::Heading { level: 3, text } => { h3 { (rich(text)) } },
            Block::Heading { text, .. } => { h2 { (rich(text)) } },
            Block::Paragraph { text } => { p { (rich(text)) } },
            Block::ListItem { text, .. } => { li { (rich(text)) } },
            Block::Code { code, language } => {
                div.code {
                    div.code-header { (language) }
                    pre { code class=(format!("language-{language}")) { (code) } }
                }
            },
        }
    }
}

fn rich(text: &RichText) -> Markup {
    html! {
        @for (segment, strong) in text.spans() {
            @if strong { strong { (segment) } } @else { (segment) }
        }
    }
}

pub fn category_path(category: &str) -> String {
    format!("/docs/{category}")
}

pub fn doc_path(category: &str, slug: &str) -> String {
    format!("/docs/{category}/{slug}")
}

/// "getting-started" -> "Getting Started"
pub fn humanize(slug: &str) -> String {
    slug.split('-')
        .filter(|w| !w.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
