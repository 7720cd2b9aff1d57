use askama::Template;
use axum::response::Response;

use crate::services::page_content::{NavLink, Page, PageContent, JOIN_CTA_LABEL, SITE_NAME};
use crate::web::render::render_html;

#[derive(Template)]
#[template(path = "page.html")]
pub struct PageTemplate {
    pub site_name: &'static str,
    pub join_cta_label: &'static str,
    pub content: &'static PageContent,
    pub nav: Vec<NavLink>,
}

impl PageTemplate {
    pub fn for_page(page: Page) -> Self {
        Self {
            site_name: SITE_NAME,
            join_cta_label: JOIN_CTA_LABEL,
            content: page.content(),
            nav: page.nav_links(),
        }
    }
}

fn render_page(page: Page) -> Response {
    render_html(&PageTemplate::for_page(page))
}

pub async fn home_page() -> Response {
    render_page(Page::Home)
}

pub async fn about_us_page() -> Response {
    render_page(Page::AboutUs)
}

pub async fn join_event_page() -> Response {
    render_page(Page::JoinEvent)
}

pub async fn faq_page() -> Response {
    render_page(Page::Faq)
}
