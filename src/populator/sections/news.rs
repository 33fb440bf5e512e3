//! News list and rolling ticker.
//!
//! The ticker repeats the list once (items ++ items) so the scrolling track
//! can loop without a visible seam.

use crate::document::NewsItem;
use crate::populator::regions;
use crate::populator::utils::{escape, format_news_date};
use crate::populator::Fragment;

/// Items of the ticker track: the list followed by itself.
pub fn ticker_items(items: &[NewsItem]) -> Vec<&NewsItem> {
    items.iter().chain(items.iter()).collect()
}

pub fn render_ticker(news: Option<&[NewsItem]>) -> Vec<Fragment> {
    let Some(items) = news.filter(|items| !items.is_empty()) else {
        return Vec::new();
    };

    let mut html = String::new();
    for item in ticker_items(items) {
        html.push_str("<div class=\"rolling-news-item\">\n");
        html.push_str("<i class=\"fas fa-star\"></i>\n");
        html.push_str(&format!(
            "<span class=\"rolling-news-date\">{}</span>\n",
            escape(&format_news_date(&item.date))
        ));
        html.push_str(&format!(
            "<span class=\"rolling-news-text\">{}</span>\n",
            escape(&item.title)
        ));
        html.push_str("</div>\n");
    }
    vec![Fragment::new(regions::ROLLING_NEWS, html)]
}

pub fn render_list(news: Option<&[NewsItem]>) -> Vec<Fragment> {
    let Some(items) = news.filter(|items| !items.is_empty()) else {
        return Vec::new();
    };

    let mut html = String::new();
    for item in items {
        html.push_str("<div class=\"news-item\">\n");
        html.push_str(&format!(
            "<span class=\"news-date\">{}</span>\n",
            escape(&format_news_date(&item.date))
        ));
        html.push_str(&format!("<h3>{}</h3>\n", escape(&item.title)));
        html.push_str(&format!("<p>{}</p>\n", escape(&item.description)));
        html.push_str("</div>\n");
    }
    vec![Fragment::new(regions::NEWS_LIST, html)]
}
