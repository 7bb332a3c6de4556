use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::error::ExtractError;
use crate::models::JobRecord;

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static selector")
}

static LIST_ITEM: LazyLock<Selector> = LazyLock::new(|| selector("li"));
static TITLE: LazyLock<Selector> = LazyLock::new(|| selector("h2"));
static COMPANY: LazyLock<Selector> = LazyLock::new(|| selector("h3.joblist-comp-name"));
static LIST: LazyLock<Selector> = LazyLock::new(|| selector("ul"));
static SPAN: LazyLock<Selector> = LazyLock::new(|| selector("span"));
static SKILLS: LazyLock<Selector> = LazyLock::new(|| selector("span.srp-skills"));

const CARD_CLASSES: &str = "clearfix job-bx wht-shd-bx";
const DETAILS_CLASSES: &str = "top-jd-dtl clearfix";

/// The whole class list must match, in order, with nothing extra.
fn has_classes(el: &ElementRef<'_>, classes: &str) -> bool {
    el.value()
        .attr("class")
        .is_some_and(|attr| attr.split_whitespace().eq(classes.split_whitespace()))
}

/// First `limit` job cards, in document order.
pub fn job_cards(doc: &Html, limit: usize) -> Vec<ElementRef<'_>> {
    doc.select(&LIST_ITEM)
        .filter(|li| has_classes(li, CARD_CLASSES))
        .take(limit)
        .collect()
}

pub fn parse_card(card: ElementRef<'_>) -> Result<JobRecord, ExtractError> {
    Ok(JobRecord::from_fields(
        first_text(card, &TITLE),
        first_text(card, &COMPANY),
        location(card)?,
        first_text(card, &SKILLS),
    ))
}

/// The location sits in a span inside the details list. A details list with
/// no span means the card is malformed, not that the location is unknown.
fn location(card: ElementRef<'_>) -> Result<Option<String>, ExtractError> {
    let Some(details) = card.select(&LIST).find(|ul| has_classes(ul, DETAILS_CLASSES)) else {
        return Ok(None);
    };
    details
        .select(&SPAN)
        .next()
        .map(|span| Some(text_of(span)))
        .ok_or(ExtractError::MissingChild {
            field: "location",
            child: "span",
        })
}

fn first_text(el: ElementRef<'_>, sel: &Selector) -> Option<String> {
    el.select(sel).next().map(text_of)
}

/// Every text node trimmed, blanks dropped, joined with no separator.
fn text_of(el: ElementRef<'_>) -> String {
    el.text().map(str::trim).filter(|t| !t.is_empty()).collect()
}
