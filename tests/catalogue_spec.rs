// tests/catalogue_spec.rs
//
// Offline parsing of catalogue pages.
//
use book_scrape::config::options::Pairing;
use book_scrape::specs::catalogue::{find_nodes, parse_page, ParseError};

const PAGE: &str = include_str!("fixtures/catalogue_page.html");

fn book(title: &str, price: &str) -> String {
    format!(
        r#"<article class="product_pod"><h3><a href="x.html" title="{title}">{title}</a></h3>
           <div class="product_price"><p class="price_color">{price}</p></div></article>"#
    )
}

#[test]
fn titles_come_from_anchor_title_attribute() {
    let entries = parse_page(PAGE, Pairing::Strict).unwrap();
    assert_eq!(entries.len(), 3);

    // Link text is truncated by the site; the attribute is not.
    assert_eq!(entries[0].title, "A Light in the Attic");
    assert_eq!(entries[0].price_text, "£51.77");
    assert_eq!(entries[2].title, "Sapiens: A Brief History of Humankind, Vol. 1");
    assert_eq!(entries[2].price_text, "£54.23");
}

#[test]
fn entries_keep_document_order() {
    let entries = parse_page(PAGE, Pairing::Strict).unwrap();
    let titles: Vec<&str> = entries.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "A Light in the Attic",
            "Tipping the Velvet",
            "Sapiens: A Brief History of Humankind, Vol. 1",
        ]
    );
}

#[test]
fn headings_without_titled_anchor_are_not_titles() {
    let html = format!("<html><body><h3>Recently viewed</h3>{}</body></html>", book("Only One", "£9.99"));
    let entries = parse_page(&html, Pairing::Strict).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].title, "Only One");
}

#[test]
fn strict_pairing_rejects_mismatched_counts() {
    let html = format!(
        r#"<html><body>{}<h3><a title="No Price Here">No Price</a></h3></body></html>"#,
        book("Priced", "£1.00")
    );
    let err = parse_page(&html, Pairing::Strict).unwrap_err();
    assert_eq!(err, ParseError::ShapeMismatch { titles: 2, prices: 1 });
}

#[test]
fn truncate_pairing_drops_unpaired_tail() {
    let html = format!(
        r#"<html><body>{}{}<p class="price_color">£3.00</p></body></html>"#,
        book("First", "£1.00"),
        book("Second", "£2.00")
    );
    let nodes = find_nodes(&html).unwrap();
    assert_eq!((nodes.titles.len(), nodes.prices.len()), (2, 3));

    let entries = parse_page(&html, Pairing::Truncate).unwrap();
    assert_eq!(entries.len(), nodes.pairable());
    assert_eq!(entries[1].title, "Second");
    assert_eq!(entries[1].price_text, "£2.00");
}

#[test]
fn page_without_books_parses_to_nothing() {
    let entries = parse_page("<html><body><p>404</p></body></html>", Pairing::Strict).unwrap();
    assert!(entries.is_empty());
}
