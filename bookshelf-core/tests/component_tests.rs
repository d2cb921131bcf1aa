//! Component tests for card and listing rendering
//!
//! Each test renders a component to a view tree and inspects it through
//! `Screen`, the same way a reader would scan the rendered page: by visible
//! text and heading level.

use bookshelf_core::{App, BookCard, BookRecord, Node, Screen, TextMatch};
use std::collections::HashSet;

/// Build a record with every field set explicitly
fn record(
    title: &str,
    author: &str,
    price: f64,
    original_price: f64,
    genre: &str,
    is_available: bool,
    is_bestseller: bool,
) -> BookRecord {
    BookRecord::new(title, author, price, genre)
        .with_original_price(original_price)
        .available(is_available)
        .bestseller(is_bestseller)
}

fn render(book: &BookRecord) -> Node {
    BookCard::new(book).render()
}

fn pattern(re: &str) -> TextMatch {
    TextMatch::pattern(re).unwrap()
}

// =============================================================================
// BookCard props
// =============================================================================

#[test]
fn test_displays_title() {
    let book = record(
        "The Great Gatsby",
        "F. Scott Fitzgerald",
        9.99,
        14.99,
        "Fiction",
        true,
        true,
    );
    let view = render(&book);
    let screen = Screen::new(&view);

    assert!(screen.get_by_text("The Great Gatsby").is_ok());
}

#[test]
fn test_displays_author() {
    let book = record("1984", "George Orwell", 12.99, 15.99, "Dystopian", true, false);
    let view = render(&book);
    let screen = Screen::new(&view);

    assert!(screen.get_by_text(pattern("Author:.*George Orwell")).is_ok());
}

#[test]
fn test_displays_genre() {
    let book = record("Notebook", "Author Name", 5.99, 7.99, "Stationery", false, true);
    let view = render(&book);
    let screen = Screen::new(&view);

    assert!(screen.get_by_text(pattern("Genre:.*Stationery")).is_ok());
}

#[test]
fn test_displays_current_price() {
    let book = record("Book A", "Author A", 8.99, 10.99, "Fiction", true, true);
    let view = render(&book);
    let screen = Screen::new(&view);

    assert!(screen.get_by_text(pattern(r"\$8\.99")).is_ok());
}

#[test]
fn test_bestseller_shows_original_price() {
    let book = record("Book B", "Author B", 7.99, 12.99, "Fiction", true, true);
    let view = render(&book);
    let screen = Screen::new(&view);

    assert!(screen.get_by_text(pattern(r"\$12\.99")).is_ok());
    assert!(screen.get_by_text(pattern(r"\$7\.99")).is_ok());
}

#[test]
fn test_title_is_level_three_heading() {
    let book = record("1984", "George Orwell", 12.99, 15.99, "Dystopian", true, false);
    let view = render(&book);
    let screen = Screen::new(&view);

    let headings = screen.get_all_by_heading(3).unwrap();
    assert_eq!(headings.len(), 1);
    assert_eq!(headings[0].text_content(), "1984");
}

// =============================================================================
// Conditional rendering
// =============================================================================

#[test]
fn test_bestseller_badge_shown() {
    let book = record("Bestseller Book", "Author", 15.99, 20.99, "Fiction", true, true);
    let view = render(&book);
    let screen = Screen::new(&view);

    assert!(screen.get_by_text("BESTSELLER").is_ok());
}

#[test]
fn test_bestseller_badge_hidden() {
    let book = record("Regular Book", "Author", 15.99, 15.99, "Fiction", true, false);
    let view = render(&book);
    let screen = Screen::new(&view);

    assert!(screen.query_by_text("BESTSELLER").unwrap().is_none());
}

#[test]
fn test_original_price_hidden_for_regular_book() {
    let book = record("Regular Book", "Author", 10.99, 18.99, "Fiction", true, false);
    let view = render(&book);
    let screen = Screen::new(&view);

    assert!(screen.query_all_by_text(pattern(r"\$18\.99")).is_empty());
}

#[test]
fn test_available_label() {
    let book = record("Available Book", "Author", 10.99, 12.99, "Fiction", true, false);
    let view = render(&book);
    let screen = Screen::new(&view);

    assert!(screen.get_by_text("Available").is_ok());
    assert!(screen.query_by_text("Not Available").unwrap().is_none());
}

#[test]
fn test_not_available_label() {
    let book = record("Unavailable Book", "Author", 12.99, 12.99, "Fiction", false, false);
    let view = render(&book);
    let screen = Screen::new(&view);

    assert!(screen.get_by_text("Not Available").is_ok());
    assert!(screen.query_by_text("Available").unwrap().is_none());
}

// =============================================================================
// App list rendering
// =============================================================================

#[test]
fn test_app_renders_multiple_cards() {
    let view = App::default().render();
    let screen = Screen::new(&view);

    let cards = screen.get_all_by_text(pattern("Genre:")).unwrap();
    assert!(cards.len() >= 4);
}

#[test]
fn test_app_titles_unique() {
    let view = App::default().render();
    let screen = Screen::new(&view);

    let titles: Vec<String> = screen
        .get_all_by_heading(3)
        .unwrap()
        .iter()
        .map(|h| h.text_content())
        .collect();
    let unique: HashSet<_> = titles.iter().collect();
    assert_eq!(unique.len(), titles.len());
}

#[test]
fn test_app_bestseller_badges() {
    let app = App::default();
    let view = app.render();
    let screen = Screen::new(&view);

    let badges = screen.query_all_by_text("BESTSELLER");
    assert!(!badges.is_empty());
    assert!(badges.len() < app.books().len());
}

#[test]
fn test_app_genres_vary() {
    let view = App::default().render();
    let screen = Screen::new(&view);

    let genres: HashSet<String> = screen
        .get_all_by_text(pattern("Genre:"))
        .unwrap()
        .iter()
        .map(|el| el.text_content().replace("Genre: ", ""))
        .collect();
    assert!(genres.len() > 1);
}

#[test]
fn test_app_preserves_record_order() {
    let app = App::new(vec![
        record("Zeta", "A", 1.0, 1.0, "X", true, false),
        record("Alpha", "B", 2.0, 2.0, "Y", true, false),
        record("Mu", "C", 3.0, 3.0, "X", false, true),
    ]);
    let view = app.render();
    let screen = Screen::new(&view);

    let titles: Vec<String> = screen
        .get_all_by_heading(3)
        .unwrap()
        .iter()
        .map(|h| h.text_content())
        .collect();
    assert_eq!(titles, vec!["Zeta", "Alpha", "Mu"]);
}

#[test]
fn test_app_page_heading() {
    let view = App::default().render();
    let screen = Screen::new(&view);

    let headings = screen.get_all_by_heading(1).unwrap();
    assert_eq!(headings.len(), 1);
    assert_eq!(headings[0].text_content(), "Book Library");
}
