mod common;

use common::fixture;
use lastfm_similar::{Html, LastFmParser};

#[test]
fn test_first_page_parsing() {
    let document = Html::parse_document(&fixture("daft_punk_similar_page_1.html"));
    let parser = LastFmParser::new();
    let artists = parser.parse_similar_artists(&document).unwrap();

    // Four items on the page, one of them an ad without a name
    let names: Vec<&str> = artists.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["Justice", "Air", "Cassius"]);
    assert_eq!(
        parser.parse_next_page_link(&document).unwrap().as_deref(),
        Some("?page=2")
    );

    let justice = &artists[0];
    assert_eq!(justice.listeners, "1834223");
    assert_eq!(justice.tag_field(), "electronic,french house,dance");

    let cassius = &artists[2];
    assert_eq!(cassius.listeners, "412087");
    assert!(cassius.tags.is_empty());
    assert_eq!(cassius.tag_field(), "");
}

#[test]
fn test_last_page_has_no_next_link() {
    let document = Html::parse_document(&fixture("daft_punk_similar_page_3.html"));
    let parser = LastFmParser::new();

    assert_eq!(parser.parse_next_page_link(&document).unwrap(), None);

    let artists = parser.parse_similar_artists(&document).unwrap();
    assert_eq!(artists.len(), 1);
    assert_eq!(artists[0].name, "Modjo");
}

#[test]
fn test_artist_names_with_spaces() {
    let document = Html::parse_document(&fixture("daft_punk_similar_page_2.html"));
    let artists = LastFmParser::new().parse_similar_artists(&document).unwrap();

    assert_eq!(artists[1].name, "The Chemical Brothers");
    assert_eq!(artists[1].listeners, "2487311");
    assert_eq!(artists[1].tags, vec!["big beat"]);
}

#[test]
fn test_page_without_listing() {
    let document = Html::parse_document("<html><body><p>Page not found</p></body></html>");
    let parser = LastFmParser::new();

    assert!(parser.parse_similar_artists(&document).unwrap().is_empty());
    assert_eq!(parser.parse_next_page_link(&document).unwrap(), None);
}
