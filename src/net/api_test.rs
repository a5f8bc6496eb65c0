use super::*;

fn photo(id: i64, show_id: i64, artist: Option<&str>) -> Photo {
    Photo {
        id,
        show_id,
        caption: None,
        filename: format!("p{id}.jpg"),
        artist_name: artist.map(str::to_owned),
        venue_name: None,
        show_date: Some("2026-07-04".to_owned()),
        created_at: None,
    }
}

// =============================================================
// URL building
// =============================================================

#[test]
fn api_url_joins_base_and_path() {
    assert!(api_url("/auth/login").ends_with("/auth/login"));
    // No double slash when the base carries a trailing one.
    assert!(!api_url("/photos").contains("//photos"));
}

#[test]
fn thumbnail_url_is_templated_from_photo_id() {
    assert!(photo_thumbnail_url(42).ends_with("/photos/42/thumbnail"));
}

#[test]
fn query_values_are_percent_encoded() {
    assert_eq!(encode_query_value("jo@example.com"), "jo%40example.com");
    assert_eq!(encode_query_value("a+b c"), "a%2Bb%20c");
    assert_eq!(encode_query_value("plain-value_1.2~"), "plain-value_1.2~");
}

// =============================================================
// Grouping
// =============================================================

#[test]
fn grouping_preserves_first_seen_show_order() {
    let groups = group_photos_by_show(vec![
        photo(1, 20, Some("Band A")),
        photo(2, 10, Some("Band B")),
        photo(3, 20, Some("Band A")),
    ]);
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].show_id, 20);
    assert_eq!(groups[0].photos.len(), 2);
    assert_eq!(groups[1].show_id, 10);
}

#[test]
fn grouping_fills_missing_names_with_placeholders() {
    let groups = group_photos_by_show(vec![photo(1, 5, None)]);
    assert_eq!(groups[0].artist_name, "Unknown Artist");
    assert_eq!(groups[0].venue_name, "Unknown Venue");
}

#[test]
fn grouping_empty_listing_yields_no_groups() {
    assert!(group_photos_by_show(Vec::new()).is_empty());
}
