//! End-to-end tests for the archive
//!
//! These drive the full publication flow through the public API: register
//! authors and magazines, publish articles, then check the aggregate
//! queries and the no-partial-state guarantees.

use std::collections::HashSet;

use masthead::{Archive, ValidationError};

/// Ada writes three articles for Tech Weekly.
fn ada_and_tech_weekly() -> Archive {
    let mut archive = Archive::new();
    let ada = archive.add_author("Ada").unwrap();
    let tech = archive.add_magazine("Tech Weekly", "Technology").unwrap();

    archive.publish(ada, tech, "Title One").unwrap();
    archive.publish(ada, tech, "Title Two").unwrap();
    archive.publish(ada, tech, "Title Three").unwrap();

    archive
}

#[test]
fn ada_scenario_end_to_end() {
    let archive = ada_and_tech_weekly();
    let ada = archive.authors()[0].id();
    let tech = archive.magazines()[0].id();

    // The only magazine with articles is the top publisher
    assert_eq!(archive.top_publisher(), Some(tech));

    // Three articles makes Ada a contributing author (3 > 2)
    let contributing = archive
        .magazine(tech)
        .unwrap()
        .contributing_authors(&archive)
        .unwrap();
    assert_eq!(contributing, HashSet::from([ada]));

    // Titles in publication order
    let titles = archive
        .magazine(tech)
        .unwrap()
        .article_titles(&archive)
        .unwrap();
    assert_eq!(titles, vec!["Title One", "Title Two", "Title Three"]);

    // Ada's side of the graph
    let ada_entity = archive.author(ada).unwrap();
    assert_eq!(ada_entity.articles().len(), 3);
    assert_eq!(ada_entity.magazines(&archive), HashSet::from([tech]));
    assert_eq!(
        ada_entity.topic_areas(&archive).unwrap(),
        HashSet::from(["Technology"])
    );
}

#[test]
fn failed_publish_leaves_magazine_untouched() {
    let mut archive = Archive::new();
    let tech = archive.add_magazine("Tech Weekly", "Technology").unwrap();

    let mut other = Archive::new();
    other.add_author("A").unwrap();
    let not_an_author = other.add_author("B").unwrap();

    let err = archive
        .publish(not_an_author, tech, "A Valid Title")
        .unwrap_err();
    assert_eq!(err, ValidationError::UnknownAuthor(not_an_author));

    assert!(archive.magazine(tech).unwrap().articles().is_empty());
    assert_eq!(archive.article_count(), 0);
}

#[test]
fn registries_grow_and_never_shrink() {
    let mut archive = Archive::new();
    let ada = archive.add_author("Ada").unwrap();
    let tech = archive.add_magazine("Tech Weekly", "Technology").unwrap();
    let arts = archive.add_magazine("Arts Monthly", "Culture").unwrap();

    assert_eq!(archive.magazine_count(), 2);

    archive.publish(ada, tech, "Title One").unwrap();
    archive.publish(ada, arts, "Title Two").unwrap();

    // Renaming a magazine does not disturb the registries
    archive.magazine_mut(tech).unwrap().set_name("Tech Daily").unwrap();
    assert_eq!(archive.magazine_count(), 2);
    assert_eq!(archive.article_count(), 2);
    assert_eq!(archive.magazines()[0].name(), "Tech Daily");
}

#[test]
fn multiple_magazines_pick_the_busier_publisher() {
    let mut archive = Archive::new();
    let ada = archive.add_author("Ada").unwrap();
    let grace = archive.add_author("Grace").unwrap();
    let tech = archive.add_magazine("Tech Weekly", "Technology").unwrap();
    let arts = archive.add_magazine("Arts Monthly", "Culture").unwrap();

    archive.publish(ada, tech, "Title One").unwrap();
    archive.publish(grace, tech, "Title Two").unwrap();
    archive.publish(ada, arts, "Title Three").unwrap();

    assert_eq!(archive.top_publisher(), Some(tech));

    // Catch up and overtake: arts now strictly leads
    archive.publish(grace, arts, "Title Four").unwrap();
    archive.publish(grace, arts, "Title Five").unwrap();
    assert_eq!(archive.top_publisher(), Some(arts));
}

#[test]
fn contributors_span_magazines_independently() {
    let mut archive = Archive::new();
    let ada = archive.add_author("Ada").unwrap();
    let grace = archive.add_author("Grace").unwrap();
    let tech = archive.add_magazine("Tech Weekly", "Technology").unwrap();
    let arts = archive.add_magazine("Arts Monthly", "Culture").unwrap();

    archive.publish(ada, tech, "Title One").unwrap();
    archive.publish(grace, arts, "Title Two").unwrap();

    assert_eq!(
        archive.magazine(tech).unwrap().contributors(&archive),
        HashSet::from([ada])
    );
    assert_eq!(
        archive.magazine(arts).unwrap().contributors(&archive),
        HashSet::from([grace])
    );
}

#[test]
fn archive_snapshot_roundtrips_through_json() {
    let archive = ada_and_tech_weekly();

    let json = serde_json::to_string_pretty(&archive).unwrap();
    let parsed: Archive = serde_json::from_str(&json).unwrap();

    assert_eq!(archive, parsed);

    // Queries behave identically on the restored archive
    let tech = parsed.magazines()[0].id();
    assert_eq!(parsed.top_publisher(), Some(tech));
    assert_eq!(
        parsed
            .magazine(tech)
            .unwrap()
            .article_titles(&parsed)
            .unwrap()
            .len(),
        3
    );
}

#[test]
fn snapshot_with_invalid_field_is_rejected_on_restore() {
    let archive = ada_and_tech_weekly();
    let json = serde_json::to_string(&archive).unwrap();

    // Corrupt the magazine name to a 1-char value; field serde revalidates
    let corrupted = json.replace("\"Tech Weekly\"", "\"x\"");
    assert!(serde_json::from_str::<Archive>(&corrupted).is_err());
}
