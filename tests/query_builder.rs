use apicalypse::prelude::*;
use common::Game;

mod common;

fn titles() -> ApicalypseQueryBuilder {
    ApicalypseQueryBuilder::new()
}

/// Appends the paging and sort tail shared by most cases.
fn paged(builder: ApicalypseQueryBuilder) -> String {
    builder.offset(100).limit(500).sort_asc("title").build()
}

const TAIL: &str = "offset 100;limit 500;sort title asc;";

#[test]
fn search_query() {
    let query = titles()
        .search("Shadow of the Colossus")
        .select("id, title")
        .offset(10)
        .limit(20)
        .sort_desc("id")
        .build();

    assert_eq!(
        query,
        "search \"Shadow of the Colossus\";fields id, title;offset 10;limit 20;sort id desc;"
    );
}

#[test]
fn select_query() {
    assert_eq!(
        paged(titles().select("id, title")),
        format!("fields id, title;{TAIL}")
    );
}

#[test]
fn select_all_query() {
    assert_eq!(paged(titles().select_all()), format!("fields *;{TAIL}"));
}

#[test]
fn select_all_with_excluded_fields() {
    assert_eq!(
        paged(titles().select_all().exclude("date, likes")),
        format!("fields *;exclude date, likes;{TAIL}")
    );
}

#[test]
fn select_shape_query() {
    let query = titles().select_shape::<Game>().unwrap().limit(1).build();
    assert_eq!(query, "fields id, cover.url, name;limit 1;");
}

#[test]
fn select_shape_failure_is_reported() {
    let result = titles().select_shape::<common::Unannotated>();
    assert!(result.is_err());
}

#[test]
fn unary_conditions() {
    let cases: [(fn(WhereClauseBuilder) -> WhereClause, &str); 4] = [
        (|w| w.is_true("isLiked"), "isLiked = true"),
        (|w| w.is_false("isLiked"), "isLiked = false"),
        (|w| w.is_null("date"), "date = null"),
        (|w| w.is_not_null("date"), "date != null"),
    ];

    for (condition, expected) in cases {
        assert_eq!(
            paged(titles().select("id").r#where(condition)),
            format!("fields id;where {expected};{TAIL}")
        );
    }
}

#[test]
fn value_conditions() {
    let cases: [(fn(WhereClauseBuilder) -> WhereClause, &str); 6] = [
        (|w| w.is_equal("date", "2020-03-01"), "date = 2020-03-01"),
        (|w| w.is_not_equal("date", "2020-03-01"), "date != 2020-03-01"),
        (|w| w.is_larger_than("likes", 20), "likes > 20"),
        (|w| w.is_larger_than_or_equal_to("likes", 20), "likes >= 20"),
        (|w| w.is_smaller_than("likes", 20), "likes < 20"),
        (|w| w.is_smaller_than_or_equal_to("likes", 20), "likes <= 20"),
    ];

    for (condition, expected) in cases {
        assert_eq!(
            paged(titles().select("id").r#where(condition)),
            format!("fields id;where {expected};{TAIL}")
        );
    }
}

#[test]
fn list_conditions() {
    let genres = ["20", "30", "40"];
    let cases: [(fn(WhereClauseBuilder, [&str; 3]) -> WhereClause, &str); 5] = [
        (|w, v| w.contains_all_of("genres", v), "genres = [20, 30, 40]"),
        (|w, v| w.does_not_contain_all_of("genres", v), "genres = ![20, 30, 40]"),
        (|w, v| w.contains_any_of("genres", v), "genres = (20, 30, 40)"),
        (|w, v| w.does_not_contain_any_of("genres", v), "genres = !(20, 30, 40)"),
        (|w, v| w.contains_exclusively_all_of("genres", v), "genres = {20, 30, 40}"),
    ];

    for (condition, expected) in cases {
        assert_eq!(
            paged(titles().select("id, title, genres").r#where(|w| condition(w, genres))),
            format!("fields id, title, genres;where {expected};{TAIL}")
        );
    }
}

#[test]
fn two_conditions_with_and() {
    let query = paged(
        titles()
            .select("id, title, genres, likes")
            .r#where(|w| {
                w.contains_any_of("genres", [20, 30, 40])
                    .and_with(|w| w.is_larger_than("likes", 20))
            }),
    );

    assert_eq!(
        query,
        format!("fields id, title, genres, likes;where genres = (20, 30, 40) & likes > 20;{TAIL}")
    );
}

#[test]
fn two_conditions_with_or() {
    let query = paged(
        titles()
            .select("id, title, genres, likes")
            .r#where(|w| {
                w.contains_any_of("genres", [20, 30, 40])
                    .or("likes".is_larger_than(20))
            }),
    );

    assert_eq!(
        query,
        format!("fields id, title, genres, likes;where genres = (20, 30, 40) | likes > 20;{TAIL}")
    );
}

#[test]
fn complex_condition_chain() {
    let query = paged(
        titles()
            .select("id, title, genres, likes, rating, release_date")
            .r#where(|w| {
                w.contains_any_of("id", [1, 2, 3])
                    .and("title".is_not_null())
                    .and("genres".contains_any_of([20, 30, 40]))
                    .and("likes".is_larger_than(20))
                    .or("rating".is_larger_than_or_equal_to(80))
                    .or("release_date".is_equal("2020-03-01"))
            }),
    );

    assert_eq!(
        query,
        format!(
            "fields id, title, genres, likes, rating, release_date;\
             where id = (1, 2, 3) & title != null & genres = (20, 30, 40) & likes > 20 | \
             rating >= 80 | release_date = 2020-03-01;{TAIL}"
        )
    );
}

#[test]
fn where_clause_from_operators() {
    let condition = "likes".is_larger_than(20) & "rating".is_not_null() | "hypes".is_null();
    let query = titles().where_clause(condition).build();
    assert_eq!(query, "where likes > 20 & rating != null | hypes = null;");
}

#[test]
fn empty_builder_yields_empty_string() {
    assert_eq!(titles().build(), "");
}

#[test]
fn display_matches_build() {
    let builder = titles().search("halo").select_all().limit(5);
    assert_eq!(builder.to_string(), builder.build());
}
