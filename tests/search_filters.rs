// tests/search_filters.rs
use nyc_procurement::error::Error;
use nyc_procurement::search::{FilterField, SearchFilters, SqlDialect, distinct_query, search_query};
use nyc_procurement::store::{RecordSource, Table};

fn table() -> Table {
    let headers = ["Agency", "Services Descrption", "Procurement Method", "Fiscal Quarter", "Job Titles", "Head-count"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let row = |cells: [&str; 6]| cells.iter().map(|s| s.to_string()).collect::<Vec<_>>();
    Table::new(
        "newtable",
        headers,
        vec![
            row(["DOT", "Snow Removal citywide", "Competitive Sealed Bid", "Q1", "Laborer", "10"]),
            row(["DOE", "Cloud hosting", "Request for Proposal", "Q2", "Analyst", "3"]),
            row(["DOT", "Road salt supply", "Competitive Sealed Bid", "Q2", "Laborer", "4"]),
            row(["DSNY", "snowplow repair", "Negotiated Acquisition", "Q1", "Mechanic", "2"]),
        ],
    )
}

fn descriptions(rows: &[Vec<String>]) -> Vec<&str> {
    rows.iter().map(|r| r[1].as_str()).collect()
}

#[test]
fn keyword_is_case_insensitive_substring() {
    let rows = table().search(&SearchFilters::new().with_keyword("SNOW")).unwrap();
    assert_eq!(descriptions(&rows), vec!["Snow Removal citywide", "snowplow repair"]);
}

#[test]
fn keyword_and_fields_combine() {
    let f = SearchFilters::new()
        .with_keyword("  snow ")
        .with(FilterField::Agency, "DOT");
    let rows = table().search(&f).unwrap();
    assert_eq!(descriptions(&rows), vec!["Snow Removal citywide"]);
}

#[test]
fn field_filters_are_exact() {
    let t = table();
    let f = SearchFilters::new().with(FilterField::FiscalQuarter, "Q2");
    assert_eq!(t.search(&f).unwrap().len(), 2);

    let f = SearchFilters::new().with(FilterField::FiscalQuarter, "q2");
    assert!(t.search(&f).unwrap().is_empty());
}

#[test]
fn empty_choice_clears_a_field() {
    let mut f = SearchFilters::new().with(FilterField::Agency, "DOT");
    assert!(!f.is_empty());
    f.set(FilterField::Agency, "");
    assert!(f.is_empty());
    assert!(SearchFilters::new().with_keyword("   ").is_empty());
}

#[test]
fn missing_column_is_an_error() {
    let t = Table::new("newtable", vec!["Agency".into()], Vec::new());
    let err = t.search(&SearchFilters::new().with_keyword("snow")).unwrap_err();
    assert!(matches!(err, Error::UnknownColumn { ref column, .. } if column == "Services Descrption"));
}

#[test]
fn sqlite_query_text_and_params() {
    let f = SearchFilters::new()
        .with_keyword("snow")
        .with(FilterField::Agency, "DOT")
        .with(FilterField::HeadCount, "10");
    let q = search_query("newtable", &f, SqlDialect::Sqlite);
    assert_eq!(
        q.sql,
        "SELECT * FROM \"newtable\" WHERE 1=1 AND \"Services Descrption\" LIKE ? AND \"Agency\" = ? AND \"Head-count\" = ?"
    );
    assert_eq!(q.params, vec!["%snow%", "DOT", "10"]);
}

#[test]
fn mysql_quotes_with_backticks() {
    let f = SearchFilters::new().with(FilterField::ProcurementMethod, "Competitive Sealed Bid");
    let q = search_query("newtable", &f, SqlDialect::MySql);
    assert_eq!(q.sql, "SELECT * FROM `newtable` WHERE 1=1 AND `Procurement Method` = %s");
    assert_eq!(SqlDialect::MySql.quote_ident("a`b"), "`a``b`");

    let d = distinct_query("newtable", "Agency", SqlDialect::MySql);
    assert!(d.sql.starts_with("SELECT DISTINCT `Agency` FROM `newtable`"));
    assert!(d.params.is_empty());
}
