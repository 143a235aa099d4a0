use mbox_lexer_engine::{
    RopeHost,
    parsing::{classify_document, snapshot},
};

mod common;

fn classify_fixture(name: &str) -> String {
    let host = RopeHost::from(common::read_fixture(name).as_str());
    let doc = classify_document(&host);
    snapshot::invariants(&doc);
    snapshot::render(&snapshot::normalize(&host, &doc))
}

#[test]
fn fixture_two_messages() {
    insta::assert_snapshot!(classify_fixture("two_messages"), @r#"
    0   from   from   From alice@example.com Mon Jan 01 12:00:00 2024
    1   header header Subject: hello
    2   header header To: bob@example.com
    3   cont   cont    (continued)
    4   blank  blank
    5   text   text   Hi Bob,
    6   text   text   From the desk of Alice.
    7   blank  blank
    8   from   from   From "Bob Smith" Tue Feb 02 09:30:00 2024 +0000
    9   header header Subject: re: hello
    10  blank  blank
    11  text   text   Thanks!
    12  blank  blank
    "#);
}

#[test]
fn fixture_malformed() {
    insta::assert_snapshot!(classify_fixture("malformed"), @r"
    0   text   text   Some preamble text
    1   header text   Subject: orphan header
    2   blank  blank
    3   from   text   From a Mon Jan 01 00:00:00 2020
    4   text   text   this is prose
    5   blank  blank
    6   from   text   From b Mon Jan 01 00:00:00 2020
    7   header text   Subject: fine
    8   from   text   From c Mon Jan 01 00:00:00 2020
    9   blank  blank
    10  text   text    From d Mon Jan 01 00:00:00 2020
    11  text   text   From e Mon Jan 01 25:00:00 2020
    12  blank  blank
    ");
}

/// Every line span slices back to the exact source text
#[test]
fn lossless_line_spans() {
    let text = common::read_fixture("two_messages");
    let host = RopeHost::from(text.as_str());
    let rows = snapshot::normalize(&host, &classify_document(&host));

    let rebuilt: String = rows
        .iter()
        .map(|r| host.slice_to_cow(r.span.0..r.span.1).into_owned())
        .collect();
    assert_eq!(rebuilt, text);
}
