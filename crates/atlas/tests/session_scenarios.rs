//! End-to-end paging over the bundled 23-country snapshot.

use atlas::source::FileSource;
use atlas::{Country, CountrySource, FetchState, MessageLevel, PageSession, PageView};
use atlas_pager::PageEntry::{self, Ellipsis, Number};

fn fixture() -> Vec<Country> {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/countries.json");
    FileSource::new(path).fetch().expect("fixture loads")
}

fn session(page_size: usize) -> PageSession<Country> {
    let mut session = PageSession::new(page_size).unwrap();
    session.load(fixture());
    session
}

fn codes(session: &PageSession<Country>) -> Vec<&str> {
    session.visible().iter().map(|c| c.code.as_str()).collect()
}

#[test]
fn twenty_three_records_make_three_pages() {
    let mut s = session(10);
    assert_eq!(s.total_count(), 23);
    assert_eq!(s.state().total_pages(), 3);

    assert!(s.change_page(3));
    assert_eq!(codes(&s), vec!["NZ", "PE", "US"]);
    assert_eq!(s.window(), vec![Number(1), Number(2), Number(3)]);
}

#[test]
fn zero_matches() {
    let mut s = session(10);
    s.search("zzz");
    assert!(s.filtered().is_empty());
    assert_eq!(s.state().total_pages(), 1);
    assert_eq!(s.state().current_page(), 1);
    assert!(s.visible().is_empty());
    assert_eq!(s.window(), vec![Number(1)]);

    let view = PageView::build(&FetchState::Loaded(Vec::new()), &s);
    assert_eq!(view.messages[0].level, MessageLevel::Warning);
    assert_eq!(view.messages[0].text, "No countries match \"zzz\".");
    assert!(view.pager.is_none());
}

#[test]
fn search_matches_any_field_in_order() {
    let mut s = session(10);
    s.search("CH");
    let hits: Vec<&str> = s.filtered().iter().map(|c| c.code.as_str()).collect();
    assert_eq!(hits, vec!["CH", "CL", "CN"]);

    s.search("united");
    assert_eq!(s.filtered_count(), 3);

    s.search("Eur");
    assert_eq!(s.filtered_count(), 7);
}

#[test]
fn search_resets_only_when_page_disappears() {
    let mut s = session(2);
    assert_eq!(s.state().total_pages(), 12);

    s.change_page(2);
    s.search("europe");
    assert_eq!(s.state().total_pages(), 4);
    assert_eq!(s.state().current_page(), 2, "page 2 still exists");

    s.change_page(4);
    s.search("united");
    assert_eq!(s.state().total_pages(), 2);
    assert_eq!(s.state().current_page(), 1, "page 4 is gone");
}

#[test]
fn clearing_the_search_restores_everything() {
    let mut s = session(10);
    s.search("asia");
    assert_eq!(s.filtered_count(), 4);
    s.search("");
    assert_eq!(s.filtered_count(), 23);
    assert_eq!(s.filtered(), fixture().as_slice());
}

#[test]
fn page_size_change_can_leave_a_stale_page() {
    let mut s = session(5);
    assert!(s.last_page());
    assert_eq!(s.state().current_page(), 5);

    s.set_page_size(10).unwrap();
    assert_eq!(s.state().total_pages(), 3);
    assert_eq!(s.state().current_page(), 5);
    assert!(s.is_stale());
    assert!(s.visible().is_empty());
    assert_eq!(s.window(), vec![Number(1), Number(2), Number(3)]);

    assert!(s.last_page());
    assert!(!s.is_stale());
    assert_eq!(codes(&s).len(), 3);
}

#[test]
fn walking_forward_visits_every_record_once() {
    let mut s = session(4);
    let mut seen = codes(&s).iter().map(|c| c.to_string()).collect::<Vec<_>>();
    while s.next_page() {
        seen.extend(codes(&s).iter().map(|c| c.to_string()));
    }
    assert_eq!(s.state().current_page(), 6);
    let all: Vec<String> = fixture().into_iter().map(|c| c.code).collect();
    assert_eq!(seen, all);
}

#[test]
fn window_with_wider_max_visible() {
    let mut s = PageSession::new(1).unwrap().with_max_visible(7);
    s.load(fixture());
    s.change_page(12);
    let window: Vec<PageEntry> = s.window();
    assert_eq!(
        window,
        vec![Number(1), Ellipsis, Number(11), Number(12), Number(13), Ellipsis, Number(23)]
    );
}
