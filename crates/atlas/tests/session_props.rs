use atlas::{Country, PageSession};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Event {
    Search(String),
    Page(usize),
    Next,
    Previous,
    Size(usize),
}

fn event() -> impl Strategy<Value = Event> {
    prop_oneof![
        "[a-e ]{0,3}".prop_map(Event::Search),
        (0usize..15).prop_map(Event::Page),
        Just(Event::Next),
        Just(Event::Previous),
        (1usize..8).prop_map(Event::Size),
    ]
}

fn records() -> Vec<Country> {
    ["Aba", "Bcd", "Cde", "Dea", "Eab", "Abc", "Bce", "Cda", "Dbe", "Eca", "Ace", "Bdb"]
        .iter()
        .enumerate()
        .map(|(i, name)| Country::new(&format!("{i:02}"), name, "Europe", None))
        .collect()
}

proptest! {
    #[test]
    fn any_event_sequence_keeps_views_consistent(events in prop::collection::vec(event(), 0..30)) {
        let mut session = PageSession::new(3).unwrap();
        session.load(records());

        for event in events {
            match event {
                Event::Search(term) => session.search(&term),
                Event::Page(page) => { session.change_page(page); }
                Event::Next => { session.next_page(); }
                Event::Previous => { session.previous_page(); }
                Event::Size(size) => session.set_page_size(size).unwrap(),
            }

            let state = *session.state();
            prop_assert!(state.total_pages() >= 1);
            prop_assert!(state.current_page() >= 1);
            prop_assert!(session.visible().len() <= state.page_size());
            if session.is_stale() {
                prop_assert!(session.visible().is_empty());
            }

            let window = session.window();
            prop_assert_eq!(window.first().and_then(|e| e.page()), Some(1));
            prop_assert_eq!(window.last().and_then(|e| e.page()), Some(state.total_pages()));
        }
    }
}
