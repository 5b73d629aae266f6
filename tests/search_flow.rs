use zcovid::api::Endpoint;
use zcovid::app::SearchFocus;
use zcovid::domain::ReferenceTable;
use zcovid::ui::viewmodel::Body;
use zcovid::{handle_event, Action, AppState, Event, InputMode, Screen, Theme};

const COUNTRIES: &[u8] = br#"[
    {"Country": "New Zealand", "Slug": "new-zealand", "ISO2": "NZ"},
    {"Country": "Austria", "Slug": "austria", "ISO2": "AT"},
    {"Country": "Canada", "Slug": "canada", "ISO2": "CA"},
    {"Country": "Australia", "Slug": "australia", "ISO2": "AU"}
]"#;

fn send(state: &mut AppState, event: Event) -> Vec<Action> {
    handle_event(state, &event).unwrap().1
}

fn type_query(state: &mut AppState, query: &str) {
    for c in query.chars() {
        send(state, Event::Char(c));
    }
}

fn load_countries(state: &mut AppState) {
    send(
        state,
        Event::ResponseReceived {
            endpoint: Endpoint::Countries,
            status: 200,
            body: COUNTRIES.to_vec(),
        },
    );
}

fn loaded() -> AppState {
    let mut state = AppState::new(
        ReferenceTable::from_entries(vec![]),
        Theme::default(),
        "http://api.test",
        Screen::Countries,
    );
    send(&mut state, Event::PermissionsResult { granted: true });
    load_countries(&mut state);
    state
}

fn visible_slugs(state: &AppState) -> Vec<String> {
    match state.compute_viewmodel(40, 100).body {
        Body::Countries(rows) => rows.into_iter().map(|r| r.slug).collect(),
        _ => vec![],
    }
}

#[test]
fn typing_narrows_the_list_by_slug() {
    let mut state = loaded();
    send(&mut state, Event::SearchMode);
    assert_eq!(state.input_mode, InputMode::Search(SearchFocus::Typing));

    type_query(&mut state, "aus");
    assert_eq!(visible_slugs(&state), vec!["australia", "austria"]);

    type_query(&mut state, "tri");
    assert_eq!(visible_slugs(&state), vec!["austria"]);

    let vm = state.compute_viewmodel(40, 100);
    let search = vm.search_bar.expect("search bar while searching");
    assert_eq!(search.query, "austri");
    assert!(search.is_typing);
    assert_eq!(vm.header.title, " Countries (1) ");
}

#[test]
fn matches_are_case_insensitive_and_highlighted() {
    let mut state = loaded();
    send(&mut state, Event::SearchMode);
    type_query(&mut state, "ZEA");

    let Body::Countries(rows) = state.compute_viewmodel(40, 100).body else {
        panic!("expected a match");
    };
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "New Zealand");
    assert_eq!(rows[0].highlight_ranges, vec![(4, 7)]);
}

#[test]
fn unmatched_query_shows_empty_state() {
    let mut state = loaded();
    send(&mut state, Event::SearchMode);
    type_query(&mut state, "xyz");

    let Body::Empty(empty) = state.compute_viewmodel(40, 100).body else {
        panic!("expected the no-match state");
    };
    assert_eq!(empty.message, "No matching countries");
}

#[test]
fn erasing_the_query_reloads_the_full_list() {
    let mut state = loaded();
    send(&mut state, Event::SearchMode);
    type_query(&mut state, "ca");
    assert_eq!(visible_slugs(&state), vec!["canada"]);

    assert!(send(&mut state, Event::Backspace).is_empty());
    assert_eq!(
        send(&mut state, Event::Backspace),
        vec![Action::Fetch(Endpoint::Countries)]
    );
    assert!(send(&mut state, Event::Backspace).is_empty());

    load_countries(&mut state);
    assert_eq!(visible_slugs(&state).len(), 4);
}

#[test]
fn exit_search_clears_query_and_reloads() {
    let mut state = loaded();
    send(&mut state, Event::SearchMode);
    type_query(&mut state, "new");

    let actions = send(&mut state, Event::ExitSearch);
    assert_eq!(actions, vec![Action::Fetch(Endpoint::Countries)]);
    assert_eq!(state.input_mode, InputMode::Normal);
    assert!(state.search_query.is_empty());
    assert!(state.compute_viewmodel(40, 100).search_bar.is_none());
}

#[test]
fn exit_search_with_empty_query_fetches_nothing() {
    let mut state = loaded();
    send(&mut state, Event::SearchMode);
    assert!(send(&mut state, Event::ExitSearch).is_empty());
}

#[test]
fn focus_moves_between_input_and_results() {
    let mut state = loaded();
    send(&mut state, Event::SearchMode);
    type_query(&mut state, "a");

    send(&mut state, Event::FocusResults);
    assert_eq!(state.input_mode, InputMode::Search(SearchFocus::Navigating));
    send(&mut state, Event::Char('x'));
    assert_eq!(state.search_query, "a");

    send(&mut state, Event::KeyDown);
    assert_eq!(state.compute_viewmodel(40, 100).selected_index, 1);

    send(&mut state, Event::FocusSearchBar);
    assert_eq!(state.input_mode, InputMode::Search(SearchFocus::Typing));
}

#[test]
fn query_survives_a_visit_to_details() {
    let mut state = loaded();
    send(&mut state, Event::SearchMode);
    type_query(&mut state, "can");

    let actions = send(&mut state, Event::Select);
    assert_eq!(
        actions,
        vec![Action::Fetch(Endpoint::DayOne {
            slug: "canada".to_string()
        })]
    );

    send(&mut state, Event::Back);
    assert_eq!(state.screen, Screen::Countries);
    assert_eq!(state.search_query, "can");
    assert_eq!(visible_slugs(&state), vec!["canada"]);
}

#[test]
fn search_is_only_available_on_the_country_list() {
    let mut state = loaded();
    send(&mut state, Event::ShowScreen(Screen::Global));
    send(&mut state, Event::SearchMode);
    assert_eq!(state.input_mode, InputMode::Normal);
}

#[test]
fn leaving_the_screen_ends_the_search() {
    let mut state = loaded();
    send(&mut state, Event::SearchMode);
    type_query(&mut state, "aus");

    let actions = send(&mut state, Event::ShowScreen(Screen::Global));
    assert_eq!(
        actions,
        vec![
            Action::Fetch(Endpoint::Countries),
            Action::Fetch(Endpoint::Summary)
        ]
    );
    assert_eq!(state.input_mode, InputMode::Normal);
    assert!(state.search_query.is_empty());
}
